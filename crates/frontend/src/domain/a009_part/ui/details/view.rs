use super::view_model::PartDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn PartDetails(vm: PartDetailsViewModel, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    view! {
        <div class="details-container part-details">
            <div class="details-form">
                <Input
                    label="Part code"
                    id="part-code"
                    value=Signal::derive(move || form.get().part_code)
                    on_input=Callback::new(move |v| form.update(|f| f.part_code = v))
                    required=true
                />
                <Input
                    label="Name"
                    id="part-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    required=true
                />
                <Input
                    label="Brand"
                    id="part-brand"
                    value=Signal::derive(move || form.get().brand)
                    on_input=Callback::new(move |v| form.update(|f| f.brand = v))
                />
                <Input
                    label="Model"
                    id="part-model"
                    value=Signal::derive(move || form.get().model)
                    on_input=Callback::new(move |v| form.update(|f| f.model = v))
                />
                <Input
                    label="Unit"
                    id="part-unit"
                    placeholder="pcs"
                    value=Signal::derive(move || form.get().unit)
                    on_input=Callback::new(move |v| form.update(|f| f.unit = v))
                />
                <Input
                    label="Cost price"
                    id="part-cost"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().cost_price)
                    on_input=Callback::new(move |v| form.update(|f| f.cost_price = v))
                />
                <Input
                    label="Sell price"
                    id="part-sell"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().sell_price)
                    on_input=Callback::new(move |v| form.update(|f| f.sell_price = v))
                />
                <Input
                    label="Minimum stock"
                    id="part-min-stock"
                    input_type="number"
                    placeholder="5"
                    value=Signal::derive(move || form.get().min_stock)
                    on_input=Callback::new(move |v| form.update(|f| f.min_stock = v))
                />
            </div>

            <div class="details-actions">
                <button class="button button--primary" on:click=move |_| vm.save_command(auth, on_saved)>
                    {icon("save")}
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| vm.close()>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
