use super::view_model::BuildingDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

#[component]
pub fn BuildingDetails(
    vm: BuildingDetailsViewModel,
    customers: RwSignal<Vec<Customer>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let customer_options = Signal::derive(move || {
        customers.with(|list| options_of(list, |c| (c.id, c.name.clone())))
    });

    view! {
        <div class="details-container building-details">
            <div class="details-form">
                <Select
                    label="Customer"
                    id="building-customer"
                    placeholder="Select a customer"
                    value=Signal::derive(move || form.get().customer_id.map(|id| id.to_string()).unwrap_or_default())
                    options=customer_options
                    on_change=Callback::new(move |v: String| customers.with_untracked(|list| vm.select_customer(&v, list)))
                    required=true
                />
                <Input
                    label="Building name"
                    id="building-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    required=true
                />
                <Input
                    label="Address"
                    id="building-address"
                    value=Signal::derive(move || form.get().address)
                    on_input=Callback::new(move |v| form.update(|f| f.address = v))
                />
                <Input
                    label="Building type"
                    id="building-type"
                    value=Signal::derive(move || form.get().building_type)
                    on_input=Callback::new(move |v| form.update(|f| f.building_type = v))
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
