use super::view_model::CustomerDetailsViewModel;
use crate::shared::components::ui::Input;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn CustomerDetails(vm: CustomerDetailsViewModel, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    view! {
        <div class="details-container customer-details">
            <div class="details-form">
                <Input
                    label="Name"
                    id="customer-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    required=true
                />
                <Input
                    label="Business type"
                    id="customer-business-type"
                    value=Signal::derive(move || form.get().business_type)
                    on_input=Callback::new(move |v| form.update(|f| f.business_type = v))
                />
                <Input
                    label="Address"
                    id="customer-address"
                    value=Signal::derive(move || form.get().address)
                    on_input=Callback::new(move |v| form.update(|f| f.address = v))
                />
                <Input
                    label="Contact name"
                    id="customer-contact-name"
                    value=Signal::derive(move || form.get().contact_name)
                    on_input=Callback::new(move |v| form.update(|f| f.contact_name = v))
                />
                <Input
                    label="Contact phone"
                    id="customer-contact-phone"
                    input_type="tel"
                    value=Signal::derive(move || form.get().contact_phone)
                    on_input=Callback::new(move |v| form.update(|f| f.contact_phone = v))
                />
                <Input
                    label="Contact email"
                    id="customer-contact-email"
                    input_type="email"
                    value=Signal::derive(move || form.get().contact_email)
                    on_input=Callback::new(move |v| form.update(|f| f.contact_email = v))
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
