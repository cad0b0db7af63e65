use super::view_model::MaintenanceTemplateDetailsViewModel;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use leptos::prelude::*;

#[component]
pub fn MaintenanceTemplateDetails(vm: MaintenanceTemplateDetailsViewModel, on_saved: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    view! {
        <div class="details-container template-details">
            <div class="details-form">
                <Input
                    label="Name"
                    id="template-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    required=true
                />
                <Textarea
                    label="Checklist"
                    id="template-description"
                    placeholder="One step per line"
                    value=Signal::derive(move || form.get().description)
                    on_input=Callback::new(move |v| form.update(|f| f.description = v))
                    rows=8
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
