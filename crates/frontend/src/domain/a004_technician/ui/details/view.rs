use super::view_model::TechnicianDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a004_technician::aggregate::TechnicianUser;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

#[component]
pub fn TechnicianDetails(
    vm: TechnicianDetailsViewModel,
    users: RwSignal<Vec<TechnicianUser>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let user_options = Signal::derive(move || {
        users.with(|list| {
            options_of(list, |u| {
                let label = match &u.email {
                    Some(email) => format!("{} <{}>", u.name, email),
                    None => u.name.clone(),
                };
                (u.id, label)
            })
        })
    });

    view! {
        <div class="details-container technician-details">
            <div class="details-form">
                <Select
                    label="User account"
                    id="technician-user"
                    placeholder="Select a user"
                    value=Signal::derive(move || form.get().user_id.map(|id| id.to_string()).unwrap_or_default())
                    options=user_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.user_id = parse_i64(&v)))
                    required=true
                />
                <Input
                    label="Phone"
                    id="technician-phone"
                    value=Signal::derive(move || form.get().phone)
                    on_input=Callback::new(move |v| form.update(|f| f.phone = v))
                />
                <Input
                    label="Specialty"
                    id="technician-specialty"
                    value=Signal::derive(move || form.get().specialty)
                    on_input=Callback::new(move |v| form.update(|f| f.specialty = v))
                />
                <Textarea
                    label="Notes"
                    id="technician-notes"
                    value=Signal::derive(move || form.get().notes)
                    on_input=Callback::new(move |v| form.update(|f| f.notes = v))
                    rows=3
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
