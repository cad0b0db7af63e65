use super::view_model::ElevatorDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::a003_elevator::aggregate::ElevatorState;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

#[component]
pub fn ElevatorDetails(
    vm: ElevatorDetailsViewModel,
    buildings: RwSignal<Vec<Building>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let building_options = Signal::derive(move || {
        buildings.with(|list| options_of(list, |b| (b.id, b.name.clone())))
    });
    let state_options: Vec<(String, String)> = ElevatorState::SELECTABLE
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="details-container elevator-details">
            <div class="details-form">
                <Input
                    label="Elevator code"
                    id="elevator-code"
                    value=Signal::derive(move || form.get().id)
                    on_input=Callback::new(move |v| form.update(|f| f.set_id(v)))
                    disabled=Signal::derive(move || vm.is_edit_mode())
                    required=true
                />
                <Input
                    label="Name"
                    id="elevator-name"
                    value=Signal::derive(move || form.get().name)
                    on_input=Callback::new(move |v| form.update(|f| f.name = v))
                    required=true
                />
                <Select
                    label="Building"
                    id="elevator-building"
                    placeholder="Select a building"
                    value=Signal::derive(move || form.get().building_id.map(|id| id.to_string()).unwrap_or_default())
                    options=building_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.building_id = parse_i64(&v)))
                    required=true
                />
                <Input
                    label="Brand"
                    id="elevator-brand"
                    value=Signal::derive(move || form.get().brand)
                    on_input=Callback::new(move |v| form.update(|f| f.brand = v))
                />
                <Input
                    label="Model"
                    id="elevator-model"
                    value=Signal::derive(move || form.get().model)
                    on_input=Callback::new(move |v| form.update(|f| f.model = v))
                />
                <Input
                    label="Install year"
                    id="elevator-install-year"
                    input_type="number"
                    value=Signal::derive(move || form.get().install_year)
                    on_input=Callback::new(move |v| form.update(|f| f.install_year = v))
                />
                <Input
                    label="Install location"
                    id="elevator-install-location"
                    value=Signal::derive(move || form.get().install_location)
                    on_input=Callback::new(move |v| form.update(|f| f.install_location = v))
                />
                <Input
                    label="Capacity"
                    id="elevator-capacity"
                    value=Signal::derive(move || form.get().capacity)
                    on_input=Callback::new(move |v| form.update(|f| f.capacity = v))
                />
                <Select
                    label="State"
                    id="elevator-state"
                    value=Signal::derive(move || form.get().state.as_str().to_string())
                    options=state_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.state = ElevatorState::from_str_or_default(&v))
                    })
                />
                <Input
                    label="Last maintenance"
                    id="elevator-last-maintenance"
                    input_type="date"
                    value=Signal::derive(move || form.get().last_maintenance_at)
                    on_input=Callback::new(move |v| form.update(|f| f.last_maintenance_at = v))
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
