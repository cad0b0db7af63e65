use super::view_model::MaintenancePlanDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a010_maintenance_template::aggregate::MaintenanceTemplate;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

#[component]
pub fn MaintenancePlanDetails(
    vm: MaintenancePlanDetailsViewModel,
    elevators: RwSignal<Vec<Elevator>>,
    contracts: RwSignal<Vec<Contract>>,
    templates: RwSignal<Vec<MaintenanceTemplate>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let elevator_options = Signal::derive(move || {
        elevators.with(|list| options_of(list, |e| (e.id.clone(), e.display_name())))
    });
    let contract_options = Signal::derive(move || {
        contracts.with(|list| {
            options_of(list, |c| (c.id, format!("{} ({})", c.contract_code, c.contract_type.label())))
        })
    });
    let template_options = Signal::derive(move || {
        templates.with(|list| options_of(list, |t| (t.id, t.name.clone())))
    });

    let on_elevator = Callback::new(move |v: String| {
        elevators.with_untracked(|e| contracts.with_untracked(|c| vm.select_elevator(&v, e, c)))
    });
    let on_contract = Callback::new(move |v: String| {
        contracts.with_untracked(|c| vm.select_contract(&v, c))
    });

    view! {
        <div class="details-container plan-details">
            <Show when=move || vm.is_per_call()>
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert-triangle")}</span>
                    <span class="warning-box__text">
                        "This elevator is under a per-call contract. Scheduled maintenance is disabled."
                    </span>
                </div>
            </Show>

            <div class="details-form">
                <Select
                    label="Elevator"
                    id="plan-elevator"
                    placeholder="Select an elevator"
                    value=Signal::derive(move || form.get().elevator_id)
                    options=elevator_options
                    on_change=on_elevator
                    required=true
                />
                <Select
                    label="Contract"
                    id="plan-contract"
                    placeholder="No contract"
                    value=Signal::derive(move || form.get().contract_id.map(|id| id.to_string()).unwrap_or_default())
                    options=contract_options
                    on_change=on_contract
                />
                <Select
                    label="Template"
                    id="plan-template"
                    placeholder="Select a template"
                    value=Signal::derive(move || form.get().template_id.map(|id| id.to_string()).unwrap_or_default())
                    options=template_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.template_id = parse_i64(&v)))
                    required=true
                />
                <Show when=move || !vm.is_per_call()>
                    <Input
                        label="Visits per year"
                        id="plan-frequency"
                        input_type="number"
                        value=Signal::derive(move || form.get().frequency_per_year)
                        on_input=Callback::new(move |v| form.update(|f| f.frequency_per_year = v))
                    />
                    <Input
                        label="Next run"
                        id="plan-next-run"
                        input_type="date"
                        value=Signal::derive(move || form.get().next_run_at)
                        on_input=Callback::new(move |v| form.update(|f| f.next_run_at = v))
                    />
                </Show>
                <div class="form__group form__group--checkbox">
                    <label class="form__checkbox-wrapper">
                        <input
                            type="checkbox"
                            class="form__checkbox"
                            prop:checked=move || form.get().is_active
                            on:change=move |ev| form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        <span class="form__checkbox-label">"Active"</span>
                    </label>
                </div>
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
