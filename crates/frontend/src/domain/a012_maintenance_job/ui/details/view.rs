use super::view_model::MaintenanceJobDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a004_technician::aggregate::Technician;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a012_maintenance_job::aggregate::JobType;
use contracts::domain::a014_pricing_settings::aggregate::PricingSettings;
use contracts::domain::common::form::parse_i64;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

#[component]
pub fn MaintenanceJobDetails(
    vm: MaintenanceJobDetailsViewModel,
    elevators: RwSignal<Vec<Elevator>>,
    technicians: RwSignal<Vec<Technician>>,
    contracts: RwSignal<Vec<Contract>>,
    pricing: RwSignal<PricingSettings>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let elevator_options = Signal::derive(move || {
        elevators.with(|list| options_of(list, |e| (e.id.clone(), e.display_name())))
    });
    let technician_options = Signal::derive(move || {
        technicians.with(|list| options_of(list, |t| (t.id, t.display_name())))
    });
    let contract_options = Signal::derive(move || {
        contracts.with(|list| options_of(list, |c| (c.id, c.contract_code.clone())))
    });
    let type_options: Vec<(String, String)> = JobType::ALL
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();

    let cost = Memo::new(move |_| pricing.with(|p| form.with(|f| f.cost(p))));
    let money = move |value: f64| format!("{} {}", format_amount(value), pricing.with(|p| p.currency.clone()));

    view! {
        <div class="details-container job-details">
            <div class="details-form">
                <Select
                    label="Elevator"
                    id="job-elevator"
                    placeholder="Select an elevator"
                    value=Signal::derive(move || form.get().elevator_id)
                    options=elevator_options
                    on_change=Callback::new(move |v| form.update(|f| f.elevator_id = v))
                    required=true
                />
                <Select
                    label="Job type"
                    id="job-type"
                    value=Signal::derive(move || form.get().job_type.as_str().to_string())
                    options=type_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.job_type = JobType::from_str_or_default(&v)))
                />
                <Select
                    label="Technician"
                    id="job-technician"
                    placeholder="Unassigned"
                    value=Signal::derive(move || form.get().technician_id.map(|id| id.to_string()).unwrap_or_default())
                    options=technician_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.technician_id = parse_i64(&v)))
                />
                <Select
                    label="Contract"
                    id="job-contract"
                    placeholder="No contract"
                    value=Signal::derive(move || form.get().contract_id.map(|id| id.to_string()).unwrap_or_default())
                    options=contract_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.contract_id = parse_i64(&v)))
                />
                <Input
                    label="Ticket"
                    id="job-ticket"
                    value=Signal::derive(move || form.get().ticket_id)
                    on_input=Callback::new(move |v| form.update(|f| f.ticket_id = v))
                />
                <Textarea
                    label="Remarks"
                    id="job-remarks"
                    value=Signal::derive(move || form.get().remarks)
                    on_input=Callback::new(move |v| form.update(|f| f.remarks = v))
                    rows=3
                />
                <Input
                    label="Labor hours"
                    id="job-labor-hours"
                    input_type="number"
                    step="0.25"
                    value=Signal::derive(move || form.get().total_labor_hours)
                    on_input=Callback::new(move |v| form.update(|f| f.total_labor_hours = v))
                />
                <Input
                    label="Parts cost (before markup)"
                    id="job-parts-cost"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().parts_cost)
                    on_input=Callback::new(move |v| form.update(|f| f.parts_cost = v))
                />
            </div>

            <div class="cost-summary">
                <div class="cost-summary__row">
                    <span>"Labor cost"</span>
                    <span>{move || money(cost.get().labor_cost)}</span>
                </div>
                <div class="cost-summary__row">
                    <span>"Parts with markup"</span>
                    <span>{move || money(cost.get().parts_cost_with_markup)}</span>
                </div>
                <div class="cost-summary__row">
                    <span>"Call fee"</span>
                    <span>{move || money(cost.get().call_fee)}</span>
                </div>
                <div class="cost-summary__row cost-summary__row--total">
                    <span>"Total"</span>
                    <span>{move || money(cost.get().total_cost)}</span>
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| pricing.with_untracked(|p| vm.save_command(auth, p, on_saved))
                >
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
