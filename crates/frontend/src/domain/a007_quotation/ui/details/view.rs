use super::view_model::QuotationDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a007_quotation::aggregate::QuotationStatus;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use contracts::domain::a014_pricing_settings::aggregate::PricingSettings;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

#[component]
pub fn QuotationDetails(
    vm: QuotationDetailsViewModel,
    customers: RwSignal<Vec<Customer>>,
    contracts: RwSignal<Vec<Contract>>,
    jobs: RwSignal<Vec<MaintenanceJob>>,
    pricing: RwSignal<PricingSettings>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let customer_options = Signal::derive(move || {
        customers.with(|list| options_of(list, |c| (c.id, c.name.clone())))
    });
    let contract_options = Signal::derive(move || {
        contracts.with(|list| {
            options_of(list, |c| (c.id, format!("{} ({})", c.contract_code, c.contract_type.label())))
        })
    });
    let status_options: Vec<(String, String)> = QuotationStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    let on_contract = Callback::new(move |v: String| {
        let call_fee = pricing.with_untracked(|p| p.call_fee);
        jobs.with_untracked(|list| vm.select_contract(&v, list, call_fee));
    });

    view! {
        <div class="details-container quotation-details">
            <div class="details-form">
                <Input
                    label="Quotation code"
                    id="quotation-code"
                    placeholder="Generated when empty"
                    value=Signal::derive(move || form.get().quotation_code)
                    on_input=Callback::new(move |v| form.update(|f| f.quotation_code = v))
                />
                <Select
                    label="Customer"
                    id="quotation-customer"
                    placeholder="Select a customer"
                    value=Signal::derive(move || form.get().customer_id.map(|id| id.to_string()).unwrap_or_default())
                    options=customer_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.customer_id = parse_i64(&v)))
                    required=true
                />
                <Select
                    label="Contract"
                    id="quotation-contract"
                    placeholder="No contract"
                    value=Signal::derive(move || form.get().contract_id.map(|id| id.to_string()).unwrap_or_default())
                    options=contract_options
                    on_change=on_contract
                />
                <Input
                    label="Ticket"
                    id="quotation-ticket"
                    value=Signal::derive(move || form.get().ticket_id)
                    on_input=Callback::new(move |v| form.update(|f| f.ticket_id = v))
                />
                <Select
                    label="Status"
                    id="quotation-status"
                    value=Signal::derive(move || form.get().status.as_str().to_string())
                    options=status_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.status = QuotationStatus::from_str_or_default(&v))
                    })
                />
                <Input
                    label="Total amount"
                    id="quotation-total"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().total_amount)
                    on_input=Callback::new(move |v| form.update(|f| f.total_amount = v))
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
