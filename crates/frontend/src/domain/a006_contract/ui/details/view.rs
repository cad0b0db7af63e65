use super::view_model::ContractDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select, Textarea};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a006_contract::aggregate::ContractType;
use contracts::domain::common::form::parse_i64;
use leptos::prelude::*;

#[component]
pub fn ContractDetails(
    vm: ContractDetailsViewModel,
    customers: RwSignal<Vec<Customer>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let customer_options = Signal::derive(move || {
        customers.with(|list| options_of(list, |c| (c.id, c.name.clone())))
    });
    let type_options: Vec<(String, String)> = [ContractType::Annual, ContractType::PerCall]
        .iter()
        .map(|t| (t.as_str().to_string(), t.label().to_string()))
        .collect();
    let scheduling_disabled = Signal::derive(move || !vm.scheduling_enabled());

    view! {
        <div class="details-container contract-details">
            <div class="details-form">
                <Select
                    label="Customer"
                    id="contract-customer"
                    placeholder="Select a customer"
                    value=Signal::derive(move || form.get().customer_id.map(|id| id.to_string()).unwrap_or_default())
                    options=customer_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.customer_id = parse_i64(&v)))
                    required=true
                />
                <Input
                    label="Contract code"
                    id="contract-code"
                    value=Signal::derive(move || form.get().contract_code)
                    on_input=Callback::new(move |v| form.update(|f| f.contract_code = v))
                    required=true
                />
                <Select
                    label="Contract type"
                    id="contract-type"
                    value=Signal::derive(move || form.get().contract_type.as_str().to_string())
                    options=type_options
                    on_change=Callback::new(move |v: String| vm.set_contract_type(&v))
                />
                <Input
                    label="Start date"
                    id="contract-start"
                    input_type="date"
                    value=Signal::derive(move || form.get().start_date)
                    on_input=Callback::new(move |v| form.update(|f| f.start_date = v))
                    required=true
                />
                <Input
                    label="End date"
                    id="contract-end"
                    input_type="date"
                    value=Signal::derive(move || form.get().end_date)
                    on_input=Callback::new(move |v| form.update(|f| f.end_date = v))
                    required=true
                />
                <Input
                    label="Maintenance visits per year"
                    id="contract-times"
                    input_type="number"
                    value=Signal::derive(move || form.get().maintenance_times_per_year)
                    on_input=Callback::new(move |v| form.update(|f| f.maintenance_times_per_year = v))
                    disabled=scheduling_disabled
                />
                <Input
                    label="Notify before (days)"
                    id="contract-notify"
                    input_type="number"
                    value=Signal::derive(move || form.get().notify_before_days)
                    on_input=Callback::new(move |v| form.update(|f| f.notify_before_days = v))
                    disabled=scheduling_disabled
                />
                <Textarea
                    label="Included items"
                    id="contract-included"
                    value=Signal::derive(move || form.get().included_items)
                    on_input=Callback::new(move |v| form.update(|f| f.included_items = v))
                    rows=3
                />
                <Textarea
                    label="Excluded items"
                    id="contract-excluded"
                    value=Signal::derive(move || form.get().excluded_items)
                    on_input=Callback::new(move |v| form.update(|f| f.excluded_items = v))
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
