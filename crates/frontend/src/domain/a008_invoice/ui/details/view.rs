use super::view_model::InvoiceDetailsViewModel;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a007_quotation::aggregate::Quotation;
use contracts::domain::a008_invoice::aggregate::InvoiceStatus;
use contracts::domain::common::form::parse_i64;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

#[component]
pub fn InvoiceDetails(
    vm: InvoiceDetailsViewModel,
    customers: RwSignal<Vec<Customer>>,
    quotations: RwSignal<Vec<Quotation>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let form = vm.form;

    let customer_options = Signal::derive(move || {
        customers.with(|list| options_of(list, |c| (c.id, c.name.clone())))
    });
    let quotation_options = Signal::derive(move || {
        quotations.with(|list| {
            options_of(list, |q| {
                (q.id, format!("{} ({})", q.code(), format_amount(q.total_amount.unwrap_or(0.0))))
            })
        })
    });
    let status_options: Vec<(String, String)> = InvoiceStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();

    view! {
        <div class="details-container invoice-details">
            <div class="details-form">
                <Input
                    label="Invoice code"
                    id="invoice-code"
                    placeholder="Generated when empty"
                    value=Signal::derive(move || form.get().invoice_code)
                    on_input=Callback::new(move |v| form.update(|f| f.invoice_code = v))
                />
                <Select
                    label="Customer"
                    id="invoice-customer"
                    placeholder="Select a customer"
                    value=Signal::derive(move || form.get().customer_id.map(|id| id.to_string()).unwrap_or_default())
                    options=customer_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.customer_id = parse_i64(&v)))
                    required=true
                />
                <Select
                    label="Quotation"
                    id="invoice-quotation"
                    placeholder="No quotation"
                    value=Signal::derive(move || form.get().quotation_id.map(|id| id.to_string()).unwrap_or_default())
                    options=quotation_options
                    on_change=Callback::new(move |v: String| quotations.with_untracked(|list| vm.select_quotation(&v, list)))
                />
                <Input
                    label="Total amount"
                    id="invoice-total"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().total_amount)
                    on_input=Callback::new(move |v| form.update(|f| f.total_amount = v))
                />
                <Input
                    label="Paid amount"
                    id="invoice-paid"
                    input_type="number"
                    step="0.01"
                    value=Signal::derive(move || form.get().paid_amount)
                    on_input=Callback::new(move |v| form.update(|f| f.paid_amount = v))
                />
                <Select
                    label="Status"
                    id="invoice-status"
                    value=Signal::derive(move || form.get().status.as_str().to_string())
                    options=status_options
                    on_change=Callback::new(move |v: String| {
                        form.update(|f| f.status = InvoiceStatus::from_str_or_default(&v))
                    })
                />
                <Input
                    label="Due date"
                    id="invoice-due"
                    input_type="date"
                    value=Signal::derive(move || form.get().due_date)
                    on_input=Callback::new(move |v| form.update(|f| f.due_date = v))
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
