use crate::domain::a008_invoice::ui::details::{InvoiceDetails, InvoiceDetailsViewModel};
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::format_opt_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::{customer_name, Customer};
use contracts::domain::a007_quotation::aggregate::Quotation;
use contracts::domain::a008_invoice::aggregate::Invoice;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Invoice>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let quotations = RwSignal::new(Vec::<Quotation>::new());
    let vm = InvoiceDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Invoice>(),
                    client.list::<Customer>(),
                    client.list::<Quotation>(),
                )
            },
            move |(invoices, customer_rows, quotation_rows)| {
                items.set(invoices);
                customers.set(customer_rows);
                quotations.set(quotation_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Invoice>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a008_invoice--list" category=PAGE_CAT_LIST>
            <PageHeader title="Invoices">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New invoice"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Quotation"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Total"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Paid"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Outstanding"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Due"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let customer_lookup = customers.get();
                            let quotation_lookup = quotations.get();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let owner = row
                                    .customer_name
                                    .clone()
                                    .unwrap_or_else(|| customer_name(&customer_lookup, row.customer_id));
                                let quotation = row
                                    .quotation_id
                                    .and_then(|qid| quotation_lookup.iter().find(|q| q.id == qid))
                                    .map(Quotation::code)
                                    .unwrap_or_else(|| "-".to_string());
                                let status = row.status;
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.code()}</td>
                                        <td class="table__cell">{owner}</td>
                                        <td class="table__cell">{quotation}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.total_amount.unwrap_or(0.0))}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.paid_amount.unwrap_or(0.0))}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.outstanding())}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{format_opt_date(row.due_date.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit" on:click=move |_| vm.edit_command(&row_for_edit)>
                                                {icon("edit")}
                                            </button>
                                            <button class="button button--icon" title="Delete" on:click=move |_| handle_delete(id)>
                                                {icon("delete")}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || vm.open.get()>
                <Modal
                    title=Signal::derive(move || vm.title())
                    on_close=Callback::new(move |_| vm.close())
                >
                    <InvoiceDetails vm=vm customers=customers quotations=quotations on_saved=on_saved />
                </Modal>
            </Show>
        </PageFrame>
    }
}
