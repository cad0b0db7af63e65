use crate::domain::a007_quotation::ui::details::{QuotationDetails, QuotationDetailsViewModel};
use crate::domain::a014_pricing_settings::api::fetch_pricing;
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::{customer_name, Customer};
use contracts::domain::a006_contract::aggregate::{find_contract, Contract};
use contracts::domain::a007_quotation::aggregate::Quotation;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use contracts::domain::a014_pricing_settings::aggregate::PricingSettings;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn QuotationList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Quotation>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let contracts = RwSignal::new(Vec::<Contract>::new());
    let jobs = RwSignal::new(Vec::<MaintenanceJob>::new());
    let pricing = RwSignal::new(PricingSettings::default());
    let vm = QuotationDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Quotation>(),
                    client.list::<Customer>(),
                    client.list::<Contract>(),
                    client.list::<MaintenanceJob>(),
                    fetch_pricing(&client),
                )
            },
            move |(quotations, customer_rows, contract_rows, job_rows, settings)| {
                items.set(quotations);
                customers.set(customer_rows);
                contracts.set(contract_rows);
                jobs.set(job_rows);
                pricing.set(settings);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Quotation>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a007_quotation--list" category=PAGE_CAT_LIST>
            <PageHeader title="Quotations">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New quotation"
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
                            <th class="table__header-cell">"Contract"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Total"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let customer_lookup = customers.get();
                            let contract_lookup = contracts.get();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let owner = row
                                    .customer_name
                                    .clone()
                                    .unwrap_or_else(|| customer_name(&customer_lookup, row.customer_id));
                                let contract = find_contract(&contract_lookup, row.contract_id)
                                    .map(|c| c.contract_code.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                let status = row.status;
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.code()}</td>
                                        <td class="table__cell">{owner}</td>
                                        <td class="table__cell">{contract}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.total_amount.unwrap_or(0.0))}</td>
                                        <td class="table__cell">{format_opt_datetime(row.created_at.as_deref())}</td>
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
                    <QuotationDetails
                        vm=vm
                        customers=customers
                        contracts=contracts
                        jobs=jobs
                        pricing=pricing
                        on_saved=on_saved
                    />
                </Modal>
            </Show>
        </PageFrame>
    }
}
