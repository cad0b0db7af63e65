use crate::domain::a006_contract::ui::details::{ContractDetails, ContractDetailsViewModel};
use crate::shared::components::ui::Badge;
use crate::shared::crud::delete_resource;
use crate::shared::date_utils::{format_opt_date, today};
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::{customer_name, Customer};
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::common::form::int_text;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ContractList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Contract>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let vm = ContractDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(client.list::<Contract>(), client.list::<Customer>())
            },
            move |(contracts, customer_rows)| {
                items.set(contracts);
                customers.set(customer_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Contract>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a006_contract--list" category=PAGE_CAT_LIST>
            <PageHeader title="Contracts">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New contract"
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
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Start"</th>
                            <th class="table__header-cell">"End"</th>
                            <th class="table__header-cell">"Visits / year"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lookup = customers.get();
                            let today = today();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let owner = row
                                    .customer_name
                                    .clone()
                                    .unwrap_or_else(|| customer_name(&lookup, row.customer_id));
                                let status = if !row.is_active(today) {
                                    view! { <Badge variant="neutral">"Inactive"</Badge> }.into_any()
                                } else if row.is_expiring_soon(today) {
                                    view! { <Badge variant="warning">"Expiring soon"</Badge> }.into_any()
                                } else {
                                    view! { <Badge variant="success">"Active"</Badge> }.into_any()
                                };
                                let visits = if row.is_per_call() {
                                    "-".to_string()
                                } else {
                                    int_text(row.maintenance_times_per_year)
                                };
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.contract_code.clone()}</td>
                                        <td class="table__cell">{owner}</td>
                                        <td class="table__cell">{row.contract_type.label()}</td>
                                        <td class="table__cell">{format_opt_date(row.start_date.as_deref())}</td>
                                        <td class="table__cell">{format_opt_date(row.end_date.as_deref())}</td>
                                        <td class="table__cell">{visits}</td>
                                        <td class="table__cell">{status}</td>
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
                    <ContractDetails vm=vm customers=customers on_saved=on_saved />
                </Modal>
            </Show>
        </PageFrame>
    }
}
