use crate::domain::a002_building::ui::details::{BuildingDetails, BuildingDetailsViewModel};
use crate::shared::crud::delete_resource;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use contracts::domain::a001_customer::aggregate::{customer_name, Customer};
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::common::form::text_of;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn BuildingList() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let items = RwSignal::new(Vec::<Building>::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let vm = BuildingDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(client.list::<Building>(), client.list::<Customer>())
            },
            move |(buildings, customer_rows)| {
                items.set(buildings);
                customers.set(customer_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Building>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a002_building--list" category=PAGE_CAT_LIST>
            <PageHeader title="Buildings">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New building"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Customer"</th>
                            <th class="table__header-cell">"Address"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let lookup = customers.get();
                            items.get().into_iter().map(|row| {
                                let id = row.id;
                                let owner = row
                                    .customer_name
                                    .clone()
                                    .unwrap_or_else(|| customer_name(&lookup, row.customer_id));
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{owner}</td>
                                        <td class="table__cell">{text_of(&row.address)}</td>
                                        <td class="table__cell">{text_of(&row.building_type)}</td>
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
                    <BuildingDetails vm=vm customers=customers on_saved=on_saved />
                </Modal>
            </Show>
        </PageFrame>
    }
}
