pub mod details;
pub mod stock;

use contracts::domain::a009_part::aggregate::{quantity_on_hand, Part, PartMovement, PartStock};
use contracts::domain::common::form::text_of;
use contracts::shared::metrics::format_amount;
use leptos::prelude::*;

use crate::domain::a009_part::api;
use crate::shared::components::ui::StockBadge;
use crate::shared::crud::delete_resource;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::use_auth;
use details::{PartDetails, PartDetailsViewModel};
use stock::{MovementList, StockAdjustForm};

/// Parts catalogue with on-hand stock, adjustments and the movement ledger.
#[component]
pub fn PartsPage() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let parts = RwSignal::new(Vec::<Part>::new());
    let stocks = RwSignal::new(Vec::<PartStock>::new());
    let movements = RwSignal::new(Vec::<PartMovement>::new());
    let vm = PartDetailsViewModel::new();

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Part>(),
                    api::fetch_stocks(&client),
                    api::fetch_movements(&client),
                )
            },
            move |(part_rows, stock_rows, movement_rows)| {
                parts.set(part_rows);
                stocks.set(stock_rows);
                movements.set(movement_rows);
            },
        );
    };
    let on_saved = Callback::new(move |_| fetch());

    let handle_delete = move |id: i64| delete_resource::<Part>(auth, id, fetch);

    fetch();

    view! {
        <PageFrame page_id="a009_part--list" category=PAGE_CAT_LIST>
            <PageHeader title="Parts & inventory">
                <button class="button button--primary" on:click=move |_| vm.new_command()>
                    {icon("plus")}
                    "New part"
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
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Brand / model"</th>
                            <th class="table__header-cell">"Unit"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Cost"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Price"</th>
                            <th class="table__header-cell table__header-cell--numeric">"On hand"</th>
                            <th class="table__header-cell">"Stock"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let stock_rows = stocks.get();
                            parts.get().into_iter().map(|row| {
                                let id = row.id;
                                let on_hand = quantity_on_hand(&stock_rows, row.id);
                                let low = row.is_low_stock(&stock_rows);
                                let brand_model = format!("{} {}", text_of(&row.brand), text_of(&row.model));
                                let row_for_edit = row.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.part_code.clone()}</td>
                                        <td class="table__cell">{row.name.clone()}</td>
                                        <td class="table__cell">{brand_model.trim().to_string()}</td>
                                        <td class="table__cell">{text_of(&row.unit)}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.cost_price.unwrap_or(0.0))}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(row.sell_price.unwrap_or(0.0))}</td>
                                        <td class="table__cell table__cell--numeric">{on_hand}</td>
                                        <td class="table__cell"><StockBadge low=low /></td>
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

            <StockAdjustForm parts=parts on_adjusted=on_saved />
            <MovementList movements=movements />

            <Show when=move || vm.open.get()>
                <Modal
                    title=Signal::derive(move || vm.title())
                    on_close=Callback::new(move |_| vm.close())
                >
                    <PartDetails vm=vm on_saved=on_saved />
                </Modal>
            </Show>
        </PageFrame>
    }
}
