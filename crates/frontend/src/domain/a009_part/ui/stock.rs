//! Stock adjustment form and the movement ledger.

use contracts::domain::a009_part::aggregate::{Part, PartMovement, StockAdjustmentDto};
use contracts::domain::common::form::{parse_i64, text_of};
use leptos::prelude::*;

use crate::domain::a009_part::api;
use crate::shared::components::ui::{options_of, Input, Select};
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::page_load::run_action;
use crate::system::auth::use_auth;

#[component]
pub fn StockAdjustForm(parts: RwSignal<Vec<Part>>, on_adjusted: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let form = RwSignal::new(StockAdjustmentDto::default());

    let part_options = Signal::derive(move || {
        parts.with(|list| options_of(list, |p| (p.id, format!("{} {}", p.part_code, p.name))))
    });

    let submit = move |_| {
        let adjustment = match form.get_untracked().validate() {
            Ok(adjustment) => adjustment,
            Err(msg) => {
                alert(&msg);
                return;
            }
        };
        run_action(
            auth,
            move |client| async move { api::adjust_stock(&client, &adjustment).await },
            move |_| {
                form.set(StockAdjustmentDto::default());
                on_adjusted.run(());
            },
        );
    };

    view! {
        <div class="stock-adjust">
            <h3 class="section-title">"Adjust stock"</h3>
            <div class="details-form details-form--inline">
                <Select
                    label="Part"
                    id="stock-part"
                    placeholder="Select a part"
                    value=Signal::derive(move || form.get().part_id.map(|id| id.to_string()).unwrap_or_default())
                    options=part_options
                    on_change=Callback::new(move |v: String| form.update(|f| f.part_id = parse_i64(&v)))
                    required=true
                />
                <Input
                    label="Change quantity"
                    id="stock-change"
                    input_type="number"
                    step="1"
                    placeholder="-2 or 10"
                    value=Signal::derive(move || form.get().change_qty)
                    on_input=Callback::new(move |v| form.update(|f| f.change_qty = v))
                    required=true
                />
                <Input
                    label="Note"
                    id="stock-note"
                    value=Signal::derive(move || form.get().note)
                    on_input=Callback::new(move |v| form.update(|f| f.note = v))
                />
                <button class="button button--primary" on:click=submit>
                    {icon("check")}
                    "Apply"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn MovementList(movements: RwSignal<Vec<PartMovement>>) -> impl IntoView {
    view! {
        <div class="stock-movements">
            <h3 class="section-title">"Stock movements"</h3>
            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Part"</th>
                            <th class="table__header-cell table__header-cell--numeric">"Change"</th>
                            <th class="table__header-cell">"Note"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            movements.get().into_iter().map(|row| {
                                let change = row.change_qty.unwrap_or(0);
                                let change_class = if change < 0 {
                                    "table__cell table__cell--numeric text-negative"
                                } else {
                                    "table__cell table__cell--numeric text-positive"
                                };
                                let part = format!("{} {}", text_of(&row.part_code), text_of(&row.part_name));
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{format_opt_datetime(row.created_at.as_deref())}</td>
                                        <td class="table__cell">{part.trim().to_string()}</td>
                                        <td class=change_class>{format!("{:+}", change)}</td>
                                        <td class="table__cell">{text_of(&row.note)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
