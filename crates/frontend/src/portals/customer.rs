use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a006_contract::aggregate::Contract;
use contracts::domain::a007_quotation::aggregate::Quotation;
use contracts::domain::a008_invoice::aggregate::Invoice;
use contracts::domain::common::form::text_of;
use contracts::portals::customer::{resolve_customer, CustomerPortalData};
use contracts::shared::http::ApiError;
use contracts::shared::metrics::{days_until, format_amount};
use contracts::system::auth::Role;
use leptos::prelude::*;

use super::SubjectPicker;
use crate::domain::a013_ticket::ui::TicketModal;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_opt_date, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;

#[derive(Clone, Default)]
struct PortalView {
    data: CustomerPortalData,
    notice: Option<String>,
}

#[component]
pub fn CustomerPortal() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let customers = RwSignal::new(Vec::<Customer>::new());
    let selected = RwSignal::new(None::<i64>);
    let portal = RwSignal::new(None::<PortalView>);
    let ticket_open = RwSignal::new(false);
    let is_admin = auth.role_untracked() == Some(Role::Admin);

    let fetch = move || {
        let Some(user) = auth.user_untracked() else {
            return;
        };
        let wanted = selected.get_untracked();
        load.run(
            auth,
            move |client| async move {
                // Only admins may list customers.
                let customer_rows = if is_admin {
                    client.list::<Customer>().await?
                } else {
                    Vec::new()
                };
                let (buildings, elevators, contracts, quotations, invoices) = futures::try_join!(
                    client.list::<Building>(),
                    client.list::<Elevator>(),
                    client.list::<Contract>(),
                    client.list::<Quotation>(),
                    client.list::<Invoice>(),
                )?;
                Ok::<_, ApiError>((customer_rows, buildings, elevators, contracts, quotations, invoices))
            },
            move |(customer_rows, buildings, elevators, contracts, quotations, invoices)| {
                let view = match resolve_customer(&user, &customer_rows, wanted) {
                    Ok(Some(id)) => {
                        selected.set(Some(id));
                        PortalView {
                            data: CustomerPortalData::scoped(id, buildings, elevators, contracts, quotations, invoices),
                            notice: None,
                        }
                    }
                    Ok(None) => PortalView {
                        notice: Some("No customers registered yet".to_string()),
                        ..PortalView::default()
                    },
                    Err(msg) => PortalView {
                        notice: Some(msg),
                        ..PortalView::default()
                    },
                };
                customers.set(customer_rows);
                portal.set(Some(view));
            },
        );
    };
    let on_changed = Callback::new(move |_| fetch());

    fetch();

    let stats = Memo::new(move |_| portal.with(|p| p.as_ref().map(|p| p.data.stats(today()))));
    let elevators = Signal::derive(move || {
        portal.with(|p| p.as_ref().map(|p| p.data.elevators.clone()).unwrap_or_default())
    });

    view! {
        <PageFrame page_id="customer_portal" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Customer portal">
                <button class="button button--primary" on:click=move |_| ticket_open.set(true)>
                    {icon("ticket")}
                    "Report a problem"
                </button>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || is_admin>
                <SubjectPicker
                    label="Customer"
                    items=customers
                    selected=selected
                    to_option=|c: &Customer| (c.id, c.name.clone())
                    on_change=on_changed
                />
            </Show>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            {move || portal.with(|p| p.as_ref().and_then(|p| p.notice.clone())).map(|msg| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">{icon("alert-triangle")}</span>
                    <span class="warning-box__text">{msg}</span>
                </div>
            })}

            <div class="stat-grid">
                <StatCard
                    label="Active contracts"
                    icon_name="file-text"
                    value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.active_contracts)))
                    tone=StatTone::Good
                />
                <StatCard
                    label="Quotations awaiting decision"
                    icon_name="file"
                    value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.pending_quotations)))
                />
                <StatCard
                    label="Open invoices"
                    icon_name="receipt"
                    value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.open_invoices)))
                    tone=Signal::derive(move || StatTone::alert_if_any(stats.with(|s| s.as_ref().map_or(0, |s| s.open_invoices))))
                />
                <StatCard
                    label="Elevators"
                    icon_name="elevator"
                    value=Signal::derive(move || portal.with(|p| p.as_ref().map(|p| p.data.elevators.len())))
                />
            </div>

            <div class="dashboard-panel">
                <h3 class="dashboard-panel__title">"My elevators"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Code"</th>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"State"</th>
                            <th class="table__header-cell">"Next maintenance"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || elevators.get().into_iter().map(|e| {
                            let state = e.state;
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{e.id.clone()}</td>
                                    <td class="table__cell">{text_of(&e.name)}</td>
                                    <td class="table__cell">
                                        <Badge variant=state.badge_variant()>{state.label()}</Badge>
                                    </td>
                                    <td class="table__cell">{format_opt_date(e.next_maintenance_at.as_deref())}</td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>

            <div class="dashboard-columns">
                <div class="dashboard-panel">
                    <h3 class="dashboard-panel__title">"Recent invoices"</h3>
                    <table class="table__data">
                        <tbody>
                            {move || stats.get().map(|s| s.recent_invoices).unwrap_or_default().into_iter().map(|inv| {
                                let status = inv.status;
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{inv.code()}</td>
                                        <td class="table__cell table__cell--numeric">{format_amount(inv.total_amount.unwrap_or(0.0))}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                </div>
                <div class="dashboard-panel">
                    <h3 class="dashboard-panel__title">"Contracts expiring soon"</h3>
                    <ul class="plain-list">
                        {move || {
                            let today = today();
                            stats.get().map(|s| s.expiring_contracts).unwrap_or_default().into_iter().map(|c| {
                                let days = c.end_date.as_deref().and_then(|end| days_until(end, today));
                                let left = days.map(|d| format!("{} days left", d)).unwrap_or_default();
                                view! {
                                    <li class="plain-list__item">
                                        {c.contract_code.clone()}
                                        " - "
                                        {format_opt_date(c.end_date.as_deref())}
                                        " "
                                        <Badge variant="warning">{left}</Badge>
                                    </li>
                                }
                            }).collect_view()
                        }}
                    </ul>
                </div>
            </div>

            <Show when=move || ticket_open.get()>
                <TicketModal
                    elevators=elevators
                    on_close=Callback::new(move |_| ticket_open.set(false))
                    on_created=Callback::new(move |_| fetch())
                />
            </Show>
        </PageFrame>
    }
}
