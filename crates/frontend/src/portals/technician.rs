use contracts::dashboards::JobCounts;
use contracts::domain::a003_elevator::aggregate::{elevator_label, Elevator};
use contracts::domain::a004_technician::aggregate::Technician;
use contracts::domain::a009_part::aggregate::{quantity_on_hand, Part};
use contracts::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use contracts::portals::technician::{resolve_technician, TechnicianPortalData};
use contracts::system::auth::Role;
use leptos::prelude::*;

use super::SubjectPicker;
use crate::domain::a009_part::api as part_api;
use crate::domain::a012_maintenance_job::actions::JobActionButtons;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::{Badge, StockBadge};
use crate::shared::date_utils::{format_opt_date, format_opt_datetime, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;

/// Outcome of one portal load.
#[derive(Clone, Default)]
struct PortalView {
    data: TechnicianPortalData,
    /// Why nothing is shown, when the subject could not be resolved.
    notice: Option<String>,
}

#[component]
pub fn TechnicianPortal() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let technicians = RwSignal::new(Vec::<Technician>::new());
    let selected = RwSignal::new(None::<i64>);
    let portal = RwSignal::new(None::<PortalView>);
    let is_admin = auth.role_untracked() == Some(Role::Admin);

    let fetch = move || {
        let Some(user) = auth.user_untracked() else {
            return;
        };
        let wanted = selected.get_untracked();
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Technician>(),
                    client.list::<MaintenanceJob>(),
                    client.list::<Elevator>(),
                    client.list::<MaintenancePlan>(),
                    client.list::<Part>(),
                    part_api::fetch_stocks(&client),
                )
            },
            move |(technician_rows, jobs, elevators, plans, parts, stocks)| {
                auth.sync_approval(&technician_rows);
                let view = match resolve_technician(&user, &technician_rows, wanted) {
                    Ok(Some(id)) => {
                        selected.set(Some(id));
                        PortalView {
                            data: TechnicianPortalData::scoped(id, jobs, elevators, plans, parts, stocks),
                            notice: None,
                        }
                    }
                    Ok(None) => PortalView {
                        notice: Some("No technicians registered yet".to_string()),
                        ..PortalView::default()
                    },
                    Err(msg) => PortalView {
                        notice: Some(msg),
                        ..PortalView::default()
                    },
                };
                technicians.set(technician_rows);
                portal.set(Some(view));
            },
        );
    };
    let on_changed = Callback::new(move |_| fetch());

    fetch();

    let stats = Memo::new(move |_| portal.with(|p| p.as_ref().map(|p| p.data.stats(today()))));
    let count = move |f: fn(&JobCounts) -> usize| {
        Signal::derive(move || stats.with(|s| s.as_ref().map(|s| f(&s.counts))))
    };

    view! {
        <PageFrame page_id="technician_portal" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Technician portal">
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <Show when=move || is_admin>
                <SubjectPicker
                    label="Technician"
                    items=technicians
                    selected=selected
                    to_option=|t: &Technician| (t.id, t.display_name())
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
                    label="Pending"
                    icon_name="clipboard"
                    value=count(|c| c.pending)
                    tone=Signal::derive(move || StatTone::alert_if_any(stats.with(|s| s.as_ref().map_or(0, |s| s.counts.pending))))
                />
                <StatCard label="In progress" icon_name="play" value=count(|c| c.in_progress) />
                <StatCard label="Completed" icon_name="check" value=count(|c| c.done) tone=StatTone::Good />
                <StatCard
                    label="Plans due this week"
                    icon_name="calendar"
                    value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.due_plans.len())))
                />
                <StatCard
                    label="Low stock parts"
                    icon_name="package"
                    value=Signal::derive(move || stats.with(|s| s.as_ref().map(|s| s.low_stock.len())))
                    tone=Signal::derive(move || StatTone::alert_if_any(stats.with(|s| s.as_ref().map_or(0, |s| s.low_stock.len()))))
                />
            </div>

            <div class="dashboard-panel">
                <h3 class="dashboard-panel__title">"My jobs"</h3>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"#"</th>
                            <th class="table__header-cell">"Elevator"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Status"</th>
                            <th class="table__header-cell">"Started"</th>
                            <th class="table__header-cell">"Finished"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let (jobs, elevators) = portal.with(|p| {
                                p.as_ref()
                                    .map(|p| (p.data.jobs.clone(), p.data.elevators.clone()))
                                    .unwrap_or_default()
                            });
                            jobs.into_iter().map(|job| {
                                let status = job.status();
                                let elevator = if job.elevator_name.is_some() {
                                    job.elevator_label()
                                } else {
                                    elevator_label(&elevators, &job.elevator_id)
                                };
                                let job_for_actions = job.clone();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{job.id}</td>
                                        <td class="table__cell">{elevator}</td>
                                        <td class="table__cell">{job.job_type.label()}</td>
                                        <td class="table__cell">
                                            <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                        </td>
                                        <td class="table__cell">{format_opt_datetime(job.started_at.as_deref())}</td>
                                        <td class="table__cell">{format_opt_datetime(job.finished_at.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">
                                            <JobActionButtons auth=auth job=job_for_actions on_done=on_changed />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <div class="dashboard-columns">
                <div class="dashboard-panel">
                    <h3 class="dashboard-panel__title">"Plans due soon"</h3>
                    <ul class="plain-list">
                        {move || {
                            let elevators = portal.with(|p| p.as_ref().map(|p| p.data.elevators.clone()).unwrap_or_default());
                            stats.get().map(|s| s.due_plans).unwrap_or_default().into_iter().map(|plan| view! {
                                <li class="plain-list__item">
                                    {elevator_label(&elevators, &plan.elevator_id)}
                                    " - "
                                    {format_opt_date(plan.next_run_at.as_deref())}
                                </li>
                            }).collect_view()
                        }}
                    </ul>
                </div>
                <div class="dashboard-panel">
                    <h3 class="dashboard-panel__title">"Low stock"</h3>
                    <ul class="plain-list">
                        {move || {
                            let stocks = portal.with(|p| p.as_ref().map(|p| p.data.stocks.clone()).unwrap_or_default());
                            stats.get().map(|s| s.low_stock).unwrap_or_default().into_iter().map(|part| {
                                let on_hand = quantity_on_hand(&stocks, part.id);
                                view! {
                                    <li class="plain-list__item">
                                        {format!("{} {} ({})", part.part_code, part.name, on_hand)}
                                        " "
                                        <StockBadge low=true />
                                    </li>
                                }
                            }).collect_view()
                        }}
                    </ul>
                </div>
                <div class="dashboard-panel">
                    <h3 class="dashboard-panel__title">"Recently completed"</h3>
                    <ul class="plain-list">
                        {move || {
                            stats.get().map(|s| s.recent_completed).unwrap_or_default().into_iter().map(|job| view! {
                                <li class="plain-list__item">
                                    {format!("#{} {}", job.id, job.elevator_label())}
                                    " - "
                                    {format_opt_datetime(job.finished_at.as_deref())}
                                </li>
                            }).collect_view()
                        }}
                    </ul>
                </div>
            </div>
        </PageFrame>
    }
}
