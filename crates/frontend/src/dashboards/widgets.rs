use contracts::dashboards::JobCounts;
use contracts::domain::a003_elevator::aggregate::{elevator_label, Elevator, ElevatorState};
use contracts::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use leptos::prelude::*;

use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_opt_date, format_opt_datetime, today};

#[component]
pub fn JobStatusCards(#[prop(into)] counts: Signal<Option<JobCounts>>) -> impl IntoView {
    view! {
        <div class="stat-grid">
            <StatCard
                label="Pending jobs"
                icon_name="clipboard"
                value=Signal::derive(move || counts.get().map(|c| c.pending))
                tone=Signal::derive(move || StatTone::alert_if_any(counts.get().map_or(0, |c| c.pending)))
            />
            <StatCard
                label="In progress"
                icon_name="play"
                value=Signal::derive(move || counts.get().map(|c| c.in_progress))
            />
            <StatCard
                label="Completed"
                icon_name="check"
                value=Signal::derive(move || counts.get().map(|c| c.done))
                tone=StatTone::Good
            />
        </div>
    }
}

#[component]
pub fn UpcomingPlans(
    #[prop(into)] plans: Signal<Vec<MaintenancePlan>>,
    #[prop(into)] elevators: Signal<Vec<Elevator>>,
) -> impl IntoView {
    view! {
        <div class="dashboard-panel">
            <h3 class="dashboard-panel__title">"Upcoming maintenance"</h3>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"Elevator"</th>
                        <th class="table__header-cell">"Next run"</th>
                        <th class="table__header-cell">"Due"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let lookup = elevators.get();
                        let today = today();
                        let rows = plans.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="3">"Nothing scheduled"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter().map(|plan| {
                            let urgency = plan.urgency(today);
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{elevator_label(&lookup, &plan.elevator_id)}</td>
                                    <td class="table__cell">{format_opt_date(plan.next_run_at.as_deref())}</td>
                                    <td class="table__cell">
                                        <Badge variant=urgency.badge_variant()>{urgency.label()}</Badge>
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn RecentJobs(#[prop(into)] jobs: Signal<Vec<MaintenanceJob>>) -> impl IntoView {
    view! {
        <div class="dashboard-panel">
            <h3 class="dashboard-panel__title">"Recent jobs"</h3>
            <table class="table__data">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">"#"</th>
                        <th class="table__header-cell">"Elevator"</th>
                        <th class="table__header-cell">"Type"</th>
                        <th class="table__header-cell">"Status"</th>
                        <th class="table__header-cell">"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = jobs.get();
                        if rows.is_empty() {
                            return view! {
                                <tr><td class="table__cell table__cell--empty" colspan="5">"No jobs yet"</td></tr>
                            }
                            .into_any();
                        }
                        rows.into_iter().map(|job| {
                            let status = job.status();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{job.id}</td>
                                    <td class="table__cell">{job.elevator_label()}</td>
                                    <td class="table__cell">{job.job_type.label()}</td>
                                    <td class="table__cell">
                                        <Badge variant=status.badge_variant()>{status.label()}</Badge>
                                    </td>
                                    <td class="table__cell">{format_opt_datetime(job.created_at.as_deref())}</td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
pub fn ElevatorStateBreakdown(#[prop(into)] counts: Signal<Vec<(ElevatorState, usize)>>) -> impl IntoView {
    view! {
        <div class="dashboard-panel">
            <h3 class="dashboard-panel__title">"Elevators by state"</h3>
            <ul class="state-list">
                {move || counts.get().into_iter().map(|(state, count)| view! {
                    <li class="state-list__item">
                        <Badge variant=state.badge_variant()>{state.label()}</Badge>
                        <span class="state-list__count">{count}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
