use contracts::dashboards::{recent_jobs, upcoming_plans, DashboardKind, JobCounts, DASHBOARD_LIST_LIMIT};
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use leptos::prelude::*;

use super::widgets::{JobStatusCards, RecentJobs, UpcomingPlans};
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;

/// Jobs and plans as the API scopes them for the signed-in technician.
#[component]
pub fn TechnicianDashboard() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let jobs = RwSignal::new(None::<Vec<MaintenanceJob>>);
    let plans = RwSignal::new(Vec::<MaintenancePlan>::new());
    let elevators = RwSignal::new(Vec::<Elevator>::new());

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<MaintenanceJob>(),
                    client.list::<MaintenancePlan>(),
                    client.list::<Elevator>(),
                )
            },
            move |(job_rows, plan_rows, elevator_rows)| {
                jobs.set(Some(job_rows));
                plans.set(plan_rows);
                elevators.set(elevator_rows);
            },
        );
    };

    fetch();

    view! {
        <PageFrame page_id="dashboard--technician" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=DashboardKind::Technician.title()>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <JobStatusCards counts=Signal::derive(move || jobs.with(|j| j.as_deref().map(JobCounts::of))) />

            <div class="dashboard-columns">
                <UpcomingPlans
                    plans=Signal::derive(move || plans.with(|p| upcoming_plans(p, DASHBOARD_LIST_LIMIT)))
                    elevators=elevators
                />
                <RecentJobs jobs=Signal::derive(move || {
                    jobs.with(|j| j.as_deref().map(|j| recent_jobs(j, DASHBOARD_LIST_LIMIT)).unwrap_or_default())
                }) />
            </div>
        </PageFrame>
    }
}
