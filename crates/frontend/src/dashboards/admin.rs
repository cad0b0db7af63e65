use contracts::dashboards::{recent_jobs, upcoming_plans, JobCounts, DASHBOARD_LIST_LIMIT};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a004_technician::aggregate::Technician;
use contracts::domain::a011_maintenance_plan::aggregate::MaintenancePlan;
use contracts::domain::a012_maintenance_job::aggregate::MaintenanceJob;
use leptos::prelude::*;

use super::widgets::{JobStatusCards, RecentJobs, UpcomingPlans};
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;
use contracts::dashboards::DashboardKind;

#[derive(Clone, Default)]
struct AdminData {
    customers: usize,
    buildings: usize,
    elevators: Vec<Elevator>,
    technicians: usize,
    jobs: Vec<MaintenanceJob>,
    plans: Vec<MaintenancePlan>,
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let data = RwSignal::new(None::<AdminData>);

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Customer>(),
                    client.list::<Building>(),
                    client.list::<Elevator>(),
                    client.list::<Technician>(),
                    client.list::<MaintenanceJob>(),
                    client.list::<MaintenancePlan>(),
                )
            },
            move |(customers, buildings, elevators, technicians, jobs, plans)| {
                data.set(Some(AdminData {
                    customers: customers.len(),
                    buildings: buildings.len(),
                    elevators,
                    technicians: technicians.len(),
                    jobs,
                    plans,
                }));
            },
        );
    };

    fetch();

    let count = move |f: fn(&AdminData) -> usize| Signal::derive(move || data.with(|d| d.as_ref().map(f)));

    view! {
        <PageFrame page_id="dashboard--admin" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=DashboardKind::Admin.title()>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="stat-grid">
                <StatCard label="Customers" icon_name="users" value=count(|d| d.customers) />
                <StatCard label="Buildings" icon_name="building" value=count(|d| d.buildings) />
                <StatCard label="Elevators" icon_name="elevator" value=count(|d| d.elevators.len()) />
                <StatCard label="Technicians" icon_name="wrench" value=count(|d| d.technicians) />
                <StatCard label="Maintenance jobs" icon_name="clipboard" value=count(|d| d.jobs.len()) />
            </div>

            <JobStatusCards counts=Signal::derive(move || data.with(|d| d.as_ref().map(|d| JobCounts::of(&d.jobs)))) />

            <div class="dashboard-columns">
                <UpcomingPlans
                    plans=Signal::derive(move || data.with(|d| d.as_ref().map(|d| upcoming_plans(&d.plans, DASHBOARD_LIST_LIMIT)).unwrap_or_default()))
                    elevators=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.elevators.clone()).unwrap_or_default()))
                />
                <RecentJobs jobs=Signal::derive(move || data.with(|d| d.as_ref().map(|d| recent_jobs(&d.jobs, DASHBOARD_LIST_LIMIT)).unwrap_or_default())) />
            </div>
        </PageFrame>
    }
}
