use contracts::dashboards::{active_contract_count, elevator_state_counts, DashboardKind};
use contracts::domain::a002_building::aggregate::Building;
use contracts::domain::a003_elevator::aggregate::Elevator;
use contracts::domain::a006_contract::aggregate::Contract;
use leptos::prelude::*;

use super::widgets::ElevatorStateBreakdown;
use crate::shared::components::stat_card::{StatCard, StatTone};
use crate::shared::date_utils::today;
use crate::shared::icons::icon;
use crate::shared::page_frame::{ErrorBanner, LoadingIndicator, PageFrame, PageHeader};
use crate::shared::page_load::PageLoad;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::use_auth;

#[derive(Clone, Default)]
struct CustomerData {
    buildings: usize,
    elevators: Vec<Elevator>,
    active_contracts: usize,
}

#[component]
pub fn CustomerDashboard() -> impl IntoView {
    let auth = use_auth();
    let load = PageLoad::new();
    let data = RwSignal::new(None::<CustomerData>);

    let fetch = move || {
        load.run(
            auth,
            |client| async move {
                futures::try_join!(
                    client.list::<Building>(),
                    client.list::<Elevator>(),
                    client.list::<Contract>(),
                )
            },
            move |(buildings, elevators, contracts)| {
                data.set(Some(CustomerData {
                    buildings: buildings.len(),
                    elevators,
                    active_contracts: active_contract_count(&contracts, today()),
                }));
            },
        );
    };

    fetch();

    view! {
        <PageFrame page_id="dashboard--customer" category=PAGE_CAT_DASHBOARD>
            <PageHeader title=DashboardKind::Customer.title()>
                <button class="button button--secondary" on:click=move |_| fetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <ErrorBanner error=load.error />
            <LoadingIndicator loading=load.loading />

            <div class="stat-grid">
                <StatCard
                    label="Buildings"
                    icon_name="building"
                    value=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.buildings)))
                />
                <StatCard
                    label="Elevators"
                    icon_name="elevator"
                    value=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.elevators.len())))
                />
                <StatCard
                    label="Active contracts"
                    icon_name="file-text"
                    value=Signal::derive(move || data.with(|d| d.as_ref().map(|d| d.active_contracts)))
                    tone=StatTone::Good
                />
            </div>

            <ElevatorStateBreakdown counts=Signal::derive(move || {
                data.with(|d| d.as_ref().map(|d| elevator_state_counts(&d.elevators)).unwrap_or_default())
            }) />
        </PageFrame>
    }
}
