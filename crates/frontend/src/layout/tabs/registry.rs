//! Tab content registry: the single mapping from tab key to view.

use crate::dashboards::DashboardView;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_building::ui::list::BuildingList;
use crate::domain::a003_elevator::ui::list::ElevatorList;
use crate::domain::a004_technician::ui::TechnicianPage;
use crate::domain::a006_contract::ui::list::ContractList;
use crate::domain::a007_quotation::ui::list::QuotationList;
use crate::domain::a008_invoice::ui::list::InvoiceList;
use crate::domain::a009_part::ui::PartsPage;
use crate::domain::a010_maintenance_template::ui::list::MaintenanceTemplateList;
use crate::domain::a011_maintenance_plan::ui::list::MaintenancePlanList;
use crate::domain::a012_maintenance_job::ui::list::MaintenanceJobList;
use crate::domain::a014_pricing_settings::ui::details::PricingSettingsPage;
use crate::portals::customer::CustomerPortal;
use crate::portals::technician::TechnicianPortal;
use crate::reports::ReportsPage;
use crate::system::pages::account::AccountPage;
use crate::system::pages::change_password::ChangePasswordPage;
use leptos::prelude::*;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "dashboard" => view! { <DashboardView /> }.into_any(),

        "a001_customer" => view! { <CustomerList /> }.into_any(),
        "a002_building" => view! { <BuildingList /> }.into_any(),
        "a003_elevator" => view! { <ElevatorList /> }.into_any(),
        "a004_technician" => view! { <TechnicianPage /> }.into_any(),

        "a012_maintenance_job" => view! { <MaintenanceJobList /> }.into_any(),
        "a011_maintenance_plan" => view! { <MaintenancePlanList /> }.into_any(),
        "a010_maintenance_template" => view! { <MaintenanceTemplateList /> }.into_any(),
        "a009_part" => view! { <PartsPage /> }.into_any(),

        "a006_contract" => view! { <ContractList /> }.into_any(),
        "a007_quotation" => view! { <QuotationList /> }.into_any(),
        "a008_invoice" => view! { <InvoiceList /> }.into_any(),
        "a014_pricing_settings" => view! { <PricingSettingsPage /> }.into_any(),
        "reports" => view! { <ReportsPage /> }.into_any(),

        "technician_portal" => view! { <TechnicianPortal /> }.into_any(),
        "customer_portal" => view! { <CustomerPortal /> }.into_any(),

        "account" => view! { <AccountPage /> }.into_any(),
        "change_password" => view! { <ChangePasswordPage /> }.into_any(),

        _ => {
            let key = key.to_string();
            view! { <div class="placeholder">{format!("Unknown page: {}", key)}</div> }.into_any()
        }
    }
}
