//! Role dashboards. The session role picks one [`DashboardKind`] and each
//! kind has its own component.

pub mod admin;
pub mod customer;
pub mod technician;
mod widgets;

use contracts::dashboards::DashboardKind;
use leptos::prelude::*;

use crate::system::auth::use_auth;
use admin::AdminDashboard;
use customer::CustomerDashboard;
use technician::TechnicianDashboard;

#[component]
pub fn DashboardView() -> impl IntoView {
    let auth = use_auth();
    let kind = auth.role_untracked().map(DashboardKind::for_role);

    match kind {
        Some(DashboardKind::Admin) => view! { <AdminDashboard /> }.into_any(),
        Some(DashboardKind::Technician) => view! { <TechnicianDashboard /> }.into_any(),
        Some(DashboardKind::Customer) => view! { <CustomerDashboard /> }.into_any(),
        None => view! { <div class="placeholder">"Sign in to see your dashboard"</div> }.into_any(),
    }
}
