pub mod application;
pub mod details;
pub mod list;
pub mod requests;

use contracts::system::auth::Role;
use leptos::prelude::*;

use crate::system::auth::use_auth;
use application::TechnicianApplication;
use list::TechnicianList;
use requests::TechnicianRequestList;

/// Admins manage technicians and review applications; technicians see their
/// own application.
#[component]
pub fn TechnicianPage() -> impl IntoView {
    let auth = use_auth();

    move || match auth.role() {
        Some(Role::Admin) => view! {
            <TechnicianList />
            <TechnicianRequestList />
        }
        .into_any(),
        _ => view! { <TechnicianApplication /> }.into_any(),
    }
}
