use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: every page and the HTTP client read it.
    AuthContext::provide();
    provide_context(AppGlobalContext::new());

    view! {
        <AppRoutes />
    }
}
