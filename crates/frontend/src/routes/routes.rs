use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_tabs;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::system::auth::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use leptos::prelude::*;

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = use_tabs();

    // Runs once per sign-in: restores `?active=` or opens the dashboard.
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Login or registration screen shown while signed out.
#[component]
fn SignedOut() -> impl IntoView {
    let registering = RwSignal::new(false);
    let to_register = Callback::new(move |_| registering.set(true));
    let to_login = Callback::new(move |_| registering.set(false));

    view! {
        <Show
            when=move || registering.get()
            fallback=move || view! { <LoginPage on_register=to_register /> }
        >
            <RegisterPage on_login=to_login />
        </Show>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();
    let tabs_store = use_tabs();

    // A cleared session (logout or 401) leaves no tabs behind for the next user.
    Effect::new(move |_| {
        if !auth.is_authenticated() {
            tabs_store.close_all();
        }
    });

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=|| view! { <SignedOut /> }
        >
            <MainLayout />
        </Show>
    }
}
