//! Top bar: sidebar toggle, title, notifications, user and logout.

pub mod notifications;

use crate::layout::global_context::use_tabs;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;
use leptos::prelude::*;
use notifications::NotificationBell;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_tabs();
    let auth = use_auth();

    let logout = move |_| {
        ctx.close_all();
        auth.logout();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"LiftCare"</span>
            </div>

            <div class="top-header__actions">
                <NotificationBell />

                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || auth.user()
                            .map(|u| format!("{} ({})", u.name, u.role.label()))
                            .unwrap_or_else(|| "Guest".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
