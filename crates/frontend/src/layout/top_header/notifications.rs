//! Notification bell with background polling.
//!
//! The list is fetched on mount and then every poll interval until the
//! header unmounts. Mark-read and delete update the list first; if the API
//! call fails the change is rolled back and the failure is only logged.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use contracts::notifications::{NotificationFeed, PendingChange};
use contracts::shared::http::ApiError;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::a015_notification::api;
use crate::shared::api_utils::{client_config, ApiClient};
use crate::shared::date_utils::{format_opt_datetime, now_iso};
use crate::shared::icons::icon;
use crate::system::auth::{use_auth, AuthContext};

/// Send the API call for an optimistic change; roll back on failure.
fn settle<Fut>(auth: AuthContext, feed: RwSignal<NotificationFeed>, change: PendingChange, call: impl FnOnce(ApiClient, i64) -> Fut + 'static)
where
    Fut: std::future::Future<Output = Result<(), ApiError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let id = change.id();
        if let Err(e) = call(ApiClient::new(auth), id).await {
            log::warn!("notification {} update failed, rolling back: {}", id, e);
            let _ = feed.try_update(|f| f.rollback(change));
        }
    });
}

#[component]
pub fn NotificationBell() -> impl IntoView {
    let auth = use_auth();
    let feed = RwSignal::new(NotificationFeed::default());
    let open = RwSignal::new(false);

    let running = Arc::new(AtomicBool::new(true));
    let stop = running.clone();
    on_cleanup(move || stop.store(false, Ordering::Relaxed));

    let poll_ms = client_config().notification_poll_ms;
    wasm_bindgen_futures::spawn_local(async move {
        while running.load(Ordering::Relaxed) {
            let client = ApiClient::new(auth);
            match api::fetch_notifications(&client).await {
                Ok(items) => {
                    if running.load(Ordering::Relaxed) {
                        let _ = feed.try_update(|f| f.replace(items));
                    }
                }
                Err(e) => log::warn!("notification poll failed: {}", e),
            }
            TimeoutFuture::new(poll_ms).await;
        }
    });

    let mark_read = move |id: i64| {
        let now = now_iso();
        if let Some(change) = feed.try_update(|f| f.mark_read(id, &now)).flatten() {
            settle(auth, feed, change, |client, id| async move {
                api::mark_read(&client, id).await
            });
        }
    };

    let remove = move |id: i64| {
        if let Some(change) = feed.try_update(|f| f.remove(id)).flatten() {
            settle(auth, feed, change, |client, id| async move {
                api::delete_notification(&client, id).await
            });
        }
    };

    let unread = move || feed.with(|f| f.unread_count());

    view! {
        <div class="notifications">
            <button
                class="top-header__icon-btn"
                title="Notifications"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {icon("bell")}
                <Show when=move || { unread() > 0 }>
                    <span class="notifications__count">{unread}</span>
                </Show>
            </button>

            <Show when=move || open.get()>
                <div class="notifications__dropdown">
                    <div class="notifications__header">
                        <span>"Notifications"</span>
                        <button class="button button--icon" on:click=move |_| open.set(false)>
                            {icon("x")}
                        </button>
                    </div>
                    {move || {
                        let items = feed.with(|f| f.items().to_vec());
                        if items.is_empty() {
                            return view! { <div class="notifications__empty">"No notifications"</div> }.into_any();
                        }
                        items.into_iter().map(|n| {
                            let id = n.id;
                            let is_read = n.is_read;
                            view! {
                                <div class="notifications__item" class:notifications__item--unread=!is_read>
                                    <div class="notifications__body">
                                        {n.title.clone().map(|t| view! { <strong>{t}</strong> })}
                                        <div>{n.text()}</div>
                                        <small>{format_opt_datetime(n.timestamp())}</small>
                                    </div>
                                    <div class="notifications__actions">
                                        {(!is_read).then(|| view! {
                                            <button class="button button--icon" title="Mark as read" on:click=move |_| mark_read(id)>
                                                {icon("check")}
                                            </button>
                                        })}
                                        <button class="button button--icon" title="Delete" on:click=move |_| remove(id)>
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view().into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
