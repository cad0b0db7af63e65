//! TabPage: wrapper around a tab's content.

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::system::auth::guard::RequireAccess;
use leptos::logging::log;
use leptos::prelude::*;

/// Renders the tab through the registry behind the role check, hidden while inactive.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext) -> impl IntoView {
    let tab_key = tab.key.clone();
    let key_for_active = tab_key.clone();
    let is_active = move || tabs_store.active.get().as_ref() == Some(&key_for_active);

    log!("TabPage created for '{}'", tab_key);
    let key_for_cleanup = tab_key.clone();
    on_cleanup(move || log!("TabPage destroyed for '{}'", key_for_cleanup));

    let key_for_content = tab_key.clone();

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab_key.clone()
        >
            <RequireAccess key=tab_key.clone()>
                {
                    let key = key_for_content.clone();
                    move || render_tab_content(&key)
                }
            </RequireAccess>
        </div>
    }
}
