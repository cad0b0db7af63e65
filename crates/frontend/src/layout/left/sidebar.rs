//! Sidebar with the role-filtered, collapsible menu.

use contracts::domain::a004_technician::aggregate::Technician;
use contracts::system::auth::Role;
use contracts::system::navigation::visible_menu;
use leptos::prelude::*;

use crate::layout::global_context::use_tabs;
use crate::shared::api_utils::ApiClient;
use crate::shared::icons::icon;
use crate::system::auth::use_auth;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_tabs();
    let auth = use_auth();

    // Technician approval drives the maintenance and portal entries.
    Effect::new(move |_| {
        if auth.role() != Some(Role::Technician) {
            return;
        }
        let client = ApiClient::new(auth);
        wasm_bindgen_futures::spawn_local(async move {
            match client.list::<Technician>().await {
                Ok(technicians) => auth.sync_approval(&technicians),
                Err(e) => log::warn!("technician approval check failed: {}", e),
            }
        });
    });

    let expanded_groups = RwSignal::new(vec![
        "home".to_string(),
        "master_data".to_string(),
        "maintenance".to_string(),
        "finance".to_string(),
        "portals".to_string(),
    ]);

    let sections = move || match auth.role() {
        Some(role) => visible_menu(role, auth.technician_approved()),
        None => vec![],
    };

    view! {
        <div class="app-sidebar__content">
            {move || sections().into_iter().map(|section| {
                let group_id = section.id.to_string();
                let gid_click = group_id.clone();
                let gid_chevron = group_id.clone();
                let gid_show = group_id.clone();
                let items = StoredValue::new(section.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = gid_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(section.icon)}
                                <span>{section.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid_chevron)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&gid_show)>
                            <div class="app-sidebar__children">
                                {items.get_value().into_iter().map(|item| {
                                    let key = item.key;
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, item.label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
