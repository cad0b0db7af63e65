use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{use_tabs, Tab as TabData};
use crate::layout::tabs::TabPage;
use leptos::prelude::*;

#[component]
pub fn Tabs() -> impl IntoView {
    let tabs_store = use_tabs();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| view! { <TabPage tab=tab tabs_store=tabs_store /> }
                />
            </div>
        </div>
    }
}
