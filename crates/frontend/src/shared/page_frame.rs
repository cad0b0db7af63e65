//! PageFrame: standard root wrapper for every page rendered inside a tab.
//!
//! Sets `id` (`"{entity}--{category}"`) and `data-page-category` on the root
//! element so pages can be located in the DOM.

use super::page_standard::*;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`, e.g. `"a003_elevator--list"`.
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let base_class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}

/// Page header with a title; children go to the actions area.
#[component]
pub fn PageHeader(#[prop(into)] title: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="page__header">
            <div class="page__header-left">
                <h1 class="page__title">{title}</h1>
            </div>
            <div class="page__header-right">
                {children.map(|children| children())}
            </div>
        </div>
    }
}

/// Page-level error banner for failed loads.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|e| view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{e}</span>
            </div>
        })}
    }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Loading..."</div>
        </Show>
    }
}
