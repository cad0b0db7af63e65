//! Technician and customer portals: one subject, everything filtered to it.

pub mod customer;
pub mod technician;

use leptos::prelude::*;

use crate::shared::components::ui::{options_of, Select};

/// Admin-only picker for the portal subject.
#[component]
pub fn SubjectPicker<T: Send + Sync + 'static>(
    #[prop(into)] label: String,
    items: RwSignal<Vec<T>>,
    selected: RwSignal<Option<i64>>,
    to_option: fn(&T) -> (i64, String),
    on_change: Callback<()>,
) -> impl IntoView {
    let options = Signal::derive(move || items.with(|list| options_of(list, to_option)));
    view! {
        <div class="portal-subject">
            <Select
                label=label
                id="portal-subject"
                value=Signal::derive(move || selected.get().map(|id| id.to_string()).unwrap_or_default())
                options=options
                on_change=Callback::new(move |v: String| {
                    selected.set(v.parse().ok());
                    on_change.run(());
                })
            />
        </div>
    }
}
