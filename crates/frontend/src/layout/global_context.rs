use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::layout::tabs::tab_label_for_key;

/// Opened tabs and layout toggles for the signed-in shell.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the active tab from `?active=` and mirror it back on change.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        match params.get("active").cloned() {
            Some(active_key) if !active_key.is_empty() => {
                self.open_tab(&active_key, tab_label_for_key(&active_key));
            }
            _ => self.open_tab("dashboard", tab_label_for_key("dashboard")),
        }

        let this = *self;
        Effect::new(move |_| {
            let query_string = match this.active.get() {
                Some(active_key) => {
                    serde_qs::to_string(&HashMap::from([("active".to_string(), active_key)]))
                        .unwrap_or_default()
                }
                None => String::new(),
            };
            let new_url = if query_string.is_empty() {
                String::new()
            } else {
                format!("?{}", query_string)
            };

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let target = if new_url.is_empty() {
                            w.location().pathname().unwrap_or_default()
                        } else {
                            new_url
                        };
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&target),
                        );
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}'", key);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    /// Drop every tab, used when the session ends.
    pub fn close_all(&self) {
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Hook to access the tab store.
pub fn use_tabs() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not provided")
}
