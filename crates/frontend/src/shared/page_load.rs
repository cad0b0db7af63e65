//! Page data loading with stale-response protection.
//!
//! Each call to [`PageLoad::run`] takes a new ticket from a `LoadGuard`.
//! Results are committed only if that ticket is still the latest one and the
//! page is still mounted.

use std::future::Future;

use contracts::shared::http::ApiError;
use contracts::shared::load_guard::{LoadGuard, LoadTicket};
use leptos::prelude::*;

use crate::shared::api_utils::ApiClient;
use crate::system::auth::AuthContext;

#[derive(Clone, Copy)]
pub struct PageLoad {
    guard: StoredValue<LoadGuard>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl PageLoad {
    /// Create the loader for the current component; closed when it unmounts.
    pub fn new() -> Self {
        let guard = StoredValue::new(LoadGuard::new());
        on_cleanup(move || {
            let _ = guard.try_update_value(|g| g.close());
        });
        Self {
            guard,
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn begin(&self) -> Option<LoadTicket> {
        self.guard.try_update_value(|g| g.begin())
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        self.guard
            .try_with_value(|g| g.is_current(ticket))
            .unwrap_or(false)
    }

    /// Fetch with a fresh client, then hand the result to `commit` unless a
    /// newer load started or the page went away meanwhile.
    pub fn run<T, Fut>(
        self,
        auth: AuthContext,
        fetch: impl FnOnce(ApiClient) -> Fut + 'static,
        commit: impl FnOnce(T) + 'static,
    ) where
        T: 'static,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Some(ticket) = self.begin() else {
            return;
        };
        self.loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch(ApiClient::new(auth)).await;
            if !self.is_current(ticket) {
                log::debug!("dropping stale page response");
                return;
            }
            self.loading.set(false);
            match result {
                Ok(value) => {
                    self.error.set(None);
                    commit(value);
                }
                Err(e) => self.error.set(Some(e.to_string())),
            }
        });
    }
}

impl Default for PageLoad {
    fn default() -> Self {
        Self::new()
    }
}

/// Run a save/delete request. Failures raise a blocking alert and leave the
/// form as it is; `on_success` runs only when the request succeeded.
pub fn run_action<T, Fut>(
    auth: AuthContext,
    action: impl FnOnce(ApiClient) -> Fut + 'static,
    on_success: impl FnOnce(T) + 'static,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        match action(ApiClient::new(auth)).await {
            Ok(value) => on_success(value),
            Err(e) => crate::shared::dialogs::alert(&e.to_string()),
        }
    });
}
