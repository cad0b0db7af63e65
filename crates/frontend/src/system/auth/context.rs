//! Session context shared by every page.
//!
//! `AuthContext` is provided once at the application root. The session inside
//! changes only through `login`, `logout` and `expire`, each of which writes
//! through to local storage.

use contracts::domain::a004_technician::aggregate::{is_approved_technician, Technician};
use contracts::system::auth::{Role, UserInfo};
use contracts::system::session::Session;
use leptos::prelude::*;

use super::storage::LocalStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
    /// Whether the signed-in technician has a Technician record.
    technician_approved: RwSignal<bool>,
}

impl AuthContext {
    /// Restore the session from local storage and provide it to the tree.
    pub fn provide() -> Self {
        let ctx = Self {
            session: RwSignal::new(Session::restore(&LocalStorage)),
            technician_approved: RwSignal::new(false),
        };
        provide_context(ctx);
        ctx
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_authenticated())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.user().cloned())
    }

    pub fn user_untracked(&self) -> Option<UserInfo> {
        self.session.with_untracked(|s| s.user().cloned())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.user().map(|u| u.role))
    }

    pub fn role_untracked(&self) -> Option<Role> {
        self.session.with_untracked(|s| s.user().map(|u| u.role))
    }

    pub fn token_untracked(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_string))
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.token().map(str::to_string))
    }

    pub fn technician_approved(&self) -> bool {
        self.technician_approved.get()
    }

    pub fn login(&self, token: String, user: UserInfo) {
        log::info!("signed in as {} ({})", user.email, user.role.as_str());
        self.technician_approved.set(false);
        self.session.update(|s| s.login(&mut LocalStorage, token, user));
    }

    pub fn logout(&self) {
        log::info!("signed out");
        self.technician_approved.set(false);
        self.session.update(|s| s.logout(&mut LocalStorage));
    }

    /// A request sent with `stale_token` got HTTP 401.
    pub fn expire(&self, stale_token: Option<&str>) -> bool {
        let cleared = self
            .session
            .try_update(|s| s.expire(&mut LocalStorage, stale_token))
            .unwrap_or(false);
        if cleared {
            log::warn!("session expired, signing out");
            self.technician_approved.set(false);
        }
        cleared
    }

    /// Recompute the approval flag from a freshly fetched technician list.
    pub fn sync_approval(&self, technicians: &[Technician]) {
        let approved = self
            .session
            .with_untracked(|s| s.user().is_some_and(|u| is_approved_technician(technicians, u.id)));
        if self.technician_approved.get_untracked() != approved {
            self.technician_approved.set(approved);
        }
    }
}

/// Hook to access the session context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not provided")
}
