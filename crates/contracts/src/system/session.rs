//! Signed-in user and token.
//!
//! `login`, `logout` and `expire` are the only ways the session changes. Each
//! one writes through to a [`SessionStore`] so the browser keeps the session
//! across reloads.

use crate::system::auth::UserInfo;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Durable key/value storage for the session (browser local storage in the client).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<UserInfo>,
}

impl Session {
    /// Restore from storage. A token without a readable user is not a session.
    pub fn restore(store: &impl SessionStore) -> Self {
        let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let user = store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserInfo>(&raw).ok());
        match (token, user) {
            (Some(token), Some(user)) => Self {
                token: Some(token),
                user: Some(user),
            },
            _ => Self::default(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn login(&mut self, store: &mut impl SessionStore, token: String, user: UserInfo) {
        store.set(TOKEN_KEY, &token);
        match serde_json::to_string(&user) {
            Ok(raw) => store.set(USER_KEY, &raw),
            Err(_) => store.remove(USER_KEY),
        }
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn logout(&mut self, store: &mut impl SessionStore) {
        store.remove(TOKEN_KEY);
        store.remove(USER_KEY);
        self.token = None;
        self.user = None;
    }

    /// Handle a 401 received for a request sent with `stale_token`.
    ///
    /// Clears the session only if that token is still the current one, so a
    /// burst of parallel 401s logs out once and a fresh login is never undone
    /// by a late response. Returns `true` when the session was cleared.
    pub fn expire(&mut self, store: &mut impl SessionStore, stale_token: Option<&str>) -> bool {
        match (self.token.as_deref(), stale_token) {
            (Some(current), Some(stale)) if current == stale => {
                self.logout(store);
                true
            }
            _ => false,
        }
    }
}

/// In-memory store used by tests and non-browser callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    entries: std::collections::BTreeMap<String, String>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::Role;

    fn user() -> UserInfo {
        UserInfo {
            id: 1,
            name: "Admin".into(),
            email: "admin@liftcare.io".into(),
            role: Role::Admin,
            customer_id: None,
        }
    }

    #[test]
    fn test_login_persists_and_restores() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login(&mut store, "t1".into(), user());
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
        let restored = Session::restore(&store);
        assert_eq!(restored, session);
        assert_eq!(restored.user().map(|u| u.role), Some(Role::Admin));
    }

    #[test]
    fn test_logout_clears_both_keys() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login(&mut store, "t1".into(), user());
        session.logout(&mut store);
        assert!(!session.is_authenticated());
        assert_eq!(store, MemoryStore::default());
    }

    #[test]
    fn test_parallel_unauthorized_clears_once() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login(&mut store, "t1".into(), user());
        assert!(session.expire(&mut store, Some("t1")));
        assert!(!session.expire(&mut store, Some("t1")));
        assert!(!session.expire(&mut store, Some("t1")));
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn test_late_unauthorized_keeps_new_login() {
        let mut store = MemoryStore::default();
        let mut session = Session::default();
        session.login(&mut store, "t1".into(), user());
        session.logout(&mut store);
        session.login(&mut store, "t2".into(), user());
        assert!(!session.expire(&mut store, Some("t1")));
        assert_eq!(session.token(), Some("t2"));
        assert!(!session.expire(&mut store, None));
    }

    #[test]
    fn test_corrupt_user_is_dropped() {
        let mut store = MemoryStore::default();
        store.set(TOKEN_KEY, "t1");
        store.set(USER_KEY, "{not json");
        let session = Session::restore(&store);
        assert!(!session.is_authenticated());
        assert!(session.user().is_none());
    }
}
