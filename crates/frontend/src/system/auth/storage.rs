use contracts::system::session::SessionStore;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Browser `localStorage` behind the session store interface.
///
/// Storage errors (private mode, quota) are ignored: the in-memory session
/// stays valid for this page load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl SessionStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
