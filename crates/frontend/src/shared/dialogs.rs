//! Blocking browser dialogs used for save failures and delete confirmation.

/// Blocking alert. Save and delete failures go through here so the draft stays open.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Blocking confirm. Returns `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn confirm_delete(element_name: &str) -> bool {
    confirm(&format!("Delete this {}?", element_name))
}
