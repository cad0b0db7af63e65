//! Tab titles.

use contracts::system::navigation::menu_label;

/// Title for a tab key. Menu entries use their menu label; anything else shows the key.
pub fn tab_label_for_key(key: &str) -> &str {
    menu_label(key).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_keys_use_menu_labels() {
        assert_eq!(tab_label_for_key("a002_building"), "Buildings");
        assert_eq!(tab_label_for_key("dashboard"), "Dashboard");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        assert_eq!(tab_label_for_key("something_else"), "something_else");
    }
}
