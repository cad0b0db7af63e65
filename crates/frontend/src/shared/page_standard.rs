//! Page category constants for tab pages.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_building--list"`)
//!   - `data-page-category` with one of the constants below

/// CRUD table with an inline form.
pub const PAGE_CAT_LIST: &str = "list";

/// Single-record or singleton edit form.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Role dashboards, portals and reports.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Account and password pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_entity_and_category() {
        assert!(is_valid_page_id("a002_building--list"));
        assert!(!is_valid_page_id("a002_building"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn known_categories() {
        assert!(is_known_category(PAGE_CAT_DASHBOARD));
        assert!(!is_known_category("legacy"));
    }
}
