//! Static menu tree and the role filter applied to it.

use crate::system::auth::Role;

const ALL: &[Role] = &[Role::Admin, Role::Customer, Role::Technician];
const ADMIN: &[Role] = &[Role::Admin];
const ADMIN_TECH: &[Role] = &[Role::Admin, Role::Technician];
const ADMIN_CUSTOMER: &[Role] = &[Role::Admin, Role::Customer];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// Tab key opened by the item.
    pub key: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
    /// Technicians only see the item once their application is approved.
    pub requires_approval: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSection {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub items: Vec<MenuItem>,
}

const fn item(key: &'static str, label: &'static str, icon: &'static str, roles: &'static [Role]) -> MenuItem {
    MenuItem {
        key,
        label,
        icon,
        roles,
        requires_approval: false,
    }
}

const fn gated(key: &'static str, label: &'static str, icon: &'static str) -> MenuItem {
    MenuItem {
        key,
        label,
        icon,
        roles: ADMIN_TECH,
        requires_approval: true,
    }
}

pub fn menu_tree() -> Vec<MenuSection> {
    vec![
        MenuSection {
            id: "home",
            label: "Home",
            icon: "dashboard",
            items: vec![item("dashboard", "Dashboard", "dashboard", ALL)],
        },
        MenuSection {
            id: "master_data",
            label: "Master data",
            icon: "database",
            items: vec![
                item("a001_customer", "Customers", "users", ADMIN),
                item("a002_building", "Buildings", "building", ADMIN),
                item("a003_elevator", "Elevators", "elevator", ADMIN_CUSTOMER),
                item("a004_technician", "Technicians", "wrench", ADMIN_TECH),
            ],
        },
        MenuSection {
            id: "maintenance",
            label: "Maintenance",
            icon: "tool",
            items: vec![
                gated("a012_maintenance_job", "Maintenance jobs", "clipboard"),
                gated("a011_maintenance_plan", "Maintenance plans", "calendar"),
                gated("a010_maintenance_template", "Maintenance templates", "list"),
                gated("a009_part", "Parts & inventory", "package"),
            ],
        },
        MenuSection {
            id: "finance",
            label: "Contracts & finance",
            icon: "file-text",
            items: vec![
                item("a006_contract", "Contracts", "file-text", ADMIN),
                item("a007_quotation", "Quotations", "file", ADMIN),
                item("a008_invoice", "Invoices", "receipt", ADMIN),
                item("a014_pricing_settings", "Pricing", "dollar", ADMIN),
                item("reports", "Reports", "bar-chart", ADMIN),
            ],
        },
        MenuSection {
            id: "portals",
            label: "Portals",
            icon: "layout",
            items: vec![
                gated("technician_portal", "Technician portal", "wrench"),
                item("customer_portal", "Customer portal", "briefcase", ADMIN_CUSTOMER),
            ],
        },
        MenuSection {
            id: "settings",
            label: "Settings",
            icon: "settings",
            items: vec![
                item("account", "My account", "user", ALL),
                item("change_password", "Change password", "lock", ALL),
            ],
        },
    ]
}

impl MenuItem {
    pub fn is_visible(&self, role: Role, technician_approved: bool) -> bool {
        if !self.roles.contains(&role) {
            return false;
        }
        !(role == Role::Technician && self.requires_approval && !technician_approved)
    }
}

/// Sections and items `role` may see; empty sections are dropped.
pub fn visible_menu(role: Role, technician_approved: bool) -> Vec<MenuSection> {
    menu_tree()
        .into_iter()
        .filter_map(|mut section| {
            section
                .items
                .retain(|item| item.is_visible(role, technician_approved));
            (!section.items.is_empty()).then_some(section)
        })
        .collect()
}

/// Whether a tab key may be opened by `role`. Keys outside the menu (detail tabs) are allowed.
pub fn can_open(key: &str, role: Role, technician_approved: bool) -> bool {
    let base = key.split(':').next().unwrap_or(key);
    menu_tree()
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|item| item.key == base)
        .map_or(true, |item| item.is_visible(role, technician_approved))
}

pub fn menu_label(key: &str) -> Option<&'static str> {
    menu_tree()
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|item| item.key == key)
        .map(|item| item.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(role: Role, approved: bool) -> Vec<&'static str> {
        visible_menu(role, approved)
            .iter()
            .flat_map(|s| s.items.iter().map(|i| i.key))
            .collect()
    }

    const GATED: [&str; 5] = [
        "a012_maintenance_job",
        "a011_maintenance_plan",
        "a010_maintenance_template",
        "a009_part",
        "technician_portal",
    ];

    #[test]
    fn test_unapproved_technician_sees_no_maintenance() {
        let visible = keys(Role::Technician, false);
        for key in GATED {
            assert!(!visible.contains(&key), "{} should be hidden", key);
        }
        assert!(visible.contains(&"a004_technician"));
        assert!(visible.contains(&"dashboard"));
        assert!(!visible_menu(Role::Technician, false)
            .iter()
            .any(|s| s.id == "maintenance"));
    }

    #[test]
    fn test_approval_reveals_maintenance() {
        let visible = keys(Role::Technician, true);
        for key in GATED {
            assert!(visible.contains(&key), "{} should be visible", key);
        }
        assert!(!visible.contains(&"a006_contract"));
        assert!(!visible.contains(&"customer_portal"));
    }

    #[test]
    fn test_customer_menu() {
        let visible = keys(Role::Customer, false);
        assert_eq!(
            visible,
            vec![
                "dashboard",
                "a003_elevator",
                "customer_portal",
                "account",
                "change_password"
            ]
        );
        assert!(!visible_menu(Role::Customer, true)
            .iter()
            .any(|s| s.id == "finance"));
    }

    #[test]
    fn test_admin_sees_everything() {
        let total: usize = menu_tree().iter().map(|s| s.items.len()).sum();
        assert_eq!(keys(Role::Admin, false).len(), total);
    }

    #[test]
    fn test_can_open() {
        assert!(!can_open("a006_contract", Role::Customer, false));
        assert!(can_open("a006_contract", Role::Admin, false));
        assert!(!can_open("a012_maintenance_job", Role::Technician, false));
        assert!(can_open("a012_maintenance_job", Role::Technician, true));
        assert!(can_open("unknown_detail:5", Role::Customer, false));
        assert_eq!(menu_label("a009_part"), Some("Parts & inventory"));
    }
}
