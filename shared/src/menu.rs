//! Navigation menu model and visibility filter
//!
//! The menu definition is an immutable value constructed once at startup and
//! shared by reference; nothing mutates it. Visibility is recomputed from the
//! session role and permission set whenever either changes, so the filter
//! must be pure and deterministic for identical inputs.

use serde::{Deserialize, Serialize};

use crate::permissions::{PermissionSet, Role};

/// Icon names for menu items, rendered by the console as glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuIcon {
    Dashboard,
    Orders,
    Products,
    Folder,
    Customers,
    Delivery,
    UserCog,
    Wallet,
    Crown,
    Reports,
    Layout,
    Bell,
    Settings,
    Profile,
    Help,
}

/// One navigation entry. An item with no `permission` is public: visible to
/// every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub icon: MenuIcon,
    pub label: String,
    /// Page identifier used by the console router.
    pub page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,
}

impl MenuItem {
    fn public(icon: MenuIcon, label: &str, page: &str) -> Self {
        Self {
            icon,
            label: label.to_string(),
            page: page.to_string(),
            permission: None,
        }
    }

    fn gated(icon: MenuIcon, label: &str, page: &str, permission: &str) -> Self {
        Self {
            icon,
            label: label.to_string(),
            page: page.to_string(),
            permission: Some(permission.to_string()),
        }
    }
}

/// A titled group of navigation items. A group with no visible items is
/// dropped entirely from the filtered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub title: String,
    pub items: Vec<MenuItem>,
}

/// Build the admin navigation structure.
///
/// Construct once and pass by reference; the definition itself carries no
/// visibility state.
pub fn admin_menu() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            title: "Main".to_string(),
            items: vec![
                // Dashboard is public (no permission key)
                MenuItem::public(MenuIcon::Dashboard, "Dashboard", "dashboard"),
            ],
        },
        MenuGroup {
            title: "Management".to_string(),
            items: vec![
                MenuItem::gated(MenuIcon::Orders, "Orders", "orders", "orders"),
                MenuItem::gated(MenuIcon::Products, "Products", "products", "products"),
                MenuItem::gated(
                    MenuIcon::Folder,
                    "Category Management",
                    "category-management",
                    "categoryManagement",
                ),
                MenuItem::gated(MenuIcon::Customers, "Customers", "customers", "customers"),
                MenuItem::gated(
                    MenuIcon::Delivery,
                    "Delivery Staff",
                    "delivery-staff",
                    "deliveryStaff",
                ),
                MenuItem::gated(
                    MenuIcon::UserCog,
                    "User Management",
                    "user-management",
                    "userManagement",
                ),
                MenuItem::gated(MenuIcon::Wallet, "Wallet", "wallet", "wallet"),
                MenuItem::gated(MenuIcon::Crown, "Membership", "membership", "membership"),
                MenuItem::gated(MenuIcon::Reports, "Reports", "reports", "reports"),
            ],
        },
        MenuGroup {
            title: "CMS".to_string(),
            items: vec![
                MenuItem::gated(MenuIcon::Layout, "Home Page", "home-page", "homepage"),
                MenuItem::gated(
                    MenuIcon::Bell,
                    "Push Notifications",
                    "notifications",
                    "notifications",
                ),
            ],
        },
        MenuGroup {
            title: "Settings".to_string(),
            items: vec![
                // Settings group is public (no permission keys)
                MenuItem::public(MenuIcon::Settings, "Settings", "updated-settings"),
                MenuItem::public(MenuIcon::Profile, "Profile", "profile"),
                MenuItem::public(MenuIcon::Help, "Help & Support", "help-support"),
            ],
        },
    ]
}

/// Filter the menu down to what the given role/permission set may see.
///
/// Policy per item, in order:
/// 1. `Admin` sees everything; permission checks are skipped entirely.
/// 2. An item with no permission key is public.
/// 3. Otherwise the item is visible iff the set contains its key.
///
/// Groups left with zero visible items are dropped; order is otherwise
/// preserved. Visibility is monotonic in the permission set: adding a
/// permission never hides an item.
pub fn filter_menu(
    groups: &[MenuGroup],
    role: Role,
    permissions: &PermissionSet,
) -> Vec<MenuGroup> {
    groups
        .iter()
        .filter_map(|group| {
            let items: Vec<MenuItem> = group
                .items
                .iter()
                .filter(|item| match (role, &item.permission) {
                    (Role::Admin, _) => true,
                    (_, None) => true,
                    (_, Some(key)) => permissions.contains(key),
                })
                .cloned()
                .collect();

            if items.is_empty() {
                None
            } else {
                Some(MenuGroup {
                    title: group.title.clone(),
                    items,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::role_permissions;

    fn perms(keys: &[&str]) -> PermissionSet {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn admin_sees_everything_even_with_empty_set() {
        let menu = admin_menu();
        let filtered = filter_menu(&menu, Role::Admin, &PermissionSet::new());
        assert_eq!(filtered, menu);
    }

    #[test]
    fn panel_user_filtering_keeps_public_items() {
        let menu = admin_menu();
        let filtered = filter_menu(&menu, Role::PanelUser, &perms(&["products"]));

        // Public dashboard stays.
        assert_eq!(filtered[0].title, "Main");
        assert_eq!(filtered[0].items[0].page, "dashboard");

        // Management keeps only the products item.
        let management = &filtered[1];
        assert_eq!(management.title, "Management");
        assert_eq!(management.items.len(), 1);
        assert_eq!(management.items[0].page, "products");
        assert!(!management.items.iter().any(|i| i.page == "orders"));

        // CMS has no visible items and is dropped entirely.
        assert!(!filtered.iter().any(|g| g.title == "CMS"));

        // Settings group is fully public.
        let settings = filtered.last().unwrap();
        assert_eq!(settings.title, "Settings");
        assert_eq!(settings.items.len(), 3);
    }

    #[test]
    fn customer_sees_only_public_groups() {
        let menu = admin_menu();
        let filtered = filter_menu(&menu, Role::Customer, &perms(&["profile"]));
        let titles: Vec<&str> = filtered.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, vec!["Main", "Settings"]);
    }

    #[test]
    fn visibility_is_monotonic_in_permissions() {
        let menu = admin_menu();
        let mut set = PermissionSet::new();
        let mut visible = count_items(&filter_menu(&menu, Role::PanelUser, &set));
        for key in role_permissions(Role::Admin) {
            set.insert(key);
            let now = count_items(&filter_menu(&menu, Role::PanelUser, &set));
            assert!(now >= visible, "adding a permission hid an item");
            visible = now;
        }
    }

    #[test]
    fn filtering_is_deterministic() {
        let menu = admin_menu();
        let set = perms(&["orders", "wallet", "homepage"]);
        let a = filter_menu(&menu, Role::PanelUser, &set);
        let b = filter_menu(&menu, Role::PanelUser, &set);
        assert_eq!(a, b);
    }

    fn count_items(groups: &[MenuGroup]) -> usize {
        groups.iter().map(|g| g.items.len()).sum()
    }
}
