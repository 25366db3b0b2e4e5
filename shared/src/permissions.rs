//! Permission catalog and role derivation
//!
//! Permission sets are the source of truth; the coarse role is a derived
//! display label, recomputed from the granted permissions on every load so a
//! stored role field can never drift from what the user can actually do.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An unordered set of unique permission keys.
///
/// Backed by a `BTreeSet` so iteration (and thus every serialized payload)
/// is deterministic regardless of insertion order.
pub type PermissionSet = BTreeSet<String>;

/// Coarse access level, derived from a permission set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Full access to every panel area.
    Admin,
    /// Back-office user with a configurable permission subset.
    PanelUser,
    /// Storefront account; only the profile area.
    Customer,
}

impl Role {
    /// Canonical wire spelling of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::PanelUser => "PanelUser",
            Role::Customer => "Customer",
        }
    }

    /// Parse a role string from the backend, case-insensitively.
    ///
    /// The backend is inconsistent about role spelling ("Admin", "admin",
    /// "Super Admin"), so normalization happens here, once, at the boundary
    /// where role strings enter the system. Returns `None` for anything
    /// outside the closed vocabulary.
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_lowercase().as_str() {
            "admin" | "super admin" => Some(Role::Admin),
            "paneluser" | "panel user" => Some(Role::PanelUser),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }

    /// Parse a role string, falling back to `Customer` for unknown values.
    pub fn parse_or_customer(value: &str) -> Role {
        Role::parse(value).unwrap_or(Role::Customer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admin permission keys (full panel access).
pub const ADMIN_PERMISSIONS: &[&str] = &[
    "dashboard",
    "products",
    "orders",
    "customers",
    "deliveryStaff",
    "membership",
    "profile",
    "analytics",
    "auditLogs",
    "reports",
    "userManagement",
    "wallet",
    "billing",
    "notifications",
    "contentManagement",
    "homepage",
    "settings",
    "helpSupport",
    "integrations",
    "apiAccess",
    "security",
];

/// Panel user permission keys (day-to-day catalog and order work).
pub const PANEL_USER_PERMISSIONS: &[&str] = &[
    "dashboard",
    "products",
    "orders",
    "customers",
    "profile",
];

/// Customer permission keys (storefront account, very restricted panel).
pub const CUSTOMER_PERMISSIONS: &[&str] = &["profile"];

fn to_set(keys: &[&str]) -> PermissionSet {
    keys.iter().map(|k| k.to_string()).collect()
}

/// Get the permission set granted by a role.
///
/// Total over the three defined roles. Invariant: the `Admin` set is a
/// superset of every other role's set (relied on by [`derive_role`]).
pub fn role_permissions(role: Role) -> PermissionSet {
    match role {
        Role::Admin => to_set(ADMIN_PERMISSIONS),
        Role::PanelUser => to_set(PANEL_USER_PERMISSIONS),
        Role::Customer => to_set(CUSTOMER_PERMISSIONS),
    }
}

/// Get the permission set for a role *name*.
///
/// Callers normalize case before lookup; an unrecognized name yields the
/// empty set rather than an error.
pub fn role_permissions_by_name(name: &str) -> PermissionSet {
    match Role::parse(name) {
        Some(role) => role_permissions(role),
        None => PermissionSet::new(),
    }
}

fn contains_all(permissions: &PermissionSet, required: &[&str]) -> bool {
    required.iter().all(|key| permissions.contains(*key))
}

/// Derive the best-matching role for a permission set.
///
/// Ordered, first match wins: empty set is `Customer`; a superset of the
/// Admin catalog is `Admin`; a superset of the PanelUser catalog is
/// `PanelUser`; everything else is `Customer`. Extra keys outside the
/// canonical sets never disqualify a match, only missing required keys do.
pub fn derive_role(permissions: &PermissionSet) -> Role {
    if permissions.is_empty() {
        return Role::Customer;
    }
    if contains_all(permissions, ADMIN_PERMISSIONS) {
        return Role::Admin;
    }
    if contains_all(permissions, PANEL_USER_PERMISSIONS) {
        return Role::PanelUser;
    }
    Role::Customer
}

/// Derive a role from a raw permission list as the backend sends it.
pub fn derive_role_from_list(permissions: &[String]) -> Role {
    let set: PermissionSet = permissions.iter().cloned().collect();
    derive_role(&set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_set_is_superset_of_other_roles() {
        let admin = role_permissions(Role::Admin);
        for role in [Role::PanelUser, Role::Customer] {
            for key in role_permissions(role) {
                assert!(admin.contains(&key), "Admin set missing {key}");
            }
        }
    }

    #[test]
    fn canonical_sets_round_trip_through_derivation() {
        assert_eq!(derive_role(&role_permissions(Role::Admin)), Role::Admin);
        assert_eq!(
            derive_role(&role_permissions(Role::PanelUser)),
            Role::PanelUser
        );
        assert_eq!(derive_role(&PermissionSet::new()), Role::Customer);
    }

    #[test]
    fn extra_permissions_do_not_disqualify() {
        let mut perms = role_permissions(Role::PanelUser);
        perms.insert("categoryManagement".to_string());
        perms.insert("someFutureKey".to_string());
        assert_eq!(derive_role(&perms), Role::PanelUser);
    }

    #[test]
    fn missing_one_admin_key_falls_back_to_panel_user() {
        let mut perms = role_permissions(Role::Admin);
        perms.remove("wallet");
        assert_eq!(derive_role(&perms), Role::PanelUser);
    }

    #[test]
    fn derivation_is_monotonic() {
        // Adding keys one by one never strictly decreases the derived role
        // once PanelUser's requirements are met.
        let mut perms = role_permissions(Role::PanelUser);
        let mut best = derive_role(&perms);
        for key in ADMIN_PERMISSIONS {
            perms.insert(key.to_string());
            let derived = derive_role(&perms);
            assert!(derived <= best, "role decreased after adding {key}");
            best = derived;
        }
        assert_eq!(best, Role::Admin);
    }

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("admin"), Some(Role::Admin));
        assert_eq!(Role::parse("Super Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("panel user"), Some(Role::PanelUser));
        assert_eq!(Role::parse("PanelUser"), Some(Role::PanelUser));
        assert_eq!(Role::parse("CUSTOMER"), Some(Role::Customer));
        assert_eq!(Role::parse("driver"), None);
        assert_eq!(Role::parse_or_customer("driver"), Role::Customer);
    }

    #[test]
    fn unknown_role_name_yields_empty_set() {
        assert!(role_permissions_by_name("warehouse").is_empty());
        assert_eq!(
            role_permissions_by_name("super admin"),
            role_permissions(Role::Admin)
        );
    }
}
