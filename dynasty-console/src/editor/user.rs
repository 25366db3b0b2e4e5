//! User-permission editor
//!
//! Two entangled pieces of editable state: a selected role and one checkbox
//! per known permission key. The role dropdown overwrites the checkboxes
//! with the role's preset; individual toggles do NOT move the dropdown. At
//! save time the role is re-derived from the final checkbox state, so the
//! persisted role always matches the persisted permissions no matter what
//! the dropdown last showed.

use shared::models::{AdminUser, UserUpdate};
use shared::permissions::{
    PermissionSet, Role, derive_role, derive_role_from_list, role_permissions,
};

/// Permission keys exposed as checkboxes in the user editor.
///
/// A subset of the full backend vocabulary; keys outside this set exist in
/// the schema but are not editable here.
pub const EDITOR_PERMISSION_KEYS: &[&str] = &[
    "dashboard",
    "products",
    "orders",
    "customers",
    "userManagement",
    "wallet",
    "profile",
    "settings",
    "reports",
];

/// Editable user form state.
#[derive(Debug, Clone)]
pub struct UserPermissionEditor {
    user_id: String,
    known_keys: Vec<String>,
    checked: PermissionSet,
    role: Role,
    is_active: bool,
}

impl UserPermissionEditor {
    /// Open the editor for a user with the default checkbox vocabulary.
    pub fn open(user: &AdminUser) -> Self {
        Self::open_with_keys(user, EDITOR_PERMISSION_KEYS)
    }

    /// Open the editor with a custom checkbox vocabulary.
    ///
    /// Checkboxes reflect `user.permissions` intersected with the known
    /// keys; unknown keys in the raw list are silently dropped. The initial
    /// role is derived from the *unfiltered* list, so it can reflect
    /// permissions that are not editable here.
    pub fn open_with_keys(user: &AdminUser, keys: &[&str]) -> Self {
        let known_keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let checked: PermissionSet = user
            .permissions
            .iter()
            .filter(|p| known_keys.contains(*p))
            .cloned()
            .collect();
        Self {
            user_id: user.id.clone(),
            known_keys,
            checked,
            role: derive_role_from_list(&user.permissions),
            is_active: user.is_active(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn known_keys(&self) -> &[String] {
        &self.known_keys
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.checked.contains(key)
    }

    /// Select a role preset from the dropdown.
    ///
    /// Full overwrite: the checkboxes become the role's permission set
    /// intersected with the known keys. Manually-added custom permissions
    /// are discarded.
    pub fn select_role(&mut self, role: Role) {
        let preset = role_permissions(role);
        self.checked = self
            .known_keys
            .iter()
            .filter(|k| preset.contains(*k))
            .cloned()
            .collect();
        self.role = role;
    }

    /// Flip one permission checkbox.
    ///
    /// The role is NOT recomputed here; it stays whatever was last selected
    /// until the next dropdown change. Unknown keys are ignored.
    pub fn toggle(&mut self, key: &str) {
        if !self.known_keys.iter().any(|k| k == key) {
            return;
        }
        if !self.checked.remove(key) {
            self.checked.insert(key.to_string());
        }
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Build the save payload.
    ///
    /// `permissions` is the sorted list of checked keys; `role` is
    /// re-derived from that final list, overriding the dropdown. An empty
    /// permission set is accepted and derives to `Customer`.
    pub fn save(&self) -> UserUpdate {
        let role = derive_role(&self.checked);
        UserUpdate {
            permissions: self.checked.iter().cloned().collect(),
            role: role.as_str().to_string(),
            is_active: self.is_active,
            status: if self.is_active { "active" } else { "inactive" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(permissions: &[&str]) -> AdminUser {
        serde_json::from_value(serde_json::json!({
            "_id": "u1",
            "name": "Asha",
            "permissions": permissions,
            "isActive": true
        }))
        .unwrap()
    }

    #[test]
    fn open_intersects_known_keys_but_derives_from_raw_list() {
        // The raw list holds the full PanelUser set plus a key outside the
        // editor vocabulary.
        let u = user(&[
            "dashboard",
            "products",
            "orders",
            "customers",
            "profile",
            "categoryManagement",
        ]);
        let editor = UserPermissionEditor::open(&u);

        assert!(editor.is_checked("dashboard"));
        assert!(!editor.is_checked("categoryManagement"));
        // Role reflects the unfiltered list.
        assert_eq!(editor.role(), Role::PanelUser);
    }

    #[test]
    fn role_preset_overwrites_checkboxes() {
        let u = user(&["dashboard", "settings"]);
        let mut editor = UserPermissionEditor::open(&u);
        assert!(editor.is_checked("settings"));

        editor.select_role(Role::PanelUser);
        // Preset ∩ known keys, nothing else.
        for key in ["dashboard", "products", "orders", "customers", "profile"] {
            assert!(editor.is_checked(key), "missing {key}");
        }
        assert!(!editor.is_checked("settings"));
        assert_eq!(editor.role(), Role::PanelUser);
    }

    #[test]
    fn toggle_does_not_recompute_role() {
        let u = user(&["dashboard", "products", "orders", "customers", "profile"]);
        let mut editor = UserPermissionEditor::open(&u);
        assert_eq!(editor.role(), Role::PanelUser);

        editor.toggle("orders");
        // Checkbox flipped, dropdown untouched.
        assert!(!editor.is_checked("orders"));
        assert_eq!(editor.role(), Role::PanelUser);

        // Unknown keys are a no-op.
        editor.toggle("apiAccess");
        assert!(!editor.is_checked("apiAccess"));
    }

    #[test]
    fn save_rederives_role_from_final_checkboxes() {
        // The full reconciliation scenario: PanelUser opens, Admin preset is
        // applied, wallet is unchecked, and the saved role drops back to
        // what the final set actually grants.
        let u = user(&["dashboard", "products", "orders", "customers", "profile"]);
        let mut editor = UserPermissionEditor::open(&u);
        assert_eq!(editor.role(), Role::PanelUser);

        editor.select_role(Role::Admin);
        for key in EDITOR_PERMISSION_KEYS {
            assert!(editor.is_checked(key), "Admin preset missing {key}");
        }

        editor.toggle("wallet");
        // Dropdown still says Admin until save.
        assert_eq!(editor.role(), Role::Admin);

        let payload = editor.save();
        assert!(!payload.permissions.contains(&"wallet".to_string()));
        // Missing an Admin key, still a PanelUser superset.
        assert_eq!(payload.role, "PanelUser");
        // Sorted output regardless of toggle order.
        let mut sorted = payload.permissions.clone();
        sorted.sort();
        assert_eq!(payload.permissions, sorted);
    }

    #[test]
    fn empty_set_is_accepted_and_derives_to_customer() {
        let u = user(&[]);
        let mut editor = UserPermissionEditor::open(&u);
        assert_eq!(editor.role(), Role::Customer);

        editor.set_active(false);
        let payload = editor.save();
        assert!(payload.permissions.is_empty());
        assert_eq!(payload.role, "Customer");
        assert_eq!(payload.status, "inactive");
        assert!(!payload.is_active);
    }
}
