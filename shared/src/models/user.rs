//! Admin User Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::permissions::{Role, derive_role_from_list};

/// Panel user as served by the backend.
///
/// The role is never read from the record; it is re-derived from
/// `permissions` on every load. Activity comes as either an `isActive`
/// boolean or a `status` string depending on the endpoint version.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl AdminUser {
    /// Normalized activity flag: `isActive == true` or `status == "active"`.
    pub fn is_active(&self) -> bool {
        self.is_active == Some(true)
            || self
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case("active"))
    }

    /// Role derived from the granted permissions (never stored).
    pub fn role(&self) -> Role {
        derive_role_from_list(&self.permissions)
    }

    /// Full name, preferring the single `name` field.
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }
}

/// Create user payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub permissions: Vec<String>,
    pub role: String,
    pub is_active: bool,
}

/// Update user payload, assembled by the user-permission editor.
///
/// `role` is always re-derived from `permissions` at save time; the two can
/// never disagree in a persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub permissions: Vec<String>,
    pub role: String,
    pub is_active: bool,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn activity_is_normalized_from_either_field() {
        let from_bool: AdminUser =
            serde_json::from_value(json!({"_id": "u1", "isActive": true})).unwrap();
        assert!(from_bool.is_active());

        let from_status: AdminUser =
            serde_json::from_value(json!({"id": "u2", "status": "Active"})).unwrap();
        assert!(from_status.is_active());

        let inactive: AdminUser =
            serde_json::from_value(json!({"id": "u3", "status": "inactive"})).unwrap();
        assert!(!inactive.is_active());
    }

    #[test]
    fn role_is_rederived_from_permissions() {
        let user: AdminUser = serde_json::from_value(json!({
            "_id": "u1",
            "permissions": ["dashboard", "products", "orders", "customers", "profile"]
        }))
        .unwrap();
        assert_eq!(user.role(), Role::PanelUser);

        let nobody: AdminUser = serde_json::from_value(json!({"_id": "u2"})).unwrap();
        assert_eq!(nobody.role(), Role::Customer);
    }

    #[test]
    fn display_name_falls_back_to_split_fields() {
        let user: AdminUser = serde_json::from_value(json!({
            "_id": "u1",
            "firstName": "Asha",
            "lastName": "Rao"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Asha Rao");
    }
}
