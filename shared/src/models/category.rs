//! Category Model

use serde::{Deserialize, Serialize};

/// Category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    /// Label shown in the dashboard; older records omit it and fall back to
    /// `name`.
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Category {
    /// Label to display, preferring `display_name`.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCreate {
    #[validate(length(min = 1, message = "Category name is required"))]
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
}

impl CategoryCreate {
    /// Build a payload, defaulting the display name to the name.
    pub fn new(name: impl Into<String>, display_name: Option<String>) -> Self {
        let name = name.into();
        let display_name = display_name
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| name.clone());
        Self {
            name,
            display_name,
            description: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn decodes_mongo_style_id_and_missing_display_name() {
        let cat: Category = serde_json::from_value(serde_json::json!({
            "_id": "65f0",
            "name": "ice-cream"
        }))
        .unwrap();
        assert_eq!(cat.id, "65f0");
        assert_eq!(cat.label(), "ice-cream");
        assert!(cat.is_active);
    }

    #[test]
    fn display_name_defaults_to_name() {
        let payload = CategoryCreate::new("Ice Cream", None);
        assert_eq!(payload.display_name, "Ice Cream");
        let payload = CategoryCreate::new("Ice Cream", Some("  ".to_string()));
        assert_eq!(payload.display_name, "Ice Cream");
        let payload = CategoryCreate::new("ice-cream", Some("Ice Cream".to_string()));
        assert_eq!(payload.display_name, "Ice Cream");
    }

    #[test]
    fn empty_name_fails_validation() {
        let payload = CategoryCreate::new("", None);
        assert!(payload.validate().is_err());
    }
}
