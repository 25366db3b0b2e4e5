//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Measurement unit for a product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantUnit {
    Ml,
    Kg,
    #[default]
    Gm,
}

impl std::fmt::Display for VariantUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantUnit::Ml => f.write_str("ml"),
            VariantUnit::Kg => f.write_str("kg"),
            VariantUnit::Gm => f.write_str("gm"),
        }
    }
}

impl VariantUnit {
    /// Parse a unit string ("ml", "kg", "gm"), case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ml" => Some(VariantUnit::Ml),
            "kg" => Some(VariantUnit::Kg),
            "gm" => Some(VariantUnit::Gm),
            _ => None,
        }
    }
}

/// A priced/stocked sub-SKU of a product (a specific size/unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    /// Size quantity, e.g. 500 for "500gm".
    pub value: f64,
    pub unit: VariantUnit,
    pub price: i64,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
}

impl Variant {
    /// Whether every required field of the variant is filled in.
    pub fn is_complete(&self) -> bool {
        !self.label.trim().is_empty() && self.value > 0.0 && self.price > 0 && self.stock >= 0
    }
}

/// A category reference as the backend serves it: sometimes a bare ID
/// string, sometimes the populated category object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Embedded {
        #[serde(alias = "_id")]
        id: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default, rename = "displayName")]
        display_name: Option<String>,
    },
}

impl CategoryRef {
    /// The category ID, whichever shape the backend sent.
    pub fn id(&self) -> &str {
        match self {
            CategoryRef::Id(id) => id,
            CategoryRef::Embedded { id, .. } => id,
        }
    }

    /// A display label when the reference is populated.
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(_) => None,
            CategoryRef::Embedded {
                name, display_name, ..
            } => display_name.as_deref().or(name.as_deref()),
        }
    }
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(alias = "_id")]
    pub id: String,
    /// Historical endpoints call this `dishName`.
    #[serde(alias = "dishName")]
    pub name: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub original_price: i64,
    #[serde(default)]
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    #[serde(default)]
    pub description: String,
    /// Absolute URL, or a backend-relative path before absolutization.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub available_for_order: bool,
    #[serde(default, rename = "isVIP")]
    pub is_vip: bool,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Create product payload, assembled by the add-product form.
///
/// Root `price`/`stock`/`cost` may be left unset; the first variant in
/// submission order supplies the defaults when they are.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    pub available_for_order: bool,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
    #[validate(length(min = 1, message = "At least one variant is required"))]
    pub variants: Vec<Variant>,
}

impl ProductCreate {
    /// Root price/stock/cost, falling back to the first variant.
    pub fn effective_price(&self) -> i64 {
        self.price
            .or_else(|| self.variants.first().map(|v| v.price))
            .unwrap_or(0)
    }

    pub fn effective_stock(&self) -> i64 {
        self.stock
            .or_else(|| self.variants.first().map(|v| v.stock))
            .unwrap_or(0)
    }

    pub fn effective_cost(&self) -> Option<i64> {
        self.cost.or_else(|| self.variants.first().and_then(|v| v.cost))
    }
}

/// Update product payload, sent as multipart form fields.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    pub price: i64,
    pub original_price: i64,
    pub stock: i64,
    #[serde(default)]
    pub description: String,
    pub available_for_order: bool,
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_legacy_dish_name_and_object_category() {
        let product: Product = serde_json::from_value(json!({
            "_id": "p1",
            "dishName": "Butter Chicken",
            "category": {"_id": "c1", "displayName": "Mains"},
            "price": 450,
            "stock": 12,
            "isVIP": true
        }))
        .unwrap();
        assert_eq!(product.id, "p1");
        assert_eq!(product.name, "Butter Chicken");
        assert_eq!(product.category.as_ref().unwrap().id(), "c1");
        assert_eq!(product.category.as_ref().unwrap().label(), Some("Mains"));
        assert!(product.is_vip);
        assert!(product.available_for_order);
    }

    #[test]
    fn decodes_bare_string_category() {
        let product: Product = serde_json::from_value(json!({
            "id": "p2",
            "name": "Mango Lassi",
            "category": "c9"
        }))
        .unwrap();
        assert_eq!(product.category.unwrap().id(), "c9");
    }

    #[test]
    fn first_variant_supplies_root_defaults() {
        let payload = ProductCreate {
            name: "Basmati Rice".to_string(),
            category: "c1".to_string(),
            description: String::new(),
            price: None,
            original_price: None,
            stock: None,
            cost: None,
            available_for_order: true,
            is_vip: false,
            variants: vec![
                Variant {
                    id: None,
                    label: "Small".to_string(),
                    value: 500.0,
                    unit: VariantUnit::Gm,
                    price: 120,
                    stock: 40,
                    cost: Some(80),
                },
                Variant {
                    id: None,
                    label: "Large".to_string(),
                    value: 1.0,
                    unit: VariantUnit::Kg,
                    price: 220,
                    stock: 25,
                    cost: Some(150),
                },
            ],
        };
        assert_eq!(payload.effective_price(), 120);
        assert_eq!(payload.effective_stock(), 40);
        assert_eq!(payload.effective_cost(), Some(80));
    }

    #[test]
    fn explicit_roots_win_over_variant_defaults() {
        let payload = ProductCreate {
            name: "Basmati Rice".to_string(),
            category: "c1".to_string(),
            description: String::new(),
            price: Some(999),
            original_price: None,
            stock: Some(5),
            cost: None,
            available_for_order: true,
            is_vip: false,
            variants: vec![Variant {
                id: None,
                label: "Small".to_string(),
                value: 500.0,
                unit: VariantUnit::Gm,
                price: 120,
                stock: 40,
                cost: None,
            }],
        };
        assert_eq!(payload.effective_price(), 999);
        assert_eq!(payload.effective_stock(), 5);
        assert_eq!(payload.effective_cost(), None);
    }

    #[test]
    fn variant_completeness() {
        let mut v = Variant {
            id: None,
            label: "Standard".to_string(),
            value: 500.0,
            unit: VariantUnit::Gm,
            price: 100,
            stock: 0,
            cost: None,
        };
        assert!(v.is_complete());
        v.label = " ".to_string();
        assert!(!v.is_complete());
    }
}
