//! Membership Plan Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::pricing;

/// Membership tier entity (a purchasable plan).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPlan {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub original_price: i64,
    pub discount_price: i64,
    #[serde(default)]
    pub savings: i64,
    #[serde(default = "default_duration")]
    pub duration_days: i64,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_best_value: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_duration() -> i64 {
    30
}

fn default_true() -> bool {
    true
}

impl MembershipPlan {
    /// Discount percent implied by the stored price pair (rounded), used to
    /// prefill the tier editor.
    pub fn discount_percent(&self) -> i64 {
        pricing::discount_percent_of(self.original_price, self.discount_price)
    }
}

/// Create/update membership payload.
///
/// Carries the fully derived triple (`originalPrice`, `discountPrice`,
/// `savings`); the derivation happens in the tier form before this is built.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MembershipPayload {
    #[validate(length(min = 1, message = "Tier name is required"))]
    pub name: String,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration_days: i64,
    #[validate(range(min = 0, message = "Price cannot be negative"))]
    pub original_price: i64,
    pub discount_price: i64,
    pub savings: i64,
    pub benefits: Vec<String>,
    pub description: String,
    pub is_best_value: bool,
    pub is_active: bool,
}

/// Split a one-benefit-per-line text block into the benefits list,
/// trimming and dropping blank lines.
pub fn parse_benefits(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
