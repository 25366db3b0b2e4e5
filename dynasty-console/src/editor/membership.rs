//! Membership tier form
//!
//! Edits a plan as (original price, discount percent); the discounted price
//! and savings are derived live and sent as a consistent triple. The percent
//! boundary (>= 100) is rejected here, before any payload exists.

use validator::Validate;

use shared::models::{MembershipPayload, MembershipPlan};
use shared::pricing;

use super::FormError;

/// Editable tier state.
#[derive(Debug, Clone)]
pub struct TierForm {
    pub name: String,
    pub original_price: i64,
    pub discount_percent: f64,
    pub duration_days: i64,
    pub benefits_text: String,
    pub description: String,
    pub is_best_value: bool,
    pub is_active: bool,
}

impl TierForm {
    /// Blank form for a new tier.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            original_price: 0,
            discount_percent: 0.0,
            duration_days: 30,
            benefits_text: String::new(),
            description: "Premium membership plan".to_string(),
            is_best_value: false,
            is_active: true,
        }
    }

    /// Prefill from an existing plan; the percent is recovered from the
    /// stored price pair.
    pub fn from_plan(plan: &MembershipPlan) -> Self {
        Self {
            name: plan.name.clone(),
            original_price: plan.original_price,
            discount_percent: plan.discount_percent() as f64,
            duration_days: plan.duration_days,
            benefits_text: plan.benefits.join("\n"),
            description: if plan.description.is_empty() {
                "Premium membership plan".to_string()
            } else {
                plan.description.clone()
            },
            is_best_value: plan.is_best_value,
            is_active: plan.is_active,
        }
    }

    /// Set pricing from a target (already discounted) price and the percent
    /// that produced it, inferring the original price.
    ///
    /// Fails explicitly for a percent at or above 100 instead of producing a
    /// non-finite original.
    pub fn set_target_price(&mut self, price: i64, percent: f64) -> Result<(), FormError> {
        self.original_price = pricing::infer_original_price(price, percent)?;
        self.discount_percent = percent;
        Ok(())
    }

    /// Live derived discounted price.
    pub fn discount_price(&self) -> i64 {
        pricing::discount_price(self.original_price, self.discount_percent)
    }

    /// Live derived savings.
    pub fn savings(&self) -> i64 {
        pricing::savings(self.original_price, self.discount_percent)
    }

    /// Build the create/update payload, rejecting boundary percentages and
    /// missing required fields before anything is sent.
    pub fn build_payload(&self) -> Result<MembershipPayload, FormError> {
        if !(0.0..100.0).contains(&self.discount_percent) {
            return Err(FormError::Price(
                shared::pricing::PriceError::PercentOutOfRange(self.discount_percent),
            ));
        }
        let payload = MembershipPayload {
            name: self.name.trim().to_string(),
            duration_days: self.duration_days,
            original_price: self.original_price,
            discount_price: self.discount_price(),
            savings: self.savings(),
            benefits: shared::models::membership::parse_benefits(&self.benefits_text),
            description: self.description.clone(),
            is_best_value: self.is_best_value,
            is_active: self.is_active,
        };
        payload.validate()?;
        Ok(payload)
    }
}

impl Default for TierForm {
    fn default() -> Self {
        Self::new()
    }
}
