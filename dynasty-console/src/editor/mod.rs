//! Form editors
//!
//! Editable state behind the console's forms. Each editor validates before
//! building a payload; a rejected form never reaches the network.

pub mod membership;
pub mod product;
pub mod user;

pub use membership::TierForm;
pub use product::ProductForm;
pub use user::{EDITOR_PERMISSION_KEYS, UserPermissionEditor};

use thiserror::Error;

/// A form rejected before submission.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Price(#[from] shared::pricing::PriceError),
}

impl From<validator::ValidationErrors> for FormError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} is invalid"))
                })
            })
            .collect::<Vec<_>>()
            .join("; ");
        FormError::Invalid(message)
    }
}
