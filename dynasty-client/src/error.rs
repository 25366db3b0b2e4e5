//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Payload rejected before any network call
    #[error("Validation error: {0}")]
    Validation(String),

    /// The backend reported failure inside a success envelope
    #[error("{0}")]
    Backend(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<shared::response::ResponseError> for ClientError {
    fn from(err: shared::response::ResponseError) -> Self {
        match err {
            shared::response::ResponseError::Backend { .. } => {
                ClientError::Backend(err.to_string())
            }
            shared::response::ResponseError::MissingData => {
                ClientError::InvalidResponse(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
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
        ClientError::Validation(message)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
