//! Response envelope normalization
//!
//! The Dynasty backend wraps payloads inconsistently across endpoints and
//! versions: bare arrays, `{ "users": [...] }`, `{ "data": [...] }`,
//! `{ "data": { "products": [...], "total": n } }`, `{ "success": true,
//! "plans": [...] }`, and so on. Everything is normalized here, at the
//! network boundary, into one canonical shape; callers never inspect raw
//! envelopes.
//!
//! Item envelopes rely on the domain models requiring their identifying
//! fields: a wrapped object like `{ "user": { ... } }` fails to decode as a
//! bare model (no `id` at the top level) and falls through to the wrapped
//! variant.

use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Error produced while normalizing a response envelope.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    /// The backend reported failure inside a 2xx envelope
    /// (`"success": false`), with its message when it sent one.
    #[error("{}", message.as_deref().unwrap_or("Request failed"))]
    Backend { message: Option<String> },

    /// A success envelope that carries no payload where one was required.
    #[error("Response envelope is missing its payload")]
    MissingData,
}

/// Canonical list payload: the items plus a total count.
#[derive(Debug, Clone)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    /// Backend-reported total when present, otherwise the item count.
    pub total: u64,
}

impl<T> ListPayload<T> {
    fn new(items: Vec<T>, total: Option<u64>) -> Self {
        let total = total.unwrap_or(items.len() as u64);
        Self { items, total }
    }
}

/// Every list envelope shape the backend is known to produce.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    /// Bare array.
    Bare(Vec<T>),
    /// Any keyed/wrapped form, including `success`-flagged ones.
    Wrapped(WrappedList<T>),
}

/// Keyed list wrapper. The payload key varies by endpoint (`users`,
/// `products`, `plans`, `data`, ...); all spellings funnel into one field.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct WrappedList<T> {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(
        default,
        alias = "users",
        alias = "products",
        alias = "plans",
        alias = "memberships",
        alias = "categories",
        alias = "items"
    )]
    data: Option<ListBody<T>>,
    #[serde(default)]
    total: Option<u64>,
}

/// The wrapped payload is either the list itself or one more level of
/// wrapping (`{ "data": { "products": [...], "total": n } }`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody<T> {
    List(Vec<T>),
    Nested(Box<WrappedList<T>>),
}

impl<T> ListEnvelope<T> {
    /// Normalize into the canonical list payload.
    ///
    /// A `success: false` envelope is a backend error. A success envelope
    /// with no recognized list key normalizes to an empty list, matching how
    /// the dashboard has always treated unrecognized shapes.
    pub fn into_payload(self) -> Result<ListPayload<T>, ResponseError> {
        match self {
            ListEnvelope::Bare(items) => Ok(ListPayload::new(items, None)),
            ListEnvelope::Wrapped(wrapped) => wrapped.into_payload(),
        }
    }
}

impl<T> WrappedList<T> {
    fn into_payload(self) -> Result<ListPayload<T>, ResponseError> {
        if self.success == Some(false) {
            return Err(ResponseError::Backend {
                message: self.message,
            });
        }
        match self.data {
            Some(ListBody::List(items)) => Ok(ListPayload::new(items, self.total)),
            Some(ListBody::Nested(inner)) => inner.into_payload(),
            None => {
                tracing::warn!("list envelope carried no recognized payload key");
                Ok(ListPayload::new(Vec::new(), None))
            }
        }
    }
}

/// Every single-item envelope shape the backend is known to produce.
///
/// `Bare` must be tried first: domain models require their identifying
/// fields, so wrapper objects fail the bare variant and fall through.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ItemEnvelope<T> {
    Bare(T),
    Wrapped(WrappedItem<T>),
}

/// Keyed item wrapper (`user`, `product`, `plan`, `category`, `data`).
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct WrappedItem<T> {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(
        default,
        alias = "user",
        alias = "product",
        alias = "plan",
        alias = "category"
    )]
    data: Option<T>,
}

impl<T> ItemEnvelope<T> {
    /// Normalize into the canonical item.
    pub fn into_payload(self) -> Result<T, ResponseError> {
        match self {
            ItemEnvelope::Bare(item) => Ok(item),
            ItemEnvelope::Wrapped(wrapped) => {
                if wrapped.success == Some(false) {
                    return Err(ResponseError::Backend {
                        message: wrapped.message,
                    });
                }
                wrapped.data.ok_or(ResponseError::MissingData)
            }
        }
    }
}

/// Decode a raw JSON body into the canonical list payload.
pub fn decode_list<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<ListPayload<T>, ResponseError> {
    let envelope: ListEnvelope<T> =
        serde_json::from_value(body).map_err(|_| ResponseError::MissingData)?;
    envelope.into_payload()
}

/// Decode a raw JSON body into the canonical item.
pub fn decode_item<T: DeserializeOwned>(body: serde_json::Value) -> Result<T, ResponseError> {
    let envelope: ItemEnvelope<T> =
        serde_json::from_value(body).map_err(|_| ResponseError::MissingData)?;
    envelope.into_payload()
}

/// Check a write response whose payload the caller does not need.
///
/// Only an explicit `"success": false` envelope counts as failure; any other
/// 2xx body is accepted.
pub fn check_status(body: &serde_json::Value) -> Result<(), ResponseError> {
    if body.get("success").and_then(|v| v.as_bool()) == Some(false) {
        return Err(ResponseError::Backend {
            message: body
                .get("message")
                .and_then(|v| v.as_str())
                .map(str::to_string),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: String,
        name: String,
    }

    fn things(value: serde_json::Value) -> ListPayload<Thing> {
        decode_list(value).expect("decode")
    }

    #[test]
    fn bare_array() {
        let payload = things(json!([{"id": "1", "name": "a"}]));
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.total, 1);
    }

    #[test]
    fn keyed_variants() {
        for key in ["users", "products", "plans", "data", "categories"] {
            let payload = things(json!({key: [{"id": "1", "name": "a"}]}));
            assert_eq!(payload.items.len(), 1, "key {key}");
        }
    }

    #[test]
    fn keyed_with_total() {
        let payload = things(json!({"products": [{"id": "1", "name": "a"}], "total": 42}));
        assert_eq!(payload.total, 42);
    }

    #[test]
    fn nested_under_data() {
        let payload = things(json!({
            "data": {"products": [{"id": "1", "name": "a"}], "total": 7}
        }));
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.total, 7);
    }

    #[test]
    fn success_flagged_list() {
        let payload = things(json!({"success": true, "plans": [{"id": "1", "name": "a"}]}));
        assert_eq!(payload.items.len(), 1);
    }

    #[test]
    fn success_false_is_backend_error() {
        let err = decode_list::<Thing>(json!({"success": false, "message": "nope"}))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "nope");

        let err = decode_list::<Thing>(json!({"success": false})).expect_err("should fail");
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn unrecognized_success_envelope_is_empty_list() {
        let payload = things(json!({"success": true}));
        assert!(payload.items.is_empty());
        assert_eq!(payload.total, 0);
    }

    #[test]
    fn bare_item() {
        let item: Thing = decode_item(json!({"id": "1", "name": "a"})).unwrap();
        assert_eq!(item.name, "a");
    }

    #[test]
    fn wrapped_item_variants() {
        for key in ["user", "product", "plan", "category", "data"] {
            let item: Thing = decode_item(json!({key: {"id": "1", "name": "a"}})).unwrap();
            assert_eq!(item.id, "1", "key {key}");
        }
    }

    #[test]
    fn check_status_only_fails_on_explicit_failure() {
        assert!(check_status(&json!({"success": true})).is_ok());
        assert!(check_status(&json!({})).is_ok());
        assert!(check_status(&json!({"deleted": 1})).is_ok());
        let err = check_status(&json!({"success": false, "message": "denied"}))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn wrapped_item_with_success_flag() {
        let item: Thing =
            decode_item(json!({"success": true, "product": {"id": "1", "name": "a"}})).unwrap();
        assert_eq!(item.id, "1");

        let err = decode_item::<Thing>(json!({"success": false, "message": "gone"}))
            .expect_err("should fail");
        assert_eq!(err.to_string(), "gone");
    }
}
