//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::response::{ListPayload, check_status, decode_item, decode_list};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making requests to the Dynasty backend.
///
/// Every success body passes through the envelope normalizer before a typed
/// result is handed to callers; raw envelopes never leave this module.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Clear the authentication token
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth_header() {
            Some(auth) => request.header(reqwest::header::AUTHORIZATION, auth),
            None => request,
        }
    }

    // ========== Raw verbs ==========

    /// GET returning the raw (normalized later) JSON body.
    pub async fn get_json(&self, path: &str, query: &[(String, String)]) -> ClientResult<Value> {
        tracing::debug!(path, ?query, "GET");
        let mut request = self.client.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// POST with JSON body.
    pub async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let request = self.client.post(self.url(path)).json(body);
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// PUT with JSON body.
    pub async fn put_json<B: Serialize>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let request = self.client.put(self.url(path)).json(body);
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// PATCH without body.
    pub async fn patch_json(&self, path: &str) -> ClientResult<Value> {
        let request = self.client.patch(self.url(path));
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// DELETE without body.
    pub async fn delete_json(&self, path: &str) -> ClientResult<Value> {
        let request = self.client.delete(self.url(path));
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// POST with a multipart form body.
    pub async fn post_multipart(&self, path: &str, form: multipart::Form) -> ClientResult<Value> {
        let request = self.client.post(self.url(path)).multipart(form);
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    /// PUT with a multipart form body.
    pub async fn put_multipart(&self, path: &str, form: multipart::Form) -> ClientResult<Value> {
        let request = self.client.put(self.url(path)).multipart(form);
        let response = self.authorize(request).send().await?;
        Self::handle_response(response).await
    }

    // ========== Normalized helpers ==========

    /// GET a list endpoint through the envelope normalizer.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> ClientResult<ListPayload<T>> {
        let body = self.get_json(path, query).await?;
        Ok(decode_list(body)?)
    }

    /// GET a single-item endpoint through the envelope normalizer.
    pub async fn get_item<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let body = self.get_json(path, &[]).await?;
        Ok(decode_item(body)?)
    }

    /// POST returning a normalized item.
    pub async fn post_item<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self.post_json(path, body).await?;
        Ok(decode_item(value)?)
    }

    /// PUT returning a normalized item.
    pub async fn put_item<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self.put_json(path, body).await?;
        Ok(decode_item(value)?)
    }

    /// Handle the HTTP response
    async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = Self::extract_message(&text);
            tracing::debug!(%status, %message, "request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        let body: Value = response.json().await?;
        check_status(&body)?;
        Ok(body)
    }

    /// Pull the backend-provided message out of an error body when there is
    /// one, falling back to the raw text.
    fn extract_message(text: &str) -> String {
        if let Ok(value) = serde_json::from_str::<Value>(text)
            && let Some(message) = value.get("message").and_then(|m| m.as_str())
        {
            return message.to_string();
        }
        if text.trim().is_empty() {
            "Request failed".to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_backend_message_from_error_body() {
        assert_eq!(
            HttpClient::extract_message(r#"{"message": "Product not found"}"#),
            "Product not found"
        );
        assert_eq!(HttpClient::extract_message("plain text"), "plain text");
        assert_eq!(HttpClient::extract_message(""), "Request failed");
    }

    #[test]
    fn url_joins_without_double_slash() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:5000/"));
        assert_eq!(
            client.url("/api/products"),
            "http://localhost:5000/api/products"
        );
        assert_eq!(
            client.url("api/products"),
            "http://localhost:5000/api/products"
        );
    }
}
