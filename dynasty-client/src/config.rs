//! Client configuration

/// Client configuration for connecting to the Dynasty backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:5000")
    pub base_url: String,

    /// Base URL for backend-relative image paths. Defaults to `base_url`.
    pub asset_base_url: Option<String>,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            asset_base_url: None,
            token: None,
            timeout: 30,
        }
    }

    /// Read configuration from the environment (after dotenv).
    ///
    /// `DYNASTY_API_URL` is the API base; `DYNASTY_ASSET_URL` overrides the
    /// asset base; `DYNASTY_API_TOKEN` seeds an existing session token.
    pub fn from_env() -> Self {
        let base_url = std::env::var("DYNASTY_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());
        let mut config = Self::new(base_url);
        if let Ok(asset) = std::env::var("DYNASTY_ASSET_URL") {
            config.asset_base_url = Some(asset);
        }
        if let Ok(token) = std::env::var("DYNASTY_API_TOKEN") {
            config.token = Some(token);
        }
        if let Some(timeout) = std::env::var("DYNASTY_API_TIMEOUT")
            .ok()
            .and_then(|t| t.parse().ok())
        {
            config.timeout = timeout;
        }
        config
    }

    /// Set the asset base URL
    pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
        self.asset_base_url = Some(url.into());
        self
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// The effective asset base URL.
    pub fn asset_base(&self) -> &str {
        self.asset_base_url.as_deref().unwrap_or(&self.base_url)
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
