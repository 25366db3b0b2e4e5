//! Auth API service

use shared::client::{LoginRequest, LoginResponse, UserInfo};

use crate::{ClientResult, HttpClient};

/// Login and current-user lookups.
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.http.post_item("/api/auth/login", &request).await
    }

    /// Get current user information
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.http.get_item("/api/auth/me").await
    }
}
