//! User API service

use validator::Validate;

use shared::models::{AdminUser, UserCreate, UserUpdate};
use shared::response::ListPayload;

use crate::{ClientResult, HttpClient};

/// Panel user administration.
#[derive(Debug, Clone)]
pub struct UserService {
    http: HttpClient,
}

impl UserService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all users
    pub async fn list(&self) -> ClientResult<ListPayload<AdminUser>> {
        self.http.get_list("/api/users", &[]).await
    }

    /// Create a user, returning the created record
    pub async fn create(&self, payload: &UserCreate) -> ClientResult<AdminUser> {
        payload.validate()?;
        self.http.post_item("/api/users", payload).await
    }

    /// Update a user, returning the updated record
    pub async fn update(&self, id: &str, payload: &UserUpdate) -> ClientResult<AdminUser> {
        self.http.put_item(&format!("/api/users/{id}"), payload).await
    }

    /// Delete a user
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete_json(&format!("/api/users/{id}")).await?;
        Ok(())
    }

    /// Toggle a user's active status
    pub async fn toggle_status(&self, id: &str) -> ClientResult<()> {
        self.http
            .patch_json(&format!("/api/users/{id}/toggle-status"))
            .await?;
        Ok(())
    }
}
