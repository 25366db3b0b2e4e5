//! Category API service

use validator::Validate;

use shared::models::{Category, CategoryCreate};
use shared::response::ListPayload;

use crate::{ClientResult, HttpClient};

/// Category listing and creation.
///
/// Update/delete are not exposed; the backend does not support them yet.
#[derive(Debug, Clone)]
pub struct CategoryService {
    http: HttpClient,
}

impl CategoryService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// List all categories
    pub async fn list(&self) -> ClientResult<ListPayload<Category>> {
        self.http.get_list("/api/categories", &[]).await
    }

    /// Create a new category
    pub async fn create(&self, payload: &CategoryCreate) -> ClientResult<()> {
        payload.validate()?;
        self.http.post_json("/api/categories", payload).await?;
        Ok(())
    }
}
