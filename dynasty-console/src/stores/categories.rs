//! Category store

use dynasty_client::{CategoryService, ClientResult};
use shared::models::{Category, CategoryCreate};

/// Fetched category list.
pub struct CategoryStore {
    service: CategoryService,
    categories: Vec<Category>,
}

impl CategoryStore {
    pub fn new(service: CategoryService) -> Self {
        Self {
            service,
            categories: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Fetch all categories.
    pub async fn fetch(&mut self) -> ClientResult<()> {
        let payload = self.service.list().await?;
        self.categories = payload.items;
        Ok(())
    }

    /// Create a category, then refetch.
    pub async fn create(&mut self, payload: &CategoryCreate) -> ClientResult<()> {
        self.service.create(payload).await?;
        self.fetch().await
    }
}
