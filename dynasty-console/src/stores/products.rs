//! Product list store

use dynasty_client::{ClientResult, ImageFile, ProductFilters, ProductService};
use shared::models::{Product, ProductCreate, ProductUpdate};

/// Fetched product list plus its backend total.
pub struct ProductStore {
    service: ProductService,
    products: Vec<Product>,
    total: u64,
}

impl ProductStore {
    pub fn new(service: ProductService) -> Self {
        Self {
            service,
            products: Vec::new(),
            total: 0,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Fetch the list with the given filters.
    pub async fn fetch(&mut self, filters: &ProductFilters) -> ClientResult<()> {
        let payload = self.service.list(filters).await?;
        self.products = payload.items;
        self.total = payload.total;
        Ok(())
    }

    /// Create, then refetch.
    pub async fn create(
        &mut self,
        payload: &ProductCreate,
        image: Option<ImageFile>,
    ) -> ClientResult<()> {
        self.service.create(payload, image).await?;
        self.fetch(&ProductFilters::default()).await
    }

    /// Update, then refetch.
    pub async fn update(
        &mut self,
        id: &str,
        payload: &ProductUpdate,
        image: Option<ImageFile>,
    ) -> ClientResult<()> {
        self.service.update(id, payload, image).await?;
        self.fetch(&ProductFilters::default()).await
    }

    /// Delete, then refetch.
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        self.service.delete(id).await?;
        self.fetch(&ProductFilters::default()).await
    }

    /// Toggle availability, then refetch.
    pub async fn toggle_status(&mut self, id: &str) -> ClientResult<()> {
        self.service.toggle_status(id).await?;
        self.fetch(&ProductFilters::default()).await
    }
}
