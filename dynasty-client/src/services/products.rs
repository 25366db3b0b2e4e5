//! Product API service
//!
//! Product writes go over multipart: the backend expects booleans as the
//! literal strings `"true"`/`"false"` and structured list fields (variants)
//! as JSON-encoded text parts. Field assembly is kept separate from the
//! `reqwest` form so payloads stay inspectable.

use reqwest::multipart;
use validator::Validate;

use shared::models::{Product, ProductCreate, ProductUpdate, Variant};
use shared::response::ListPayload;

use crate::{ClientError, ClientResult, HttpClient};

/// List filters. `all` and empty values are dropped before the request, the
/// backend treats an absent filter as "no filter".
#[derive(Debug, Clone, Default)]
pub struct ProductFilters {
    pub search: Option<String>,
    pub category: Option<String>,
    pub availability: Option<String>,
}

impl ProductFilters {
    /// Query pairs with `all`/empty values stripped.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        [
            ("search", &self.search),
            ("category", &self.category),
            ("availability", &self.availability),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
                .map(|v| (key.to_string(), v.to_string()))
        })
        .collect()
    }
}

/// An image file to attach to a product write.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    fn into_part(self) -> ClientResult<multipart::Part> {
        multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|e| ClientError::Validation(format!("Invalid image mime type: {e}")))
    }
}

/// Serialize a boolean the way the backend expects it in form fields.
fn bool_field(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

/// Text fields for a product create, in submission order.
///
/// Root price/stock/cost fall back to the first variant when unset.
pub fn create_form_fields(payload: &ProductCreate) -> ClientResult<Vec<(String, String)>> {
    let mut fields = vec![
        ("dishName".to_string(), payload.name.clone()),
        ("category".to_string(), payload.category.clone()),
        ("price".to_string(), payload.effective_price().to_string()),
        (
            "originalPrice".to_string(),
            payload
                .original_price
                .unwrap_or_else(|| payload.effective_price())
                .to_string(),
        ),
        ("stock".to_string(), payload.effective_stock().to_string()),
        ("description".to_string(), payload.description.clone()),
        (
            "availableForOrder".to_string(),
            bool_field(payload.available_for_order),
        ),
        ("isVIP".to_string(), bool_field(payload.is_vip)),
        (
            "variants".to_string(),
            serde_json::to_string(&payload.variants)?,
        ),
    ];
    if let Some(cost) = payload.effective_cost() {
        fields.push(("cost".to_string(), cost.to_string()));
    }
    Ok(fields)
}

/// Text fields for a product update, in submission order.
pub fn update_form_fields(payload: &ProductUpdate) -> Vec<(String, String)> {
    vec![
        ("dishName".to_string(), payload.name.clone()),
        ("category".to_string(), payload.category.clone()),
        ("price".to_string(), payload.price.to_string()),
        (
            "originalPrice".to_string(),
            payload.original_price.to_string(),
        ),
        ("stock".to_string(), payload.stock.to_string()),
        ("description".to_string(), payload.description.clone()),
        (
            "availableForOrder".to_string(),
            bool_field(payload.available_for_order),
        ),
        ("isVIP".to_string(), bool_field(payload.is_vip)),
    ]
}

fn build_form(
    fields: Vec<(String, String)>,
    image: Option<ImageFile>,
) -> ClientResult<multipart::Form> {
    let mut form = multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    if let Some(image) = image {
        form = form.part("image", image.into_part()?);
    }
    Ok(form)
}

/// Product CRUD and variant management.
#[derive(Debug, Clone)]
pub struct ProductService {
    http: HttpClient,
    asset_base: String,
}

impl ProductService {
    pub fn new(http: HttpClient, asset_base: impl Into<String>) -> Self {
        Self {
            http,
            asset_base: asset_base.into(),
        }
    }

    /// Turn a backend-relative image path into an absolute URL.
    fn absolutize(&self, product: &mut Product) {
        if let Some(image) = &product.image
            && !image.starts_with("http")
        {
            let absolute = format!("{}{}", self.asset_base.trim_end_matches('/'), image);
            product.image = Some(absolute);
        }
    }

    /// List products matching the (cleaned) filters
    pub async fn list(&self, filters: &ProductFilters) -> ClientResult<ListPayload<Product>> {
        let mut payload: ListPayload<Product> = self
            .http
            .get_list("/api/products", &filters.query_pairs())
            .await?;
        for product in &mut payload.items {
            self.absolutize(product);
        }
        Ok(payload)
    }

    /// Get a single product
    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        let mut product: Product = self.http.get_item(&format!("/api/products/{id}")).await?;
        self.absolutize(&mut product);
        Ok(product)
    }

    /// Create a product (multipart, optional image)
    pub async fn create(
        &self,
        payload: &ProductCreate,
        image: Option<ImageFile>,
    ) -> ClientResult<()> {
        payload.validate()?;
        let form = build_form(create_form_fields(payload)?, image)?;
        self.http.post_multipart("/api/products", form).await?;
        Ok(())
    }

    /// Update a product (multipart, optional replacement image)
    pub async fn update(
        &self,
        id: &str,
        payload: &ProductUpdate,
        image: Option<ImageFile>,
    ) -> ClientResult<()> {
        payload.validate()?;
        let form = build_form(update_form_fields(payload), image)?;
        self.http
            .put_multipart(&format!("/api/products/{id}"), form)
            .await?;
        Ok(())
    }

    /// Delete a product
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.http.delete_json(&format!("/api/products/{id}")).await?;
        Ok(())
    }

    /// Toggle product availability
    pub async fn toggle_status(&self, id: &str) -> ClientResult<()> {
        self.http
            .patch_json(&format!("/api/products/{id}/toggle-status"))
            .await?;
        Ok(())
    }

    /// Add a variant to an existing product
    pub async fn add_variant(&self, product_id: &str, variant: &Variant) -> ClientResult<()> {
        self.http
            .post_json(&format!("/api/products/{product_id}/variants"), variant)
            .await?;
        Ok(())
    }

    /// Remove a variant from a product
    pub async fn delete_variant(&self, product_id: &str, variant_id: &str) -> ClientResult<()> {
        self.http
            .delete_json(&format!("/api/products/{product_id}/variants/{variant_id}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::VariantUnit;

    fn sample_create() -> ProductCreate {
        ProductCreate {
            name: "Butter Chicken".to_string(),
            category: "c1".to_string(),
            description: "House special".to_string(),
            price: None,
            original_price: None,
            stock: None,
            cost: None,
            available_for_order: true,
            is_vip: false,
            variants: vec![Variant {
                id: None,
                label: "Standard".to_string(),
                value: 500.0,
                unit: VariantUnit::Gm,
                price: 450,
                stock: 20,
                cost: Some(300),
            }],
        }
    }

    #[test]
    fn filters_drop_all_and_empty_values() {
        let filters = ProductFilters {
            search: Some("rice".to_string()),
            category: Some("all".to_string()),
            availability: Some("".to_string()),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("search".to_string(), "rice".to_string())]
        );
        assert!(ProductFilters::default().query_pairs().is_empty());
    }

    #[test]
    fn booleans_serialize_as_literal_strings() {
        let fields = update_form_fields(&ProductUpdate {
            name: "Butter Chicken".to_string(),
            category: "c1".to_string(),
            price: 450,
            original_price: 500,
            stock: 20,
            description: String::new(),
            available_for_order: true,
            is_vip: false,
        });
        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("availableForOrder"), "true");
        assert_eq!(get("isVIP"), "false");
        assert_eq!(get("dishName"), "Butter Chicken");
        assert_eq!(get("price"), "450");
    }

    #[test]
    fn create_fields_take_roots_from_first_variant() {
        let fields = create_form_fields(&sample_create()).unwrap();
        let get = |key: &str| {
            fields
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("price"), "450");
        assert_eq!(get("stock"), "20");
        assert_eq!(get("cost"), "300");
        // originalPrice falls back to the effective price when unset.
        assert_eq!(get("originalPrice"), "450");
    }

    #[test]
    fn variants_are_json_encoded() {
        let fields = create_form_fields(&sample_create()).unwrap();
        let (_, variants) = fields.iter().find(|(k, _)| k == "variants").unwrap();
        let parsed: Vec<Variant> = serde_json::from_str(variants).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].price, 450);
        // Wire names stay camelCase with lowercase units.
        assert!(variants.contains(r#""unit":"gm""#));
    }
}
