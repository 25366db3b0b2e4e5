//! Product form
//!
//! The add form collects name, category, flags, and a list of variants; the
//! edit form works on the flat root fields the update endpoint takes.
//! Required-field and variant-completeness checks run here, before payload
//! assembly.

use shared::models::{Product, ProductCreate, ProductUpdate, Variant, VariantUnit};

use super::FormError;

/// Editable product state for the add flow.
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub available_for_order: bool,
    pub is_vip: bool,
    pub variants: Vec<Variant>,
}

impl ProductForm {
    /// Blank form with the single starter variant row.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            description: String::new(),
            available_for_order: true,
            is_vip: false,
            variants: vec![Self::blank_variant("Standard")],
        }
    }

    fn blank_variant(label: &str) -> Variant {
        Variant {
            id: None,
            label: label.to_string(),
            value: 0.0,
            unit: VariantUnit::Gm,
            price: 0,
            stock: 0,
            cost: None,
        }
    }

    pub fn add_variant(&mut self) {
        self.variants.push(Self::blank_variant(""));
    }

    pub fn remove_variant(&mut self, index: usize) {
        if index < self.variants.len() {
            self.variants.remove(index);
        }
    }

    /// Build the create payload.
    ///
    /// Name and category are required, and at least one variant must be
    /// complete; root price/stock/cost are left to the first-variant
    /// defaulting in the payload itself.
    pub fn build_create(&self) -> Result<ProductCreate, FormError> {
        if self.name.trim().is_empty() || self.category.trim().is_empty() {
            return Err(FormError::Invalid(
                "Name and Category are required".to_string(),
            ));
        }
        if self.variants.is_empty() || self.variants.iter().any(|v| !v.is_complete()) {
            return Err(FormError::Invalid(
                "Please fill in all fields for at least one variant".to_string(),
            ));
        }
        Ok(ProductCreate {
            name: self.name.trim().to_string(),
            category: self.category.clone(),
            description: self.description.clone(),
            price: None,
            original_price: None,
            stock: None,
            cost: None,
            available_for_order: self.available_for_order,
            is_vip: self.is_vip,
            variants: self.variants.clone(),
        })
    }
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an update payload from an existing product, applying edited fields
/// on top of its current state.
pub fn update_from(product: &Product) -> ProductUpdate {
    ProductUpdate {
        name: product.name.clone(),
        category: product
            .category
            .as_ref()
            .map(|c| c.id().to_string())
            .unwrap_or_default(),
        price: product.price,
        original_price: product.original_price,
        stock: product.stock,
        description: product.description.clone(),
        available_for_order: product.available_for_order,
        is_vip: product.is_vip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_name_and_category() {
        let mut form = ProductForm::new();
        assert!(matches!(form.build_create(), Err(FormError::Invalid(_))));

        form.name = "Butter Chicken".to_string();
        form.category = "c1".to_string();
        // Starter variant is still incomplete.
        assert!(form.build_create().is_err());
    }

    #[test]
    fn complete_variant_builds_payload() {
        let mut form = ProductForm::new();
        form.name = "Butter Chicken".to_string();
        form.category = "c1".to_string();
        form.variants[0].value = 500.0;
        form.variants[0].price = 450;
        form.variants[0].stock = 20;

        let payload = form.build_create().unwrap();
        assert_eq!(payload.name, "Butter Chicken");
        // Roots stay unset; the first variant supplies them downstream.
        assert_eq!(payload.price, None);
        assert_eq!(payload.effective_price(), 450);
    }

    #[test]
    fn one_incomplete_variant_rejects_the_form() {
        let mut form = ProductForm::new();
        form.name = "Rice".to_string();
        form.category = "c1".to_string();
        form.variants[0].value = 500.0;
        form.variants[0].price = 120;
        form.variants[0].stock = 10;
        form.add_variant();

        assert!(form.build_create().is_err());
        form.remove_variant(1);
        assert!(form.build_create().is_ok());
    }

    #[test]
    fn update_payload_starts_from_current_product() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "_id": "p1",
            "dishName": "Butter Chicken",
            "category": {"_id": "c1"},
            "price": 450,
            "originalPrice": 500,
            "stock": 20
        }))
        .unwrap();
        let payload = update_from(&product);
        assert_eq!(payload.name, "Butter Chicken");
        assert_eq!(payload.category, "c1");
        assert_eq!(payload.original_price, 500);
    }
}
