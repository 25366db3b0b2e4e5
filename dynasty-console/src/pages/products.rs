//! Products page

use dynasty_client::{ImageFile, ProductFilters};
use shared::models::{Product, Variant, VariantUnit};

use crate::editor::{ProductForm, product::update_from};
use crate::input::{get_bool, get_f64, get_i64, get_input, get_input_with_default};
use crate::stores::{CategoryStore, ProductStore};

use super::{toast_error, toast_success};

pub async fn run(products: &mut ProductStore, categories: &mut CategoryStore) {
    if let Err(err) = products.fetch(&ProductFilters::default()).await {
        toast_error(&err);
    }

    loop {
        print_list(products.products(), products.total());
        println!("\n1. Search/Filter  2. Add  3. Edit  4. Toggle availability  5. Delete  0. Back");
        match get_input("> ").as_str() {
            "0" => break,
            "1" => {
                let filters = prompt_filters();
                if let Err(err) = products.fetch(&filters).await {
                    toast_error(&err);
                }
            }
            "2" => add_product(products, categories).await,
            "3" => edit_product(products).await,
            "4" => {
                if let Some(id) = pick_product_id(products.products()) {
                    match products.toggle_status(&id).await {
                        Ok(()) => toast_success("Product status updated"),
                        Err(err) => toast_error(&err),
                    }
                }
            }
            "5" => {
                if let Some(id) = pick_product_id(products.products())
                    && get_bool("Delete this product?", false)
                {
                    match products.delete(&id).await {
                        Ok(()) => toast_success("Product deleted"),
                        Err(err) => toast_error(&err),
                    }
                }
            }
            _ => println!("❌ Invalid choice"),
        }
    }
}

fn print_list(products: &[Product], total: u64) {
    println!("\n── Products ({total}) ──");
    if products.is_empty() {
        println!("(no products)");
        return;
    }
    for (i, p) in products.iter().enumerate() {
        let flag = if p.available_for_order { " " } else { "✗" };
        println!(
            "{:>3}. {flag} {:<30} ₹{:<8} stock {:<6} variants {}",
            i + 1,
            p.name,
            p.price,
            p.stock,
            p.variants.len()
        );
    }
}

fn prompt_filters() -> ProductFilters {
    ProductFilters {
        search: Some(get_input_with_default("Search", "all")),
        category: Some(get_input_with_default("Category ID", "all")),
        availability: Some(get_input_with_default("Availability", "all")),
    }
}

fn pick_product_id(products: &[Product]) -> Option<String> {
    if products.is_empty() {
        println!("(no products)");
        return None;
    }
    let index: usize = get_input("Product #: ").parse().ok()?;
    let product = products.get(index.checked_sub(1)?)?;
    Some(product.id.clone())
}

fn pick_category(categories: &CategoryStore) -> Option<String> {
    let list = categories.categories();
    if list.is_empty() {
        println!("❌ No categories available, create one first");
        return None;
    }
    for (i, c) in list.iter().enumerate() {
        println!("{:>3}. {}", i + 1, c.label());
    }
    let index: usize = get_input("Category #: ").parse().ok()?;
    Some(list.get(index.checked_sub(1)?)?.id.clone())
}

fn prompt_variant(label_default: &str) -> Variant {
    let label = get_input_with_default("Variant label (e.g. Small)", label_default);
    let value = get_f64("Size value (e.g. 500)", 0.0);
    let unit = loop {
        let raw = get_input_with_default("Unit (ml/kg/gm)", "gm");
        match VariantUnit::parse(&raw) {
            Some(unit) => break unit,
            None => println!("❌ Unit must be ml, kg or gm"),
        }
    };
    let price = get_i64("Price (₹)", 0);
    let stock = get_i64("Stock", 0);
    Variant {
        id: None,
        label,
        value,
        unit,
        price,
        stock,
        cost: None,
    }
}

fn prompt_image() -> Option<ImageFile> {
    let path = get_input("Image file path (empty to skip): ");
    if path.is_empty() {
        return None;
    }
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(err) => {
            println!("❌ Could not read image: {err}");
            return None;
        }
    };
    let file_name = std::path::Path::new(&path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "image".to_string());
    let mime = match file_name.rsplit('.').next().map(str::to_lowercase) {
        Some(ext) if ext == "png" => "image/png",
        Some(ext) if ext == "webp" => "image/webp",
        _ => "image/jpeg",
    };
    Some(ImageFile {
        file_name,
        mime: mime.to_string(),
        bytes,
    })
}

async fn add_product(products: &mut ProductStore, categories: &mut CategoryStore) {
    if categories.categories().is_empty()
        && let Err(err) = categories.fetch().await
    {
        toast_error(&err);
    }

    let mut form = ProductForm::new();
    form.name = get_input("Product name: ");
    form.category = match pick_category(categories) {
        Some(id) => id,
        None => return,
    };
    form.description = get_input("Description: ");
    form.available_for_order = get_bool("Available for order?", true);
    form.is_vip = get_bool("VIP item?", false);

    form.variants.clear();
    loop {
        let default_label = if form.variants.is_empty() { "Standard" } else { "" };
        form.variants.push(prompt_variant(default_label));
        if !get_bool("Add another variant?", false) {
            break;
        }
    }

    let payload = match form.build_create() {
        Ok(payload) => payload,
        Err(err) => {
            toast_error(&err);
            return;
        }
    };
    let image = prompt_image();

    match products.create(&payload, image).await {
        Ok(()) => toast_success("Product added"),
        Err(err) => toast_error(&err),
    }
}

async fn edit_product(products: &mut ProductStore) {
    let id = match pick_product_id(products.products()) {
        Some(id) => id,
        None => return,
    };
    let product = match products.products().iter().find(|p| p.id == id) {
        Some(product) => product.clone(),
        None => return,
    };

    let mut payload = update_from(&product);
    payload.name = get_input_with_default("Name", &payload.name);
    payload.category = get_input_with_default("Category ID", &payload.category);
    payload.price = get_i64("Price (₹)", payload.price);
    payload.original_price = get_i64("Original price (₹)", payload.original_price);
    payload.stock = get_i64("Stock", payload.stock);
    payload.description = get_input_with_default("Description", &payload.description);
    payload.available_for_order = get_bool("Available for order?", payload.available_for_order);
    payload.is_vip = get_bool("VIP item?", payload.is_vip);
    let image = prompt_image();

    match products.update(&id, &payload, image).await {
        Ok(()) => toast_success("Product updated"),
        Err(err) => toast_error(&err),
    }
}
