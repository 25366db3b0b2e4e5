//! Category management page
//!
//! List and create only; the backend does not support category update or
//! delete yet.

use shared::models::{Category, CategoryCreate};

use crate::input::get_input;
use crate::stores::CategoryStore;

use super::{toast_error, toast_success};

pub async fn run(categories: &mut CategoryStore) {
    if let Err(err) = categories.fetch().await {
        toast_error(&err);
    }

    loop {
        print_list(categories.categories());
        println!("\n1. Refresh  2. Add category  0. Back");
        match get_input("> ").as_str() {
            "0" => break,
            "1" => {
                if let Err(err) = categories.fetch().await {
                    toast_error(&err);
                }
            }
            "2" => {
                let name = get_input("Category name: ");
                let display = get_input("Display name (empty = same as name): ");
                let display = if display.is_empty() { None } else { Some(display) };
                let payload = CategoryCreate::new(name, display);
                match categories.create(&payload).await {
                    Ok(()) => toast_success("Category created"),
                    Err(err) => toast_error(&err),
                }
            }
            _ => println!("❌ Invalid choice"),
        }
    }
}

fn print_list(categories: &[Category]) {
    println!("\n── Categories ──");
    if categories.is_empty() {
        println!("(no categories)");
        return;
    }
    for (i, c) in categories.iter().enumerate() {
        println!("{:>3}. {:<24} ({})", i + 1, c.label(), c.name);
    }
}
