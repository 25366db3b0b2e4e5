//! Sidebar rendering
//!
//! Prints the filtered navigation structure with numbered items and returns
//! the flat selection list. Recomputed from the session on every pass; the
//! menu definition itself is never mutated.

use shared::menu::{MenuGroup, MenuIcon, MenuItem, admin_menu, filter_menu};

use crate::session::Session;

fn glyph(icon: MenuIcon) -> &'static str {
    match icon {
        MenuIcon::Dashboard => "📊",
        MenuIcon::Orders => "🛒",
        MenuIcon::Products => "📦",
        MenuIcon::Folder => "📁",
        MenuIcon::Customers => "👥",
        MenuIcon::Delivery => "🚲",
        MenuIcon::UserCog => "🔧",
        MenuIcon::Wallet => "👛",
        MenuIcon::Crown => "👑",
        MenuIcon::Reports => "📈",
        MenuIcon::Layout => "🏠",
        MenuIcon::Bell => "🔔",
        MenuIcon::Settings => "⚙️",
        MenuIcon::Profile => "👤",
        MenuIcon::Help => "❓",
    }
}

/// Render the sidebar for the session and return the selectable items in
/// display order.
pub fn render(menu: &[MenuGroup], session: &Session) -> Vec<MenuItem> {
    let visible = filter_menu(menu, session.role, &session.permissions);

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Dynasty Premium — Welcome {}", session.role);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut items = Vec::new();
    for group in &visible {
        println!("\n  {}", group.title.to_uppercase());
        for item in &group.items {
            items.push(item.clone());
            println!("  {:>2}. {} {}", items.len(), glyph(item.icon), item.label);
        }
    }
    println!("\n   0. 🚪 Logout");
    items
}

/// Build the immutable menu definition once at startup.
pub fn build_menu() -> Vec<MenuGroup> {
    admin_menu()
}
