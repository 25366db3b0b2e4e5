//! Console pages
//!
//! One module per management screen. Every network failure surfaces as a
//! single transient notification and leaves the page usable; retrying the
//! same action is always safe.

pub mod categories;
pub mod memberships;
pub mod products;
pub mod users;

/// Success notification.
pub fn toast_success(message: &str) {
    println!("✅ {message}");
}

/// Failure notification with the backend-provided message when available.
pub fn toast_error(error: &impl std::fmt::Display) {
    println!("❌ {error}");
    tracing::warn!(error = %error, "operation failed");
}

/// Placeholder for screens outside the console's scope.
pub fn placeholder(label: &str) {
    println!("\n── {label} ──");
    println!("This area is managed from the web dashboard.");
}

/// Dashboard landing page.
pub fn dashboard(session: &crate::session::Session) {
    println!("\n── Dashboard ──");
    println!("Signed in as {} <{}>", session.user.name, session.user.email);
    println!("Role: {}", session.role);
    println!("Granted permissions: {}", session.permissions.len());
}

/// Profile page.
pub fn profile(session: &crate::session::Session) {
    println!("\n── Profile ──");
    println!("Name:  {}", session.user.name);
    println!("Email: {}", session.user.email);
    println!("Role:  {}", session.role);
    if session.permissions.is_empty() {
        println!("No explicit permissions granted.");
    } else {
        let keys: Vec<&str> = session.permissions.iter().map(String::as_str).collect();
        println!("Permissions: {}", keys.join(", "));
    }
}
