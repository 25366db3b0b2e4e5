//! Per-resource API services
//!
//! One service per backend resource, each a thin typed layer over
//! [`HttpClient`](crate::HttpClient). Mutation payloads are validated before
//! any network call; a validation failure aborts the operation locally.

mod auth;
mod categories;
mod memberships;
mod products;
mod users;

pub use auth::AuthService;
pub use categories::CategoryService;
pub use memberships::MembershipService;
pub use products::{ImageFile, ProductFilters, ProductService};
pub use users::UserService;
