//! Domain models
//!
//! Entities as the Dynasty backend serves them, plus the create/update
//! payloads the admin console sends back. Wire names are camelCase; aliases
//! absorb the `_id`/`dishName`-style drift between endpoint versions.

pub mod category;
pub mod membership;
pub mod product;
pub mod user;

pub use category::{Category, CategoryCreate};
pub use membership::{MembershipPlan, MembershipPayload};
pub use product::{CategoryRef, Product, ProductCreate, ProductUpdate, Variant, VariantUnit};
pub use user::{AdminUser, UserCreate, UserUpdate};
