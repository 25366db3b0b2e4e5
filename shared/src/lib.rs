//! Shared types for the Dynasty Premium admin console
//!
//! Common types used across the client and console crates: domain models,
//! the permission catalog and role derivation, the navigation menu and its
//! visibility filter, pricing derivations, and response envelope
//! normalization for the Dynasty backend.

pub mod client;
pub mod menu;
pub mod models;
pub mod permissions;
pub mod pricing;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Permission re-exports (for convenient access)
pub use permissions::{PermissionSet, Role, derive_role, role_permissions};

// Menu re-exports
pub use menu::{MenuGroup, MenuItem, admin_menu, filter_menu};

// Envelope re-exports
pub use response::{ItemEnvelope, ListEnvelope, ListPayload, ResponseError};
