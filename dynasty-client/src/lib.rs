//! Dynasty Client - HTTP client for the Dynasty Premium backend
//!
//! Provides network-based HTTP calls to the Dynasty admin REST API, with the
//! response envelope normalization and multipart payload assembly the
//! backend requires.

pub mod config;
pub mod error;
pub mod http;
pub mod services;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use services::{
    AuthService, CategoryService, ImageFile, MembershipService, ProductFilters, ProductService,
    UserService,
};

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse, UserInfo};
pub use shared::response::ListPayload;
