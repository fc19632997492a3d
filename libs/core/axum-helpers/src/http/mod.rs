//! HTTP middleware: CORS policy and security headers.
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::http::{CorsPolicy, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(CorsPolicy::from_env()?.layer());
//! ```

pub mod cors;
pub mod security;

pub use cors::{CorsPolicy, create_cors_layer, create_permissive_cors_layer};
pub use security::security_headers;
