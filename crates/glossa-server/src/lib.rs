//! Glossa Server - HTTP API for localized translations
//!
//! Axum-based REST API over the Glossa store: token-authenticated CRUD
//! for languages and translations, filtered search, and a cached bulk
//! export endpoint.

pub mod auth;
pub mod cache;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod server;
pub mod state;

// Re-exports
pub use error::AppError;
pub use handlers::HealthResponse;
pub use server::{create_router, create_router_with_state, run_server_with_state};
pub use state::AppState;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
