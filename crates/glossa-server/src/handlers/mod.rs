//! HTTP endpoint handlers.

pub mod auth;
pub mod export;
pub mod health;
pub mod languages;
pub mod metrics;
pub mod response;
pub mod translations;

pub use health::HealthResponse;
