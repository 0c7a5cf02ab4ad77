//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

/// Body of the `/health` response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

/// GET /health. Reports "UP" whenever the process is serving requests;
/// no store or cache access involved.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}
