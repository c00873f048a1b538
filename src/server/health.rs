//! Health Endpoint
//!
//! Local liveness check; never calls an upstream.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Health check response body
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: String,
}

/// Report gateway liveness with the current UTC timestamp.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}
