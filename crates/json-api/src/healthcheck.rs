//! Stayshop JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok` while the process is serving
    pub status: String,

    pub message: String,

    /// Server build version
    pub version: String,
}

/// Healthcheck handler
///
/// Liveness only; the database is not consulted.
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Stayshop API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
