//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use quill_core::ports::BaseRepository;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status and whether the store answers.
///
/// Responds 503 with status `degraded` when the store cannot be reached.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let store_ok = match state.posts.count().await {
        Ok(_) => true,
        Err(e) => {
            tracing::warn!("Store health check failed: {}", e);
            false
        }
    };

    let response = HealthResponse {
        status: if store_ok { "ok" } else { "degraded" },
        store: if store_ok { "ok" } else { "unavailable" },
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    if store_ok {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
