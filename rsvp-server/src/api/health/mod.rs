//! Health check
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "database": "ok" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// ok | degraded
    status: &'static str,
    version: &'static str,
    /// ok | unavailable
    database: &'static str,
}

/// GET /health - 503 when the database does not answer
pub async fn health(State(state): State<ServerState>) -> (StatusCode, Json<HealthResponse>) {
    let db_ok = state.db.ping().await;
    let status = if db_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (
        status,
        Json(HealthResponse {
            status: if db_ok { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            database: if db_ok { "ok" } else { "unavailable" },
        }),
    )
}
