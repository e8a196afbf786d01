//! Request logging middleware
//!
//! One line when a request starts and one when it completes, tagged with the
//! request id set by `SetRequestIdLayer`.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{info, warn};

/// Logs method, route, status and latency for every request
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();

    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        user_agent = %user_agent,
        "Request started"
    );

    let response = next.run(req).await;

    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed with server error");
    } else if response.status().is_client_error() {
        warn!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed with client error");
    } else {
        info!(request_id = %request_id, method = %method, path = %path, status, latency_ms, "Request completed");
    }

    response
}
