//! HTTP API
//!
//! | Prefix | Module |
//! |--------|--------|
//! | /api/invitados | [`guests`] |
//! | /health | [`health`] |

pub mod guests;
pub mod health;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::get;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// UUIDv4 request ids
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

async fn banner() -> &'static str {
    "Guest RSVP API is running"
}

/// All routes, without middleware or state
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .route("/", get(banner))
        .merge(guests::router())
        .merge(health::router())
}

/// Routes plus the middleware stack. Request logging is skipped in production.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    let router = build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new());

    let router = if state.config.is_production() {
        router
    } else {
        router.layer(axum_middleware::from_fn(middleware::logging_middleware))
    };

    // outermost first: the id exists before tracing and logging see the request
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                HeaderName::from_static(REQUEST_ID_HEADER),
                XRequestId,
            ))
            .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                REQUEST_ID_HEADER,
            )))
            .layer(TraceLayer::new_for_http()),
    )
}
