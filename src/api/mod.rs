use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue,
    },
    routing::any,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::state::AppState;

pub mod error;
pub mod handlers;
pub mod types;

pub const RELAY_PATH: &str = "/api/generate";

/// Relay router. Every response, errors included, carries the permissive CORS headers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(RELAY_PATH, any(handlers::generate))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
