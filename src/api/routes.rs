//! Router assembly and shared request state.
//!
//! The CORS layer wraps the whole router, so every response on every path,
//! error paths included, carries the same headers.
use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::leonardo::client::LeonardoClient;

pub struct AppState {
    /// `None` when no API key is configured; the generate handler reports
    /// that per request so the static site stays up without a key.
    pub leonardo: Option<LeonardoClient>,
    pub static_dir: String,
    pub poll_max_attempts: u32,
    pub poll_interval: Duration,
}

/// CORS policy: configured origin (or any), GET/POST/OPTIONS, Content-Type,
/// cached preflight.
pub fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));
    if allowed_origin == "*" {
        return layer.allow_origin(Any);
    }
    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Invalid ALLOWED_ORIGIN '{}', falling back to any origin", allowed_origin);
            layer.allow_origin(Any)
        }
    }
}

pub fn build_router(state: Arc<AppState>, cors: CorsLayer) -> Router {
    let assets_dir = format!("{}/assets", state.static_dir.trim_end_matches('/'));
    Router::new()
        .route("/", get(handlers::home))
        .route("/home", get(handlers::home))
        .route("/generator", get(handlers::generator))
        .route("/whitepaper", get(handlers::whitepaper))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .route("/api/generate", post(handlers::generate).options(handlers::preflight))
        .route("/api/styles", get(handlers::styles_index))
        .layer(cors)
        .with_state(state)
}
