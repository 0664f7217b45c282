//! Top-level router configuration combining pages, forms and the JSON API.
//!
//! # Route Structure
//!
//! - `GET  /`            - Article index (public)
//! - `GET  /health`      - Health check: database (public)
//! - `/articles/*`, `/comments/*` - Blog pages and forms
//! - `/api/*`            - Read-only JSON API
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on form routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use crate::web::error::not_found_handler;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - rate limit settings and the static asset directory
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let form_router = web::routes::form_routes().layer(rate_limit::layer(
        config.rate_limit.per_second,
        config.rate_limit.burst,
    ));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(web::routes::page_routes())
        .merge(form_router)
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
