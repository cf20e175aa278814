//! HTTP adapters - REST API implementations.
//!
//! `app_router` assembles the analysis endpoints, the health probe and the
//! cross-cutting tower layers from the loaded configuration.

pub mod analysis;

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::application::AnalyzeKneeHandler;
use crate::config::{AppConfig, Environment};

pub use analysis::{analysis_router, AnalysisAppState};

/// Build the complete application router.
///
/// # Routes
///
/// - `POST /api/analysis`
/// - `GET /api/analysis/demo` (when `features.enable_demo`)
/// - `GET /health`
pub fn app_router(config: &AppConfig) -> Router {
    let handler = AnalyzeKneeHandler::new(config.analysis.default_language);
    let state = AnalysisAppState::new(handler, config.features.verbose_errors);

    let mut router = Router::new()
        .route("/health", get(analysis::health))
        .nest(
            "/api/analysis",
            analysis_router(state, config.features.enable_demo),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    if let Some(cors) = cors_layer(config) {
        router = router.layer(cors);
    }
    if config.features.enable_tracing {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

/// CORS policy: the configured origins, or permissive in development.
///
/// Returns `None` outside development when no origins are configured, which
/// leaves the API same-origin only.
fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        return Some(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }
    if config.server.environment == Environment::Development {
        return Some(CorsLayer::permissive());
    }
    None
}
