//! Axum router configuration for analysis endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{analyze, demo, AnalysisAppState};

/// Create the analysis API router.
///
/// # Routes
///
/// - `POST /` - Analyze one set of measurements
/// - `GET /demo` - Analyze the demo preset (query: language), when enabled
pub fn analysis_routes(enable_demo: bool) -> Router<AnalysisAppState> {
    let router = Router::new().route("/", post(analyze));
    if enable_demo {
        router.route("/demo", get(demo))
    } else {
        router
    }
}

/// Create the complete analysis module router with its state applied.
///
/// Suitable for mounting at `/api/analysis`.
pub fn analysis_router(state: AnalysisAppState, enable_demo: bool) -> Router {
    analysis_routes(enable_demo).with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_defined() {
        let _with_demo = analysis_routes(true);
        let _without_demo = analysis_routes(false);
    }
}
