//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer command handler.

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::display::AnalysisReport;
use crate::application::{AnalyzeKneeCommand, AnalyzeKneeHandler, RejectedAnalysis};
use crate::domain::foundation::ValidationError;

use super::dto::{AnalyzeRequest, DemoQuery, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Analysis API error that implements IntoResponse.
pub enum AnalysisApiError {
    /// Measurements failed validation.
    Unprocessable {
        rejected: RejectedAnalysis,
        verbose: bool,
    },
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            AnalysisApiError::Unprocessable { rejected, verbose } => {
                let mut body =
                    ErrorResponse::new(rejected.error.code().to_string(), rejected.message);
                if verbose {
                    body = body.with_details(error_details(&rejected.error));
                }
                (StatusCode::UNPROCESSABLE_ENTITY, body)
            }
        };
        (status, Json(error)).into_response()
    }
}

fn error_details(error: &ValidationError) -> serde_json::Value {
    match error {
        ValidationError::InvalidInput { fields } => serde_json::json!({ "fields": fields }),
        ValidationError::NegativeJlca { actual } => serde_json::json!({ "jlca": actual }),
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state for analysis endpoints.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub handler: Arc<AnalyzeKneeHandler>,
    /// Include offending fields in error bodies
    pub verbose_errors: bool,
}

impl AnalysisAppState {
    pub fn new(handler: AnalyzeKneeHandler, verbose_errors: bool) -> Self {
        Self {
            handler: Arc::new(handler),
            verbose_errors,
        }
    }

    fn run(&self, cmd: AnalyzeKneeCommand) -> Result<Json<AnalysisReport>, AnalysisApiError> {
        self.handler
            .handle(cmd)
            .map(|result| Json(result.report))
            .map_err(|rejected| AnalysisApiError::Unprocessable {
                rejected,
                verbose: self.verbose_errors,
            })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analysis
///
/// Analyzes one set of measurements and returns the localized report.
pub async fn analyze(
    State(state): State<AnalysisAppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisReport>, AnalysisApiError> {
    state.run(request.into())
}

/// GET /api/analysis/demo
///
/// Returns the report for the demo preset (MPTA 84.0, LDFA 90.0, JLCA 4.0).
pub async fn demo(
    State(state): State<AnalysisAppState>,
    Query(query): Query<DemoQuery>,
) -> Result<Json<AnalysisReport>, AnalysisApiError> {
    let mut cmd = AnalyzeKneeCommand::demo();
    cmd.language = query.language;
    state.run(cmd)
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}
