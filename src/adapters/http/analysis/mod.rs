//! Analysis HTTP adapter - REST API for knee deformity analysis.
//!
//! Provides endpoints for:
//! - Analyzing submitted measurements
//! - Analyzing the built-in demo preset

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{health, AnalysisApiError, AnalysisAppState};
pub use routes::analysis_router;
