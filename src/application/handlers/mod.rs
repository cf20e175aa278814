//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod knee;

pub use knee::{AnalyzeKneeCommand, AnalyzeKneeHandler, AnalyzeKneeResult, RejectedAnalysis};
