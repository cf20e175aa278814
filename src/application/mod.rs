//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations for the hosting surfaces
//! (command line, HTTP). It holds no state between calls.

pub mod handlers;

pub use handlers::{AnalyzeKneeCommand, AnalyzeKneeHandler, AnalyzeKneeResult, RejectedAnalysis};
