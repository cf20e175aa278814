//! Display adapter - formatting and localized rendering of assessments.
//!
//! Kept apart from the domain so that decisions are asserted on exact values
//! and wording can change without touching the rules.

pub mod format;
pub mod report;
pub mod wording;

pub use report::{AnalysisReport, MetricsDisplay};
pub use wording::error_message;
