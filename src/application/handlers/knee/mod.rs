//! Knee analysis handlers.

mod analyze_knee;

pub use analyze_knee::{
    AnalyzeKneeCommand, AnalyzeKneeHandler, AnalyzeKneeResult, RejectedAnalysis,
};
