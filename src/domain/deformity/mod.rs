//! Deformity Module - Pure domain services for knee deformity analysis.
//!
//! Takes the three goniometric angles (MPTA, LDFA, JLCA), derives the
//! intra-articular, extra-articular and global deformity, splits them into
//! shares, and maps the result to a surgical strategy through a fixed,
//! ordered rule chain.
//!
//! # Components
//!
//! - `KneeMeasurements` - Validated input angles
//! - `DeformityMetrics` - IAD/EAD/GD and their percentage shares
//! - `RULES` - Ordered decision chain (first match wins)
//! - `DeformityAnalyzer` - Validation, computation and decision entry points
//!
//! All functions are pure apart from `tracing` events. Undefined shares are
//! `None`, never NaN.

mod analyzer;
mod findings;
mod measurements;
mod metrics;
mod rules;
mod strategy;

pub use analyzer::{Assessment, DeformityAnalyzer};
pub use findings::{Advisory, Finding};
pub use measurements::{AngleInput, KneeMeasurements};
pub use metrics::{DeformityMetrics, NEUTRAL_ANGLE};
pub use rules::{
    evaluate, Conclusion, Rule, RuleId, MAJORITY_SHARE_THRESHOLD, NEGLIGIBLE_EAD_DEGREES, RULES,
    SINGLE_SITE_SHARE_THRESHOLD,
};
pub use strategy::Strategy;
