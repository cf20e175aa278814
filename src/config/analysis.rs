//! Analysis configuration

use serde::Deserialize;

use crate::domain::foundation::Language;

/// Analysis configuration
///
/// The clinical constants (neutral angle, thresholds) are fixed and not
/// configurable; only presentation defaults live here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisConfig {
    /// Report language when a request does not choose one
    #[serde(default)]
    pub default_language: Language,
}
