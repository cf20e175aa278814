//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Enable request tracing
    #[serde(default = "default_true")]
    pub enable_tracing: bool,

    /// Mount the demo preset endpoint
    #[serde(default = "default_true")]
    pub enable_demo: bool,

    /// Include offending fields in error responses
    #[serde(default)]
    pub verbose_errors: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_tracing: true,
            enable_demo: true,
            verbose_errors: false,
        }
    }
}

fn default_true() -> bool {
    true
}
