//! Data transfer objects for analysis HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::application::AnalyzeKneeCommand;
use crate::domain::deformity::AngleInput;
use crate::domain::foundation::Language;

// ═══════════════════════════════════════════════════════════════════════════
// Request DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Request to analyze one set of measurements.
///
/// Angles may be sent as numbers or as raw form text; missing or `null`
/// angles are rejected as invalid input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub mpta: Option<AngleInput>,
    #[serde(default)]
    pub ldfa: Option<AngleInput>,
    #[serde(default)]
    pub jlca: Option<AngleInput>,
    /// Report language (defaults to the configured language)
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<AnalyzeRequest> for AnalyzeKneeCommand {
    fn from(request: AnalyzeRequest) -> Self {
        Self {
            mpta: request.mpta,
            ldfa: request.ldfa,
            jlca: request.jlca,
            language: request.language,
        }
    }
}

/// Query parameters for the demo endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoQuery {
    pub language: Option<Language>,
}

// ═══════════════════════════════════════════════════════════════════════════
// Response DTOs
// ═══════════════════════════════════════════════════════════════════════════

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
