//! AnalyzeKneeHandler - Command handler for one knee deformity analysis.
//!
//! Resolves raw host inputs, runs the deformity analyzer, and renders the
//! localized report. Hosts (CLI, HTTP) only translate to and from this
//! command.

use tracing::info;

use crate::adapters::display::{error_message, AnalysisReport};
use crate::domain::deformity::{AngleInput, Assessment, DeformityAnalyzer, KneeMeasurements};
use crate::domain::foundation::{Language, ValidationError};

/// Command to analyze one set of raw measurements.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeKneeCommand {
    pub mpta: Option<AngleInput>,
    pub ldfa: Option<AngleInput>,
    pub jlca: Option<AngleInput>,
    /// Report language; the handler default applies when absent.
    pub language: Option<Language>,
}

impl AnalyzeKneeCommand {
    /// Builds a command from three text fields.
    pub fn from_text(mpta: &str, ldfa: &str, jlca: &str) -> Self {
        Self {
            mpta: Some(AngleInput::from(mpta)),
            ldfa: Some(AngleInput::from(ldfa)),
            jlca: Some(AngleInput::from(jlca)),
            language: None,
        }
    }

    /// Builds a command for the demo preset (84.0 / 90.0 / 4.0).
    pub fn demo() -> Self {
        let demo = KneeMeasurements::DEMO;
        Self {
            mpta: Some(AngleInput::from(demo.mpta())),
            ldfa: Some(AngleInput::from(demo.ldfa())),
            jlca: Some(AngleInput::from(demo.jlca())),
            language: None,
        }
    }

    /// Sets the report language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }
}

/// Result of a successful analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeKneeResult {
    pub assessment: Assessment,
    pub report: AnalysisReport,
}

/// A rejected analysis with its localized message.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedAnalysis {
    pub error: ValidationError,
    pub language: Language,
    pub message: String,
}

impl std::fmt::Display for RejectedAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for RejectedAnalysis {}

/// Handler for knee deformity analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeKneeHandler {
    default_language: Language,
}

impl AnalyzeKneeHandler {
    pub fn new(default_language: Language) -> Self {
        Self { default_language }
    }

    pub fn default_language(&self) -> Language {
        self.default_language
    }

    pub fn handle(&self, cmd: AnalyzeKneeCommand) -> Result<AnalyzeKneeResult, RejectedAnalysis> {
        let language = cmd.language.unwrap_or(self.default_language);

        let measurements = KneeMeasurements::from_inputs(
            cmd.mpta.as_ref(),
            cmd.ldfa.as_ref(),
            cmd.jlca.as_ref(),
        )
        .map_err(|error| {
            info!(code = %error.code(), "Knee measurements rejected");
            RejectedAnalysis {
                message: error_message(&error, language),
                error,
                language,
            }
        })?;

        let assessment = DeformityAnalyzer::analyze(&measurements);
        let report = AnalysisReport::build(&assessment, language);

        Ok(AnalyzeKneeResult { assessment, report })
    }
}
