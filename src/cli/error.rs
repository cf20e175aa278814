use knee_planner::application::RejectedAnalysis;
use knee_planner::config::{ConfigError, ValidationError};
use knee_planner::telemetry::TelemetryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Analysis rejected: {0}")]
    Rejected(#[from] RejectedAnalysis),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    #[error("Logging setup failed: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            // Already localized
            Self::Rejected(rejected) => rejected.message.clone(),
            Self::Config(err) => format!("Could not load configuration: {err}"),
            Self::InvalidConfig(err) => format!("Configuration is invalid: {err}"),
            Self::Telemetry(err) => err.to_string(),
            Self::Json(err) => format!("Failed to serialize report: {err}"),
            Self::Io(err) => format!("I/O operation failed: {err}"),
        }
    }
}
