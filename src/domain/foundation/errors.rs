//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

use super::Angle;

/// Errors that reject a set of measurements before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("MPTA, LDFA and JLCA must be numeric values (invalid: {})", join_angles(.fields))]
    InvalidInput { fields: Vec<Angle> },

    #[error("JLCA cannot be negative in this calculation, got {actual}")]
    NegativeJlca { actual: f64 },
}

fn join_angles(fields: &[Angle]) -> String {
    fields
        .iter()
        .map(Angle::label)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationError {
    /// Creates an invalid input error for the given fields.
    pub fn invalid_input(fields: impl Into<Vec<Angle>>) -> Self {
        ValidationError::InvalidInput {
            fields: fields.into(),
        }
    }

    /// Creates a negative JLCA error.
    pub fn negative_jlca(actual: f64) -> Self {
        ValidationError::NegativeJlca { actual }
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::InvalidInput { .. } => ErrorCode::InvalidInput,
            ValidationError::NegativeJlca { .. } => ErrorCode::NegativeJlca,
        }
    }
}

/// Stable error codes exposed to hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    NegativeJlca,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::NegativeJlca => "NEGATIVE_JLCA",
        };
        write!(f, "{}", s)
    }
}
