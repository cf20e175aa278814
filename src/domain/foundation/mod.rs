//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the knee planning domain.

mod angle;
mod errors;
mod language;
mod share;

pub use angle::Angle;
pub use errors::{ErrorCode, ValidationError};
pub use language::{Language, UnknownLanguage};
pub use share::Share;
