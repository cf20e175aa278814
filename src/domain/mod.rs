//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (angles, shares, language, errors)
//! - `deformity` - Pure domain services for knee deformity analysis

pub mod deformity;
pub mod foundation;
