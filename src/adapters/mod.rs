//! Adapters - presentation and transport around the domain.
//!
//! - `display` renders assessments as localized reports
//! - `http` exposes the analysis over a REST API

pub mod display;
pub mod http;
