//! Knee Planner - Knee Deformity Decision Support
//!
//! This crate decomposes a varus knee deformity from three radiographic
//! angles (MPTA, LDFA, JLCA) into intra- and extra-articular components and
//! maps their relative shares to a surgical orientation through an ordered
//! rule chain. It is a decision aid only and does not replace clinical
//! judgment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
