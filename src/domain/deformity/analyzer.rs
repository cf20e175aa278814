//! Deformity Analyzer - validation, metrics and decision for one knee.

use serde::Serialize;
use tracing::{debug, warn};

use super::rules::{self, RuleId};
use super::{Advisory, DeformityMetrics, Finding, KneeMeasurements, Strategy};
use crate::domain::foundation::ValidationError;

/// Complete outcome of analyzing one set of measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub measurements: KneeMeasurements,
    pub metrics: DeformityMetrics,
    pub rule: RuleId,
    pub strategy: Strategy,
    pub findings: Vec<Finding>,
    pub advisories: Vec<Advisory>,
}

impl Assessment {
    /// Returns the decision label.
    pub fn decision(&self) -> &'static str {
        self.strategy.label()
    }

    /// Returns true if any advisory was raised.
    pub fn has_advisories(&self) -> bool {
        !self.advisories.is_empty()
    }
}

/// Stateless analyzer for knee deformity correction planning.
pub struct DeformityAnalyzer;

impl DeformityAnalyzer {
    /// Validates raw angles and returns the non-fatal advisories.
    ///
    /// # Errors
    /// - `InvalidInput` when any angle is not finite
    /// - `NegativeJlca` when `jlca < 0`
    pub fn validate(mpta: f64, ldfa: f64, jlca: f64) -> Result<Vec<Advisory>, ValidationError> {
        let measurements = KneeMeasurements::try_new(mpta, ldfa, jlca)?;
        Ok(Self::advisories(&DeformityMetrics::compute(&measurements)))
    }

    /// Validates raw angles and evaluates the decision rules.
    pub fn compute(mpta: f64, ldfa: f64, jlca: f64) -> Result<Assessment, ValidationError> {
        let measurements = KneeMeasurements::try_new(mpta, ldfa, jlca)?;
        Ok(Self::analyze(&measurements))
    }

    /// Evaluates the decision rules for validated measurements.
    pub fn analyze(measurements: &KneeMeasurements) -> Assessment {
        let metrics = DeformityMetrics::compute(measurements);
        let advisories = Self::advisories(&metrics);
        let (rule, conclusion) = rules::evaluate(&metrics);

        debug!(
            rule = ?rule,
            strategy = conclusion.strategy.code(),
            gd = metrics.gd,
            "Knee deformity analyzed"
        );

        Assessment {
            measurements: *measurements,
            metrics,
            rule,
            strategy: conclusion.strategy,
            findings: conclusion.findings,
            advisories,
        }
    }

    fn advisories(metrics: &DeformityMetrics) -> Vec<Advisory> {
        if !metrics.is_inconsistent() {
            return Vec::new();
        }

        warn!(
            gd = metrics.gd,
            "Global deformity is not positive, measurements may be inconsistent"
        );
        vec![Advisory::InconsistentMeasurement {
            global_deformity: metrics.gd,
        }]
    }
}
