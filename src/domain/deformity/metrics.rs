//! Deformity metrics derived from the knee angles.

use serde::{Deserialize, Serialize};

use super::KneeMeasurements;
use crate::domain::foundation::Share;

/// Reference neutral mechanical axis angle, in degrees.
pub const NEUTRAL_ANGLE: f64 = 87.0;

/// Intermediate quantities the decision rules operate on.
///
/// Magnitudes are in degrees. Shares are `None` when their denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformityMetrics {
    /// Intra-articular deformity (JLCA).
    pub iad: f64,
    /// Extra-articular deformity (LDFA - MPTA).
    pub ead: f64,
    /// Global deformity (IAD + EAD).
    pub gd: f64,
    /// IAD as a share of GD.
    pub iad_pct: Option<Share>,
    /// EAD as a share of GD.
    pub ead_pct: Option<Share>,
    /// Femoral share of EAD.
    pub fd_pct: Option<Share>,
    /// Tibial share of EAD.
    pub td_pct: Option<Share>,
}

impl DeformityMetrics {
    /// Computes all metrics for validated measurements.
    pub fn compute(measurements: &KneeMeasurements) -> Self {
        let iad = measurements.jlca();
        let ead = measurements.ldfa() - measurements.mpta();
        let gd = iad + ead;

        Self {
            iad,
            ead,
            gd,
            iad_pct: Share::of(iad, gd),
            ead_pct: Share::of(ead, gd),
            fd_pct: Share::of(measurements.ldfa() - NEUTRAL_ANGLE, ead),
            td_pct: Share::of(NEUTRAL_ANGLE - measurements.mpta(), ead),
        }
    }

    /// Returns true when the global deformity is not positive.
    pub fn is_inconsistent(&self) -> bool {
        self.gd <= 0.0
    }

    /// Returns true when both femoral and tibial shares are defined.
    pub fn has_bony_split(&self) -> bool {
        self.fd_pct.is_some() && self.td_pct.is_some()
    }
}
