//! Rationale items and advisories produced by an assessment.
//!
//! Findings carry the numbers they cite so that wording and rounding stay in
//! the display layer.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Share;

/// One rationale bullet supporting a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// EAD close to zero, deformity mostly intra-articular.
    NegligibleExtraArticular,
    /// Check ligament status and cartilage topography.
    CorrelateWithSoftTissue,
    /// Both IAD% and EAD% at most 60 %.
    SharedDecision,
    /// IAD% above 60 %.
    IntraArticularMajority { iad_pct: Share },
    /// Correct toward neutral without compromising the partial replacement.
    CorrectTowardNeutral,
    /// EAD% above 60 %.
    ExtraArticularMajority { ead_pct: Share },
    /// Femur/tibia split cannot be computed.
    BonySplitNotComputable,
    /// TD% at least 80 %.
    TibialPredominance { td_pct: Share },
    /// FD% at least 80 %.
    FemoralPredominance { fd_pct: Share },
    /// Neither bone reaches 80 %.
    SharedBonySplit { fd_pct: Share, td_pct: Share },
    /// Split the correction to avoid extreme single-site angles.
    SplitCorrection,
    /// No robust decision possible from the percentages.
    PercentagesNotConclusive,
}

/// A non-fatal warning raised alongside a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// GD (IAD + EAD) is zero or negative.
    InconsistentMeasurement { global_deformity: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finding_serializes_with_kind_tag() {
        let finding = Finding::IntraArticularMajority {
            iad_pct: Share::of(9.0, 10.0).unwrap(),
        };
        let json = serde_json::to_value(finding).unwrap();
        assert_eq!(json["kind"], "intra_articular_majority");
        assert_eq!(json["iad_pct"], serde_json::json!(90.0));
    }

    #[test]
    fn advisory_serializes_with_kind_tag() {
        let advisory = Advisory::InconsistentMeasurement {
            global_deformity: -1.0,
        };
        let json = serde_json::to_value(advisory).unwrap();
        assert_eq!(json["kind"], "inconsistent_measurement");
        assert_eq!(json["global_deformity"], serde_json::json!(-1.0));
    }
}
