//! Surgical strategy recommended by the decision rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of decisions the rule chain can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// EAD negligible, deformity intra-articular.
    PartialKneeProbable,
    /// Neither component exceeds 60 %.
    GrayZone,
    /// Intra-articular component above 60 %.
    PartialKneePreferred,
    /// Extra-articular majority without a computable bony split.
    OsteotomyUnspecified,
    /// High tibial osteotomy.
    TibialOsteotomy,
    /// Distal femoral osteotomy.
    FemoralOsteotomy,
    /// Double-level osteotomy.
    DoubleLevelOsteotomy,
    /// Percentages do not support a decision.
    Inconclusive,
}

impl Strategy {
    /// Returns the decision label.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::PartialKneeProbable => "PUC (UKA) probable",
            Strategy::GrayZone => "Gray zone: PUC vs Osteotomy (discussion)",
            Strategy::PartialKneePreferred => "PUC (UKA) preferred",
            Strategy::OsteotomyUnspecified => "Osteotomy (type unspecified)",
            Strategy::TibialOsteotomy => "Tibial osteotomy (HTO) – single-site",
            Strategy::FemoralOsteotomy => "Femoral osteotomy (DFO) – single-site",
            Strategy::DoubleLevelOsteotomy => "Double-level osteotomy (DLO) – tibia + femur",
            Strategy::Inconclusive => "Inconclusive result (check inputs)",
        }
    }

    /// Returns the stable machine code.
    pub fn code(&self) -> &'static str {
        match self {
            Strategy::PartialKneeProbable => "partial_knee_probable",
            Strategy::GrayZone => "gray_zone",
            Strategy::PartialKneePreferred => "partial_knee_preferred",
            Strategy::OsteotomyUnspecified => "osteotomy_unspecified",
            Strategy::TibialOsteotomy => "tibial_osteotomy",
            Strategy::FemoralOsteotomy => "femoral_osteotomy",
            Strategy::DoubleLevelOsteotomy => "double_level_osteotomy",
            Strategy::Inconclusive => "inconclusive",
        }
    }

    /// Returns true for any osteotomy variant.
    pub fn is_osteotomy(&self) -> bool {
        matches!(
            self,
            Strategy::OsteotomyUnspecified
                | Strategy::TibialOsteotomy
                | Strategy::FemoralOsteotomy
                | Strategy::DoubleLevelOsteotomy
        )
    }

    /// Returns true when partial knee replacement is recommended.
    pub fn favors_partial_knee(&self) -> bool {
        matches!(
            self,
            Strategy::PartialKneeProbable | Strategy::PartialKneePreferred
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
