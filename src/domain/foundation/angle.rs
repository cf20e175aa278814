//! Angle identifiers for the three goniometric measurements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three measured knee angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Angle {
    /// Medial Proximal Tibial Angle
    Mpta,
    /// Lateral Distal Femoral Angle
    Ldfa,
    /// Joint Line Convergence Angle
    Jlca,
}

impl Angle {
    /// All angles in input order.
    pub const ALL: [Angle; 3] = [Angle::Mpta, Angle::Ldfa, Angle::Jlca];

    /// Returns the clinical abbreviation.
    pub fn label(&self) -> &'static str {
        match self {
            Angle::Mpta => "MPTA",
            Angle::Ldfa => "LDFA",
            Angle::Jlca => "JLCA",
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
