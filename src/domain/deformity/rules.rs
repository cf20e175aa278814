//! Decision rules - ordered (predicate, conclusion) table.
//!
//! Rules are evaluated top to bottom and the first matching rule wins.
//! Conditions overlap, so order is part of the clinical formula.

use serde::{Deserialize, Serialize};

use super::{DeformityMetrics, Finding, Strategy};

/// EAD below this magnitude (degrees) is considered negligible.
pub const NEGLIGIBLE_EAD_DEGREES: f64 = 0.1;

/// Component share separating the gray zone from a majority deformity.
pub const MAJORITY_SHARE_THRESHOLD: f64 = 60.0;

/// Bony share from which a single-site osteotomy is indicated.
pub const SINGLE_SITE_SHARE_THRESHOLD: f64 = 80.0;

/// Name of the rule that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    NegligibleExtraArticular,
    GrayZone,
    IntraArticularMajority,
    ExtraArticularMajority,
    Fallback,
}

/// Decision and supporting findings produced by a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Conclusion {
    pub strategy: Strategy,
    pub findings: Vec<Finding>,
}

impl Conclusion {
    fn new(strategy: Strategy, findings: Vec<Finding>) -> Self {
        Self { strategy, findings }
    }
}

/// A guarded branch of the decision chain.
pub struct Rule {
    pub id: RuleId,
    pub applies: fn(&DeformityMetrics) -> bool,
    pub conclude: fn(&DeformityMetrics) -> Conclusion,
}

/// The decision chain, in priority order. The last rule always applies.
pub static RULES: [Rule; 5] = [
    Rule {
        id: RuleId::NegligibleExtraArticular,
        applies: |m| m.ead.abs() < NEGLIGIBLE_EAD_DEGREES && m.iad > 0.0,
        conclude: |_| {
            Conclusion::new(
                Strategy::PartialKneeProbable,
                vec![
                    Finding::NegligibleExtraArticular,
                    Finding::CorrelateWithSoftTissue,
                ],
            )
        },
    },
    Rule {
        id: RuleId::GrayZone,
        applies: |m| match (m.iad_pct, m.ead_pct) {
            (Some(iad), Some(ead)) => {
                iad.at_most(MAJORITY_SHARE_THRESHOLD) && ead.at_most(MAJORITY_SHARE_THRESHOLD)
            }
            _ => false,
        },
        conclude: |_| Conclusion::new(Strategy::GrayZone, vec![Finding::SharedDecision]),
    },
    Rule {
        id: RuleId::IntraArticularMajority,
        applies: |m| {
            m.iad_pct
                .is_some_and(|iad| iad.exceeds(MAJORITY_SHARE_THRESHOLD))
        },
        conclude: conclude_intra_articular,
    },
    Rule {
        id: RuleId::ExtraArticularMajority,
        applies: |m| {
            m.ead_pct
                .is_some_and(|ead| ead.exceeds(MAJORITY_SHARE_THRESHOLD))
        },
        conclude: conclude_extra_articular,
    },
    Rule {
        id: RuleId::Fallback,
        applies: |_| true,
        conclude: |_| {
            Conclusion::new(
                Strategy::Inconclusive,
                vec![Finding::PercentagesNotConclusive],
            )
        },
    },
];

fn conclude_intra_articular(m: &DeformityMetrics) -> Conclusion {
    let mut findings = Vec::with_capacity(2);
    if let Some(iad_pct) = m.iad_pct {
        findings.push(Finding::IntraArticularMajority { iad_pct });
    }
    findings.push(Finding::CorrectTowardNeutral);
    Conclusion::new(Strategy::PartialKneePreferred, findings)
}

fn conclude_extra_articular(m: &DeformityMetrics) -> Conclusion {
    let mut findings = Vec::with_capacity(3);
    if let Some(ead_pct) = m.ead_pct {
        findings.push(Finding::ExtraArticularMajority { ead_pct });
    }

    let (Some(fd_pct), Some(td_pct)) = (m.fd_pct, m.td_pct) else {
        findings.push(Finding::BonySplitNotComputable);
        return Conclusion::new(Strategy::OsteotomyUnspecified, findings);
    };

    let strategy = if td_pct.at_least(SINGLE_SITE_SHARE_THRESHOLD) {
        findings.push(Finding::TibialPredominance { td_pct });
        Strategy::TibialOsteotomy
    } else if fd_pct.at_least(SINGLE_SITE_SHARE_THRESHOLD) {
        findings.push(Finding::FemoralPredominance { fd_pct });
        Strategy::FemoralOsteotomy
    } else {
        findings.push(Finding::SharedBonySplit { fd_pct, td_pct });
        findings.push(Finding::SplitCorrection);
        Strategy::DoubleLevelOsteotomy
    };

    Conclusion::new(strategy, findings)
}

/// Evaluates the chain and returns the first matching rule's conclusion.
pub fn evaluate(metrics: &DeformityMetrics) -> (RuleId, Conclusion) {
    for rule in RULES.iter() {
        if (rule.applies)(metrics) {
            return (rule.id, (rule.conclude)(metrics));
        }
    }
    (
        RuleId::Fallback,
        Conclusion::new(
            Strategy::Inconclusive,
            vec![Finding::PercentagesNotConclusive],
        ),
    )
}
