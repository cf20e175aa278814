//! Localized wording for decisions, rationale, advisories and errors.

use super::format::{share_value, UNDEFINED};
use crate::domain::deformity::{Advisory, DeformityMetrics, Finding, Strategy};
use crate::domain::foundation::{Angle, Language, ValidationError};

/// Returns the decision label in `lang`.
pub fn strategy_label(strategy: Strategy, lang: Language) -> &'static str {
    match lang {
        Language::En => strategy.label(),
        Language::Fr => match strategy {
            Strategy::PartialKneeProbable => "PUC (UKA) probable",
            Strategy::GrayZone => "Zone grise : PUC vs Ostéotomie (discussion)",
            Strategy::PartialKneePreferred => "PUC (UKA) plutôt indiquée",
            Strategy::OsteotomyUnspecified => "Ostéotomie (type à préciser)",
            Strategy::TibialOsteotomy => "Ostéotomie tibiale (HTO) – simple",
            Strategy::FemoralOsteotomy => "Ostéotomie fémorale (DFO) – simple",
            Strategy::DoubleLevelOsteotomy => "Double-level osteotomy (DLO) – tibia + fémur",
            Strategy::Inconclusive => "Résultat non concluant (vérifier les entrées)",
        },
    }
}

/// Returns one rationale bullet in `lang`.
pub fn finding_text(finding: &Finding, lang: Language) -> String {
    match (finding, lang) {
        (Finding::NegligibleExtraArticular, Language::En) => {
            "EAD ~ 0: negligible extra-articular component, deformity mostly intra-articular (JLCA).".to_string()
        }
        (Finding::NegligibleExtraArticular, Language::Fr) => {
            "EAD ~ 0 : composante extra-articulaire négligeable, déformation plutôt intra-articulaire (JLCA).".to_string()
        }
        (Finding::CorrelateWithSoftTissue, Language::En) => {
            "Correlate with ligament status and cartilage topography.".to_string()
        }
        (Finding::CorrelateWithSoftTissue, Language::Fr) => {
            "À confronter au statut ligamentaire et à la topographie cartilagineuse.".to_string()
        }
        (Finding::SharedDecision, Language::En) => {
            "IAD% ≤ 60% and EAD% ≤ 60%: shared decision based on age, activity, meniscus/cartilage, laxity and expectations.".to_string()
        }
        (Finding::SharedDecision, Language::Fr) => {
            "IAD% ≤ 60% et EAD% ≤ 60% : décision partagée selon âge, sport, ménisque/cartilage, laxité, attentes.".to_string()
        }
        (Finding::IntraArticularMajority { iad_pct }, Language::En) => format!(
            "IAD% > 60% ({}%): deformity mostly intra-articular (JLCA).",
            share_value(*iad_pct)
        ),
        (Finding::IntraArticularMajority { iad_pct }, Language::Fr) => format!(
            "IAD% > 60% ({}%) : déformation majoritairement intra-articulaire (JLCA).",
            share_value(*iad_pct)
        ),
        (Finding::CorrectTowardNeutral, Language::En) => {
            "Goal: correct toward neutral without compromising the UKA.".to_string()
        }
        (Finding::CorrectTowardNeutral, Language::Fr) => {
            "Objectif : correction vers le neutre sans compromettre la PUC.".to_string()
        }
        (Finding::ExtraArticularMajority { ead_pct }, Language::En) => format!(
            "EAD% > 60% ({}%): deformity mostly extra-articular.",
            share_value(*ead_pct)
        ),
        (Finding::ExtraArticularMajority { ead_pct }, Language::Fr) => format!(
            "EAD% > 60% ({}%) : déformation majoritairement extra-articulaire.",
            share_value(*ead_pct)
        ),
        (Finding::BonySplitNotComputable, Language::En) => {
            "Femur/tibia split not computable.".to_string()
        }
        (Finding::BonySplitNotComputable, Language::Fr) => {
            "Répartition fémur/tibia non calculable.".to_string()
        }
        (Finding::TibialPredominance { td_pct }, Language::En) => format!(
            "TD% ≥ 80% ({}%): predominant tibial component.",
            share_value(*td_pct)
        ),
        (Finding::TibialPredominance { td_pct }, Language::Fr) => format!(
            "TD% ≥ 80% ({}%) : composante tibiale prédominante.",
            share_value(*td_pct)
        ),
        (Finding::FemoralPredominance { fd_pct }, Language::En) => format!(
            "FD% ≥ 80% ({}%): predominant femoral component.",
            share_value(*fd_pct)
        ),
        (Finding::FemoralPredominance { fd_pct }, Language::Fr) => format!(
            "FD% ≥ 80% ({}%) : composante fémorale prédominante.",
            share_value(*fd_pct)
        ),
        (Finding::SharedBonySplit { fd_pct, td_pct }, Language::En) => format!(
            "Shared split (FD% {}% / TD% {}%).",
            share_value(*fd_pct),
            share_value(*td_pct)
        ),
        (Finding::SharedBonySplit { fd_pct, td_pct }, Language::Fr) => format!(
            "Répartition partagée (FD% {}% / TD% {}%).",
            share_value(*fd_pct),
            share_value(*td_pct)
        ),
        (Finding::SplitCorrection, Language::En) => {
            "Principle: split the correction to avoid extreme single-site angles.".to_string()
        }
        (Finding::SplitCorrection, Language::Fr) => {
            "Principe : répartir la correction pour éviter des angles extrêmes en mono-site.".to_string()
        }
        (Finding::PercentagesNotConclusive, Language::En) => {
            "The percentages do not support a robust decision.".to_string()
        }
        (Finding::PercentagesNotConclusive, Language::Fr) => {
            "Les pourcentages ne permettent pas une décision robuste.".to_string()
        }
    }
}

/// Returns the warning text for an advisory.
pub fn advisory_text(advisory: &Advisory, lang: Language) -> String {
    match (advisory, lang) {
        (Advisory::InconsistentMeasurement { .. }, Language::En) => {
            "Warning: GD ≤ 0 (IAD + EAD). Check measurement consistency.".to_string()
        }
        (Advisory::InconsistentMeasurement { .. }, Language::Fr) => {
            "Attention : GD ≤ 0 (IAD + EAD). Vérifiez la cohérence des mesures.".to_string()
        }
    }
}

/// Returns the user-facing message for a validation failure.
pub fn error_message(error: &ValidationError, lang: Language) -> String {
    match (error, lang) {
        (ValidationError::InvalidInput { fields }, Language::En) => format!(
            "Please enter MPTA, LDFA and JLCA (numeric values). Invalid: {}.",
            join(fields)
        ),
        (ValidationError::InvalidInput { fields }, Language::Fr) => format!(
            "Veuillez saisir MPTA, LDFA et JLCA (valeurs numériques). Invalide : {}.",
            join(fields)
        ),
        (ValidationError::NegativeJlca { .. }, Language::En) => {
            "JLCA cannot be negative in this calculation.".to_string()
        }
        (ValidationError::NegativeJlca { .. }, Language::Fr) => {
            "JLCA ne peut pas être négatif dans ce calcul.".to_string()
        }
    }
}

/// Returns the femur/tibia split line.
pub fn bony_split(metrics: &DeformityMetrics, lang: Language) -> String {
    match (metrics.fd_pct, metrics.td_pct) {
        (Some(fd), Some(td)) => format!(
            "FD% {} % / TD% {} %",
            share_value(fd),
            share_value(td)
        ),
        _ => match lang {
            Language::En => "Not computable (EAD = 0)".to_string(),
            Language::Fr => "Non calculable (EAD = 0)".to_string(),
        },
    }
}

/// Section headings for the text report.
pub struct Headings {
    pub decision: &'static str,
    pub rationale: &'static str,
    pub metrics: &'static str,
    pub bony_split: &'static str,
    pub warnings: &'static str,
}

/// Returns the text report headings in `lang`.
pub fn headings(lang: Language) -> Headings {
    match lang {
        Language::En => Headings {
            decision: "Decision",
            rationale: "Rationale",
            metrics: "Metrics",
            bony_split: "Bony split",
            warnings: "Warnings",
        },
        Language::Fr => Headings {
            decision: "Décision",
            rationale: "Justification",
            metrics: "Mesures",
            bony_split: "Répartition osseuse",
            warnings: "Avertissements",
        },
    }
}

fn join(fields: &[Angle]) -> String {
    if fields.is_empty() {
        return UNDEFINED.to_string();
    }
    fields
        .iter()
        .map(Angle::label)
        .collect::<Vec<_>>()
        .join(", ")
}
