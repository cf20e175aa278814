//! Analysis report - localized, serializable view of an assessment.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use super::format::{degrees, share_metric};
use super::wording::{advisory_text, bony_split, finding_text, headings, strategy_label};
use crate::domain::deformity::{Assessment, DeformityMetrics, RuleId, Strategy};
use crate::domain::foundation::Language;

/// Formatted metric values, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsDisplay {
    pub iad: String,
    pub ead: String,
    pub gd: String,
    pub iad_pct: String,
    pub ead_pct: String,
    pub bony_split: String,
}

impl MetricsDisplay {
    /// Formats metrics: degrees to 1 decimal, shares to 0 decimals.
    pub fn new(metrics: &DeformityMetrics, lang: Language) -> Self {
        Self {
            iad: degrees(metrics.iad),
            ead: degrees(metrics.ead),
            gd: degrees(metrics.gd),
            iad_pct: share_metric(metrics.iad_pct),
            ead_pct: share_metric(metrics.ead_pct),
            bony_split: bony_split(metrics, lang),
        }
    }
}

/// Decision, rationale, warnings and metrics in one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub language: Language,
    pub decision: String,
    pub strategy: Strategy,
    pub rule: RuleId,
    pub rationale: Vec<String>,
    pub warnings: Vec<String>,
    pub metrics: DeformityMetrics,
    pub display: MetricsDisplay,
}

impl AnalysisReport {
    /// Builds the report for an assessment.
    pub fn build(assessment: &Assessment, lang: Language) -> Self {
        Self {
            language: lang,
            decision: strategy_label(assessment.strategy, lang).to_string(),
            strategy: assessment.strategy,
            rule: assessment.rule,
            rationale: assessment
                .findings
                .iter()
                .map(|f| finding_text(f, lang))
                .collect(),
            warnings: assessment
                .advisories
                .iter()
                .map(|a| advisory_text(a, lang))
                .collect(),
            metrics: assessment.metrics,
            display: MetricsDisplay::new(&assessment.metrics, lang),
        }
    }

    /// Renders the report as plain text for a terminal.
    pub fn render_text(&self) -> String {
        let h = headings(self.language);
        let mut out = String::new();

        let _ = writeln!(out, "{}: {}", h.decision, self.decision);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", h.rationale);
        for line in &self.rationale {
            let _ = writeln!(out, "  • {}", line);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}:", h.metrics);
        let _ = writeln!(out, "  IAD   {}°", self.display.iad);
        let _ = writeln!(out, "  EAD   {}°", self.display.ead);
        let _ = writeln!(out, "  GD    {}°", self.display.gd);
        let _ = writeln!(out, "  IAD%  {}", self.display.iad_pct);
        let _ = writeln!(out, "  EAD%  {}", self.display.ead_pct);
        let _ = writeln!(out, "  {}: {}", h.bony_split, self.display.bony_split);

        if !self.warnings.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}:", h.warnings);
            for line in &self.warnings {
                let _ = writeln!(out, "  ! {}", line);
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::deformity::{DeformityAnalyzer, KneeMeasurements};

    #[test]
    fn demo_report_in_english() {
        let assessment = DeformityAnalyzer::analyze(&KneeMeasurements::DEMO);
        let report = AnalysisReport::build(&assessment, Language::En);

        assert_eq!(report.decision, "Gray zone: PUC vs Osteotomy (discussion)");
        assert_eq!(report.rule, RuleId::GrayZone);
        assert_eq!(report.rationale.len(), 1);
        assert!(report.warnings.is_empty());
        assert_eq!(
            report.display,
            MetricsDisplay {
                iad: "4.0".to_string(),
                ead: "6.0".to_string(),
                gd: "10.0".to_string(),
                iad_pct: "40 %".to_string(),
                ead_pct: "60 %".to_string(),
                bony_split: "FD% 50 % / TD% 50 %".to_string(),
            }
        );
    }

    #[test]
    fn undefined_shares_display_as_marker() {
        let assessment = DeformityAnalyzer::compute(90.0, 86.0, 4.0).unwrap();
        let report = AnalysisReport::build(&assessment, Language::En);

        assert_eq!(report.display.iad_pct, "—");
        assert_eq!(report.display.ead_pct, "—");
        assert_eq!(report.display.gd, "0.0");
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn render_text_lists_bullets_and_warnings() {
        let assessment = DeformityAnalyzer::compute(90.0, 85.0, 4.0).unwrap();
        let text = AnalysisReport::build(&assessment, Language::En).render_text();

        assert!(text.starts_with("Decision: Double-level osteotomy (DLO) – tibia + femur\n"));
        assert!(text.contains("  • EAD% > 60% (500%): deformity mostly extra-articular.\n"));
        assert!(text.contains("  GD    -1.0°\n"));
        assert!(text.contains("Warnings:\n  ! Warning: GD ≤ 0"));
    }

    #[test]
    fn render_text_in_french_uses_french_headings() {
        let assessment = DeformityAnalyzer::compute(87.0, 87.0, 5.0).unwrap();
        let text = AnalysisReport::build(&assessment, Language::Fr).render_text();

        assert!(text.starts_with("Décision: PUC (UKA) probable\n"));
        assert!(text.contains("Justification:\n"));
        assert!(!text.contains("Avertissements"));
    }

    #[test]
    fn report_serializes_undefined_metrics_as_null() {
        let assessment = DeformityAnalyzer::compute(87.0, 87.0, 5.0).unwrap();
        let json = serde_json::to_value(AnalysisReport::build(&assessment, Language::En)).unwrap();

        assert_eq!(json["strategy"], "partial_knee_probable");
        assert_eq!(json["rule"], "negligible_extra_articular");
        assert!(json["metrics"]["fd_pct"].is_null());
        assert_eq!(json["display"]["bony_split"], "Not computable (EAD = 0)");
    }
}
