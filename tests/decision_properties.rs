//! Property tests for the deformity decomposition and rule chain.

use proptest::prelude::*;

use knee_planner::adapters::display::AnalysisReport;
use knee_planner::domain::deformity::{
    Advisory, DeformityAnalyzer, KneeMeasurements, RuleId, Strategy as Orientation,
};
use knee_planner::domain::foundation::{ErrorCode, Language};

fn any_angle() -> impl Strategy<Value = f64> {
    60.0f64..120.0
}

fn any_jlca() -> impl Strategy<Value = f64> {
    0.0f64..20.0
}

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(100.0);
    (a - b).abs() <= scale * 1e-9
}

proptest! {
    #[test]
    fn global_deformity_is_exact_sum(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let assessment = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();
        let m = assessment.metrics;

        prop_assert_eq!(m.iad, jlca);
        prop_assert_eq!(m.ead, ldfa - mpta);
        prop_assert_eq!(m.gd, m.iad + m.ead);
    }

    #[test]
    fn analysis_is_idempotent(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let first = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();
        let second = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(
            AnalysisReport::build(&first, Language::Fr),
            AnalysisReport::build(&second, Language::Fr)
        );
    }

    #[test]
    fn shares_are_complementary_when_defined(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let m = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap().metrics;

        if let (Some(iad), Some(ead)) = (m.iad_pct, m.ead_pct) {
            prop_assert!(close(iad.value() + ead.value(), 100.0));
        }
        if let (Some(fd), Some(td)) = (m.fd_pct, m.td_pct) {
            prop_assert!(close(fd.value() + td.value(), 100.0));
        }
    }

    #[test]
    fn zero_extra_articular_with_intra_articular_is_partial_knee(
        mpta in any_angle(),
        jlca in 0.01f64..20.0,
    ) {
        let assessment = DeformityAnalyzer::compute(mpta, mpta, jlca).unwrap();

        prop_assert_eq!(assessment.rule, RuleId::NegligibleExtraArticular);
        prop_assert_eq!(assessment.strategy, Orientation::PartialKneeProbable);
    }

    #[test]
    fn non_positive_global_deformity_is_flagged(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let assessment = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();
        let flagged = assessment
            .advisories
            .iter()
            .any(|a| matches!(a, Advisory::InconsistentMeasurement { .. }));

        prop_assert_eq!(flagged, assessment.metrics.gd <= 0.0);
    }

    #[test]
    fn every_decision_has_a_rationale(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let assessment = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();

        prop_assert!(!assessment.findings.is_empty());
        prop_assert_eq!(assessment.decision(), assessment.strategy.label());
    }

    #[test]
    fn negative_jlca_is_always_rejected(mpta in any_angle(), ldfa in any_angle(), jlca in -20.0f64..-0.001) {
        let error = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap_err();
        prop_assert_eq!(error.code(), ErrorCode::NegativeJlca);
    }

    #[test]
    fn text_parsing_matches_numeric_input(mpta in any_angle(), ldfa in any_angle(), jlca in any_jlca()) {
        let parsed = KneeMeasurements::parse(
            &mpta.to_string(),
            &format!("  {ldfa}  "),
            &jlca.to_string(),
        )
        .unwrap();

        prop_assert_eq!(parsed, KneeMeasurements::try_new(mpta, ldfa, jlca).unwrap());
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn reference_scenarios() {
    let cases = [
        ((84.0, 90.0, 4.0), Orientation::GrayZone),
        ((87.0, 87.0, 5.0), Orientation::PartialKneeProbable),
        ((80.0, 95.0, 0.0), Orientation::DoubleLevelOsteotomy),
        ((90.0, 86.0, 4.0), Orientation::Inconclusive),
        ((90.0, 85.0, 4.0), Orientation::DoubleLevelOsteotomy),
        ((79.0, 89.0, 0.0), Orientation::TibialOsteotomy),
        ((85.0, 95.0, 0.0), Orientation::FemoralOsteotomy),
        ((88.0, 92.0, 6.0), Orientation::GrayZone),
    ];

    for ((mpta, ldfa, jlca), expected) in cases {
        let assessment = DeformityAnalyzer::compute(mpta, ldfa, jlca).unwrap();
        assert_eq!(
            assessment.strategy, expected,
            "{mpta}/{ldfa}/{jlca} gave {:?}",
            assessment.strategy
        );
    }
}

#[test]
fn invalid_and_negative_inputs() {
    let invalid = KneeMeasurements::parse("", "90", "4").unwrap_err();
    assert_eq!(invalid.code(), ErrorCode::InvalidInput);

    let negative = KneeMeasurements::parse("84", "90", "-2").unwrap_err();
    assert_eq!(negative.code(), ErrorCode::NegativeJlca);
}
