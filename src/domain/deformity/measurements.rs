//! Validated knee angle measurements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Angle, ValidationError};

/// A raw angle as received from a host: a number or unparsed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AngleInput {
    Number(f64),
    Text(String),
}

impl AngleInput {
    /// Resolves the input to a finite value.
    ///
    /// Text is trimmed and parsed as a decimal number; empty, non-numeric and
    /// non-finite values resolve to `None`.
    pub fn resolve(&self) -> Option<f64> {
        let value = match self {
            AngleInput::Number(value) => *value,
            AngleInput::Text(text) => text.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for AngleInput {
    fn from(value: f64) -> Self {
        AngleInput::Number(value)
    }
}

impl From<&str> for AngleInput {
    fn from(text: &str) -> Self {
        AngleInput::Text(text.to_string())
    }
}

/// The three goniometric angles, in degrees.
///
/// Construction guarantees all three are finite and `jlca >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KneeMeasurements {
    mpta: f64,
    ldfa: f64,
    jlca: f64,
}

impl KneeMeasurements {
    /// Reference demo preset.
    pub const DEMO: Self = Self {
        mpta: 84.0,
        ldfa: 90.0,
        jlca: 4.0,
    };

    /// Validates numeric measurements.
    ///
    /// # Errors
    /// - `InvalidInput` naming every non-finite angle
    /// - `NegativeJlca` when all angles are finite and `jlca < 0`
    pub fn try_new(mpta: f64, ldfa: f64, jlca: f64) -> Result<Self, ValidationError> {
        Self::checked([
            (Angle::Mpta, mpta.is_finite().then_some(mpta)),
            (Angle::Ldfa, ldfa.is_finite().then_some(ldfa)),
            (Angle::Jlca, jlca.is_finite().then_some(jlca)),
        ])
    }

    /// Validates raw host inputs. A missing input counts as invalid.
    pub fn from_inputs(
        mpta: Option<&AngleInput>,
        ldfa: Option<&AngleInput>,
        jlca: Option<&AngleInput>,
    ) -> Result<Self, ValidationError> {
        Self::checked([
            (Angle::Mpta, mpta.and_then(AngleInput::resolve)),
            (Angle::Ldfa, ldfa.and_then(AngleInput::resolve)),
            (Angle::Jlca, jlca.and_then(AngleInput::resolve)),
        ])
    }

    /// Validates three text fields, e.g. form or command line values.
    pub fn parse(mpta: &str, ldfa: &str, jlca: &str) -> Result<Self, ValidationError> {
        Self::from_inputs(
            Some(&AngleInput::from(mpta)),
            Some(&AngleInput::from(ldfa)),
            Some(&AngleInput::from(jlca)),
        )
    }

    fn checked(values: [(Angle, Option<f64>); 3]) -> Result<Self, ValidationError> {
        let invalid: Vec<Angle> = values
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(angle, _)| *angle)
            .collect();
        if !invalid.is_empty() {
            return Err(ValidationError::invalid_input(invalid));
        }

        let [(_, Some(mpta)), (_, Some(ldfa)), (_, Some(jlca))] = values else {
            return Err(ValidationError::invalid_input(Angle::ALL));
        };

        if jlca < 0.0 {
            return Err(ValidationError::negative_jlca(jlca));
        }

        Ok(Self { mpta, ldfa, jlca })
    }

    pub fn mpta(&self) -> f64 {
        self.mpta
    }

    pub fn ldfa(&self) -> f64 {
        self.ldfa
    }

    pub fn jlca(&self) -> f64 {
        self.jlca
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_accepts_finite_values() {
        let m = KneeMeasurements::try_new(84.0, 90.0, 4.0).unwrap();
        assert_eq!(m.mpta(), 84.0);
        assert_eq!(m.ldfa(), 90.0);
        assert_eq!(m.jlca(), 4.0);
    }

    #[test]
    fn try_new_accepts_zero_jlca_and_negative_angles() {
        assert!(KneeMeasurements::try_new(80.0, 95.0, 0.0).is_ok());
        assert!(KneeMeasurements::try_new(-10.0, -5.0, 0.0).is_ok());
    }

    #[test]
    fn try_new_rejects_non_finite_values() {
        let err = KneeMeasurements::try_new(f64::NAN, 90.0, f64::INFINITY).unwrap_err();
        assert_eq!(err, ValidationError::invalid_input([Angle::Mpta, Angle::Jlca]));
    }

    #[test]
    fn try_new_rejects_negative_jlca() {
        let err = KneeMeasurements::try_new(84.0, 90.0, -2.0).unwrap_err();
        assert_eq!(err, ValidationError::negative_jlca(-2.0));
    }

    #[test]
    fn invalid_input_takes_precedence_over_negative_jlca() {
        let err = KneeMeasurements::try_new(f64::NAN, 90.0, -2.0).unwrap_err();
        assert_eq!(err, ValidationError::invalid_input([Angle::Mpta]));
    }

    #[test]
    fn negative_zero_jlca_is_accepted() {
        assert!(KneeMeasurements::try_new(84.0, 90.0, -0.0).is_ok());
    }

    #[test]
    fn parse_trims_and_reads_decimals() {
        let m = KneeMeasurements::parse(" 84.0", "90 ", "4").unwrap();
        assert_eq!(m, KneeMeasurements::DEMO);
    }

    #[test]
    fn parse_rejects_empty_field() {
        let err = KneeMeasurements::parse("", "90", "4").unwrap_err();
        assert_eq!(err, ValidationError::invalid_input([Angle::Mpta]));
    }

    #[test]
    fn parse_rejects_non_numeric_and_infinite_text() {
        let err = KneeMeasurements::parse("abc", "inf", "4").unwrap_err();
        assert_eq!(err, ValidationError::invalid_input([Angle::Mpta, Angle::Ldfa]));
    }

    #[test]
    fn from_inputs_treats_missing_as_invalid() {
        let ldfa = AngleInput::from(90.0);
        let err = KneeMeasurements::from_inputs(None, Some(&ldfa), None).unwrap_err();
        assert_eq!(err, ValidationError::invalid_input([Angle::Mpta, Angle::Jlca]));
    }

    #[test]
    fn angle_input_deserializes_numbers_and_strings() {
        let number: AngleInput = serde_json::from_str("84.5").unwrap();
        let text: AngleInput = serde_json::from_str("\"84.5\"").unwrap();
        assert_eq!(number.resolve(), Some(84.5));
        assert_eq!(text.resolve(), Some(84.5));
    }
}
