//! Share value object: a percentage that may be undefined.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A part-of-whole ratio expressed in percent.
///
/// Unlike a bounded percentage, a share may fall below 0 or above 100 when the
/// whole and the part have opposite signs. A share only exists when the
/// quotient is finite; callers receive `None` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Share(f64);

impl Share {
    /// Computes `part / whole * 100`.
    ///
    /// # Edge Cases
    /// - `whole == 0`: Returns `None`
    /// - Non-finite quotient (overflow, non-finite operands): Returns `None`
    pub fn of(part: f64, whole: f64) -> Option<Self> {
        if whole == 0.0 {
            return None;
        }
        let value = (part / whole) * 100.0;
        value.is_finite().then_some(Self(value))
    }

    /// Returns the value in percent.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the share is strictly above `threshold` percent.
    pub fn exceeds(&self, threshold: f64) -> bool {
        self.0 > threshold
    }

    /// Returns true if the share is at most `threshold` percent.
    pub fn at_most(&self, threshold: f64) -> bool {
        self.0 <= threshold
    }

    /// Returns true if the share is at least `threshold` percent.
    pub fn at_least(&self, threshold: f64) -> bool {
        self.0 >= threshold
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_of_computes_percentage() {
        let share = Share::of(4.0, 10.0).unwrap();
        assert_eq!(share.value(), 40.0);
    }

    #[test]
    fn share_of_zero_whole_is_undefined() {
        assert!(Share::of(4.0, 0.0).is_none());
        assert!(Share::of(0.0, 0.0).is_none());
        assert!(Share::of(4.0, -0.0).is_none());
    }

    #[test]
    fn share_of_overflow_is_undefined() {
        assert!(Share::of(f64::MAX, f64::MIN_POSITIVE).is_none());
    }

    #[test]
    fn share_may_exceed_hundred_or_be_negative() {
        assert_eq!(Share::of(-5.0, -1.0).unwrap().value(), 500.0);
        assert_eq!(Share::of(4.0, -1.0).unwrap().value(), -400.0);
    }

    #[test]
    fn share_threshold_comparisons_are_inclusive_where_named() {
        let share = Share::of(6.0, 10.0).unwrap();
        assert!(share.at_most(60.0));
        assert!(share.at_least(60.0));
        assert!(!share.exceeds(60.0));
    }

    #[test]
    fn share_serializes_as_number() {
        let json = serde_json::to_string(&Share::of(1.0, 4.0)).unwrap();
        assert_eq!(json, "25.0");
        let none: Option<Share> = None;
        assert_eq!(serde_json::to_string(&none).unwrap(), "null");
    }
}
