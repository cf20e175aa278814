//! Number formatting for displayed quantities.
//!
//! Angles and deformity magnitudes use 1 decimal, percentages 0 decimals.
//! Rounding is half away from zero and undefined values print as an em-dash.

use crate::domain::foundation::Share;

/// Marker printed in place of an undefined value.
pub const UNDEFINED: &str = "—";

/// Formats `value` with a fixed number of decimals.
pub fn fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return UNDEFINED.to_string();
    }

    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    let mut rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    // -0.0 prints as "-0"
    if rounded == 0.0 {
        rounded = 0.0;
    }
    format!("{:.*}", decimals, rounded)
}

/// Formats an angle or deformity magnitude (1 decimal).
pub fn degrees(value: f64) -> String {
    fixed(value, 1)
}

/// Formats a share as a bare number (0 decimals).
pub fn share_value(share: Share) -> String {
    fixed(share.value(), 0)
}

/// Formats an optional share for a metrics table: `"40 %"` or the undefined marker.
pub fn share_metric(share: Option<Share>) -> String {
    match share {
        Some(share) => format!("{} %", share_value(share)),
        None => UNDEFINED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_to_requested_decimals() {
        assert_eq!(fixed(4.0, 1), "4.0");
        assert_eq!(fixed(53.333_333, 0), "53");
        assert_eq!(fixed(46.666_666, 0), "47");
        assert_eq!(fixed(-4.04, 1), "-4.0");
    }

    #[test]
    fn fixed_rounds_half_away_from_zero() {
        assert_eq!(fixed(0.5, 0), "1");
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-2.5, 0), "-3");
    }

    #[test]
    fn fixed_never_prints_negative_zero() {
        assert_eq!(fixed(-0.0, 1), "0.0");
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.4, 0), "0");
    }

    #[test]
    fn fixed_marks_non_finite_as_undefined() {
        assert_eq!(fixed(f64::NAN, 1), UNDEFINED);
        assert_eq!(fixed(f64::INFINITY, 0), UNDEFINED);
    }

    #[test]
    fn share_metric_appends_percent_sign() {
        assert_eq!(share_metric(Share::of(4.0, 10.0)), "40 %");
        assert_eq!(share_metric(None), UNDEFINED);
    }

    #[test]
    fn share_value_is_bare_number() {
        assert_eq!(share_value(Share::of(8.0, 9.0).unwrap()), "89");
    }
}
