mod angles;

pub use angles::{deg_to_rad, rad_to_deg};

/// Returns the smaller of two values, or NaN if either value is NaN. Unlike `f64::min`, a NaN
/// operand is never silently discarded, so a malformed input stays visible all the way through
/// to the computed results.
///
/// # Arguments
///
/// * `a`: the first value
/// * `b`: the second value
///
/// returns: f64
///
/// # Examples
///
/// ```
/// use planform::common::nan_min;
/// assert_eq!(nan_min(3.0, 2.0), 2.0);
/// assert!(nan_min(f64::NAN, 2.0).is_nan());
/// ```
pub fn nan_min(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Returns the larger of two values, or NaN if either value is NaN.
///
/// # Examples
///
/// ```
/// use planform::common::nan_max;
/// assert_eq!(nan_max(3.0, 2.0), 3.0);
/// assert!(nan_max(3.0, f64::NAN).is_nan());
/// ```
pub fn nan_max(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// Evenly spaced sample values from `start` to `end`, both inclusive. A count of one gives
/// just `start`, and a count of zero gives an empty vec.
///
/// # Arguments
///
/// * `start`: the first value
/// * `end`: the last value, when `count` is at least two
/// * `count`: the number of values
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use planform::common::linear_space;
/// assert_eq!(linear_space(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
/// assert_eq!(linear_space(4.0, 9.0, 1), vec![4.0]);
/// assert!(linear_space(4.0, 9.0, 0).is_empty());
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![start; count];
    }

    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Formats a value with a fixed number of decimals, rounding the way a browser's
/// `Number.prototype.toFixed` does. A value lying exactly halfway between two outputs rounds
/// away from zero (`147.25` becomes `147.3` at one decimal, where `{:.1}` gives `147.2`), and
/// negative zero prints without a sign. NaN prints as `NaN` and infinities as `Infinity` and
/// `-Infinity`.
///
/// Exact ties are detected for up to 15 decimals; the labels here use one or two.
///
/// # Arguments
///
/// * `value`: the value to format
/// * `digits`: the number of decimals
///
/// returns: String
///
/// # Examples
///
/// ```
/// use planform::common::to_fixed;
/// assert_eq!(to_fixed(147.25, 1), "147.3");
/// assert_eq!(to_fixed(-0.0, 1), "0.0");
/// assert_eq!(to_fixed(1.005, 2), "1.00");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    // The scaled value only sits on .5 for a real tie if the multiplication was exact
    let scale = 10.0_f64.powi(digits as i32);
    let scaled = magnitude * scale;
    let is_tie = scaled.fract() == 0.5 && magnitude.mul_add(scale, -scaled) == 0.0;

    // Nudging a tie up by one ulp makes the exact-decimal formatter round it up
    let magnitude = if is_tie {
        f64::from_bits(magnitude.to_bits() + 1)
    } else {
        magnitude
    };

    format!("{}{:.*}", sign, digits, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1.0, 2.0, 1.0)]
    #[test_case(2.0, 1.0, 1.0)]
    #[test_case(-5.0, 0.0, -5.0)]
    fn test_nan_min_finite(a: f64, b: f64, expected: f64) {
        assert_eq!(nan_min(a, b), expected);
    }

    #[test_case(1.0, 2.0, 2.0)]
    #[test_case(2.0, 1.0, 2.0)]
    #[test_case(-5.0, 0.0, 0.0)]
    fn test_nan_max_finite(a: f64, b: f64, expected: f64) {
        assert_eq!(nan_max(a, b), expected);
    }

    #[test]
    fn test_nan_operands_propagate() {
        assert!(nan_min(f64::NAN, 1.0).is_nan());
        assert!(nan_min(1.0, f64::NAN).is_nan());
        assert!(nan_max(f64::NAN, 1.0).is_nan());
        assert!(nan_max(1.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_linear_space_ends() {
        let values = linear_space(-2.0, 2.0, 5);
        assert_eq!(values, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    }

    #[test_case(0, &[] ; "empty")]
    #[test_case(1, &[3.0] ; "single value is the start")]
    #[test_case(2, &[3.0, 7.0] ; "two values are the ends")]
    fn test_linear_space_short_counts(count: usize, expected: &[f64]) {
        assert_eq!(linear_space(3.0, 7.0, count), expected);
    }

    #[test_case(147.25, 1, "147.3" ; "tie rounds up")]
    #[test_case(-147.25, 1, "-147.3" ; "negative tie rounds away from zero")]
    #[test_case(0.125, 2, "0.13" ; "two decimal tie")]
    #[test_case(2.5, 0, "3" ; "tie with no decimals")]
    #[test_case(1.005, 2, "1.00" ; "value just below a tie")]
    #[test_case(147.2426, 1, "147.2" ; "ordinary rounding down")]
    #[test_case(180.8575, 1, "180.9" ; "ordinary rounding up")]
    #[test_case(225000.0, 2, "225000.00" ; "whole number")]
    #[test_case(-0.04, 1, "-0.0" ; "small negative keeps its sign")]
    fn test_to_fixed(value: f64, digits: usize, expected: &str) {
        assert_eq!(to_fixed(value, digits), expected);
    }

    #[test]
    fn test_to_fixed_negative_zero() {
        assert_eq!(to_fixed(-0.0, 1), "0.0");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_to_fixed_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 1), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 1), "-Infinity");
    }
}
