//! Conversions between degrees and radians. Sweep angles are entered in degrees but every
//! trigonometric calculation works in radians.

use std::f64::consts::PI;

/// Converts an angle in degrees to radians.
///
/// # Examples
///
/// ```
/// use planform::common::deg_to_rad;
/// use std::f64::consts::PI;
/// use approx::assert_relative_eq;
/// assert_relative_eq!(deg_to_rad(180.0), PI, epsilon = 1.0e-12);
/// ```
pub fn deg_to_rad(x: f64) -> f64 {
    (x * PI) / 180.0
}

/// Converts an angle in radians to degrees.
///
/// # Examples
///
/// ```
/// use planform::common::rad_to_deg;
/// use std::f64::consts::PI;
/// assert_eq!(rad_to_deg(PI), 180.0);
/// ```
pub fn rad_to_deg(x: f64) -> f64 {
    (x / PI) * 180.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::Rng;
    use test_case::test_case;

    #[test_case(0.0, 0.0)]
    #[test_case(90.0, PI / 2.0)]
    #[test_case(-45.0, -PI / 4.0)]
    #[test_case(0.5, PI / 360.0)]
    fn test_deg_to_rad(degrees: f64, radians: f64) {
        assert_relative_eq!(deg_to_rad(degrees), radians, epsilon = 1.0e-12);
    }

    #[test]
    fn test_round_trip() {
        let mut rnd = rand::rng();
        for _ in 0..1000 {
            let degrees = rnd.random_range(-720.0..720.0);
            let back = rad_to_deg(deg_to_rad(degrees));
            assert_relative_eq!(back, degrees, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn test_nan_passes_through() {
        assert!(deg_to_rad(f64::NAN).is_nan());
        assert!(rad_to_deg(f64::NAN).is_nan());
    }
}
