//! Fixed physical and design parameters used by the planform calculation. None of these are
//! entered by the user; a JSON file may override any subset of them.

use crate::Result;
use crate::errors::InvalidConstants;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanformConstants {
    /// Smallest allowed tip chord (mm)
    pub min_tip_chord: f64,

    /// Largest allowed root or tip chord (mm)
    pub max_chord: f64,

    /// Largest allowed half-span (mm)
    pub max_half_span: f64,

    /// Chordwise position of the center of mass as a fraction of chord. The default is valid
    /// for the NACA 00xx symmetric family.
    pub cg_fraction: f64,

    /// Chordwise position of the aerodynamic center as a fraction of chord, same family
    pub ac_fraction: f64,

    /// Areal density of the foam core material
    pub core_density: f64,

    /// Average section thickness used in the core volume estimate
    pub avg_thickness: f64,

    /// Mass of hardware which does not scale with the panel (g)
    pub fixed_mass: f64,

    /// Gravitational acceleration (m/s²)
    pub gravity: f64,

    /// Air density (kg/m³)
    pub air_density: f64,

    /// Airspeed assumed for the lift estimate (m/s)
    pub velocity: f64,

    /// Lift coefficient assumed for the lift estimate
    pub lift_coefficient: f64,

    /// Margin kept between the sweep angle and the geometric maximum (deg)
    pub sweep_margin: f64,
}

impl PlanformConstants {
    pub const DEFAULT: Self = Self::new();

    pub const fn new() -> Self {
        Self {
            min_tip_chord: 65.0,
            max_chord: 1500.0,
            max_half_span: 3000.0,
            cg_fraction: 0.3994,
            ac_fraction: 0.25,
            core_density: 20.0,
            avg_thickness: 0.274033,
            fixed_mass: 12.8,
            gravity: 9.80665,
            air_density: 1.225225,
            velocity: 3.0,
            lift_coefficient: 0.4,
            sweep_margin: 0.5,
        }
    }

    /// Parse a set of constants from a JSON string. Fields which are missing from the JSON
    /// take their default values. The result is validated before it is returned.
    ///
    /// # Arguments
    ///
    /// * `text`: the JSON object text
    ///
    /// returns: Result<PlanformConstants, Box<dyn Error, Global>>
    ///
    /// # Examples
    ///
    /// ```
    /// use planform::PlanformConstants;
    /// let c = PlanformConstants::from_json_str(r#"{"velocity": 8.0}"#).unwrap();
    /// assert_eq!(c.velocity, 8.0);
    /// assert_eq!(c.max_chord, 1500.0);
    /// ```
    pub fn from_json_str(text: &str) -> Result<Self> {
        let constants: Self = serde_json::from_str(text)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check that the constants can produce a meaningful design: all values finite, the
    /// limits and physical quantities positive, the chord fractions within [0, 1], and the
    /// minimum tip chord no larger than the maximum chord.
    pub fn validate(&self) -> std::result::Result<(), InvalidConstants> {
        let named = [
            ("min_tip_chord", self.min_tip_chord),
            ("max_chord", self.max_chord),
            ("max_half_span", self.max_half_span),
            ("cg_fraction", self.cg_fraction),
            ("ac_fraction", self.ac_fraction),
            ("core_density", self.core_density),
            ("avg_thickness", self.avg_thickness),
            ("fixed_mass", self.fixed_mass),
            ("gravity", self.gravity),
            ("air_density", self.air_density),
            ("velocity", self.velocity),
            ("lift_coefficient", self.lift_coefficient),
            ("sweep_margin", self.sweep_margin),
        ];

        if let Some((name, _)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InvalidConstants::NotFinite(*name));
        }

        let positive = [
            ("min_tip_chord", self.min_tip_chord),
            ("max_chord", self.max_chord),
            ("max_half_span", self.max_half_span),
            ("gravity", self.gravity),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(InvalidConstants::NotPositive(*name));
        }

        let fractions = [
            ("cg_fraction", self.cg_fraction),
            ("ac_fraction", self.ac_fraction),
        ];
        if let Some((name, _)) = fractions.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(InvalidConstants::NotAFraction(*name));
        }

        if self.min_tip_chord > self.max_chord {
            return Err(InvalidConstants::TipChordExceedsMaxChord);
        }

        Ok(())
    }
}

impl Default for PlanformConstants {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(PlanformConstants::DEFAULT.validate().is_ok());
        assert_eq!(PlanformConstants::default(), PlanformConstants::DEFAULT);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let text = r#"{"max_half_span": 1200.0, "lift_coefficient": 0.9}"#;
        let c = PlanformConstants::from_json_str(text).unwrap();
        assert_eq!(c.max_half_span, 1200.0);
        assert_eq!(c.lift_coefficient, 0.9);
        assert_eq!(c.min_tip_chord, 65.0);
        assert_eq!(c.air_density, 1.225225);
    }

    #[test]
    fn test_json_round_trip() {
        let text = serde_json::to_string(&PlanformConstants::DEFAULT).unwrap();
        let back = PlanformConstants::from_json_str(&text).unwrap();
        assert_eq!(back, PlanformConstants::DEFAULT);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(PlanformConstants::from_json_str("{not json").is_err());
        assert!(PlanformConstants::from_json_str(r#"{"max_chord": "wide"}"#).is_err());
    }

    #[test]
    fn test_invalid_limits_rejected() {
        let mut c = PlanformConstants::new();
        c.max_chord = 50.0;
        assert_eq!(c.validate(), Err(InvalidConstants::TipChordExceedsMaxChord));

        let mut c = PlanformConstants::new();
        c.max_half_span = 0.0;
        assert_eq!(c.validate(), Err(InvalidConstants::NotPositive("max_half_span")));

        let mut c = PlanformConstants::new();
        c.cg_fraction = 1.5;
        assert_eq!(c.validate(), Err(InvalidConstants::NotAFraction("cg_fraction")));

        let mut c = PlanformConstants::new();
        c.velocity = f64::INFINITY;
        assert_eq!(c.validate(), Err(InvalidConstants::NotFinite("velocity")));
    }

    #[test]
    fn test_from_json_str_validates() {
        let err = PlanformConstants::from_json_str(r#"{"min_tip_chord": -1.0}"#).unwrap_err();
        assert_eq!(err.to_string(), "NotPositive(\"min_tip_chord\")");
    }
}
