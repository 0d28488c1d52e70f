//! Reference offsets and the closed-form weight and lift estimates. These are first-order
//! approximations for a foam-core panel at a single assumed flight condition, not an
//! aerodynamic analysis.

use crate::planform::{ClampedWing, PlanformConstants, PlanformOutline};
use serde::{Deserialize, Serialize};

/// Chordwise position, measured aft from the root leading edge, of the point which lies at
/// `fraction` of the local chord, averaged along the half-span of a linearly tapered panel with
/// a straight leading edge.
///
/// With half-span `s`, leading edge offset at the tip `a = s * tan(sweep)`, root chord `r` and
/// tip chord `t`, the result is
///
/// ```text
/// (1 / s) * (((a + f * (t - r)) * s^2) / (2 * s) + f * r * s)
/// ```
///
/// which reduces to `(a + f * (t - r)) / 2 + f * r`. With a fraction of zero this is half the
/// tip leading edge offset.
///
/// # Arguments
///
/// * `wing`: the clamped wing parameters
/// * `fraction`: the chordwise fraction, 0.25 for the aerodynamic center
///
/// returns: f64
pub fn reference_offset(wing: &ClampedWing, fraction: f64) -> f64 {
    let s = wing.half_span;
    let r = wing.root_chord;
    let t = wing.tip_chord;
    let swept = (wing.tip_offset() + fraction * (t - r)) * s.powi(2);
    (1.0 / s) * (swept / (2.0 * s) + fraction * r * s)
}

/// Estimated weight of the panel (N). The core volume scales with the root chord and the
/// half-span only; a fixed hardware mass in grams is added before converting to newtons.
pub fn panel_weight(wing: &ClampedWing, constants: &PlanformConstants) -> f64 {
    let core_mass = wing.root_chord
        * constants.avg_thickness
        * wing.half_span
        * constants.core_density
        * 1.0e-6;
    (core_mass + constants.fixed_mass) / 1000.0 * constants.gravity
}

/// Estimated lift (N) of a planform of the given area (mm²) at the assumed airspeed and lift
/// coefficient.
pub fn planform_lift(area: f64, constants: &PlanformConstants) -> f64 {
    0.5 * constants.air_density
        * constants.velocity.powi(2)
        * area
        * 1.0e-6
        * constants.lift_coefficient
}

/// Derived scalars for one computed wing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingMetrics {
    /// Effective sweep (rad)
    pub sweep: f64,

    /// Effective sweep (deg)
    pub sweep_degrees: f64,

    /// Area of the full mirrored outline (mm²)
    pub area: f64,

    /// Panel weight (N)
    pub weight: f64,

    /// Lift at the assumed flight condition (N)
    pub lift: f64,

    /// Lift divided by weight, unrounded
    pub lift_to_weight: f64,

    /// Aerodynamic center position aft of the root leading edge (mm)
    pub aero_center: f64,

    /// Center of gravity position aft of the root leading edge (mm)
    pub center_of_gravity: f64,
}

impl WingMetrics {
    // Lift uses the area of both halves, weight only the core volume of one half-span
    pub fn compute(
        wing: &ClampedWing,
        outline: &PlanformOutline,
        constants: &PlanformConstants,
    ) -> Self {
        let area = outline.area();
        let weight = panel_weight(wing, constants);
        let lift = planform_lift(area, constants);

        Self {
            sweep: wing.sweep,
            sweep_degrees: wing.sweep_degrees(),
            area,
            weight,
            lift,
            lift_to_weight: lift / weight,
            aero_center: reference_offset(wing, constants.ac_fraction),
            center_of_gravity: reference_offset(wing, constants.cg_fraction),
        }
    }
}
