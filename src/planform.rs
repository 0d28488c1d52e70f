//! This module contains the planform calculation for a swept trapezoidal wing panel: clamping
//! of the raw inputs, construction of the mirrored hexagonal outline, and the reference offsets
//! and performance estimates derived from them.

mod constants;
mod inputs;
pub mod metrics;
mod outline;

pub use constants::PlanformConstants;
pub use inputs::{ClampedWing, WingField, WingInputs};
pub use metrics::WingMetrics;
pub use outline::{OutlineVertex, PlanformOutline};

use crate::geom2::Point2;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// The complete description of one computed wing, ready to hand to a renderer. Every field is
/// recomputed from the raw inputs on each call; nothing is carried between calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanformResult {
    /// The inputs as entered
    pub inputs: WingInputs,

    /// The inputs after clamping, which every other field is derived from
    pub wing: ClampedWing,

    pub outline: PlanformOutline,

    pub metrics: WingMetrics,
}

impl PlanformResult {
    /// Marker position of the aerodynamic center, on the root chord
    pub fn aero_center(&self) -> Point2 {
        Point2::new(0.0, self.metrics.aero_center)
    }

    /// Marker position of the center of gravity, on the root chord
    pub fn center_of_gravity(&self) -> Point2 {
        Point2::new(0.0, self.metrics.center_of_gravity)
    }
}

/// Compute the planform of a wing from its raw inputs. Out of range inputs are clamped rather
/// than rejected, so this always produces a result; NaN inputs produce NaN values in the
/// affected fields.
///
/// # Arguments
///
/// * `inputs`: the raw half-span, sweep, root chord and tip chord
/// * `constants`: the design limits and physical constants
///
/// returns: PlanformResult
///
/// # Examples
///
/// ```
/// use planform::{PlanformConstants, WingInputs, compute_planform};
/// let inputs = WingInputs::new(500.0, 20.0, 300.0, 150.0);
/// let result = compute_planform(&inputs, &PlanformConstants::DEFAULT);
/// assert_eq!(result.outline.points().len(), 6);
/// assert!(result.metrics.area > 0.0);
/// ```
pub fn compute_planform(inputs: &WingInputs, constants: &PlanformConstants) -> PlanformResult {
    trace!(?inputs, "computing planform");

    let wing = inputs.clamped(constants);
    let outline = PlanformOutline::from_wing(&wing);
    let metrics = WingMetrics::compute(&wing, &outline, constants);

    PlanformResult {
        inputs: *inputs,
        wing,
        outline,
        metrics,
    }
}
