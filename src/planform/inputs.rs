//! Raw wing inputs and the clamping which turns them into a valid design. Inputs which are out
//! of range are never rejected; each is bounded to the nearest allowed value, in an order where
//! later limits depend on the already-clamped earlier values.

use crate::common::{deg_to_rad, nan_max, nan_min, rad_to_deg};
use crate::errors::InputError;
use crate::planform::PlanformConstants;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The four input fields, in the positional order in which they are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WingField {
    HalfSpan,
    Sweep,
    RootChord,
    TipChord,
}

impl WingField {
    pub const ALL: [WingField; 4] = [
        WingField::HalfSpan,
        WingField::Sweep,
        WingField::RootChord,
        WingField::TipChord,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WingField::HalfSpan => "half-span",
            WingField::Sweep => "sweep angle",
            WingField::RootChord => "root chord",
            WingField::TipChord => "tip chord",
        }
    }
}

/// The wing parameters exactly as entered, before any clamping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WingInputs {
    /// Distance from the root to one wingtip (mm)
    pub half_span: f64,

    /// Leading edge sweep angle (deg)
    pub sweep: f64,

    /// Chord at the root (mm)
    pub root_chord: f64,

    /// Chord at the tip (mm)
    pub tip_chord: f64,
}

impl WingInputs {
    pub fn new(half_span: f64, sweep: f64, root_chord: f64, tip_chord: f64) -> Self {
        Self {
            half_span,
            sweep,
            root_chord,
            tip_chord,
        }
    }

    /// Build inputs from the text of the four fields without rejecting anything. Blank text
    /// reads as zero, text which is not a number reads as NaN, and a missing field reads as
    /// NaN. The NaN values propagate through every downstream calculation.
    ///
    /// # Arguments
    ///
    /// * `fields`: the field texts in order half-span, sweep, root chord, tip chord
    ///
    /// returns: WingInputs
    ///
    /// # Examples
    ///
    /// ```
    /// use planform::WingInputs;
    /// let inputs = WingInputs::from_fields(&["500", "20", " 300 ", "abc"]);
    /// assert_eq!(inputs.root_chord, 300.0);
    /// assert!(inputs.tip_chord.is_nan());
    /// ```
    pub fn from_fields(fields: &[&str]) -> Self {
        let value = |i: usize| fields.get(i).map_or(f64::NAN, |t| lenient_number(t));
        Self::new(value(0), value(1), value(2), value(3))
    }

    /// Build inputs from the text of the four fields, reporting the first field which is not a
    /// number. Values which parse but are out of range are still accepted; they are handled by
    /// clamping just like values which were provided directly.
    pub fn try_from_fields(fields: &[&str]) -> Result<Self, InputError> {
        if fields.len() != WingField::ALL.len() {
            return Err(InputError::WrongFieldCount(fields.len()));
        }

        let mut values = [0.0; 4];
        for ((field, text), value) in WingField::ALL.iter().zip(fields).zip(values.iter_mut()) {
            *value = text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|v| !v.is_nan())
                .ok_or_else(|| InputError::NotANumber {
                    field: *field,
                    text: text.to_string(),
                })?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    pub fn get(&self, field: WingField) -> f64 {
        match field {
            WingField::HalfSpan => self.half_span,
            WingField::Sweep => self.sweep,
            WingField::RootChord => self.root_chord,
            WingField::TipChord => self.tip_chord,
        }
    }

    /// Bound the raw inputs to the design limits. The steps happen in a fixed order:
    ///
    /// 1. the half-span is limited to the maximum half-span
    /// 2. the root chord is limited to the maximum chord
    /// 3. the tip chord is held between the minimum tip chord and the maximum chord
    /// 4. the maximum sweep is the angle at which the tip leading edge would reach the maximum
    ///    chord line, less a small margin
    /// 5. the sweep is limited to that maximum
    ///
    /// No lower bound is applied to the half-span or root chord. Zero or negative values give
    /// a degenerate outline, and NaN values remain NaN.
    ///
    /// # Arguments
    ///
    /// * `constants`: the design limits
    ///
    /// returns: ClampedWing
    pub fn clamped(&self, constants: &PlanformConstants) -> ClampedWing {
        let half_span = nan_min(self.half_span, constants.max_half_span);
        if half_span < self.half_span {
            debug!(raw = self.half_span, clamped = half_span, "half-span limited");
        }

        let root_chord = nan_min(self.root_chord, constants.max_chord);
        if root_chord < self.root_chord {
            debug!(raw = self.root_chord, clamped = root_chord, "root chord limited");
        }

        let tip_chord = nan_min(
            constants.max_chord,
            nan_max(self.tip_chord, constants.min_tip_chord),
        );
        if tip_chord != self.tip_chord && !self.tip_chord.is_nan() {
            debug!(raw = self.tip_chord, clamped = tip_chord, "tip chord limited");
        }

        let max_sweep = ((constants.max_chord - tip_chord) / half_span).atan()
            - deg_to_rad(constants.sweep_margin);
        let raw_sweep = deg_to_rad(self.sweep);
        let sweep = nan_min(raw_sweep, max_sweep);
        if sweep < raw_sweep {
            debug!(raw = self.sweep, clamped = rad_to_deg(sweep), "sweep angle limited");
        }

        ClampedWing {
            half_span,
            sweep,
            max_sweep,
            root_chord,
            tip_chord,
        }
    }
}

/// Reads a number the way a browser form field does: surrounding whitespace is ignored, blank
/// text is zero, and anything unparseable is NaN.
fn lenient_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        0.0
    } else {
        text.parse().unwrap_or(f64::NAN)
    }
}

/// Wing parameters after clamping. The sweep is held in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClampedWing {
    /// Half-span (mm)
    pub half_span: f64,

    /// Effective leading edge sweep (rad)
    pub sweep: f64,

    /// Largest sweep the tip chord and half-span allowed (rad)
    pub max_sweep: f64,

    /// Root chord (mm)
    pub root_chord: f64,

    /// Tip chord (mm)
    pub tip_chord: f64,
}

impl ClampedWing {
    pub fn sweep_degrees(&self) -> f64 {
        rad_to_deg(self.sweep)
    }

    /// Chordwise distance from the root leading edge back to the tip leading edge (mm)
    pub fn tip_offset(&self) -> f64 {
        self.half_span * self.sweep.tan()
    }
}
