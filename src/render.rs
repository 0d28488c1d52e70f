//! Presentation of a computed planform. The calculation knows nothing about drawing; instead
//! `present` walks a `PlanformResult` and hands every point, edge, marker and label to a
//! `RenderSink`, in the order a drawing surface would place them. `Scene` is a sink which
//! simply collects everything into one serializable value.

use crate::Result;
use crate::common::to_fixed;
use crate::geom2::{Aabb2, Point2, Segment2};
use crate::planform::{PlanformResult, WingMetrics};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    AeroCenter,
    CenterOfGravity,
}

impl MarkerKind {
    /// Short class name a renderer can style the marker by
    pub fn class(&self) -> &'static str {
        match self {
            MarkerKind::AeroCenter => "ac",
            MarkerKind::CenterOfGravity => "cg",
        }
    }
}

/// A labeled reference point on the root chord
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Point2,
}

/// A single annotation: the text to show and the number it was made from, so a renderer can
/// size or position the annotation without reading the text back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub value: f64,
}

impl Label {
    fn new(text: String, value: f64) -> Self {
        Self { text, value }
    }
}

/// The text annotations for the wing dimensions, along with the point at which the annotation
/// block is anchored (the right tip trailing edge). Lengths are in mm and the sweep in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLabels {
    pub anchor: Point2,
    pub half_span: Label,
    pub tip_chord: Label,
    pub root_chord: Label,
    pub aero_center: Label,
    pub center_of_gravity: Label,
    pub sweep: Label,
}

impl DimensionLabels {
    pub fn from_result(result: &PlanformResult) -> Self {
        let wing = &result.wing;
        let m = &result.metrics;
        let length = |v: f64| Label::new(format!("{}mm", v), v);

        Self {
            anchor: Point2::new(wing.half_span, wing.tip_offset() + wing.tip_chord),
            half_span: length(wing.half_span),
            tip_chord: length(wing.tip_chord),
            root_chord: length(wing.root_chord),
            aero_center: Label::new(
                format!("{}mm (ac/np)", to_fixed(m.aero_center, 1)),
                m.aero_center,
            ),
            center_of_gravity: Label::new(
                format!("{}mm (cg)", to_fixed(m.center_of_gravity, 1)),
                m.center_of_gravity,
            ),
            sweep: Label::new(format!("{}°", to_fixed(m.sweep_degrees, 1)), m.sweep_degrees),
        }
    }
}

/// One line summarizing the performance estimates. Weight, lift and their ratio are shown to
/// two decimals, with halfway values rounded away from zero; the area is shown as computed.
///
/// # Examples
///
/// ```
/// use planform::render::summary_line;
/// use planform::{PlanformConstants, WingInputs, compute_planform};
/// let inputs = WingInputs::new(500.0, 20.0, 300.0, 150.0);
/// let r = compute_planform(&inputs, &PlanformConstants::DEFAULT);
/// assert_eq!(
///     summary_line(&r.metrics),
///     "Weight: 0.13N  Lift: 0.50N  L/W: 3.71  Area: 225000mm²"
/// );
/// ```
pub fn summary_line(metrics: &WingMetrics) -> String {
    format!(
        "Weight: {}N  Lift: {}N  L/W: {}  Area: {}mm²",
        to_fixed(metrics.weight, 2),
        to_fixed(metrics.lift, 2),
        to_fixed(metrics.lift_to_weight, 2),
        metrics.area
    )
}

/// A destination for drawing a computed planform. Implementations decide how and where things
/// are placed; all geometry arrives fully computed.
pub trait RenderSink {
    /// Called once before anything else is drawn for a new result
    fn clear(&mut self) {}

    /// The bounding box of the outline, for fitting the view
    fn bounds(&mut self, _aabb: &Aabb2) {}

    fn point(&mut self, at: &Point2);

    fn segment(&mut self, segment: &Segment2);

    fn marker(&mut self, marker: &Marker);

    fn summary(&mut self, text: &str);

    fn dimensions(&mut self, labels: &DimensionLabels);
}

/// Draw a computed planform onto a sink. Each outline vertex is followed by the edge which
/// leaves it, so the last edge drawn is the one closing the outline back at the root. The
/// center of gravity marker is drawn before the aerodynamic center marker, then the summary
/// line and the dimension labels.
///
/// # Arguments
///
/// * `result`: the computed planform
/// * `sink`: the destination to draw onto
///
/// returns: ()
pub fn present<S: RenderSink + ?Sized>(result: &PlanformResult, sink: &mut S) {
    sink.clear();
    sink.bounds(&result.outline.aabb());

    let points = result.outline.points();
    for (point, segment) in points.iter().zip(result.outline.segments().iter()) {
        sink.point(point);
        sink.segment(segment);
    }

    sink.marker(&Marker {
        kind: MarkerKind::CenterOfGravity,
        position: result.center_of_gravity(),
    });
    sink.marker(&Marker {
        kind: MarkerKind::AeroCenter,
        position: result.aero_center(),
    });

    sink.summary(&summary_line(&result.metrics));
    sink.dimensions(&DimensionLabels::from_result(result));
}

/// Everything drawn for one planform, collected in drawing order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub bounds: Option<Aabb2>,
    pub points: Vec<Point2>,
    pub segments: Vec<Segment2>,
    pub markers: Vec<Marker>,
    pub summary: String,
    pub dimensions: Option<DimensionLabels>,
}

impl Scene {
    pub fn from_result(result: &PlanformResult) -> Self {
        let mut scene = Scene::default();
        present(result, &mut scene);
        scene
    }

    pub fn find_marker(&self, kind: MarkerKind) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == kind)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl RenderSink for Scene {
    fn clear(&mut self) {
        *self = Scene::default();
    }

    fn bounds(&mut self, aabb: &Aabb2) {
        self.bounds = Some(*aabb);
    }

    fn point(&mut self, at: &Point2) {
        self.points.push(*at);
    }

    fn segment(&mut self, segment: &Segment2) {
        self.segments.push(*segment);
    }

    fn marker(&mut self, marker: &Marker) {
        self.markers.push(*marker);
    }

    fn summary(&mut self, text: &str) {
        self.summary = text.to_string();
    }

    fn dimensions(&mut self, labels: &DimensionLabels) {
        self.dimensions = Some(labels.clone());
    }
}
