//! Pie and donut geometry.
//!
//! Angles are radians, `0` points along `+x` and angles grow clockwise on
//! screen because pixel `y` grows downward.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::Point;
use crate::render::PathBuilder;

/// Radial distance from the outer edge to the label-line elbow.
pub const DEFAULT_LABEL_ELBOW_OFFSET: f64 = 10.0;
/// Radial distance from the outer edge to the label position.
pub const DEFAULT_LABEL_OFFSET: f64 = 22.0;

/// Angular window and spacing for `pie_arcs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieOptions {
    pub start_angle: f64,
    pub end_angle: f64,
    /// Gap inserted after every non-zero arc.
    pub pad_angle: f64,
}

impl Default for PieOptions {
    fn default() -> Self {
        Self {
            start_angle: 0.0,
            end_angle: TAU,
            pad_angle: 0.0,
        }
    }
}

impl PieOptions {
    #[must_use]
    pub fn with_angles(mut self, start_angle: f64, end_angle: f64) -> Self {
        self.start_angle = start_angle;
        self.end_angle = end_angle;
        self
    }

    #[must_use]
    pub fn with_pad_angle(mut self, pad_angle: f64) -> Self {
        self.pad_angle = pad_angle;
        self
    }
}

/// Angular slice of a pie, carrying the datum it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieArc<T> {
    pub start_angle: f64,
    pub end_angle: f64,
    pub pad_angle: f64,
    /// Clamped (non-negative) value.
    pub value: f64,
    pub index: usize,
    pub data: T,
}

impl<T> PieArc<T> {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

fn clamp_value(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// Splits the angular window proportionally to each datum's value.
///
/// Negative and `NaN` values count as `0`; zero entries get a zero-length
/// arc and no padding. Returns an empty list when the clamped total is not
/// positive, otherwise one arc per datum in input order.
pub fn pie_arcs<T, F>(data: &[T], value_of: F, options: PieOptions) -> Vec<PieArc<T>>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let values: Vec<f64> = data.iter().map(|datum| clamp_value(value_of(datum))).collect();
    let total: f64 = values.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        debug!(count = data.len(), "pie total is not positive, no arcs");
        return Vec::new();
    }

    let window = options.end_angle - options.start_angle;
    let non_zero = values.iter().filter(|value| **value > 0.0).count() as f64;
    let mut pad = clamp_value(options.pad_angle);
    if pad * non_zero > window.abs() {
        trace!(pad, window, "pad angle exceeds window, shrinking");
        pad = window.abs() / non_zero;
    }
    let available = window - non_zero * pad;

    let mut cursor = options.start_angle;
    let mut arcs = Vec::with_capacity(data.len());
    for (index, (datum, value)) in data.iter().zip(values).enumerate() {
        let span = value / total * available;
        let pad_angle = if value > 0.0 { pad } else { 0.0 };
        arcs.push(PieArc {
            start_angle: cursor,
            end_angle: cursor + span,
            pad_angle,
            value,
            index,
            data: datum.clone(),
        });
        cursor += span + pad_angle;
    }
    arcs
}

/// `pie_arcs` over bare numbers.
#[must_use]
pub fn pie_arcs_from_values(values: &[f64], options: PieOptions) -> Vec<PieArc<f64>> {
    pie_arcs(values, |value| *value, options)
}

#[must_use]
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> Point {
    Point {
        x: cx + radius * angle.cos(),
        y: cy + radius * angle.sin(),
    }
}

/// Geometry of one pie slice or donut segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PieArcPathSpec {
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    /// `None` or `0` draws a pie slice, anything larger a donut segment.
    #[serde(default)]
    pub inner_radius: Option<f64>,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieArcPathSpec {
    #[must_use]
    pub fn from_arc<T>(arc: &PieArc<T>, cx: f64, cy: f64, outer_radius: f64) -> Self {
        Self {
            cx,
            cy,
            outer_radius,
            inner_radius: None,
            start_angle: arc.start_angle,
            end_angle: arc.end_angle,
        }
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = Some(inner_radius);
        self
    }
}

/// Builds the path for a pie slice (`M` center, `L`, `A`, `Z`) or a donut
/// segment (outer arc forward, inner arc backward, closed).
///
/// Zero-length slices produce `""`. Spans of a full turn or more are drawn
/// as two half arcs because a single SVG arc cannot end where it starts; a
/// full-turn pie slice is then the only output without the `M cx cy` center
/// vertex.
#[must_use]
pub fn pie_arc_path(spec: PieArcPathSpec) -> String {
    let span = spec.end_angle - spec.start_angle;
    if span == 0.0 || !span.is_finite() {
        return String::new();
    }

    let PieArcPathSpec {
        cx,
        cy,
        outer_radius,
        start_angle,
        end_angle,
        ..
    } = spec;
    let inner_radius = spec.inner_radius.filter(|radius| *radius > 0.0);
    let full_turn = span.abs() >= TAU;
    let large_arc = span.abs() > PI;

    let outer_start = polar_to_cartesian(cx, cy, outer_radius, start_angle);
    let outer_end = polar_to_cartesian(cx, cy, outer_radius, end_angle);
    let mut path = PathBuilder::with_capacity(6);

    match inner_radius {
        None => {
            if full_turn {
                let opposite = polar_to_cartesian(cx, cy, outer_radius, start_angle + PI);
                path.move_to(outer_start.x, outer_start.y)
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        false,
                        true,
                        opposite.x,
                        opposite.y,
                    )
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        false,
                        true,
                        outer_start.x,
                        outer_start.y,
                    )
                    .close();
            } else {
                path.move_to(cx, cy)
                    .line_to(outer_start.x, outer_start.y)
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        large_arc,
                        true,
                        outer_end.x,
                        outer_end.y,
                    )
                    .close();
            }
        }
        Some(inner) => {
            let inner_start = polar_to_cartesian(cx, cy, inner, start_angle);
            let inner_end = polar_to_cartesian(cx, cy, inner, end_angle);
            if full_turn {
                let outer_opposite = polar_to_cartesian(cx, cy, outer_radius, start_angle + PI);
                let inner_opposite = polar_to_cartesian(cx, cy, inner, start_angle + PI);
                path.move_to(outer_start.x, outer_start.y)
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        false,
                        true,
                        outer_opposite.x,
                        outer_opposite.y,
                    )
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        false,
                        true,
                        outer_start.x,
                        outer_start.y,
                    )
                    .move_to(inner_start.x, inner_start.y)
                    .arc_to(
                        inner,
                        inner,
                        false,
                        false,
                        inner_opposite.x,
                        inner_opposite.y,
                    )
                    .arc_to(inner, inner, false, false, inner_start.x, inner_start.y)
                    .close();
            } else {
                path.move_to(outer_start.x, outer_start.y)
                    .arc_to(
                        outer_radius,
                        outer_radius,
                        large_arc,
                        true,
                        outer_end.x,
                        outer_end.y,
                    )
                    .line_to(inner_end.x, inner_end.y)
                    .arc_to(inner, inner, large_arc, false, inner_start.x, inner_start.y)
                    .close();
            }
        }
    }

    path.finish()
}

/// Translation that pushes a hovered slice outward along its bisector.
#[must_use]
pub fn compute_pie_hover_offset(start_angle: f64, end_angle: f64, distance: f64) -> Point {
    if distance == 0.0 {
        return Point::origin();
    }
    let bisector = (start_angle + end_angle) / 2.0;
    Point {
        x: distance * bisector.cos(),
        y: distance * bisector.sin(),
    }
}

/// Horizontal alignment for a label drawn at the end of a leader line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    End,
}

impl TextAnchor {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// Radial offsets of the label-line elbow and label beyond the outer edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelLineOptions {
    pub elbow_offset: f64,
    pub label_offset: f64,
}

impl Default for LabelLineOptions {
    fn default() -> Self {
        Self {
            elbow_offset: DEFAULT_LABEL_ELBOW_OFFSET,
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

/// Leader line from a slice edge out to its label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelLine {
    pub anchor: Point,
    pub elbow: Point,
    pub label: Point,
    pub text_anchor: TextAnchor,
}

/// Leader line for a slice using the default offsets.
#[must_use]
pub fn compute_pie_label_line(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> LabelLine {
    compute_pie_label_line_with(
        cx,
        cy,
        outer_radius,
        start_angle,
        end_angle,
        LabelLineOptions::default(),
    )
}

/// Leader line along the slice bisector: anchor on the outer edge, then the
/// elbow and label at increasing radii. Labels on the right half start at the
/// label point, labels on the left half end there.
#[must_use]
pub fn compute_pie_label_line_with(
    cx: f64,
    cy: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
    options: LabelLineOptions,
) -> LabelLine {
    let bisector = (start_angle + end_angle) / 2.0;
    let text_anchor = if bisector.cos() >= 0.0 {
        TextAnchor::Start
    } else {
        TextAnchor::End
    };

    LabelLine {
        anchor: polar_to_cartesian(cx, cy, outer_radius, bisector),
        elbow: polar_to_cartesian(cx, cy, outer_radius + options.elbow_offset, bisector),
        label: polar_to_cartesian(cx, cy, outer_radius + options.label_offset, bisector),
        text_anchor,
    }
}
