use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Point;
use crate::core::pie::polar_to_cartesian;
use crate::render::PathBuilder;

/// First axis points straight up.
pub const DEFAULT_RADAR_START_ANGLE: f64 = -FRAC_PI_2;

/// Center, size and value ceiling of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarOptions {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Value drawn at the full radius. Defaults to the largest clamped value.
    #[serde(default)]
    pub max_value: Option<f64>,
}

impl RadarOptions {
    #[must_use]
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self {
            cx,
            cy,
            radius,
            max_value: None,
        }
    }

    #[must_use]
    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = Some(max_value);
        self
    }
}

/// Value plotted on one radar axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub x: f64,
    pub y: f64,
    pub value: f64,
    pub radius: f64,
    pub angle: f64,
}

impl RadarPoint {
    #[must_use]
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Angles of `count` evenly spaced axes starting at `-pi/2`.
#[must_use]
pub fn radar_angles(count: usize) -> Vec<f64> {
    radar_angles_from(count, DEFAULT_RADAR_START_ANGLE)
}

/// Angles of `count` axes spaced by `2pi / count`, the first at `start_angle`.
#[must_use]
pub fn radar_angles_from(count: usize, start_angle: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count).map(|i| start_angle + step * i as f64).collect()
}

/// Places one point per value on its axis.
///
/// Negative values are clamped to `0`. When the effective maximum is not
/// positive every point collapses onto the center.
#[must_use]
pub fn radar_points(values: &[f64], options: RadarOptions) -> Vec<RadarPoint> {
    let clamped: Vec<f64> = values
        .iter()
        .map(|value| if value.is_nan() { 0.0 } else { value.max(0.0) })
        .collect();
    let max_value = options
        .max_value
        .unwrap_or_else(|| clamped.iter().copied().fold(0.0, f64::max));
    let scale = if max_value > 0.0 && max_value.is_finite() {
        options.radius / max_value
    } else {
        if !clamped.is_empty() {
            debug!(
                max_value,
                "radar max value is not positive, collapsing points"
            );
        }
        0.0
    };

    radar_angles(clamped.len())
        .into_iter()
        .zip(clamped)
        .map(|(angle, value)| {
            let radius = value * scale;
            let position = polar_to_cartesian(options.cx, options.cy, radius, angle);
            RadarPoint {
                x: position.x,
                y: position.y,
                value,
                radius,
                angle,
            }
        })
        .collect()
}

/// Closed polygon `M x0 y0 L x1 y1 ... Z`; empty input gives `""`.
#[must_use]
pub fn polygon_path(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };
    let mut path = PathBuilder::with_capacity(points.len() + 1);
    path.move_to(first.x, first.y);
    for point in rest {
        path.line_to(point.x, point.y);
    }
    path.close();
    path.finish()
}

/// Outer endpoints of the `count` radar axes.
#[must_use]
pub fn radar_spokes(count: usize, cx: f64, cy: f64, radius: f64) -> Vec<Point> {
    radar_angles(count)
        .into_iter()
        .map(|angle| polar_to_cartesian(cx, cy, radius, angle))
        .collect()
}

/// Concentric grid polygons, innermost first. Ring `k` (1-based) sits at
/// `radius * k / levels`.
#[must_use]
pub fn radar_grid_rings(
    count: usize,
    levels: usize,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Vec<Vec<Point>> {
    if levels == 0 {
        return Vec::new();
    }
    (1..=levels)
        .map(|level| radar_spokes(count, cx, cy, radius * level as f64 / levels as f64))
        .collect()
}
