use crate::core::line_series::{Curve, Lead, trace_curve};
use crate::core::stack::StackedPoint;
use crate::core::Point;
use crate::render::PathBuilder;

/// Closed area between `points` and a horizontal baseline.
///
/// The top edge follows `curve`, then the path drops to `(last.x, baseline_y)`,
/// runs back to `(first.x, baseline_y)` and closes. No points give `""`; a
/// single point gives a lone `M`.
#[must_use]
pub fn area_path(points: &[Point], baseline_y: f64, curve: Curve) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };

    let mut path = PathBuilder::with_capacity(points.len() * 2 + 3);
    trace_curve(&mut path, points, curve, Lead::Move);
    if points.len() > 1 {
        path.line_to(last.x, baseline_y)
            .line_to(first.x, baseline_y)
            .close();
    }
    path.finish()
}

/// `area_path` with straight segments.
#[must_use]
pub fn area_path_linear(points: &[Point], baseline_y: f64) -> String {
    area_path(points, baseline_y, Curve::Linear)
}

/// Closed band of one stacked layer: `y1` forward along the top, then `y0`
/// backward along the base, both traced with `curve`.
///
/// `x_of` and `y_of` project stack coordinates into pixels.
#[must_use]
pub fn stacked_area_path<X, FX, FY>(
    points: &[StackedPoint<X>],
    x_of: FX,
    y_of: FY,
    curve: Curve,
) -> String
where
    FX: Fn(&X) -> f64,
    FY: Fn(f64) -> f64,
{
    if points.is_empty() {
        return String::new();
    }

    let top: Vec<Point> = points
        .iter()
        .map(|point| Point::new(x_of(&point.x), y_of(point.y1)))
        .collect();
    let base: Vec<Point> = points
        .iter()
        .rev()
        .map(|point| Point::new(x_of(&point.x), y_of(point.y0)))
        .collect();

    let mut path = PathBuilder::with_capacity(points.len() * 4 + 1);
    trace_curve(&mut path, &top, curve, Lead::Move);
    if points.len() > 1 {
        trace_curve(&mut path, &base, curve, Lead::Line);
        path.close();
    }
    path.finish()
}
