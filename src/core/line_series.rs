//! Line path construction under several interpolation curves.

use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::render::PathBuilder;

/// Interpolation between consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    /// Straight `L` segments.
    #[default]
    Linear,
    /// Horizontal then vertical (`H`, `V`), same as `StepAfter`.
    Step,
    /// Horizontal then vertical (`H`, `V`).
    StepAfter,
    /// Vertical then horizontal (`V`, `H`).
    StepBefore,
    /// Cubic Hermite with Fritsch–Carlson limited tangents; never overshoots
    /// between monotone samples.
    Monotone,
    /// Natural cubic spline (zero second derivative at both ends).
    Natural,
}

/// How the first point of a traced curve joins the current path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lead {
    Move,
    Line,
}

/// Path through `points` using `curve`.
///
/// No points give `""` and a single point gives a lone `M`. Smooth curves
/// emit only `C` commands after the initial `M` and pass through every point.
#[must_use]
pub fn line_path(points: &[Point], curve: Curve) -> String {
    let mut path = PathBuilder::with_capacity(points.len() * 2);
    trace_curve(&mut path, points, curve, Lead::Move);
    path.finish()
}

pub(crate) fn trace_curve(path: &mut PathBuilder, points: &[Point], curve: Curve, lead: Lead) {
    let Some(first) = points.first() else {
        return;
    };
    match lead {
        Lead::Move => path.move_to(first.x, first.y),
        Lead::Line => path.line_to(first.x, first.y),
    };
    if points.len() == 1 {
        return;
    }

    match curve {
        Curve::Linear => {
            for point in &points[1..] {
                path.line_to(point.x, point.y);
            }
        }
        Curve::Step | Curve::StepAfter => {
            for point in &points[1..] {
                path.horizontal_to(point.x).vertical_to(point.y);
            }
        }
        Curve::StepBefore => {
            for point in &points[1..] {
                path.vertical_to(point.y).horizontal_to(point.x);
            }
        }
        Curve::Monotone => trace_monotone(path, points),
        Curve::Natural => trace_natural(path, points),
    }
}

fn hermite_segment(path: &mut PathBuilder, p0: Point, p1: Point, t0: f64, t1: f64) {
    let dx = (p1.x - p0.x) / 3.0;
    path.cubic_to(
        p0.x + dx,
        p0.y + dx * t0,
        p1.x - dx,
        p1.y - dx * t1,
        p1.x,
        p1.y,
    );
}

fn secant(p0: Point, p1: Point) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 { 0.0 } else { (p1.y - p0.y) / h }
}

/// Interior tangent at `p1`, limited so the curve stays monotone on both
/// neighbouring intervals.
fn interior_tangent(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    let s0 = secant(p0, p1);
    let s1 = secant(p1, p2);
    if h0 + h1 == 0.0 || s0.signum() != s1.signum() || s0 == 0.0 || s1 == 0.0 {
        return 0.0;
    }
    let weighted = (s0 * h1 + s1 * h0) / (h0 + h1);
    let tangent = s0.signum() * s0.abs().min(s1.abs()).min(0.5 * weighted.abs()) * 2.0;
    if tangent.is_finite() { tangent } else { 0.0 }
}

/// One-sided end tangent from the neighbouring interior tangent.
fn end_tangent(p0: Point, p1: Point, neighbour: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        neighbour
    } else {
        (3.0 * (p1.y - p0.y) / h - neighbour) / 2.0
    }
}

fn trace_monotone(path: &mut PathBuilder, points: &[Point]) {
    let n = points.len();
    if n == 2 {
        let slope = secant(points[0], points[1]);
        hermite_segment(path, points[0], points[1], slope, slope);
        return;
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        tangents[i] = interior_tangent(points[i - 1], points[i], points[i + 1]);
    }
    tangents[0] = end_tangent(points[0], points[1], tangents[1]);
    tangents[n - 1] = end_tangent(points[n - 2], points[n - 1], tangents[n - 2]);

    for i in 0..n - 1 {
        hermite_segment(path, points[i], points[i + 1], tangents[i], tangents[i + 1]);
    }
}

/// Bézier control points of a natural cubic spline through `coords`, one
/// pair per segment (Thomas algorithm on the tridiagonal system).
fn natural_control_points(coords: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = coords.len() - 1;
    let mut a = vec![0.0; n];
    let mut b = vec![0.0; n];
    let mut c = vec![0.0; n];
    let mut rhs = vec![0.0; n];

    b[0] = 2.0;
    c[0] = 1.0;
    rhs[0] = coords[0] + 2.0 * coords[1];
    for i in 1..n - 1 {
        a[i] = 1.0;
        b[i] = 4.0;
        c[i] = 1.0;
        rhs[i] = 4.0 * coords[i] + 2.0 * coords[i + 1];
    }
    a[n - 1] = 2.0;
    b[n - 1] = 7.0;
    rhs[n - 1] = 8.0 * coords[n - 1] + coords[n];

    for i in 1..n {
        let m = a[i] / b[i - 1];
        b[i] -= m * c[i - 1];
        rhs[i] -= m * rhs[i - 1];
    }

    let mut first = vec![0.0; n];
    first[n - 1] = rhs[n - 1] / b[n - 1];
    for i in (0..n - 1).rev() {
        first[i] = (rhs[i] - c[i] * first[i + 1]) / b[i];
    }

    let mut second = vec![0.0; n];
    for i in 0..n - 1 {
        second[i] = 2.0 * coords[i + 1] - first[i + 1];
    }
    second[n - 1] = (coords[n] + first[n - 1]) / 2.0;

    (first, second)
}

fn trace_natural(path: &mut PathBuilder, points: &[Point]) {
    if points.len() == 2 {
        let slope = secant(points[0], points[1]);
        hermite_segment(path, points[0], points[1], slope, slope);
        return;
    }

    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
    let (x1, x2) = natural_control_points(&xs);
    let (y1, y2) = natural_control_points(&ys);

    for (i, point) in points.iter().enumerate().skip(1) {
        path.cubic_to(x1[i - 1], y1[i - 1], x2[i - 1], y2[i - 1], point.x, point.y);
    }
}
