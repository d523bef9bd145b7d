use chart_geometry::core::{Curve, Point, line_path};

fn sample() -> Vec<Point> {
    vec![
        Point::new(0.0, 10.0),
        Point::new(10.0, 20.0),
        Point::new(20.0, 5.0),
        Point::new(30.0, 15.0),
    ]
}

const ALL_CURVES: [Curve; 6] = [
    Curve::Linear,
    Curve::Step,
    Curve::StepAfter,
    Curve::StepBefore,
    Curve::Monotone,
    Curve::Natural,
];

/// Parses `C x1 y1 x2 y2 x y` commands into their end points.
fn cubic_end_points(path: &str) -> Vec<(f64, f64)> {
    let tokens: Vec<&str> = path.split(' ').collect();
    let mut ends = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if tokens[i] == "C" {
            let x: f64 = tokens[i + 5].parse().expect("x");
            let y: f64 = tokens[i + 6].parse().expect("y");
            ends.push((x, y));
            i += 7;
        } else {
            i += 1;
        }
    }
    ends
}

#[test]
fn empty_input_gives_empty_path_for_every_curve() {
    for curve in ALL_CURVES {
        assert_eq!(line_path(&[], curve), "");
    }
}

#[test]
fn single_point_gives_lone_move_for_every_curve() {
    for curve in ALL_CURVES {
        assert_eq!(line_path(&[Point::new(3.0, 4.0)], curve), "M 3 4");
    }
}

#[test]
fn linear_path_connects_points() {
    assert_eq!(
        line_path(&sample(), Curve::Linear),
        "M 0 10 L 10 20 L 20 5 L 30 15"
    );
}

#[test]
fn step_and_step_after_go_horizontal_first() {
    let expected = "M 0 10 H 10 V 20 H 20 V 5 H 30 V 15";
    assert_eq!(line_path(&sample(), Curve::Step), expected);
    assert_eq!(line_path(&sample(), Curve::StepAfter), expected);
}

#[test]
fn step_before_goes_vertical_first() {
    assert_eq!(
        line_path(&sample(), Curve::StepBefore),
        "M 0 10 V 20 H 10 V 5 H 20 V 15 H 30"
    );
}

#[test]
fn smooth_curves_use_only_cubic_segments_through_every_point() {
    let points = sample();
    for curve in [Curve::Monotone, Curve::Natural] {
        let path = line_path(&points, curve);
        assert!(path.starts_with("M 0 10 C "), "{curve:?}: {path}");
        assert!(!path.contains('L'));
        assert_eq!(path.matches('C').count(), points.len() - 1);

        let ends = cubic_end_points(&path);
        for (end, point) in ends.iter().zip(points.iter().skip(1)) {
            assert!((end.0 - point.x).abs() <= 1e-6);
            assert!((end.1 - point.y).abs() <= 1e-6);
        }
    }
}

#[test]
fn two_point_smooth_curves_are_straight_cubics() {
    let points = [Point::new(0.0, 0.0), Point::new(30.0, 60.0)];
    for curve in [Curve::Monotone, Curve::Natural] {
        assert_eq!(line_path(&points, curve), "M 0 0 C 10 20 20 40 30 60");
    }
}

#[test]
fn monotone_curve_does_not_overshoot_monotone_data() {
    let points = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 1.0),
        Point::new(20.0, 50.0),
        Point::new(30.0, 51.0),
    ];
    let path = line_path(&points, Curve::Monotone);
    let tokens: Vec<f64> = path
        .split(' ')
        .filter_map(|token| token.parse().ok())
        .collect();
    // Every y (odd positions) stays within the data range.
    for y in tokens.iter().skip(1).step_by(2) {
        assert!(*y >= 0.0 && *y <= 51.0, "{path}");
    }
}

#[test]
fn curve_names_deserialize_in_camel_case() {
    let curve: Curve = serde_json::from_str("\"stepBefore\"").expect("curve");
    assert_eq!(curve, Curve::StepBefore);
    assert_eq!(Curve::default(), Curve::Linear);
}
