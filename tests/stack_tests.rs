use chart_geometry::core::{SeriesPoint, StackedPoint, stack_series_data};

#[test]
fn second_series_sits_on_top_of_first() {
    let stacked = stack_series_data(&[
        vec![SeriesPoint::new("a", 10.0)],
        vec![SeriesPoint::new("a", 5.0)],
    ]);
    assert_eq!(
        stacked[1][0],
        StackedPoint {
            x: "a",
            y0: 10.0,
            y1: 15.0,
        }
    );
    assert_eq!(stacked[0][0].y0, 0.0);
    assert_eq!(stacked[0][0].y1, 10.0);
}

#[test]
fn empty_input_stacks_to_nothing() {
    let stacked = stack_series_data::<f64>(&[]);
    assert!(stacked.is_empty());
}

#[test]
fn series_order_and_index_alignment_are_preserved() {
    let stacked = stack_series_data(&[
        vec![SeriesPoint::new(1, 1.0), SeriesPoint::new(2, 2.0), SeriesPoint::new(3, 3.0)],
        vec![SeriesPoint::new(1, 10.0), SeriesPoint::new(2, 20.0), SeriesPoint::new(3, 30.0)],
        vec![SeriesPoint::new(1, 100.0), SeriesPoint::new(2, 200.0), SeriesPoint::new(3, 300.0)],
    ]);
    assert_eq!(stacked.len(), 3);
    assert_eq!(stacked[2][1].y0, 22.0);
    assert_eq!(stacked[2][1].y1, 222.0);
    assert_eq!(stacked[2][2].height(), 300.0);
}

#[test]
fn alignment_is_by_index_not_by_x() {
    let stacked = stack_series_data(&[
        vec![SeriesPoint::new("a", 1.0), SeriesPoint::new("b", 2.0)],
        vec![SeriesPoint::new("b", 10.0), SeriesPoint::new("a", 20.0)],
    ]);
    assert_eq!(stacked[1][0].x, "b");
    assert_eq!(stacked[1][0].y0, 1.0);
}

#[test]
fn longer_series_stack_from_zero_past_shorter_ones() {
    let stacked = stack_series_data(&[
        vec![SeriesPoint::new(0, 4.0)],
        vec![SeriesPoint::new(0, 1.0), SeriesPoint::new(1, 2.0)],
    ]);
    assert_eq!(stacked[1][1].y0, 0.0);
    assert_eq!(stacked[1][1].y1, 2.0);
}

#[test]
fn negative_values_stack_downward() {
    let stacked = stack_series_data(&[
        vec![SeriesPoint::new(0, 5.0)],
        vec![SeriesPoint::new(0, -3.0)],
    ]);
    assert_eq!(stacked[1][0].y0, 5.0);
    assert_eq!(stacked[1][0].y1, 2.0);
}
