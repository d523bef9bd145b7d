use std::f64::consts::TAU;

use chart_geometry::core::{PieOptions, pie_arcs_from_values, radar_angles};
use proptest::prelude::*;

proptest! {
    #[test]
    fn equal_values_get_equal_spans(value in 0.001f64..1_000.0, count in 1usize..32) {
        let values = vec![value; count];
        let arcs = pie_arcs_from_values(&values, PieOptions::default());
        prop_assert_eq!(arcs.len(), count);
        for arc in &arcs {
            prop_assert!((arc.span() - TAU / count as f64).abs() <= 1e-9);
        }
    }

    #[test]
    fn spans_are_proportional_and_fill_the_window(
        values in proptest::collection::vec(0.0f64..1_000.0, 1..48),
        pad in 0.0f64..0.05
    ) {
        let arcs = pie_arcs_from_values(&values, PieOptions::default().with_pad_angle(pad));
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            prop_assert!(arcs.is_empty());
        } else {
            prop_assert_eq!(arcs.len(), values.len());
            let covered: f64 = arcs.iter().map(|arc| arc.span() + arc.pad_angle).sum();
            prop_assert!((covered - TAU).abs() <= 1e-9);
            for arc in &arcs {
                prop_assert!(arc.end_angle >= arc.start_angle);
            }
        }
    }

    #[test]
    fn non_positive_data_yields_no_arcs(
        values in proptest::collection::vec(-1_000.0f64..=0.0, 0..16)
    ) {
        prop_assert!(pie_arcs_from_values(&values, PieOptions::default()).is_empty());
    }

    #[test]
    fn radar_angle_steps_are_uniform(count in 1usize..64) {
        let angles = radar_angles(count);
        prop_assert_eq!(angles.len(), count);
        for pair in angles.windows(2) {
            prop_assert!((pair[1] - pair[0] - TAU / count as f64).abs() <= 1e-9);
        }
    }
}
