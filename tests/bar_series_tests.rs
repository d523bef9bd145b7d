use chart_geometry::core::{BarExtent, clamp_bar_width, ensure_bar_min_height};
use proptest::prelude::*;

#[test]
fn bar_width_is_capped_only_by_positive_maximum() {
    assert_eq!(clamp_bar_width(40.0, Some(24.0)), 24.0);
    assert_eq!(clamp_bar_width(10.0, Some(24.0)), 10.0);
    assert_eq!(clamp_bar_width(40.0, None), 40.0);
    assert_eq!(clamp_bar_width(40.0, Some(0.0)), 40.0);
    assert_eq!(clamp_bar_width(40.0, Some(-5.0)), 40.0);
}

#[test]
fn short_upward_bar_grows_away_from_baseline() {
    let adjusted = ensure_bar_min_height(98.0, 2.0, 100.0, 6.0);
    assert_eq!(
        adjusted,
        BarExtent {
            y: 94.0,
            height: 6.0,
        }
    );
}

#[test]
fn short_downward_bar_keeps_its_baseline_edge() {
    let adjusted = ensure_bar_min_height(100.0, 2.0, 100.0, 6.0);
    assert_eq!((adjusted.y, adjusted.height), (100.0, 6.0));
}

#[test]
fn bars_that_need_no_adjustment_are_unchanged() {
    let tall = ensure_bar_min_height(50.0, 50.0, 100.0, 6.0);
    assert_eq!((tall.y, tall.height), (50.0, 50.0));

    let empty = ensure_bar_min_height(100.0, 0.0, 100.0, 6.0);
    assert_eq!((empty.y, empty.height), (100.0, 0.0));

    let disabled = ensure_bar_min_height(98.0, 2.0, 100.0, 0.0);
    assert_eq!((disabled.y, disabled.height), (98.0, 2.0));
}

proptest! {
    #[test]
    fn clamp_bar_width_is_idempotent(
        width in 0.0f64..1_000.0,
        max_width in proptest::option::of(-100.0f64..1_000.0)
    ) {
        let once = clamp_bar_width(width, max_width);
        prop_assert_eq!(clamp_bar_width(once, max_width), once);
    }

    #[test]
    fn adjusted_bars_reach_min_height(
        height in 0.01f64..5.9,
        baseline in 50.0f64..500.0,
        upward in any::<bool>()
    ) {
        let y = if upward { baseline - height } else { baseline };
        let adjusted = ensure_bar_min_height(y, height, baseline, 6.0);
        prop_assert_eq!(adjusted.height, 6.0);
        if upward {
            prop_assert!((adjusted.y + adjusted.height - baseline).abs() <= 1e-9);
        } else {
            prop_assert_eq!(adjusted.y, baseline);
        }
    }
}
