use chart_geometry::core::LinearScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_hits_range_endpoints(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        range_start in -5_000.0f64..5_000.0,
        range_end in -5_000.0f64..5_000.0
    ) {
        let domain_end = domain_start + domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (range_start, range_end));

        prop_assert!((scale.map(domain_start) - range_start).abs() <= 1e-6);
        prop_assert!((scale.map(domain_end) - range_end).abs() <= 1e-6);
    }

    #[test]
    fn linear_scale_is_monotone_in_range_direction(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.01f64..1_000.0,
        range_start in 0.0f64..1_000.0,
        range_span in 1.0f64..1_000.0,
        inverted in any::<bool>(),
        a in 0.0f64..1.0,
        b in 0.0f64..1.0
    ) {
        let range = if inverted {
            (range_start + range_span, range_start)
        } else {
            (range_start, range_start + range_span)
        };
        let scale = LinearScale::new((domain_start, domain_start + domain_span), range);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let v_lo = domain_start + lo * domain_span;
        let v_hi = domain_start + hi * domain_span;

        if inverted {
            prop_assert!(scale.map(v_lo) >= scale.map(v_hi));
        } else {
            prop_assert!(scale.map(v_lo) <= scale.map(v_hi));
        }
    }

    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;
        let scale = LinearScale::new((domain_start, domain_end), (0.0, 2048.0));

        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() <= 1e-6);
    }
}
