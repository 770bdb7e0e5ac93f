use polar_bars::core::{
    AxisScale, AxisView, BandScale, BarGroup, BarPosition, DataEntry, LinearScale, PolarCenter,
    SectorBuildInput, SectorBuildOptions, SectorValue, StackedValues, apply_min_point_size,
    build_sectors,
};
use proptest::prelude::*;

fn build(
    entries: &[DataEntry],
    angle: &LinearScale,
    stacking: Option<&StackedValues>,
    options: &SectorBuildOptions,
) -> Vec<polar_bars::core::SectorDescriptor> {
    let radius = BandScale::new(entries.len().max(1), 10.0, 200.0).expect("radius scale");
    let ticks = radius.ticks();
    let group = BarGroup::single("s", BarPosition::new(2.0, 6.0));
    let input = SectorBuildInput {
        series_id: "s",
        data_key: "value",
        entries,
        center: PolarCenter::new(250.0, 250.0),
        angle_axis: AxisView::number(angle),
        radius_axis: AxisView::category(&radius, &ticks),
        stacking,
        bar_group: &group,
        band_size: radius.ticks().first().map_or(0.0, |tick| tick.bandwidth),
        start_index: 0,
    };
    build_sectors(&input, options).expect("series is in its group")
}

proptest! {
    #[test]
    fn scalar_output_equals_second_element_of_resolved_pair(
        values in prop::collection::vec(-1_000.0f64..1_000.0, 0..32)
    ) {
        let angle = LinearScale::new(-1_000.0, 1_000.0, 0.0, 360.0).expect("angle scale");
        let entries: Vec<DataEntry> = values.iter().copied().map(DataEntry::new).collect();
        let sectors = build(&entries, &angle, None, &SectorBuildOptions::default());

        prop_assert_eq!(sectors.len(), values.len());
        for (sector, value) in sectors.iter().zip(values) {
            prop_assert_eq!(sector.value, SectorValue::Scalar(value));
        }
    }

    #[test]
    fn stacked_ranges_stay_inside_numeric_domain(
        pairs in prop::collection::vec((-500.0f64..500.0, -500.0f64..500.0), 1..32),
        domain_min in -200.0f64..0.0,
        domain_span in 1.0f64..400.0
    ) {
        let domain_max = domain_min + domain_span;
        let angle = LinearScale::new(domain_min, domain_max, 0.0, 360.0).expect("angle scale");
        let stacked = StackedValues::new(pairs.iter().map(|(a, b)| [*a, *b]).collect());
        let entries: Vec<DataEntry> = pairs.iter().map(|(_, b)| DataEntry::new(*b)).collect();
        let sectors = build(&entries, &angle, Some(&stacked), &SectorBuildOptions::default());

        for sector in &sectors {
            let SectorValue::Range([start, end]) = sector.value else {
                return Err(TestCaseError::fail("stacked sectors carry ranges"));
            };
            prop_assert!((domain_min..=domain_max).contains(&start));
            prop_assert!((domain_min..=domain_max).contains(&end));
        }
    }

    #[test]
    fn corrected_sweep_never_falls_below_min_point_size(
        value in -50.0f64..50.0,
        min_point_size in prop_oneof![-30.0f64..-0.5, 0.5f64..30.0]
    ) {
        let angle = LinearScale::new(-100.0, 100.0, 0.0, 360.0).expect("angle scale");
        let entries = vec![DataEntry::new(value)];
        let options = SectorBuildOptions {
            min_point_size,
            ..SectorBuildOptions::default()
        };
        let sector = &build(&entries, &angle, None, &options)[0];

        let raw_sweep = angle.scale(value) - angle.scale(0.0);
        let sweep = sector.sweep();
        if raw_sweep.abs() < min_point_size.abs() {
            prop_assert!((sweep.abs() - min_point_size.abs()).abs() <= 1e-9);
            let expected_sign = if raw_sweep != 0.0 {
                raw_sweep.signum()
            } else {
                min_point_size.signum()
            };
            prop_assert_eq!(sweep.signum(), expected_sign);
        } else {
            prop_assert!((sweep - raw_sweep).abs() <= 1e-9);
        }
    }

    #[test]
    fn min_point_size_never_moves_start(
        start in -360.0f64..360.0,
        end in -360.0f64..360.0,
        min_point_size in -45.0f64..45.0
    ) {
        let corrected = apply_min_point_size(start, end, min_point_size);
        prop_assert!((corrected - start).abs() + 1e-9 >= min_point_size.abs());
    }

    #[test]
    fn building_twice_is_deterministic(
        values in prop::collection::vec(0.0f64..100.0, 0..16),
        min_point_size in 0.0f64..20.0,
        with_background in any::<bool>()
    ) {
        let angle = LinearScale::new(0.0, 100.0, 0.0, 360.0).expect("angle scale");
        let entries: Vec<DataEntry> = values.iter().copied().map(DataEntry::new).collect();
        let options = SectorBuildOptions {
            min_point_size,
            background_arc: with_background.then_some((0.0, 360.0)),
            ..SectorBuildOptions::default()
        };
        let first = build(&entries, &angle, None, &options);
        let second = build(&entries, &angle, None, &options);
        prop_assert_eq!(first, second);
    }
}
