use polar_bars::animation::{AnimationConfig, SectorAnimator, interpolate_sectors};
use polar_bars::core::{Point, PolarCenter, SectorDescriptor, SectorValue};
use proptest::prelude::*;
use serde_json::Value;

fn sector(start_angle: f64, end_angle: f64) -> SectorDescriptor {
    SectorDescriptor {
        center: PolarCenter::new(50.0, 50.0),
        inner_radius: 5.0,
        outer_radius: 15.0,
        start_angle,
        end_angle,
        value: SectorValue::Scalar(1.0),
        payload: Value::Null,
        tooltip_position: Point::new(50.0, 50.0),
        tooltip_payload: Vec::new(),
        background: None,
    }
}

fn sectors(angles: &[(f64, f64)]) -> Vec<SectorDescriptor> {
    angles.iter().map(|(s, e)| sector(*s, *e)).collect()
}

proptest! {
    #[test]
    fn interpolation_is_linear_between_snapshots(
        previous in prop::collection::vec((-360.0f64..360.0, -360.0f64..360.0), 0..12),
        current in prop::collection::vec((-360.0f64..360.0, -360.0f64..360.0), 1..12),
        t in 0.0f64..=1.0
    ) {
        let prev = sectors(&previous);
        let cur = sectors(&current);
        let frame = interpolate_sectors(Some(prev.as_slice()), &cur, t);

        prop_assert_eq!(frame.len(), cur.len());
        for (index, step) in frame.iter().enumerate() {
            let (cur_start, cur_end) = current[index];
            match previous.get(index) {
                Some((prev_start, prev_end)) => {
                    let start = prev_start + (cur_start - prev_start) * t;
                    let end = prev_end + (cur_end - prev_end) * t;
                    prop_assert!((step.start_angle - start).abs() <= 1e-9);
                    prop_assert!((step.end_angle - end).abs() <= 1e-9);
                }
                None => {
                    prop_assert_eq!(step.start_angle, cur_start);
                    let end = cur_start + (cur_end - cur_start) * t;
                    prop_assert!((step.end_angle - end).abs() <= 1e-9);
                }
            }
            prop_assert_eq!(step.inner_radius, 5.0);
        }
    }

    #[test]
    fn endpoints_match_previous_and_current(
        angles in prop::collection::vec(
            ((-360.0f64..360.0, -360.0f64..360.0), (-360.0f64..360.0, -360.0f64..360.0)),
            1..12
        )
    ) {
        let prev = sectors(&angles.iter().map(|(p, _)| *p).collect::<Vec<_>>());
        let cur = sectors(&angles.iter().map(|(_, c)| *c).collect::<Vec<_>>());

        let at_start = interpolate_sectors(Some(prev.as_slice()), &cur, 0.0);
        let at_end = interpolate_sectors(Some(prev.as_slice()), &cur, 1.0);
        for index in 0..cur.len() {
            prop_assert_eq!(at_start[index].start_angle, prev[index].start_angle);
            prop_assert_eq!(at_start[index].end_angle, prev[index].end_angle);
            prop_assert!((at_end[index].start_angle - cur[index].start_angle).abs() <= 1e-9);
            prop_assert!((at_end[index].end_angle - cur[index].end_angle).abs() <= 1e-9);
        }
    }

    #[test]
    fn ticks_are_deterministic_for_fixed_progress(
        previous in prop::collection::vec((0.0f64..180.0, 180.0f64..360.0), 1..8),
        current in prop::collection::vec((0.0f64..180.0, 180.0f64..360.0), 1..8),
        t in 0.0f64..1.0
    ) {
        let build = || {
            let mut animator = SectorAnimator::new(AnimationConfig::default()).expect("animator");
            animator.on_input(sectors(&previous), 1u64);
            animator.on_tick(1.0).expect("settle");
            animator.on_input(sectors(&current), 2u64);
            animator.on_tick(t).expect("tick")
        };
        prop_assert_eq!(build(), build());
    }
}
