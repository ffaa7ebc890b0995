use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use u_spc::spc::{calculate_limits, detect_out_of_control, ControlLimits};
use u_spc::Reading;

fn readings(values: &[f64]) -> Vec<Reading> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Reading::with_timestamp(v, t0 + Duration::seconds(i as i64), "op"))
        .collect()
}

fn values(min_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-10_000.0f64..10_000.0, min_len..60)
}

proptest! {
    #[test]
    fn fewer_than_two_readings_give_empty_limits(v in prop::collection::vec(-10_000.0f64..10_000.0, 0..2)) {
        prop_assert!(calculate_limits(&readings(&v)).is_empty());
    }

    #[test]
    fn limits_are_ordered(v in values(2)) {
        let limits = calculate_limits(&readings(&v));
        let (lcl_x, mean_x, ucl_x) = (limits.lcl_x.unwrap(), limits.mean_x.unwrap(), limits.ucl_x.unwrap());
        let (lcl_mr, mean_mr, ucl_mr) = (limits.lcl_mr.unwrap(), limits.mean_mr.unwrap(), limits.ucl_mr.unwrap());

        prop_assert!(lcl_x <= mean_x && mean_x <= ucl_x);
        prop_assert_eq!(lcl_mr, 0.0);
        prop_assert!(lcl_mr <= mean_mr && mean_mr <= ucl_mr);
    }

    #[test]
    fn calculation_and_detection_are_deterministic(v in values(0)) {
        let data = readings(&v);
        let a = calculate_limits(&data);
        let b = calculate_limits(&data);
        prop_assert_eq!(a, b);

        let first = detect_out_of_control(&data, &a);
        let second = detect_out_of_control(&data, &b);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_limits_never_flag(v in values(0)) {
        prop_assert!(detect_out_of_control(&readings(&v), &ControlLimits::empty()).is_empty());
    }

    #[test]
    fn points_reference_valid_indices(v in values(0)) {
        let data = readings(&v);
        let limits = calculate_limits(&data);
        for p in detect_out_of_control(&data, &limits) {
            prop_assert!(p.index < data.len());
            prop_assert_eq!(p.timestamp, data[p.index].timestamp());
        }
    }
}

#[test]
fn shuffling_changes_moving_ranges() {
    let ordered = calculate_limits(&readings(&[1.0, 2.0, 3.0, 4.0, 5.0]));
    let shuffled = calculate_limits(&readings(&[3.0, 1.0, 5.0, 2.0, 4.0]));
    assert_eq!(ordered.mean_x, shuffled.mean_x);
    assert_ne!(ordered.mean_mr, shuffled.mean_mr);
}
