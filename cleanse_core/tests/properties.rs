//! Property tests for the calculation engine.
//!
//! These cover the behaviour that must hold for every input, not just the
//! worked examples in the unit tests:
//! - Interpolation is exact at calibration points and linear between them
//! - Forward then inverse interpolation returns the starting value
//! - Cycle arithmetic is consistent
//! - Every temperature lands in exactly one safety band

use approx::assert_abs_diff_eq;
use cleanse_core::tables::{static_exercise_table, water_exposure_table};
use cleanse_core::*;
use proptest::prelude::*;

#[test]
fn calibration_points_are_exact_in_both_directions() {
    for table in [water_exposure_table(), static_exercise_table()] {
        for p in table {
            assert_eq!(interpolate_forward(p.x, table, DEFAULT_PRECISION).unwrap(), p.y);
            assert_eq!(interpolate_inverse(p.y, table, DEFAULT_PRECISION).unwrap(), p.x);
        }
    }
}

#[test]
fn midpoints_are_arithmetic_means() {
    for table in [water_exposure_table(), static_exercise_table()] {
        for w in table.windows(2) {
            let mid_x = (w[0].x + w[1].x) / 2.0;
            let mean_y = (w[0].y + w[1].y) / 2.0;
            let y = interpolate_forward(mid_x, table, 6).unwrap();
            assert_abs_diff_eq!(y, mean_y, epsilon = 1e-6);
        }
    }
}

#[test]
fn worked_scenarios() {
    let detail = cleansing_cycles_detail(&CleansingCycleInput {
        cycle_time: 48.0,
        total_time_minutes: 240.0,
    })
    .unwrap();
    assert_eq!(detail.completed_cycles, 5);
    assert_eq!(detail.minutes_to_target_cycles, 0.0);
    assert_eq!(detail.minutes_until_next_cycle, 48.0);
    assert_eq!(detail.recommended_frequency_days, 7);

    let detail = cleansing_cycles_detail(&CleansingCycleInput {
        cycle_time: 48.0,
        total_time_minutes: 380.0,
    })
    .unwrap();
    assert_eq!(detail.completed_cycles, 7);
    assert_eq!(detail.minutes_to_target_cycles, -1.0);
    assert_eq!(detail.recommended_exercise_minutes, 240.0);
    assert_eq!(detail.recommended_frequency_days, 7);

    let water = WaterExposureCalculator::default();
    assert_eq!(water.mental_layers_cleansed(10.0, 6.0).unwrap(), 2);
    assert_eq!(water.total_exposure_time(20.0, 2.0).unwrap(), 12.0);

    let stat = StaticExerciseCalculator::default();
    assert_eq!(stat.duration_from_layers(3.0).unwrap(), 39.0);
    assert_eq!(stat.layers_from_duration(30.0).unwrap(), 2);

    let freezing = classify(1.0, 3.0).unwrap();
    assert_eq!(freezing.band, TemperatureBand::ExtremeCold);
    assert!(freezing.is_dangerous);

    let normal = classify(27.0, 100.0).unwrap();
    assert_eq!(normal.band, TemperatureBand::Normal);
    assert!(!normal.is_dangerous);
}

#[test]
fn records_serialize_with_snake_case_bands() {
    let assessment = classify(45.0, 10.0).unwrap();
    let json = serde_json::to_value(assessment).unwrap();
    assert_eq!(json["band"], "hot");
    assert_eq!(json["is_dangerous"], false);
    assert_eq!(json["max_safe_duration"], 15.0);
}

proptest! {
    #[test]
    fn water_forward_then_inverse_round_trips(t in 3.5f64..40.0) {
        let table = water_exposure_table();
        let y = interpolate_forward(t, table, 9).unwrap();
        let x = interpolate_inverse(y, table, 9).unwrap();
        prop_assert!((x - t).abs() < 1e-6, "{} -> {} -> {}", t, y, x);
    }

    #[test]
    fn static_forward_then_inverse_round_trips(layers in 1.0f64..5.0) {
        let table = static_exercise_table();
        let minutes = interpolate_forward(layers, table, 9).unwrap();
        let back = interpolate_inverse(minutes, table, 9).unwrap();
        prop_assert!((back - layers).abs() < 1e-6);
    }

    #[test]
    fn total_time_divides_back_to_cycle_count(speed in 2.0f64..45.0, cycles in 0u32..20) {
        let calc = DynamicExerciseCalculator::default();
        let total = calc.total_time(speed, cycles).unwrap();
        let cycle_time = calc.cycle_time_minutes(speed).unwrap();
        prop_assert_eq!(total / cycle_time, cycles as f64);
    }

    #[test]
    fn cycles_account_for_all_elapsed_time(speed in 2.0f64..45.0, total in 0u32..1000) {
        let calc = DynamicExerciseCalculator::default();
        let total = total as f64;
        let cycles = calc.cleansing_cycles(speed, total).unwrap();
        let elapsed = cycles.completed_cycles as f64 * cycles.cycle_time
            + (cycles.cycle_time - cycles.remaining_minutes);
        prop_assert_eq!(elapsed, total);
        prop_assert!(cycles.remaining_minutes > 0.0);
        prop_assert!(cycles.remaining_minutes <= cycles.cycle_time);
    }

    #[test]
    fn minutes_to_target_never_below_minus_one(cycle_time in 1u32..200, total in 0u32..2000) {
        let detail = cleansing_cycles_detail(&CleansingCycleInput {
            cycle_time: cycle_time as f64,
            total_time_minutes: total as f64,
        })
        .unwrap();
        prop_assert!(detail.minutes_to_target_cycles >= -1.0);
        prop_assert!(detail.recommended_frequency_days <= 7);
        if detail.minutes_to_target_cycles >= 0.0 {
            prop_assert_eq!(detail.recommended_exercise_minutes, total as f64);
        }
    }

    #[test]
    fn exactly_one_band_contains_any_temperature(t in -1000.0f64..1000.0) {
        let thresholds = SafetyThresholds::default();
        let count = TemperatureBand::ALL
            .iter()
            .filter(|band| band.contains(t, &thresholds))
            .count();
        prop_assert_eq!(count, 1);
        prop_assert!(ExposureSafetyClassifier::default().band(t).is_ok());
    }

    #[test]
    fn danger_means_duration_over_limit(t in -20.0f64..60.0, duration in 0.0f64..300.0) {
        let assessment = classify(t, duration).unwrap();
        prop_assert_eq!(assessment.is_dangerous, duration > assessment.max_safe_duration);
    }
}
