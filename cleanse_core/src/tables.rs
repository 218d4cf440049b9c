//! Built-in calibration tables.
//!
//! The tables are empirical constants. They are built once on first use and
//! shared by every calculator.

use crate::types::*;
use once_cell::sync::Lazy;

/// Water exposure rows, ordered by temperature (°C -> minutes per layer)
pub const WATER_EXPOSURE_ROWS: [WaterExposureTablePoint; 8] = [
    water(3.5, 1.0),
    water(6.0, 2.0),
    water(10.0, 3.0),
    water(15.0, 4.5),
    water(20.0, 6.0),
    water(25.0, 10.0),
    water(30.0, 15.0),
    water(40.0, 30.0),
];

/// Static exercise rows, ordered by layer count (layers -> minutes)
pub const STATIC_EXERCISE_ROWS: [StaticExerciseTablePoint; 5] = [
    stat(1.0, 14.0),
    stat(2.0, 27.0),
    stat(3.0, 39.0),
    stat(4.0, 52.0),
    stat(5.0, 64.0),
];

static WATER_EXPOSURE_TABLE: Lazy<Vec<DataPoint>> =
    Lazy::new(|| WATER_EXPOSURE_ROWS.iter().copied().map(DataPoint::from).collect());

static STATIC_EXERCISE_TABLE: Lazy<Vec<DataPoint>> =
    Lazy::new(|| STATIC_EXERCISE_ROWS.iter().copied().map(DataPoint::from).collect());

const fn water(temperature: f64, min_duration_for_one_layer: f64) -> WaterExposureTablePoint {
    WaterExposureTablePoint {
        temperature,
        min_duration_for_one_layer,
    }
}

const fn stat(mental_layers: f64, duration: f64) -> StaticExerciseTablePoint {
    StaticExerciseTablePoint {
        mental_layers,
        duration,
    }
}

/// Water exposure table as interpolation samples (x = °C, y = minutes per layer)
pub fn water_exposure_table() -> &'static [DataPoint] {
    &WATER_EXPOSURE_TABLE
}

/// Static exercise table as interpolation samples (x = layers, y = minutes)
pub fn static_exercise_table() -> &'static [DataPoint] {
    &STATIC_EXERCISE_TABLE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolation::validate_table;

    #[test]
    fn test_builtin_tables_are_valid() {
        validate_table(water_exposure_table()).unwrap();
        validate_table(static_exercise_table()).unwrap();
    }

    #[test]
    fn test_water_table_spans_calibration_range() {
        let table = water_exposure_table();
        assert_eq!(table.len(), 8);
        assert_eq!(table.first().unwrap().x, 3.5);
        assert_eq!(table.last().unwrap().x, 40.0);
    }

    #[test]
    fn test_static_table_layers() {
        let layers: Vec<f64> = static_exercise_table().iter().map(|p| p.x).collect();
        assert_eq!(layers, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_tables_are_shared() {
        let a = water_exposure_table().as_ptr();
        let b = water_exposure_table().as_ptr();
        assert_eq!(a, b);
    }
}
