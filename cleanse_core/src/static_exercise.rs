//! Static exercise calculator: mental layers <-> minutes.

use crate::interpolation::{interpolate_forward, interpolate_inverse, validate_table};
use crate::tables::static_exercise_table;
use crate::{DataPoint, Result};
use std::borrow::Cow;

/// Converts between mental layer counts and static exercise duration
#[derive(Clone, Debug, PartialEq)]
pub struct StaticExerciseCalculator {
    table: Cow<'static, [DataPoint]>,
}

impl Default for StaticExerciseCalculator {
    fn default() -> Self {
        Self {
            table: Cow::Borrowed(static_exercise_table()),
        }
    }
}

impl StaticExerciseCalculator {
    /// Use a custom layers -> minutes table
    pub fn with_table(table: Vec<DataPoint>) -> Result<Self> {
        validate_table(&table)?;
        Ok(Self {
            table: Cow::Owned(table),
        })
    }

    pub fn table(&self) -> &[DataPoint] {
        &self.table
    }

    /// Minutes needed for `layers`, to one decimal
    pub fn duration_from_layers(&self, layers: f64) -> Result<f64> {
        let duration = interpolate_forward(layers, &self.table, 1)?;
        tracing::debug!("{} layers -> {} min", layers, duration);
        Ok(duration)
    }

    /// Whole layers reached after `duration` minutes
    ///
    /// Not capped at the last table row: long sessions extrapolate past it.
    pub fn layers_from_duration(&self, duration: f64) -> Result<i32> {
        let layers = interpolate_inverse(duration, &self.table, 2)?.floor() as i32;
        tracing::debug!("{} min -> {} layers", duration, layers);
        Ok(layers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_duration_from_layers() {
        let calc = StaticExerciseCalculator::default();
        assert_eq!(calc.duration_from_layers(1.0).unwrap(), 14.0);
        assert_eq!(calc.duration_from_layers(3.0).unwrap(), 39.0);
        assert_eq!(calc.duration_from_layers(5.0).unwrap(), 64.0);
        assert_eq!(calc.duration_from_layers(2.5).unwrap(), 33.0);
    }

    #[test]
    fn test_layers_from_duration_is_floored() {
        let calc = StaticExerciseCalculator::default();
        assert_eq!(calc.layers_from_duration(30.0).unwrap(), 2);
        assert_eq!(calc.layers_from_duration(39.0).unwrap(), 3);
        assert_eq!(calc.layers_from_duration(51.0).unwrap(), 3);
        assert_eq!(calc.layers_from_duration(14.0).unwrap(), 1);
    }

    #[test]
    fn test_layers_extrapolate_past_table() {
        let calc = StaticExerciseCalculator::default();
        // Last segment is 12 min per layer: 64 + 24 = 88 -> 7 layers
        assert_eq!(calc.layers_from_duration(88.0).unwrap(), 7);
        // First segment is 13 min per layer: 1 min -> 0 layers
        assert_eq!(calc.layers_from_duration(1.0).unwrap(), 0);
    }

    #[test]
    fn test_duration_extrapolates_past_table() {
        let calc = StaticExerciseCalculator::default();
        assert_eq!(calc.duration_from_layers(6.0).unwrap(), 76.0);
    }

    #[test]
    fn test_custom_table() {
        let calc = StaticExerciseCalculator::with_table(vec![
            DataPoint::new(1.0, 10.0),
            DataPoint::new(2.0, 20.0),
        ])
        .unwrap();
        assert_eq!(calc.duration_from_layers(1.5).unwrap(), 15.0);
        assert_eq!(calc.layers_from_duration(25.0).unwrap(), 2);

        assert!(matches!(
            StaticExerciseCalculator::with_table(vec![DataPoint::new(1.0, 10.0)]),
            Err(Error::InsufficientData { points: 1 })
        ));
    }
}
