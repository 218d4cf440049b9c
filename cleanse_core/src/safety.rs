//! Exposure safety classification.
//!
//! Every finite water temperature falls in exactly one [`TemperatureBand`],
//! and each band has a maximum safe exposure. Bands are tested independently
//! against half-open boundaries:
//!
//! ```text
//! t <= 2         ExtremeCold    2 min
//! 2 < t <= 10    VeryCold       5 min
//! 10 < t < 25    Cold          30 min
//! 25 <= t < 30   Normal       120 min
//! 30 <= t <= 40  Warm          60 min
//! t > 40         Hot           15 min
//! ```
//!
//! The classifier only produces a [`SafetyAssessment`]; wording the warning
//! is left to the caller.

use crate::config::SafetyThresholds;
use crate::error::ensure_finite;
use crate::{Error, Result, SafetyAssessment, TemperatureBand};

impl TemperatureBand {
    /// Whether `temperature` lies in this band
    pub fn contains(self, temperature: f64, thresholds: &SafetyThresholds) -> bool {
        let t = temperature;
        let th = thresholds;
        match self {
            TemperatureBand::ExtremeCold => t <= th.extreme_cold_max,
            TemperatureBand::VeryCold => th.extreme_cold_max < t && t <= th.very_cold_max,
            TemperatureBand::Cold => th.very_cold_max < t && t < th.cold_below,
            TemperatureBand::Normal => th.cold_below <= t && t < th.normal_below,
            TemperatureBand::Warm => th.normal_below <= t && t <= th.warm_max,
            TemperatureBand::Hot => t > th.warm_max,
        }
    }

    /// Longest safe exposure in this band, in minutes
    pub fn max_safe_duration(self, thresholds: &SafetyThresholds) -> f64 {
        let m = &thresholds.max_safe_minutes;
        match self {
            TemperatureBand::ExtremeCold => m.extreme_cold,
            TemperatureBand::VeryCold => m.very_cold,
            TemperatureBand::Cold => m.cold,
            TemperatureBand::Normal => m.normal,
            TemperatureBand::Warm => m.warm,
            TemperatureBand::Hot => m.hot,
        }
    }
}

/// Maps a temperature/duration pair to a band and a danger flag
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExposureSafetyClassifier {
    thresholds: SafetyThresholds,
}

impl ExposureSafetyClassifier {
    pub fn new(thresholds: SafetyThresholds) -> Result<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &SafetyThresholds {
        &self.thresholds
    }

    /// The single band containing `temperature`
    pub fn band(&self, temperature: f64) -> Result<TemperatureBand> {
        let temperature = ensure_finite("temperature", temperature)?;

        let mut matching = TemperatureBand::ALL
            .iter()
            .copied()
            .filter(|band| band.contains(temperature, &self.thresholds));

        match (matching.next(), matching.next()) {
            (Some(band), None) => Ok(band),
            _ => Err(Error::Config(format!(
                "temperature bands do not partition {}°C",
                temperature
            ))),
        }
    }

    /// Classify an exposure; dangerous when `duration` exceeds the band's limit
    pub fn classify(&self, temperature: f64, duration: f64) -> Result<SafetyAssessment> {
        let duration = ensure_finite("duration", duration)?;
        let band = self.band(temperature)?;
        let max_safe_duration = band.max_safe_duration(&self.thresholds);
        let is_dangerous = duration > max_safe_duration;

        if is_dangerous {
            tracing::info!(
                "{} min at {}°C exceeds the {:?} limit of {} min",
                duration,
                temperature,
                band,
                max_safe_duration
            );
        }

        Ok(SafetyAssessment {
            band,
            is_dangerous,
            max_safe_duration,
        })
    }
}

/// Classify with the default thresholds
pub fn classify(temperature: f64, duration: f64) -> Result<SafetyAssessment> {
    ExposureSafetyClassifier::default().classify(temperature, duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extreme_cold_is_dangerous() {
        let assessment = classify(1.0, 3.0).unwrap();
        assert_eq!(assessment.band, TemperatureBand::ExtremeCold);
        assert!(assessment.is_dangerous);
        assert_eq!(assessment.max_safe_duration, 2.0);
    }

    #[test]
    fn test_normal_is_safe() {
        let assessment = classify(27.0, 100.0).unwrap();
        assert_eq!(assessment.band, TemperatureBand::Normal);
        assert!(!assessment.is_dangerous);
    }

    #[test]
    fn test_limit_itself_is_safe() {
        assert!(!classify(27.0, 120.0).unwrap().is_dangerous);
        assert!(classify(27.0, 120.5).unwrap().is_dangerous);
    }

    #[test]
    fn test_band_boundaries() {
        let c = ExposureSafetyClassifier::default();
        let cases = [
            (-10.0, TemperatureBand::ExtremeCold),
            (2.0, TemperatureBand::ExtremeCold),
            (2.01, TemperatureBand::VeryCold),
            (10.0, TemperatureBand::VeryCold),
            (10.5, TemperatureBand::Cold),
            (24.99, TemperatureBand::Cold),
            (25.0, TemperatureBand::Normal),
            (29.99, TemperatureBand::Normal),
            (30.0, TemperatureBand::Warm),
            (40.0, TemperatureBand::Warm),
            (40.01, TemperatureBand::Hot),
            (90.0, TemperatureBand::Hot),
        ];
        for (t, expected) in cases {
            assert_eq!(c.band(t).unwrap(), expected, "temperature {}", t);
        }
    }

    #[test]
    fn test_max_safe_durations() {
        let th = SafetyThresholds::default();
        let limits: Vec<f64> = TemperatureBand::ALL
            .iter()
            .map(|b| b.max_safe_duration(&th))
            .collect();
        assert_eq!(limits, vec![2.0, 5.0, 30.0, 120.0, 60.0, 15.0]);
    }

    #[test]
    fn test_hot_water() {
        let assessment = classify(42.0, 20.0).unwrap();
        assert_eq!(assessment.band, TemperatureBand::Hot);
        assert!(assessment.is_dangerous);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut th = SafetyThresholds::default();
        th.warm_max = 38.0;
        th.max_safe_minutes.hot = 5.0;
        let c = ExposureSafetyClassifier::new(th).unwrap();
        let assessment = c.classify(39.0, 6.0).unwrap();
        assert_eq!(assessment.band, TemperatureBand::Hot);
        assert!(assessment.is_dangerous);
    }

    #[test]
    fn test_rejects_invalid_thresholds() {
        let mut th = SafetyThresholds::default();
        th.very_cold_max = 1.0;
        assert!(matches!(
            ExposureSafetyClassifier::new(th),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_input() {
        assert!(matches!(
            classify(f64::NAN, 10.0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(classify(20.0, f64::INFINITY).is_err());
    }
}
