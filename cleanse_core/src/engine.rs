//! Calculation engine bundling every calculator behind one configuration.
//!
//! Callers that only need one conversion can use the calculators directly;
//! the engine exists so a front end can build everything once from a
//! [`Config`] and pass a single value around.

use serde::{Deserialize, Serialize};

use crate::{
    Config, DynamicExerciseCalculator, ExposureSafetyClassifier, Result, SafetyAssessment,
    StaticExerciseCalculator, WaterExposureCalculator,
};

/// All calculators, configured once
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Engine {
    pub dynamic: DynamicExerciseCalculator,
    pub static_exercise: StaticExerciseCalculator,
    pub water: WaterExposureCalculator,
    pub safety: ExposureSafetyClassifier,
}

/// Water exposure conversion together with its safety classification
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WaterExposurePlan {
    pub temperature: f64,
    pub exposure_time: f64,
    pub mental_layers: f64,
    pub safety: SafetyAssessment,
}

impl Engine {
    pub fn from_config(config: &Config) -> Result<Self> {
        let engine = Self {
            dynamic: DynamicExerciseCalculator::from_config(&config.dynamic)?,
            static_exercise: StaticExerciseCalculator::default(),
            water: WaterExposureCalculator::default(),
            safety: ExposureSafetyClassifier::new(config.safety.clone())?,
        };
        tracing::debug!(
            "Engine ready: {} km per cycle, {} target cycles",
            engine.dynamic.distance_per_cycle_km(),
            config.dynamic.target_cycles
        );
        Ok(engine)
    }

    /// Exposure time for `mental_layers` at `temperature`, with its safety check
    pub fn plan_water_exposure(
        &self,
        temperature: f64,
        mental_layers: f64,
    ) -> Result<WaterExposurePlan> {
        let exposure_time = self.water.total_exposure_time(temperature, mental_layers)?;
        let safety = self.safety.classify(temperature, exposure_time)?;
        Ok(WaterExposurePlan {
            temperature,
            exposure_time,
            mental_layers,
            safety,
        })
    }
}
