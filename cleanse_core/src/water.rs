//! Water exposure calculator.
//!
//! Converts between water temperature, exposure time and cleansed mental
//! layers. All three conversions read the same temperature -> minutes-per-layer
//! table; temperatures outside it are extrapolated, not rejected.

use crate::error::{ensure_finite, ensure_positive};
use crate::interpolation::{
    interpolate_forward, interpolate_inverse, round_to, validate_table, DEFAULT_PRECISION,
};
use crate::tables::water_exposure_table;
use crate::{DataPoint, Result};
use std::borrow::Cow;

/// Three-way water exposure conversion over a calibration table
#[derive(Clone, Debug, PartialEq)]
pub struct WaterExposureCalculator {
    table: Cow<'static, [DataPoint]>,
}

impl Default for WaterExposureCalculator {
    fn default() -> Self {
        Self {
            table: Cow::Borrowed(water_exposure_table()),
        }
    }
}

impl WaterExposureCalculator {
    /// Use a custom temperature -> minutes-per-layer table
    pub fn with_table(table: Vec<DataPoint>) -> Result<Self> {
        validate_table(&table)?;
        Ok(Self {
            table: Cow::Owned(table),
        })
    }

    pub fn table(&self) -> &[DataPoint] {
        &self.table
    }

    /// Minutes needed to cleanse one layer at `temperature`
    pub fn time_for_one_layer(&self, temperature: f64, precision: u32) -> Result<f64> {
        let temperature = ensure_finite("temperature", temperature)?;
        self.note_extrapolation(temperature);
        interpolate_forward(temperature, &self.table, precision)
    }

    /// Whole layers cleansed by `exposure_time` minutes at `temperature`
    pub fn mental_layers_cleansed(&self, temperature: f64, exposure_time: f64) -> Result<i32> {
        let exposure_time = ensure_finite("exposure time", exposure_time)?;
        let per_layer = ensure_positive(
            "time for one layer",
            self.time_for_one_layer(temperature, DEFAULT_PRECISION)?,
        )?;

        let layers = round_to(exposure_time / per_layer, 2).floor() as i32;
        tracing::debug!(
            "{} min at {}°C ({} min/layer) -> {} layers",
            exposure_time,
            temperature,
            per_layer,
            layers
        );
        Ok(layers)
    }

    /// Minutes needed for `mental_layers` at `temperature`, to one decimal
    pub fn total_exposure_time(&self, temperature: f64, mental_layers: f64) -> Result<f64> {
        let mental_layers = ensure_finite("mental layers", mental_layers)?;
        let per_layer = self.time_for_one_layer(temperature, 1)?;
        let total = round_to(per_layer * mental_layers, 1);
        tracing::debug!(
            "{} layers at {}°C -> {} min",
            mental_layers,
            temperature,
            total
        );
        Ok(total)
    }

    /// Temperature (°C, one decimal) at which `exposure_time` minutes cleanse
    /// `mental_layers` layers
    pub fn required_temperature(&self, mental_layers: f64, exposure_time: f64) -> Result<f64> {
        let mental_layers = ensure_positive("mental layers", mental_layers)?;
        let exposure_time = ensure_finite("exposure time", exposure_time)?;
        let temperature = interpolate_inverse(exposure_time / mental_layers, &self.table, 1)?;
        tracing::debug!(
            "{} layers in {} min -> {}°C",
            mental_layers,
            exposure_time,
            temperature
        );
        Ok(temperature)
    }

    fn note_extrapolation(&self, temperature: f64) {
        if let (Some(first), Some(last)) = (self.table.first(), self.table.last()) {
            if temperature < first.x || temperature > last.x {
                tracing::warn!(
                    "Temperature {}°C is outside the calibrated range {}..{}°C, extrapolating",
                    temperature,
                    first.x,
                    last.x
                );
            }
        }
    }
}
