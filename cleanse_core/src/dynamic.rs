//! Dynamic (movement-based) exercise calculator.
//!
//! One cleansing cycle is a fixed distance, so speed, cycle time and total
//! duration are interchangeable:
//! - cycle time = distance / speed, in whole minutes
//! - total time = cycles × cycle time

use crate::cleansing::CleansingCycleCalculator;
use crate::config::DynamicConfig;
use crate::error::ensure_positive;
use crate::interpolation::round_to;
use crate::{CleansingCycleInput, CleansingCycleResult, CleansingCycles, Error, Result};

/// Distance covered by one cleansing cycle
pub const DISTANCE_PER_CYCLE_KM: f64 = 4.0;

/// Converts between speed (km/h), cycle counts and elapsed minutes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DynamicExerciseCalculator {
    distance_per_cycle_km: f64,
    cycles: CleansingCycleCalculator,
}

impl Default for DynamicExerciseCalculator {
    fn default() -> Self {
        Self {
            distance_per_cycle_km: DISTANCE_PER_CYCLE_KM,
            cycles: CleansingCycleCalculator::default(),
        }
    }
}

impl DynamicExerciseCalculator {
    pub fn new(distance_per_cycle_km: f64, target_cycles: u32) -> Result<Self> {
        Ok(Self {
            distance_per_cycle_km: ensure_positive("distance per cycle", distance_per_cycle_km)?,
            cycles: CleansingCycleCalculator::new(target_cycles)?,
        })
    }

    pub fn from_config(config: &DynamicConfig) -> Result<Self> {
        Self::new(config.distance_per_cycle_km, config.target_cycles)
    }

    pub fn distance_per_cycle_km(&self) -> f64 {
        self.distance_per_cycle_km
    }

    /// Minutes per cycle at `speed`, rounded to a whole minute
    pub fn cycle_time_minutes(&self, speed: f64) -> Result<f64> {
        let speed = ensure_positive("speed", speed)?;
        Ok((self.distance_per_cycle_km / speed * 60.0).round())
    }

    /// Speed (km/h, 2 decimals) that completes one cycle in `cycle_time` minutes
    pub fn speed_from_cycle_time(&self, cycle_time: f64) -> Result<f64> {
        let cycle_time = ensure_positive("cycle time", cycle_time)?;
        Ok(round_to(self.distance_per_cycle_km / (cycle_time / 60.0), 2))
    }

    /// Minutes needed for `cycles` cycles at `speed`
    pub fn total_time(&self, speed: f64, cycles: u32) -> Result<f64> {
        Ok(cycles as f64 * self.cycle_time_minutes(speed)?)
    }

    /// Speed needed to fit `cycles` cycles into `total_time_minutes`
    pub fn speed_from_cycles_and_time(&self, cycles: u32, total_time_minutes: f64) -> Result<f64> {
        if cycles == 0 {
            return Err(Error::invalid_argument("cycle count must be at least 1"));
        }
        self.speed_from_cycle_time(total_time_minutes / cycles as f64)
    }

    /// Completed cycles and minutes left in the current one
    pub fn cleansing_cycles(&self, speed: f64, total_time_minutes: f64) -> Result<CleansingCycles> {
        let cycle_time = self.rounded_cycle_time(speed)?;
        let total = non_negative_total(total_time_minutes)?;

        let completed_cycles = (total / cycle_time).floor() as u32;
        let remaining_minutes = cycle_time - total % cycle_time;

        tracing::debug!(
            "{} km/h -> {} min cycles, {} completed, {} min remaining",
            speed,
            cycle_time,
            completed_cycles,
            remaining_minutes
        );

        Ok(CleansingCycles {
            cycle_time,
            completed_cycles,
            remaining_minutes,
        })
    }

    /// Full recommendation record for a session at `speed`
    pub fn cleansing_cycles_detail(
        &self,
        speed: f64,
        total_time_minutes: f64,
    ) -> Result<CleansingCycleResult> {
        let cycle_time = self.rounded_cycle_time(speed)?;
        self.cycles.detail(&CleansingCycleInput {
            cycle_time,
            total_time_minutes,
        })
    }

    // Very high speeds round to a zero-minute cycle, which cannot be counted
    fn rounded_cycle_time(&self, speed: f64) -> Result<f64> {
        let cycle_time = self.cycle_time_minutes(speed)?;
        if cycle_time <= 0.0 {
            return Err(Error::invalid_argument(format!(
                "speed {} km/h rounds to a zero-minute cycle",
                speed
            )));
        }
        Ok(cycle_time)
    }
}

fn non_negative_total(total: f64) -> Result<f64> {
    if total.is_finite() && total >= 0.0 {
        Ok(total)
    } else {
        Err(Error::invalid_argument(format!(
            "total time must be a non-negative finite number, got {}",
            total
        )))
    }
}
