//! Core domain types for the cleansing calculators.
//!
//! This module defines the plain records passed in and out of the engine:
//! - Calibration samples and table rows
//! - Cycle inputs and results for dynamic exercise
//! - Temperature bands and safety assessments for water exposure

use serde::{Deserialize, Serialize};

// ============================================================================
// Calibration Types
// ============================================================================

/// One calibration sample of a piecewise-linear function
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Row of the water exposure table: minutes needed to cleanse one layer at a temperature
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct WaterExposureTablePoint {
    pub temperature: f64,
    pub min_duration_for_one_layer: f64,
}

impl From<WaterExposureTablePoint> for DataPoint {
    fn from(row: WaterExposureTablePoint) -> Self {
        DataPoint::new(row.temperature, row.min_duration_for_one_layer)
    }
}

/// Row of the static exercise table: minutes needed to reach a layer count
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct StaticExerciseTablePoint {
    pub mental_layers: f64,
    pub duration: f64,
}

impl From<StaticExerciseTablePoint> for DataPoint {
    fn from(row: StaticExerciseTablePoint) -> Self {
        DataPoint::new(row.mental_layers, row.duration)
    }
}

// ============================================================================
// Cycle Types
// ============================================================================

/// Input for the cleansing cycle detail calculation
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CleansingCycleInput {
    /// Minutes per cycle, must be positive
    pub cycle_time: f64,
    pub total_time_minutes: f64,
}

/// Short cycle summary produced by the dynamic exercise calculator
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CleansingCycles {
    pub cycle_time: f64,
    pub completed_cycles: u32,
    pub remaining_minutes: f64,
}

/// Full recommendation record for a dynamic exercise session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct CleansingCycleResult {
    pub cycle_time: f64,
    pub completed_cycles: u32,
    pub minutes_until_next_cycle: f64,
    /// 0 means the target was just reached, -1 means it was exceeded
    pub minutes_to_target_cycles: f64,
    pub recommended_exercise_minutes: f64,
    pub recommended_frequency_days: u32,
}

impl CleansingCycleResult {
    /// True when the session ran past the target cycle count
    pub fn is_overextended(&self) -> bool {
        self.minutes_to_target_cycles < 0.0
    }
}

// ============================================================================
// Safety Types
// ============================================================================

/// Water temperature band, coldest first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureBand {
    ExtremeCold,
    VeryCold,
    Cold,
    Normal,
    Warm,
    Hot,
}

impl TemperatureBand {
    pub const ALL: [TemperatureBand; 6] = [
        TemperatureBand::ExtremeCold,
        TemperatureBand::VeryCold,
        TemperatureBand::Cold,
        TemperatureBand::Normal,
        TemperatureBand::Warm,
        TemperatureBand::Hot,
    ];
}

/// Outcome of classifying a temperature/duration pair
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SafetyAssessment {
    pub band: TemperatureBand,
    pub is_dangerous: bool,
    pub max_safe_duration: f64,
}
