#![forbid(unsafe_code)]

//! Calculation engine for cleansing exercise planning.
//!
//! This crate provides:
//! - Piecewise-linear interpolation over calibration tables
//! - Dynamic exercise conversions (speed, cycles, duration)
//! - Static exercise and water exposure conversions (mental layers)
//! - Cleansing cycle recommendations
//! - Water temperature safety classification
//!
//! Every calculation is a pure function of its inputs and the built-in tables.

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod interpolation;
pub mod tables;
pub mod cleansing;
pub mod dynamic;
pub mod static_exercise;
pub mod water;
pub mod safety;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, SafetyThresholds};
pub use interpolation::{interpolate_forward, interpolate_inverse, round_to, DEFAULT_PRECISION};
pub use cleansing::{cleansing_cycles_detail, CleansingCycleCalculator, TARGET_CYCLES};
pub use dynamic::{DynamicExerciseCalculator, DISTANCE_PER_CYCLE_KM};
pub use static_exercise::StaticExerciseCalculator;
pub use water::WaterExposureCalculator;
pub use safety::{classify, ExposureSafetyClassifier};
pub use engine::{Engine, WaterExposurePlan};
