//! Cleansing cycle detail and practice recommendation.
//!
//! Given the length of one cycle and the time spent so far, works out how far
//! along the session is relative to the target cycle count, and how often the
//! session should be repeated.

use crate::error::ensure_positive;
use crate::interpolation::round_to;
use crate::{CleansingCycleInput, CleansingCycleResult, Error, Result};

/// Cycle count treated as a full cleansing
pub const TARGET_CYCLES: u32 = 5;

/// Longest recommended gap between sessions
pub const MAX_FREQUENCY_DAYS: u32 = 7;

/// Marker for a session that already went past the target
pub const OVEREXTENDED: f64 = -1.0;

/// Computes [`CleansingCycleResult`] records for a fixed target cycle count
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CleansingCycleCalculator {
    target_cycles: u32,
}

impl Default for CleansingCycleCalculator {
    fn default() -> Self {
        Self {
            target_cycles: TARGET_CYCLES,
        }
    }
}

impl CleansingCycleCalculator {
    pub fn new(target_cycles: u32) -> Result<Self> {
        if target_cycles == 0 {
            return Err(Error::invalid_argument("target cycle count must be at least 1"));
        }
        Ok(Self { target_cycles })
    }

    pub fn target_cycles(&self) -> u32 {
        self.target_cycles
    }

    /// Build the full recommendation record
    ///
    /// `minutes_to_target_cycles` is 0 when the target was reached exactly on
    /// this cycle boundary and -1 once the session has run past it. In the
    /// latter case the recommended minutes drop to the target duration;
    /// otherwise the elapsed time is passed through unchanged.
    pub fn detail(&self, input: &CleansingCycleInput) -> Result<CleansingCycleResult> {
        let cycle_time = ensure_positive("cycle time", input.cycle_time)?;
        let total = input.total_time_minutes;
        if !(total.is_finite() && total >= 0.0) {
            return Err(Error::invalid_argument(format!(
                "total time must be a non-negative finite number, got {}",
                total
            )));
        }

        let completed_cycles = (total / cycle_time).floor() as u32;
        let minutes_until_next_cycle = cycle_time - total % cycle_time;

        let into_current_cycle = cycle_time - minutes_until_next_cycle;
        let minutes_to_target_cycles = ((self.target_cycles as f64 - completed_cycles as f64)
            * cycle_time
            - into_current_cycle)
            .max(OVEREXTENDED);

        let recommended_exercise_minutes = if minutes_to_target_cycles == OVEREXTENDED {
            self.target_cycles as f64 * cycle_time
        } else {
            total
        };

        let recommended_frequency_days = self.frequency_days(completed_cycles);

        tracing::debug!(
            "Cycle detail: {} cycles of {} min in {} min, {} min to target, every {} days",
            completed_cycles,
            cycle_time,
            total,
            minutes_to_target_cycles,
            recommended_frequency_days
        );

        Ok(CleansingCycleResult {
            cycle_time,
            completed_cycles,
            minutes_until_next_cycle,
            minutes_to_target_cycles,
            recommended_exercise_minutes,
            recommended_frequency_days,
        })
    }

    /// Days between sessions, scaling from 1 day at one cycle to
    /// [`MAX_FREQUENCY_DAYS`] at the target
    ///
    /// With the default target of 5: 0 -> 0, 1 -> 1, 2 -> 3, 3 -> 4, 4 -> 6, 5+ -> 7.
    pub fn frequency_days(&self, completed_cycles: u32) -> u32 {
        if completed_cycles >= self.target_cycles {
            return MAX_FREQUENCY_DAYS;
        }

        match completed_cycles {
            0 => 0,
            1 => 1,
            n => {
                let step = (MAX_FREQUENCY_DAYS - 1) as f64 / (self.target_cycles - 1) as f64;
                // Halves round up
                (1.0 + (n - 1) as f64 * step + 0.5).floor() as u32
            }
        }
    }
}

/// Cycle detail with the default target of [`TARGET_CYCLES`]
pub fn cleansing_cycles_detail(input: &CleansingCycleInput) -> Result<CleansingCycleResult> {
    CleansingCycleCalculator::default().detail(input)
}

/// Percentage of the target reached, capped at 100
pub fn progress_percent(result: &CleansingCycleResult, target_cycles: u32) -> f64 {
    let done = result.completed_cycles.min(target_cycles) as f64;
    round_to(done / target_cycles.max(1) as f64 * 100.0, 0)
}
