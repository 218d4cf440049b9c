//! Piecewise-linear interpolation over calibration tables.
//!
//! Every calculator in this crate reduces to a lookup in a small table of
//! `(x, y)` samples. The same table can be read in both directions:
//! - forward: solve for `y` given `x`
//! - inverse: solve for `x` given `y`
//!
//! Targets outside the table are extrapolated from the nearest segment. They
//! are NOT clamped to the first/last sample: callers depend on the linear
//! continuation (e.g. more than five layers for a long session).

use crate::{DataPoint, Error, Result};

/// Decimal places used when a caller has no preference
pub const DEFAULT_PRECISION: u32 = 2;

#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn key(self, point: &DataPoint) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }

    fn other(self, point: &DataPoint) -> f64 {
        match self {
            Axis::X => point.y,
            Axis::Y => point.x,
        }
    }
}

/// Finest precision an f64 can carry; larger requests are capped to it
pub const MAX_PRECISION: u32 = 15;

/// Round to `precision` decimal places, halves away from zero
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    (value * factor).round() / factor
}

/// Solve for `y` at `x`
pub fn interpolate_forward(x: f64, points: &[DataPoint], precision: u32) -> Result<f64> {
    interpolate(x, points, Axis::X, precision)
}

/// Solve for `x` at `y`
///
/// With non-monotonic `y` values the first segment reached by the scan is
/// used, not the nearest one.
pub fn interpolate_inverse(y: f64, points: &[DataPoint], precision: u32) -> Result<f64> {
    interpolate(y, points, Axis::Y, precision)
}

fn interpolate(target: f64, points: &[DataPoint], axis: Axis, precision: u32) -> Result<f64> {
    let (lower, upper) = bracket(target, points, axis)?;

    let span = axis.key(upper) - axis.key(lower);
    let value = if span == 0.0 {
        axis.other(lower)
    } else {
        let ratio = (target - axis.key(lower)) / span;
        axis.other(lower) + ratio * (axis.other(upper) - axis.other(lower))
    };

    tracing::trace!(
        "Interpolated {:?} target {} between {:?} and {:?} -> {}",
        axis,
        target,
        lower,
        upper,
        value
    );

    Ok(round_to(value, precision))
}

/// Find the segment used for `target`: the first sample at or past it and its
/// predecessor. Out-of-range targets fall on the first or last segment.
fn bracket(target: f64, points: &[DataPoint], axis: Axis) -> Result<(&DataPoint, &DataPoint)> {
    if points.len() < 2 {
        return Err(Error::InsufficientData {
            points: points.len(),
        });
    }

    let upper = points
        .iter()
        .skip(1)
        .position(|p| target <= axis.key(p))
        .map(|i| i + 1)
        .unwrap_or(points.len() - 1);

    Ok((&points[upper - 1], &points[upper]))
}

/// Check that a table can be interpolated: at least two finite samples with
/// strictly increasing `x`.
pub fn validate_table(points: &[DataPoint]) -> Result<()> {
    if points.len() < 2 {
        return Err(Error::InsufficientData {
            points: points.len(),
        });
    }

    if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(Error::InvalidTable(format!(
            "non-finite sample ({}, {})",
            p.x, p.y
        )));
    }

    if let Some(w) = points.windows(2).find(|w| w[1].x <= w[0].x) {
        return Err(Error::InvalidTable(format!(
            "x values must be strictly increasing ({} then {})",
            w[0].x, w[1].x
        )));
    }

    Ok(())
}
