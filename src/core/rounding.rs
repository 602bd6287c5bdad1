//! Man-hour rounding.

use crate::errors::{AppError, AppResult};

/// Representation drift tolerated when deciding that a value already sits on
/// a multiple of the step, in units of `f64::EPSILON` relative to the value.
const SNAP_ULPS: f64 = 4.0;

/// Round `hours` up to the nearest multiple of `step`.
///
/// Scales by `1/step`, takes the ceiling and scales back. A value that is a
/// multiple of the step up to representation drift (a few ulps, e.g. `0.3`
/// at step `0.1`) is kept as is instead of being pushed one step up. The
/// result is never below `hours`. Very small steps amplify the remaining
/// drift. `step` must be strictly positive, see [`validate_step`].
pub fn round_up(hours: f64, step: f64) -> f64 {
    if hours == 0.0 {
        return 0.0;
    }

    let scale = 1.0 / step;
    let scaled = hours * scale;
    let nearest = scaled.round();

    if (scaled - nearest).abs() <= SNAP_ULPS * f64::EPSILON * scaled.abs().max(1.0) {
        return (nearest / scale).max(hours);
    }

    scaled.ceil() / scale
}

pub fn validate_step(step: f64) -> AppResult<f64> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(AppError::InvalidStep(step))
    }
}
