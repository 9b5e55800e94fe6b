//! Threshold calibration.
//!
//! With the default threshold `T = 1` every residual below `β` is resonant,
//! which on many problems floods the whole grid. Calibration picks the
//! threshold from the scanned residuals so that a chosen share of the grid
//! stays resonant.

use ndarray::{ArrayBase, Data, Dimension};
use resonance_core::{Switch, SwitchError};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CalibrationError {
    #[error("target fraction must be in (0, 1], got {0}")]
    InvalidFraction(f64),

    #[error("cannot calibrate over an empty field")]
    EmptyField,

    #[error("residual field cannot be switched")]
    Switch(#[from] SwitchError),

    /// The cut falls on a zero strength, which is not a valid threshold.
    #[error("calibrated threshold is not positive: {0}")]
    NonPositiveThreshold(f64),
}

/// Returns the threshold that keeps about `target_fraction` of the grid
/// resonant.
///
/// With `n` residuals, the strengths are ranked from strongest to weakest and
/// the `k`-th one becomes the threshold, where `k = floor(target_fraction·n)`
/// clamped to `1..=n`. At least `k` points are resonant under the returned
/// threshold; more if several points tie at the cut.
///
/// The result can be passed to `with_threshold` on a finished scan.
///
/// # Errors
///
/// Returns an error if `target_fraction` is outside `(0, 1]`, the field is
/// empty, a residual is negative or NaN, or the cut lands on an infinite
/// residual.
pub fn calibrate_threshold<S, D>(
    switch: &Switch,
    residuals: &ArrayBase<S, D>,
    target_fraction: f64,
) -> Result<f64, CalibrationError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if !(target_fraction > 0.0 && target_fraction <= 1.0) {
        return Err(CalibrationError::InvalidFraction(target_fraction));
    }
    if residuals.is_empty() {
        return Err(CalibrationError::EmptyField);
    }

    let mut strengths = switch.strengths(residuals)?.iter().copied().collect::<Vec<_>>();
    strengths.sort_by(|a, b| b.total_cmp(a));

    let n = strengths.len();
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let target = ((target_fraction * n as f64).floor() as usize).clamp(1, n);
    let threshold = strengths[target - 1];

    if threshold <= 0.0 {
        return Err(CalibrationError::NonPositiveThreshold(threshold));
    }

    log::debug!("calibrated threshold {threshold} keeps {target} of {n} points resonant");
    Ok(threshold)
}
