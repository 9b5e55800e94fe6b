//! Discrepancy between observed data and a model prediction.
//!
//! The elementwise residual is `r_i = d_i - m_i`, or `(d_i - m_i) / σ_i` when
//! uncertainties are given. [`chi_squared`] returns `Σ r_i²` and
//! [`residual_norm`] returns its square root, so the two always agree.

use thiserror::Error;

/// Errors raised by the residual functions on malformed input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ResidualError {
    #[error("prediction has length {model}, data has length {data}")]
    LengthMismatch { data: usize, model: usize },

    #[error("uncertainties have length {uncertainties}, data has length {data}")]
    UncertaintyLengthMismatch { data: usize, uncertainties: usize },

    #[error("uncertainty at index {index} must be finite and positive, got {value}")]
    NonPositiveUncertainty { index: usize, value: f64 },

    #[error("data value at index {index} is not finite: {value}")]
    NonFiniteData { index: usize, value: f64 },

    #[error("prediction at index {index} is not finite: {value}")]
    NonFiniteModel { index: usize, value: f64 },
}

/// Returns the elementwise residuals `(d - m)` or `(d - m) / σ`.
///
/// # Errors
///
/// Returns an error if the lengths differ, a data or model value is not
/// finite, or an uncertainty is not finite and strictly positive.
pub fn residual_vector(
    data: &[f64],
    model: &[f64],
    uncertainties: Option<&[f64]>,
) -> Result<Vec<f64>, ResidualError> {
    residuals(data, model, uncertainties).and_then(|iter| iter.collect())
}

/// Returns the sum of squared (optionally weighted) residuals.
///
/// # Errors
///
/// Returns an error if the lengths differ, a data or model value is not
/// finite, or an uncertainty is not finite and strictly positive.
pub fn chi_squared(
    data: &[f64],
    model: &[f64],
    uncertainties: Option<&[f64]>,
) -> Result<f64, ResidualError> {
    let mut sum = 0.0;
    for r in residuals(data, model, uncertainties)? {
        let r = r?;
        sum += r * r;
    }
    Ok(sum)
}

/// Returns the Euclidean norm of the (optionally weighted) residuals.
///
/// This is the value consumed by the compatibility switch. It is always
/// non-negative.
///
/// # Errors
///
/// Returns an error if the lengths differ, a data or model value is not
/// finite, or an uncertainty is not finite and strictly positive.
pub fn residual_norm(
    data: &[f64],
    model: &[f64],
    uncertainties: Option<&[f64]>,
) -> Result<f64, ResidualError> {
    chi_squared(data, model, uncertainties).map(f64::sqrt)
}

/// Checks shapes and yields each residual lazily.
///
/// Uncertainty entries are validated as they are consumed.
fn residuals<'a>(
    data: &'a [f64],
    model: &'a [f64],
    uncertainties: Option<&'a [f64]>,
) -> Result<impl Iterator<Item = Result<f64, ResidualError>> + 'a, ResidualError> {
    if model.len() != data.len() {
        return Err(ResidualError::LengthMismatch {
            data: data.len(),
            model: model.len(),
        });
    }

    if let Some(sigma) = uncertainties
        && sigma.len() != data.len()
    {
        return Err(ResidualError::UncertaintyLengthMismatch {
            data: data.len(),
            uncertainties: sigma.len(),
        });
    }

    Ok(data
        .iter()
        .zip(model)
        .enumerate()
        .map(move |(index, (&d, &m))| {
            if !d.is_finite() {
                return Err(ResidualError::NonFiniteData { index, value: d });
            }
            if !m.is_finite() {
                return Err(ResidualError::NonFiniteModel { index, value: m });
            }
            let diff = d - m;
            match uncertainties {
                None => Ok(diff),
                Some(sigma) => {
                    let s = sigma[index];
                    if s.is_finite() && s > 0.0 {
                        Ok(diff / s)
                    } else {
                        Err(ResidualError::NonPositiveUncertainty { index, value: s })
                    }
                }
            }
        }))
}
