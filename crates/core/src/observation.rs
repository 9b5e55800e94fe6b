use thiserror::Error;

use crate::residual::{self, ResidualError};

/// Errors that can occur when constructing an [`Observation`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ObservationError {
    #[error("observation has no values")]
    Empty,

    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("{uncertainties} uncertainties given for {values} values")]
    LengthMismatch { values: usize, uncertainties: usize },

    #[error("uncertainty at index {index} must be finite and positive, got {value}")]
    NonPositiveUncertainty { index: usize, value: f64 },
}

/// Observed values with optional per-value uncertainties.
///
/// An observation is immutable once constructed. Scanners borrow it for the
/// duration of a scan. When uncertainties are present, residuals are weighted
/// by them; otherwise they are unweighted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observation {
    values: Vec<f64>,
    uncertainties: Option<Vec<f64>>,
}

impl Observation {
    /// Creates an unweighted observation.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or contains a non-finite value.
    pub fn new(values: Vec<f64>) -> Result<Self, ObservationError> {
        validate_values(&values)?;
        Ok(Self {
            values,
            uncertainties: None,
        })
    }

    /// Creates an observation weighted by per-value uncertainties.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or non-finite, if the lengths
    /// differ, or if any uncertainty is not finite and strictly positive.
    pub fn with_uncertainties(
        values: Vec<f64>,
        uncertainties: Vec<f64>,
    ) -> Result<Self, ObservationError> {
        validate_values(&values)?;

        if uncertainties.len() != values.len() {
            return Err(ObservationError::LengthMismatch {
                values: values.len(),
                uncertainties: uncertainties.len(),
            });
        }

        if let Some((index, &value)) = uncertainties
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s <= 0.0)
        {
            return Err(ObservationError::NonPositiveUncertainty { index, value });
        }

        Ok(Self {
            values,
            uncertainties: Some(uncertainties),
        })
    }

    /// Returns the observed values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the uncertainties, if the observation is weighted.
    #[must_use]
    pub fn uncertainties(&self) -> Option<&[f64]> {
        self.uncertainties.as_deref()
    }

    /// Returns the number of observed values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no values, which validation never allows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the (optionally weighted) Euclidean norm of `self - prediction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the prediction length differs from the observation.
    pub fn residual_norm(&self, prediction: &[f64]) -> Result<f64, ResidualError> {
        residual::residual_norm(&self.values, prediction, self.uncertainties())
    }

    /// Returns the (optionally weighted) sum of squared residuals.
    ///
    /// # Errors
    ///
    /// Returns an error if the prediction length differs from the observation.
    pub fn chi_squared(&self, prediction: &[f64]) -> Result<f64, ResidualError> {
        residual::chi_squared(&self.values, prediction, self.uncertainties())
    }
}

fn validate_values(values: &[f64]) -> Result<(), ObservationError> {
    if values.is_empty() {
        return Err(ObservationError::Empty);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ObservationError::NonFiniteValue { index, value });
    }
    Ok(())
}
