use std::error::Error as StdError;

use resonance_core::{ResidualError, SwitchError};

/// Errors that can occur when evaluating a single parameter setting.
#[derive(Debug, thiserror::Error)]
pub enum PointError {
    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("prediction does not fit the observation")]
    Residual(#[from] ResidualError),

    #[error("residual cannot be switched")]
    Switch(#[from] SwitchError),
}

impl PointError {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Model(Box::new(err))
    }
}

/// Errors that can occur during a grid scan.
///
/// A failing grid point aborts the whole scan; the error names the flat grid
/// index and the parameters that were being evaluated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("grid point {index} at {params:?}: {source}")]
    Point {
        index: usize,
        params: Vec<f64>,
        #[source]
        source: PointError,
    },

    #[error("scan cancelled after {completed} of {total} points")]
    Cancelled { completed: usize, total: usize },
}

impl Error {
    pub(crate) fn point(index: usize, params: &[f64], source: PointError) -> Self {
        Self::Point {
            index,
            params: params.to_vec(),
            source,
        }
    }

    /// Returns the flat grid index of the failing point, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Point { index, .. } => Some(*index),
            Self::Cancelled { .. } => None,
        }
    }
}
