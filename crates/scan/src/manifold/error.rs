use resonance_core::Axis;
use thiserror::Error;

/// Errors raised when summarizing or comparing resonance manifolds.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ManifoldError {
    /// The field has no resonant point, so its centroid is undefined.
    #[error("no resonant points among {total} grid points")]
    NoResonantPoints { total: usize },

    /// The summaries were taken over different grids.
    #[error("summaries come from different grids: {left:?} and {right:?}")]
    GridMismatch { left: [Axis; 2], right: [Axis; 2] },
}
