//! Resonance manifolds.
//!
//! The resonance manifold of a scan is the set of grid points where the switch
//! is on. This module extracts that set from any [`ResonanceField`], summarizes
//! it by centroid and per-axis spread, and compares two manifolds taken over
//! the same 2D grid.
//!
//! An empty manifold is a legitimate scan outcome and [`extract_resonant`]
//! returns it as an empty [`ResonantSet`]. Statistics over an empty set are
//! undefined, so [`summarize`] fails with [`ManifoldError::NoResonantPoints`]
//! instead of reporting a centroid at the origin or NaN.

mod compare;
mod error;
mod field;
mod summary;

pub use compare::{Comparison, compare};
pub use error::ManifoldError;
pub use field::ResonanceField;
pub use summary::{ManifoldSummary, Peak, ResonantSet, extract_resonant, peak, summarize};
