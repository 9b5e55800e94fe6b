//! Systematic grid scans over black-box models.
//!
//! A [`Scanner`](scan::Scanner) evaluates a model at every point of a regular
//! 1D or 2D grid, compares each prediction with a fixed observation, and
//! records the residual, the resonance strength, and the binary compatibility
//! switch. The set of points where the switch is `1` is the resonance
//! manifold; the [`manifold`] module extracts and summarizes it.
//!
//! # Modules
//!
//! - [`scan`] — the grid scanner, its events, actions, errors and results
//! - [`manifold`] — resonant-set extraction, summaries and comparisons
//! - [`calibrate`] — threshold calibration against a target resonant fraction
//!
//! # Features
//!
//! - `parallel` — enables `par_scan_1d` and `par_scan_2d`, which evaluate grid
//!   points on the rayon thread pool and return the same fields as the
//!   sequential scans.
//! - `serde` — derives `Serialize` for scan results and comparisons.

pub mod calibrate;
pub mod manifold;
pub mod scan;

pub use scan::{Action, Error, Event, PointError, PointEvaluation, Scan1d, Scan2d, Scanner, Status};
