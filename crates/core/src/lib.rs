//! Core traits and types for resonance scans.
//!
//! This crate defines the shared abstractions that the scanner, the manifold
//! summarizer, and observers build on:
//!
//! - [`Model`] — a callable that maps a parameter tuple to a prediction vector
//! - [`Observer`] — receives scan events and optionally returns control actions
//! - [`Observation`] and [`Dataset`] — observed values with optional
//!   uncertainties
//! - [`residual_norm`] and [`chi_squared`] — the discrepancy between data and
//!   a model prediction
//! - [`Switch`] — turns a residual norm into a resonance strength and a binary
//!   compatibility decision
//! - [`Axis`] — an evenly spaced closed range of parameter values

mod dataset;
mod grid;
mod model;
mod observation;
mod observer;
mod residual;
mod switch;

pub use dataset::{Dataset, DatasetError, TabulatedDataset};
pub use grid::{Axis, AxisError};
pub use model::Model;
pub use observation::{Observation, ObservationError};
pub use observer::Observer;
pub use residual::{ResidualError, chi_squared, residual_norm, residual_vector};
pub use switch::{ConfigError, Switch, SwitchConfig, SwitchError};
