//! Reusable observers for resonance scans.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with any event exposing scan progress, independent of the scan's
//! dimension.
//!
//! # Modules
//!
//! - [`traits`] — capability traits ([`HasProgress`], [`HasResonance`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogProgress`] — logs progress and the running resonant count through
//!   the `log` facade
//! - [`CancelFlag`] — a shareable flag that stops a scan once set
//!
//! [`Observer`]: resonance_core::Observer
//! [`HasProgress`]: traits::HasProgress
//! [`HasResonance`]: traits::HasResonance
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod cancel;
mod progress;

pub use cancel::CancelFlag;
pub use progress::LogProgress;
