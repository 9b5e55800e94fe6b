//! Capability traits for scan observers.
//!
//! These traits abstract over the scan's event and action types, so one
//! observer works for 1D and 2D scans alike.
//!
//! # Event traits
//!
//! - [`HasProgress`] — events that know their position in the scan
//! - [`HasResonance`] — events that carry a residual and a switch outcome
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use resonance_core::Observer;
//! use resonance_observers::traits::{CanStopEarly, HasResonance};
//!
//! /// Stops as soon as enough resonant points have been found.
//! struct Enough {
//!     wanted: usize,
//!     found: usize,
//! }
//!
//! impl<E: HasResonance, A: CanStopEarly> Observer<E, A> for Enough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.is_resonant() {
//!             self.found += 1;
//!         }
//!         (self.found >= self.wanted).then(A::stop_early)
//!     }
//! }
//! ```

use resonance_scan::{Action, Event};

/// An event that knows its position in the scan.
pub trait HasProgress {
    /// Returns the flat grid index of this event (0-based).
    fn index(&self) -> usize;

    /// Returns the number of grid points in the scan.
    fn total(&self) -> usize;

    /// Returns the number of points evaluated so far, including this one.
    fn completed(&self) -> usize {
        self.index() + 1
    }

    fn is_last(&self) -> bool {
        self.completed() == self.total()
    }
}

/// An event that carries the outcome of the switch.
pub trait HasResonance {
    /// Returns the residual norm at this point.
    fn residual(&self) -> f64;

    /// Returns the resonance strength at this point.
    fn strength(&self) -> f64;

    /// Returns true if the switch is on at this point.
    fn is_resonant(&self) -> bool;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the scan early.
    fn stop_early() -> Self;
}

impl<const N: usize> HasProgress for Event<'_, N> {
    fn index(&self) -> usize {
        self.index
    }

    fn total(&self) -> usize {
        self.total
    }
}

impl<const N: usize> HasResonance for Event<'_, N> {
    fn residual(&self) -> f64 {
        self.eval.residual
    }

    fn strength(&self) -> f64 {
        self.eval.strength
    }

    fn is_resonant(&self) -> bool {
        self.eval.is_resonant()
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
