//! Systematic grid scans.
//!
//! # Algorithm
//!
//! For every point `p` of a regular grid the scanner calls the model, computes
//! the residual norm of the prediction against the observation, and applies
//! the compatibility switch:
//!
//! ```text
//! residual(p) = ‖(d - model(p)) / σ‖
//! strength(p) = β / max(residual(p), ε)
//! switch(p)   = 1 if strength(p) >= T else 0
//! ```
//!
//! Points are independent: no state carries over from one point to the next,
//! so the visiting order does not affect the result. Repeating a scan with the
//! same inputs gives identical fields.
//!
//! # Grid convention
//!
//! 1D results are indexed like the axis values. 2D results are indexed
//! `[i, j]` with `i` along the first axis (rows) and `j` along the second
//! (columns). Points are visited, and events emitted, in row-major order.
//!
//! # Observer Events
//!
//! The scanner emits one [`Event`] after each grid point. Observers can return
//! [`Action::StopEarly`] to cancel; the scan then returns
//! [`Error::Cancelled`] rather than a partially filled grid. A stop requested
//! on the last point comes too late to cancel anything, so the complete grid
//! is returned.
//!
//! # Failures
//!
//! A model error, a prediction of the wrong length, or a non-finite prediction
//! value at any point aborts the scan with [`Error::Point`]. No default value
//! is substituted.

mod action;
mod error;
mod event;
mod point;
mod result;

#[cfg(feature = "parallel")]
mod parallel;

pub use action::Action;
pub use error::{Error, PointError};
pub use event::Event;
pub use point::PointEvaluation;
pub use result::{Scan1d, Scan2d, Status};

use resonance_core::{Axis, Model, Observation, Observer, Switch};

use result::Collector;

/// Evaluates a model over a grid of parameter values.
///
/// The scanner borrows the model and the observation for its lifetime and
/// holds no other state, so one scanner can run any number of scans.
#[derive(Debug)]
pub struct Scanner<'a, M, const N: usize> {
    model: &'a M,
    observation: &'a Observation,
    switch: Switch,
}

impl<'a, M, const N: usize> Scanner<'a, M, N>
where
    M: Model<N>,
{
    /// Creates a scanner for `model` against `observation`.
    pub fn new(model: &'a M, observation: &'a Observation, switch: Switch) -> Self {
        Self {
            model,
            observation,
            switch,
        }
    }

    #[must_use]
    pub fn switch(&self) -> &Switch {
        &self.switch
    }

    #[must_use]
    pub fn observation(&self) -> &Observation {
        self.observation
    }

    /// Evaluates a single parameter setting.
    ///
    /// Useful to check whether a known parameter value is resonant without
    /// scanning a whole grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails, its prediction does not match the
    /// observation, or it holds a non-finite value.
    pub fn evaluate_point(&self, params: [f64; N]) -> Result<PointEvaluation<N>, PointError> {
        point::evaluate(self.model, self.observation, &self.switch, params)
    }

    /// Evaluates one grid point and reports it to the observer.
    ///
    /// Returns `Ok(true)` if the observer asked to stop.
    fn visit<Obs>(
        &self,
        index: usize,
        total: usize,
        params: [f64; N],
        fields: &mut Collector,
        observer: &mut Obs,
    ) -> Result<bool, Error>
    where
        Obs: for<'e> Observer<Event<'e, N>, Action>,
    {
        let eval = self
            .evaluate_point(params)
            .map_err(|source| Error::point(index, &params, source))?;
        fields.push(&eval);

        let event = Event {
            index,
            total,
            eval: &eval,
        };
        Ok(matches!(observer.observe(&event), Some(Action::StopEarly)))
    }
}

impl<M> Scanner<'_, M, 1>
where
    M: Model<1>,
{
    /// Scans the model over every value of `axis`.
    ///
    /// The observer receives an [`Event`] after each point.
    ///
    /// # Errors
    ///
    /// Returns an error if any grid point fails to evaluate, or
    /// [`Error::Cancelled`] if the observer stops the scan.
    pub fn scan_1d<Obs>(&self, axis: &Axis, mut observer: Obs) -> Result<Scan1d, Error>
    where
        Obs: for<'e> Observer<Event<'e, 1>, Action>,
    {
        let total = axis.len();
        let mut fields = Collector::with_capacity(total);

        for (index, p) in axis.values().enumerate() {
            let stop = self.visit(index, total, [p], &mut fields, &mut observer)?;
            if stop && index + 1 < total {
                return Err(Error::Cancelled {
                    completed: index + 1,
                    total,
                });
            }
        }

        let scan = fields.into_scan_1d(*axis, self.switch);
        log::debug!(
            "1d scan over {total} points finished: {} resonant",
            scan.resonant_count()
        );
        Ok(scan)
    }

    /// Scans the model over `axis` without observation.
    ///
    /// # Errors
    ///
    /// Returns an error if any grid point fails to evaluate.
    pub fn scan_1d_unobserved(&self, axis: &Axis) -> Result<Scan1d, Error> {
        self.scan_1d(axis, ())
    }
}

impl<M> Scanner<'_, M, 2>
where
    M: Model<2>,
{
    /// Scans the model over the Cartesian product of two axes.
    ///
    /// Points are visited row by row: `i` over `axis_a`, then `j` over
    /// `axis_b`. The observer receives an [`Event`] after each point.
    ///
    /// # Errors
    ///
    /// Returns an error if any grid point fails to evaluate, or
    /// [`Error::Cancelled`] if the observer stops the scan.
    pub fn scan_2d<Obs>(&self, axis_a: &Axis, axis_b: &Axis, mut observer: Obs) -> Result<Scan2d, Error>
    where
        Obs: for<'e> Observer<Event<'e, 2>, Action>,
    {
        let total = axis_a.len() * axis_b.len();
        let mut fields = Collector::with_capacity(total);

        let mut index = 0;
        for a in axis_a.values() {
            for b in axis_b.values() {
                let stop = self.visit(index, total, [a, b], &mut fields, &mut observer)?;
                if stop && index + 1 < total {
                    return Err(Error::Cancelled {
                        completed: index + 1,
                        total,
                    });
                }
                index += 1;
            }
        }

        let scan = fields.into_scan_2d([*axis_a, *axis_b], self.switch);
        log::debug!(
            "2d scan over {}x{} points finished: {} resonant",
            axis_a.len(),
            axis_b.len(),
            scan.resonant_count()
        );
        Ok(scan)
    }

    /// Scans the model over two axes without observation.
    ///
    /// # Errors
    ///
    /// Returns an error if any grid point fails to evaluate.
    pub fn scan_2d_unobserved(&self, axis_a: &Axis, axis_b: &Axis) -> Result<Scan2d, Error> {
        self.scan_2d(axis_a, axis_b, ())
    }
}
