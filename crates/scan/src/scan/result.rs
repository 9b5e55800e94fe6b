use ndarray::{Array1, Array2};
use resonance_core::{Axis, ConfigError, Switch};

use super::PointEvaluation;

/// Whether a finished scan found any resonant point.
///
/// An empty manifold is a valid outcome, not an error: it means no parameter
/// setting on the grid is compatible with the observation under the current
/// switch configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// At least one grid point is resonant.
    Resonant { count: usize },

    /// No grid point is resonant.
    NoResonantPoints,
}

impl Status {
    pub(crate) fn from_count(count: usize) -> Self {
        if count == 0 {
            Self::NoResonantPoints
        } else {
            Self::Resonant { count }
        }
    }
}

/// The result of a 1D scan.
///
/// All fields are indexed identically to the axis values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scan1d {
    /// The scanned axis.
    pub axis: Axis,

    /// The switch used to produce `strengths` and `switches`.
    pub switch: Switch,

    /// Parameter value at each grid point.
    pub params: Array1<f64>,

    /// Residual norm at each grid point.
    pub residuals: Array1<f64>,

    /// Resonance strength at each grid point.
    pub strengths: Array1<f64>,

    /// Compatibility decision (0 or 1) at each grid point.
    pub switches: Array1<u8>,
}

/// The result of a 2D scan.
///
/// Every field is indexed `[i, j]`, with `i` along the first axis (rows) and
/// `j` along the second axis (columns). `coords_a[[i, j]]` is the `i`-th
/// value of `axes[0]` and `coords_b[[i, j]]` the `j`-th value of `axes[1]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scan2d {
    /// The scanned axes, first then second.
    pub axes: [Axis; 2],

    /// The switch used to produce `strengths` and `switches`.
    pub switch: Switch,

    /// First parameter at each grid point.
    pub coords_a: Array2<f64>,

    /// Second parameter at each grid point.
    pub coords_b: Array2<f64>,

    /// Residual norm at each grid point.
    pub residuals: Array2<f64>,

    /// Resonance strength at each grid point.
    pub strengths: Array2<f64>,

    /// Compatibility decision (0 or 1) at each grid point.
    pub switches: Array2<u8>,
}

impl Scan1d {
    /// Returns the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Always false; an axis holds at least 2 points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of resonant grid points.
    #[must_use]
    pub fn resonant_count(&self) -> usize {
        self.switches.iter().filter(|&&s| s == 1).count()
    }

    /// Reports whether the scan found any resonant point.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_count(self.resonant_count())
    }

    /// Re-applies the switch with another threshold without calling the model.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not finite and strictly positive.
    pub fn with_threshold(&self, threshold: f64) -> Result<Self, ConfigError> {
        let switch = self.switch.with_threshold(threshold)?;
        Ok(Self {
            switch,
            switches: self.strengths.mapv(|s| switch.decide(s)),
            ..self.clone()
        })
    }
}

impl Scan2d {
    /// Returns the field shape `(n_a, n_b)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.axes[0].len(), self.axes[1].len())
    }

    /// Returns the number of grid points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.switches.len()
    }

    /// Always false; each axis holds at least 2 points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.switches.is_empty()
    }

    /// Returns the number of resonant grid points.
    #[must_use]
    pub fn resonant_count(&self) -> usize {
        self.switches.iter().filter(|&&s| s == 1).count()
    }

    /// Reports whether the scan found any resonant point.
    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_count(self.resonant_count())
    }

    /// Re-applies the switch with another threshold without calling the model.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not finite and strictly positive.
    pub fn with_threshold(&self, threshold: f64) -> Result<Self, ConfigError> {
        let switch = self.switch.with_threshold(threshold)?;
        Ok(Self {
            switch,
            switches: self.strengths.mapv(|s| switch.decide(s)),
            ..self.clone()
        })
    }
}

/// Gathers per-point evaluations in flat grid order.
pub(super) struct Collector {
    residuals: Vec<f64>,
    strengths: Vec<f64>,
    switches: Vec<u8>,
}

impl Collector {
    pub(super) fn with_capacity(total: usize) -> Self {
        Self {
            residuals: Vec::with_capacity(total),
            strengths: Vec::with_capacity(total),
            switches: Vec::with_capacity(total),
        }
    }

    pub(super) fn push<const N: usize>(&mut self, eval: &PointEvaluation<N>) {
        self.residuals.push(eval.residual);
        self.strengths.push(eval.strength);
        self.switches.push(eval.switch);
    }

    pub(super) fn into_scan_1d(self, axis: Axis, switch: Switch) -> Scan1d {
        Scan1d {
            axis,
            switch,
            params: axis.values().collect(),
            residuals: Array1::from(self.residuals),
            strengths: Array1::from(self.strengths),
            switches: Array1::from(self.switches),
        }
    }

    pub(super) fn into_scan_2d(self, axes: [Axis; 2], switch: Switch) -> Scan2d {
        let [axis_a, axis_b] = axes;
        let shape = (axis_a.len(), axis_b.len());
        let a = axis_a.to_vec();
        let b = axis_b.to_vec();
        let n_b = shape.1;

        Scan2d {
            axes,
            switch,
            coords_a: Array2::from_shape_fn(shape, |(i, _)| a[i]),
            coords_b: Array2::from_shape_fn(shape, |(_, j)| b[j]),
            residuals: Array2::from_shape_fn(shape, |(i, j)| self.residuals[i * n_b + j]),
            strengths: Array2::from_shape_fn(shape, |(i, j)| self.strengths[i * n_b + j]),
            switches: Array2::from_shape_fn(shape, |(i, j)| self.switches[i * n_b + j]),
        }
    }
}
