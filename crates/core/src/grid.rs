use thiserror::Error;

/// Errors that can occur when constructing an [`Axis`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AxisError {
    #[error("axis needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    #[error("axis bound is not finite: {0}")]
    NonFiniteBound(f64),

    #[error("axis has zero width: both bounds are {0}")]
    ZeroWidth(f64),

    #[error("axis width from {start} to {end} overflows")]
    WidthOverflow { start: f64, end: f64 },
}

/// An evenly spaced sequence of parameter values over a closed range.
///
/// Both bounds are included and reproduced exactly. A descending range
/// (`lo > hi`) is kept in the order given. Single-point axes are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    start: f64,
    end: f64,
    points: usize,
}

impl Axis {
    /// Creates an axis of `points` values from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns an error if `points < 2`, a bound is non-finite, the bounds are
    /// equal, or the width `end - start` is not representable.
    pub fn new(start: f64, end: f64, points: usize) -> Result<Self, AxisError> {
        if points < 2 {
            return Err(AxisError::TooFewPoints(points));
        }
        if !start.is_finite() {
            return Err(AxisError::NonFiniteBound(start));
        }
        if !end.is_finite() {
            return Err(AxisError::NonFiniteBound(end));
        }

        #[allow(clippy::float_cmp)]
        if start == end {
            return Err(AxisError::ZeroWidth(start));
        }
        if !(end - start).is_finite() {
            return Err(AxisError::WidthOverflow { start, end });
        }

        Ok(Self { start, end, points })
    }

    /// Creates an axis from a `[start, end]` range.
    ///
    /// # Errors
    ///
    /// See [`Axis::new`].
    pub fn from_range(range: [f64; 2], points: usize) -> Result<Self, AxisError> {
        Self::new(range[0], range[1], points)
    }

    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns the number of points, always at least 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points
    }

    /// Always false; kept for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the signed spacing between neighboring points.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn step(&self) -> f64 {
        (self.end - self.start) / (self.points - 1) as f64
    }

    /// Returns the `index`-th value, or `None` past the end.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self, index: usize) -> Option<f64> {
        if index >= self.points {
            return None;
        }
        if index == self.points - 1 {
            return Some(self.end);
        }
        Some(self.start + index as f64 * self.step())
    }

    /// Iterates over the axis values in order.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.points).map(|i| self.value(i).unwrap_or(self.end))
    }

    /// Collects the axis values into a vector.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.values().collect()
    }
}
