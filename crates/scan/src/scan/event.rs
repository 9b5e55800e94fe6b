use super::PointEvaluation;

/// Event emitted by the scanner after each grid point.
///
/// Points are visited in flat grid order. For 2D scans the flat index is
/// `i * n_b + j`, where `i` runs along the first axis and `j` along the
/// second.
#[derive(Debug)]
pub struct Event<'a, const N: usize> {
    /// Flat grid index of the evaluated point (0-based).
    pub index: usize,

    /// Total number of grid points in the scan.
    pub total: usize,

    /// The evaluation at this grid point.
    pub eval: &'a PointEvaluation<N>,
}

impl<const N: usize> Event<'_, N> {
    /// Returns the number of points evaluated so far, including this one.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.index + 1
    }

    /// Returns true if this is the final grid point.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.completed() == self.total
    }
}
