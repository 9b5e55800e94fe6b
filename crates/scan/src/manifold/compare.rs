use super::{ManifoldError, ManifoldSummary};

/// Relative geometry of two manifolds over the same 2D grid.
///
/// Scanning the same model against two datasets and comparing the resulting
/// manifolds measures how far, and in which direction, the compatible region
/// moves between them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Comparison {
    /// Euclidean distance between the centroids.
    pub distance: f64,

    /// Direction of the vector from the first centroid to the second, in
    /// radians, measured as `atan2(Δb, Δa)`.
    pub angle: f64,

    /// Number of grid points resonant in both manifolds.
    pub overlap: usize,
}

impl Comparison {
    #[must_use]
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

/// Compares two manifolds taken over the same 2D grid.
///
/// # Errors
///
/// Returns [`ManifoldError::GridMismatch`] if the summaries were taken over
/// different axes, since their grid indices cannot be matched.
pub fn compare(
    first: &ManifoldSummary<2>,
    second: &ManifoldSummary<2>,
) -> Result<Comparison, ManifoldError> {
    if first.axes != second.axes {
        return Err(ManifoldError::GridMismatch {
            left: first.axes,
            right: second.axes,
        });
    }

    let [a1, b1] = first.centroid;
    let [a2, b2] = second.centroid;
    let (da, db) = (a2 - a1, b2 - b1);

    Ok(Comparison {
        distance: da.hypot(db),
        angle: db.atan2(da),
        overlap: count_shared(&first.indices, &second.indices),
    })
}

/// Counts the values present in both sorted index lists.
fn count_shared(left: &[usize], right: &[usize]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        match left[i].cmp(&right[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}
