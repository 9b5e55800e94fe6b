use resonance_core::Axis;

use crate::scan::Status;

use super::{ManifoldError, ResonanceField};

/// The grid points where the switch is on.
#[derive(Debug, Clone, PartialEq)]
pub struct ResonantSet<const N: usize> {
    /// Flat grid indices of the resonant points, in increasing order.
    pub indices: Vec<usize>,

    /// Parameter values of the resonant points, aligned with `indices`.
    pub points: Vec<[f64; N]>,

    /// Number of points in the whole grid.
    pub total: usize,
}

impl<const N: usize> ResonantSet<N> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the share of grid points that are resonant.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.len() as f64 / self.total as f64
        }
    }

    #[must_use]
    pub fn status(&self) -> Status {
        Status::from_count(self.len())
    }
}

/// Descriptive statistics of a non-empty resonance manifold.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifoldSummary<const N: usize> {
    /// Mean of each coordinate over the resonant points.
    pub centroid: [f64; N],

    /// Population standard deviation of each coordinate.
    pub spread: [f64; N],

    /// Number of resonant points.
    pub count: usize,

    /// Number of points in the whole grid.
    pub total: usize,

    /// `count / total`.
    pub fraction: f64,

    /// Flat grid indices of the resonant points, in increasing order.
    pub indices: Vec<usize>,

    /// Axes of the grid the summary was taken over.
    pub axes: [Axis; N],
}

/// The grid point with the highest resonance strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak<const N: usize> {
    pub index: usize,
    pub coordinates: [f64; N],
    pub strength: f64,
    pub resonant: bool,
}

/// Collects the resonant points of a field.
///
/// An empty set is a valid outcome; check [`ResonantSet::status`].
pub fn extract_resonant<F, const N: usize>(field: &F) -> ResonantSet<N>
where
    F: ResonanceField<N>,
{
    let total = field.len();
    let indices: Vec<usize> = (0..total).filter(|&i| field.is_resonant(i)).collect();
    let points = indices.iter().map(|&i| field.coordinates(i)).collect();

    ResonantSet {
        indices,
        points,
        total,
    }
}

/// Computes the centroid and spread of the resonant points of a field.
///
/// # Errors
///
/// Returns [`ManifoldError::NoResonantPoints`] if the switch is off
/// everywhere.
pub fn summarize<F, const N: usize>(field: &F) -> Result<ManifoldSummary<N>, ManifoldError>
where
    F: ResonanceField<N>,
{
    let set = extract_resonant(field);
    if set.is_empty() {
        return Err(ManifoldError::NoResonantPoints { total: set.total });
    }

    #[allow(clippy::cast_precision_loss)]
    let n = set.len() as f64;

    let mut centroid = [0.0; N];
    for point in &set.points {
        for (c, x) in centroid.iter_mut().zip(point) {
            *c += x;
        }
    }
    for c in &mut centroid {
        *c /= n;
    }

    let mut spread = [0.0; N];
    for point in &set.points {
        for ((s, x), c) in spread.iter_mut().zip(point).zip(&centroid) {
            *s += (x - c).powi(2);
        }
    }
    for s in &mut spread {
        *s = (*s / n).sqrt();
    }

    Ok(ManifoldSummary {
        centroid,
        spread,
        count: set.len(),
        total: set.total,
        fraction: set.fraction(),
        indices: set.indices,
        axes: field.axes(),
    })
}

/// Finds the grid point with the highest resonance strength.
///
/// On ties the lowest flat index wins. When the threshold is loose enough
/// that the whole grid is resonant, the peak still locates the best fit.
/// Returns `None` only for an empty field.
pub fn peak<F, const N: usize>(field: &F) -> Option<Peak<N>>
where
    F: ResonanceField<N>,
{
    let mut best: Option<(usize, f64)> = None;
    for index in 0..field.len() {
        let strength = field.strength(index);
        match best {
            Some((_, top)) if strength <= top => {}
            _ => best = Some((index, strength)),
        }
    }

    best.map(|(index, strength)| Peak {
        index,
        coordinates: field.coordinates(index),
        strength,
        resonant: field.is_resonant(index),
    })
}
