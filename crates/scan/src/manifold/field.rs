use resonance_core::Axis;

use crate::scan::{Scan1d, Scan2d};

/// A scalar field of scan results over a regular `N`-dimensional grid.
///
/// Grid points are addressed by flat index in row-major order, so for a 2D
/// field the point `[i, j]` has index `i * n_b + j`.
///
/// Index arguments must be below [`ResonanceField::len`]; out-of-range indices
/// panic like slice indexing does.
pub trait ResonanceField<const N: usize> {
    /// Returns the axes spanning the grid.
    fn axes(&self) -> [Axis; N];

    /// Returns the number of grid points.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the parameter values at a grid point.
    fn coordinates(&self, index: usize) -> [f64; N];

    /// Returns the resonance strength at a grid point.
    fn strength(&self, index: usize) -> f64;

    /// Returns true if the switch is on at a grid point.
    fn is_resonant(&self, index: usize) -> bool;
}

impl ResonanceField<1> for Scan1d {
    fn axes(&self) -> [Axis; 1] {
        [self.axis]
    }

    fn len(&self) -> usize {
        self.params.len()
    }

    fn coordinates(&self, index: usize) -> [f64; 1] {
        [self.params[index]]
    }

    fn strength(&self, index: usize) -> f64 {
        self.strengths[index]
    }

    fn is_resonant(&self, index: usize) -> bool {
        self.switches[index] == 1
    }
}

impl Scan2d {
    /// Maps a flat index to its `[i, j]` position.
    fn position(&self, index: usize) -> [usize; 2] {
        let n_b = self.axes[1].len();
        [index / n_b, index % n_b]
    }
}

impl ResonanceField<2> for Scan2d {
    fn axes(&self) -> [Axis; 2] {
        self.axes
    }

    fn len(&self) -> usize {
        self.switches.len()
    }

    fn coordinates(&self, index: usize) -> [f64; 2] {
        let ij = self.position(index);
        [self.coords_a[ij], self.coords_b[ij]]
    }

    fn strength(&self, index: usize) -> f64 {
        self.strengths[self.position(index)]
    }

    fn is_resonant(&self, index: usize) -> bool {
        self.switches[self.position(index)] == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use resonance_core::{Observation, Switch};

    use crate::scan::Scanner;

    #[test]
    fn scan_2d_flat_index_is_row_major() {
        let model = |p: &[f64; 2]| -> Result<Vec<f64>, Infallible> { Ok(vec![p[0], p[1]]) };
        let obs = Observation::new(vec![0.0, 0.0]).unwrap();
        let scanner = Scanner::new(&model, &obs, Switch::default());
        let scan = scanner
            .scan_2d_unobserved(&Axis::new(0.0, 2.0, 3).unwrap(), &Axis::new(10.0, 13.0, 4).unwrap())
            .unwrap();

        assert_eq!(ResonanceField::len(&scan), 12);
        assert_eq!(scan.coordinates(0), [0.0, 10.0]);
        assert_eq!(scan.coordinates(3), [0.0, 13.0]);
        assert_eq!(scan.coordinates(4), [1.0, 10.0]);
        assert_eq!(scan.coordinates(11), [2.0, 13.0]);
        assert_eq!(scan.strength(6), scan.strengths[[1, 2]]);
    }

    #[test]
    fn scan_1d_field_matches_arrays() {
        let model = |p: &[f64; 1]| -> Result<Vec<f64>, Infallible> { Ok(vec![p[0]]) };
        let obs = Observation::new(vec![1.0]).unwrap();
        let scanner = Scanner::new(&model, &obs, Switch::default());
        let axis = Axis::new(0.0, 1.0, 5).unwrap();
        let scan = scanner.scan_1d_unobserved(&axis).unwrap();

        assert_eq!(scan.axes(), [axis]);
        for index in 0..ResonanceField::len(&scan) {
            assert_eq!(scan.coordinates(index), [scan.params[index]]);
            assert_eq!(scan.is_resonant(index), scan.switches[index] == 1);
        }
    }
}
