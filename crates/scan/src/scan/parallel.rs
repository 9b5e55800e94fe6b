use rayon::prelude::*;
use resonance_core::{Axis, Model};

use super::{Collector, Error, Scan1d, Scan2d, Scanner};

impl<M> Scanner<'_, M, 1>
where
    M: Model<1> + Sync,
{
    /// Scans `axis` with grid points evaluated on the rayon thread pool.
    ///
    /// The result is identical to [`Scanner::scan_1d`]. Parallel scans do not
    /// emit events, so they cannot be observed or cancelled.
    ///
    /// # Errors
    ///
    /// Returns the error of the lowest failing grid index.
    pub fn par_scan_1d(&self, axis: &Axis) -> Result<Scan1d, Error> {
        let values = axis.to_vec();

        let evals = values
            .par_iter()
            .enumerate()
            .map(|(index, &p)| {
                self.evaluate_point([p])
                    .map_err(|source| Error::point(index, &[p], source))
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut fields = Collector::with_capacity(evals.len());
        for eval in &evals {
            fields.push(eval);
        }

        let scan = fields.into_scan_1d(*axis, self.switch);
        log::debug!(
            "parallel 1d scan over {} points finished: {} resonant",
            scan.len(),
            scan.resonant_count()
        );
        Ok(scan)
    }
}

impl<M> Scanner<'_, M, 2>
where
    M: Model<2> + Sync,
{
    /// Scans two axes with grid points evaluated on the rayon thread pool.
    ///
    /// The result is identical to [`Scanner::scan_2d`]. Parallel scans do not
    /// emit events, so they cannot be observed or cancelled.
    ///
    /// # Errors
    ///
    /// Returns the error of the lowest failing grid index.
    pub fn par_scan_2d(&self, axis_a: &Axis, axis_b: &Axis) -> Result<Scan2d, Error> {
        let a = axis_a.to_vec();
        let b = axis_b.to_vec();
        let n_b = b.len();
        let total = a.len() * n_b;

        let evals = (0..total)
            .into_par_iter()
            .map(|index| {
                let params = [a[index / n_b], b[index % n_b]];
                self.evaluate_point(params)
                    .map_err(|source| Error::point(index, &params, source))
            })
            .collect::<Vec<_>>()
            .into_iter()
            .collect::<Result<Vec<_>, _>>()?;

        let mut fields = Collector::with_capacity(total);
        for eval in &evals {
            fields.push(eval);
        }

        let scan = fields.into_scan_2d([*axis_a, *axis_b], self.switch);
        log::debug!(
            "parallel 2d scan over {}x{} points finished: {} resonant",
            a.len(),
            n_b,
            scan.resonant_count()
        );
        Ok(scan)
    }
}
