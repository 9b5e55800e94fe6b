use thiserror::Error;

use crate::observation::{Observation, ObservationError};

/// Errors that can occur when building a [`TabulatedDataset`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DatasetError {
    #[error("{coordinates} coordinates given for {values} values")]
    CoordinateMismatch { coordinates: usize, values: usize },

    #[error(transparent)]
    Observation(#[from] ObservationError),
}

/// A source of observed data.
///
/// A dataset exposes equal-length sequences of coordinates (for example
/// redshifts or multipoles), observed values, and optional uncertainties.
/// Models evaluate their predictions at the coordinates; the scan only sees
/// the resulting [`Observation`].
pub trait Dataset {
    /// Returns the coordinates at which values were observed.
    fn coordinates(&self) -> &[f64];

    /// Returns the observed values.
    fn values(&self) -> &[f64];

    /// Returns per-value uncertainties, or `None` for unweighted data.
    fn uncertainties(&self) -> Option<&[f64]>;

    /// Builds a validated observation from the values and uncertainties.
    ///
    /// # Errors
    ///
    /// Returns an error if the values or uncertainties are invalid.
    fn observation(&self) -> Result<Observation, ObservationError> {
        let values = self.values().to_vec();
        match self.uncertainties() {
            Some(sigma) => Observation::with_uncertainties(values, sigma.to_vec()),
            None => Observation::new(values),
        }
    }
}

/// An in-memory dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TabulatedDataset {
    coordinates: Vec<f64>,
    observation: Observation,
}

impl TabulatedDataset {
    /// Creates an unweighted dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or the values are invalid.
    pub fn new(coordinates: Vec<f64>, values: Vec<f64>) -> Result<Self, DatasetError> {
        check_coordinates(&coordinates, &values)?;
        Ok(Self {
            coordinates,
            observation: Observation::new(values)?,
        })
    }

    /// Creates a dataset weighted by per-value uncertainties.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ or the values or uncertainties
    /// are invalid.
    pub fn with_uncertainties(
        coordinates: Vec<f64>,
        values: Vec<f64>,
        uncertainties: Vec<f64>,
    ) -> Result<Self, DatasetError> {
        check_coordinates(&coordinates, &values)?;
        Ok(Self {
            coordinates,
            observation: Observation::with_uncertainties(values, uncertainties)?,
        })
    }

    /// Returns the validated observation held by this dataset.
    #[must_use]
    pub fn as_observation(&self) -> &Observation {
        &self.observation
    }
}

impl Dataset for TabulatedDataset {
    fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    fn values(&self) -> &[f64] {
        self.observation.values()
    }

    fn uncertainties(&self) -> Option<&[f64]> {
        self.observation.uncertainties()
    }

    fn observation(&self) -> Result<Observation, ObservationError> {
        Ok(self.observation.clone())
    }
}

fn check_coordinates(coordinates: &[f64], values: &[f64]) -> Result<(), DatasetError> {
    if coordinates.len() == values.len() {
        Ok(())
    } else {
        Err(DatasetError::CoordinateMismatch {
            coordinates: coordinates.len(),
            values: values.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Dataset backed by borrowed slices, as a loader might provide.
    struct Borrowed<'a> {
        z: &'a [f64],
        mu: &'a [f64],
        sigma: &'a [f64],
    }

    impl Dataset for Borrowed<'_> {
        fn coordinates(&self) -> &[f64] {
            self.z
        }

        fn values(&self) -> &[f64] {
            self.mu
        }

        fn uncertainties(&self) -> Option<&[f64]> {
            Some(self.sigma)
        }
    }

    #[test]
    fn provided_observation_validates() {
        let good = Borrowed {
            z: &[0.1, 0.5],
            mu: &[38.3, 42.3],
            sigma: &[0.15, 0.15],
        };
        let obs = good.observation().expect("valid dataset");
        assert_eq!(obs.uncertainties(), Some(&[0.15, 0.15][..]));

        let bad = Borrowed {
            sigma: &[0.15, 0.0],
            ..good
        };
        assert!(matches!(
            bad.observation(),
            Err(ObservationError::NonPositiveUncertainty { index: 1, .. })
        ));
    }

    #[test]
    fn tabulated_dataset() {
        let data = TabulatedDataset::new(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
        assert_eq!(data.coordinates(), &[1.0, 2.0, 3.0]);
        assert_eq!(data.values(), &[2.0, 4.0, 6.0]);
        assert!(data.uncertainties().is_none());
        assert_eq!(&data.observation().unwrap(), data.as_observation());
    }

    #[test]
    fn rejects_coordinate_mismatch() {
        let err = TabulatedDataset::new(vec![1.0], vec![2.0, 4.0]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::CoordinateMismatch {
                coordinates: 1,
                values: 2
            }
        );
    }

    #[test]
    fn forwards_observation_errors() {
        let err =
            TabulatedDataset::with_uncertainties(vec![1.0, 2.0], vec![2.0, 4.0], vec![1.0])
                .unwrap_err();
        assert!(matches!(err, DatasetError::Observation(_)));
    }
}
