/// A callable model that maps `N` parameters to a prediction vector.
///
/// The prediction must have the same length and ordering as the observation
/// it is compared against. Scans assume calls are deterministic and free of
/// side effects, so evaluating the same parameters twice gives the same
/// prediction.
///
/// Closures of the form `Fn(&[f64; N]) -> Result<Vec<f64>, E>` implement
/// `Model` automatically.
pub trait Model<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot produce a prediction.
    fn call(&self, params: &[f64; N]) -> Result<Vec<f64>, Self::Error>;
}

/// Blanket implementation for model closures.
impl<const N: usize, F, E> Model<N> for F
where
    F: Fn(&[f64; N]) -> Result<Vec<f64>, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, params: &[f64; N]) -> Result<Vec<f64>, Self::Error> {
        self(params)
    }
}
