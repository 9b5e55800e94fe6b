use resonance_core::{Model, Observation, Switch};

use super::PointError;

/// The outcome of evaluating one parameter setting.
#[derive(Debug, Clone, PartialEq)]
pub struct PointEvaluation<const N: usize> {
    /// The parameters passed to the model.
    pub params: [f64; N],

    /// The model prediction at `params`.
    pub prediction: Vec<f64>,

    /// Sum of squared (optionally weighted) residuals.
    pub chi_squared: f64,

    /// Residual norm, the square root of `chi_squared`.
    pub residual: f64,

    /// Resonance strength `β / max(residual, ε)`.
    pub strength: f64,

    /// Compatibility decision, `1` when `strength >= threshold`.
    pub switch: u8,
}

impl<const N: usize> PointEvaluation<N> {
    /// Returns true if the point is resonant.
    #[must_use]
    pub fn is_resonant(&self) -> bool {
        self.switch == 1
    }
}

/// Calls the model at `params` and runs the result through the switch.
///
/// # Errors
///
/// Returns an error if the model fails, the prediction length does not match
/// the observation, or the prediction holds a non-finite value.
pub(super) fn evaluate<M, const N: usize>(
    model: &M,
    observation: &Observation,
    switch: &Switch,
    params: [f64; N],
) -> Result<PointEvaluation<N>, PointError>
where
    M: Model<N>,
{
    let prediction = model.call(&params).map_err(PointError::model)?;
    let chi_squared = observation.chi_squared(&prediction)?;
    let residual = chi_squared.sqrt();
    let strength = switch.resonance_strength(residual)?;

    Ok(PointEvaluation {
        params,
        prediction,
        chi_squared,
        residual,
        strength,
        switch: switch.decide(strength),
    })
}
