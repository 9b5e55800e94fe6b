//! The compatibility switch.
//!
//! A residual norm `r` is amplified into a resonance strength `β / max(r, ε)`
//! and the switch reports `1` when that strength reaches the threshold `T`,
//! `0` otherwise:
//!
//! ```text
//! switch(r) = Θ(β / max(r, ε) - T)
//! ```
//!
//! The floor `ε` keeps the strength finite for exact matches; it saturates at
//! `β / ε` for every `r <= ε`.

use ndarray::{Array, ArrayBase, Data, Dimension};
use thiserror::Error;

/// Configuration for a [`Switch`].
///
/// This is a flat set of named options with the documented defaults
/// `beta = 296`, `threshold = 1` and `epsilon = 1e-10`. It is validated when
/// a [`Switch`] is constructed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwitchConfig {
    /// Amplification `β`.
    pub beta: f64,

    /// Threshold `T` the resonance strength must reach.
    pub threshold: f64,

    /// Numerical floor `ε` applied to the residual before division.
    pub epsilon: f64,
}

impl SwitchConfig {
    pub const DEFAULT_BETA: f64 = 296.0;
    pub const DEFAULT_THRESHOLD: f64 = 1.0;
    pub const DEFAULT_EPSILON: f64 = 1e-10;
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            beta: Self::DEFAULT_BETA,
            threshold: Self::DEFAULT_THRESHOLD,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

/// Errors that can occur when validating a switch config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("beta must be finite and positive, got {0}")]
    Beta(f64),

    #[error("threshold must be finite and positive, got {0}")]
    Threshold(f64),

    #[error("epsilon must be finite and positive, got {0}")]
    Epsilon(f64),
}

/// Errors raised when a residual handed to the switch is not a norm.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SwitchError {
    #[error("residual must be non-negative, got {0}")]
    NegativeResidual(f64),

    #[error("residual is NaN")]
    NanResidual,
}

impl SwitchError {
    fn check(residual: f64) -> Result<f64, Self> {
        if residual.is_nan() {
            Err(Self::NanResidual)
        } else if residual < 0.0 {
            Err(Self::NegativeResidual(residual))
        } else {
            Ok(residual)
        }
    }
}

/// Maps residual norms to resonance strengths and binary decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Switch {
    beta: f64,
    threshold: f64,
    epsilon: f64,
}

impl Default for Switch {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(SwitchConfig::default()).unwrap()
    }
}

impl Switch {
    /// Creates a switch from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if any of `beta`, `threshold` or `epsilon` is not
    /// finite and strictly positive.
    pub fn new(config: SwitchConfig) -> Result<Self, ConfigError> {
        let SwitchConfig {
            beta,
            threshold,
            epsilon,
        } = config;

        if !is_positive(beta) {
            return Err(ConfigError::Beta(beta));
        }
        if !is_positive(threshold) {
            return Err(ConfigError::Threshold(threshold));
        }
        if !is_positive(epsilon) {
            return Err(ConfigError::Epsilon(epsilon));
        }

        Ok(Self {
            beta,
            threshold,
            epsilon,
        })
    }

    /// Returns a copy of this switch with a different threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if `threshold` is not finite and strictly positive.
    pub fn with_threshold(self, threshold: f64) -> Result<Self, ConfigError> {
        Self::new(SwitchConfig {
            threshold,
            ..self.config()
        })
    }

    /// Returns the config this switch was built from.
    #[must_use]
    pub fn config(&self) -> SwitchConfig {
        SwitchConfig {
            beta: self.beta,
            threshold: self.threshold,
            epsilon: self.epsilon,
        }
    }

    #[must_use]
    pub fn beta(&self) -> f64 {
        self.beta
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns `β / T`, the residual at which the switch flips.
    ///
    /// Residuals comfortably below this value are resonant, those above are
    /// not. Exactly at the crossing the outcome follows the floating-point
    /// comparison of [`Self::resonance_strength`] against the threshold.
    #[must_use]
    pub fn crossing(&self) -> f64 {
        self.beta / self.threshold
    }

    /// Returns the resonance strength `β / max(r, ε)`.
    ///
    /// The result is finite and non-negative for every accepted residual, and
    /// strictly decreasing in `r` above the floor.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual` is negative or NaN.
    pub fn resonance_strength(&self, residual: f64) -> Result<f64, SwitchError> {
        SwitchError::check(residual).map(|r| self.strength_of(r))
    }

    /// Returns `1` if the resonance strength reaches the threshold, else `0`.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual` is negative or NaN.
    pub fn evaluate(&self, residual: f64) -> Result<u8, SwitchError> {
        self.resonance_strength(residual).map(|s| self.decide(s))
    }

    /// Returns true if the residual is resonant.
    ///
    /// # Errors
    ///
    /// Returns an error if `residual` is negative or NaN.
    pub fn is_resonant(&self, residual: f64) -> Result<bool, SwitchError> {
        self.evaluate(residual).map(|s| s == 1)
    }

    /// Applies [`Self::resonance_strength`] elementwise, keeping the shape.
    ///
    /// # Errors
    ///
    /// Returns an error for the first negative or NaN residual in logical
    /// order; no partial output is produced.
    pub fn strengths<S, D>(&self, residuals: &ArrayBase<S, D>) -> Result<Array<f64, D>, SwitchError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        check_all(residuals)?;
        Ok(residuals.mapv(|r| self.strength_of(r)))
    }

    /// Applies [`Self::evaluate`] elementwise, keeping the shape.
    ///
    /// # Errors
    ///
    /// Returns an error for the first negative or NaN residual in logical
    /// order; no partial output is produced.
    pub fn evaluate_all<S, D>(&self, residuals: &ArrayBase<S, D>) -> Result<Array<u8, D>, SwitchError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        check_all(residuals)?;
        Ok(residuals.mapv(|r| self.decide(self.strength_of(r))))
    }

    /// Thresholds an already computed strength.
    #[must_use]
    pub fn decide(&self, strength: f64) -> u8 {
        u8::from(strength >= self.threshold)
    }

    fn strength_of(&self, residual: f64) -> f64 {
        self.beta / residual.max(self.epsilon)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn check_all<S, D>(residuals: &ArrayBase<S, D>) -> Result<(), SwitchError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    residuals
        .iter()
        .try_for_each(|&r| SwitchError::check(r).map(|_| ()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};

    fn switch(beta: f64, threshold: f64) -> Switch {
        Switch::new(SwitchConfig {
            beta,
            threshold,
            ..SwitchConfig::default()
        })
        .expect("valid config")
    }

    #[test]
    fn defaults() {
        let config = SwitchConfig::default();
        assert_relative_eq!(config.beta, 296.0);
        assert_relative_eq!(config.threshold, 1.0);
        assert_relative_eq!(config.epsilon, 1e-10);
        assert_eq!(Switch::default().config(), config);
    }

    #[test]
    fn boundary_at_beta_over_threshold() {
        let s = switch(296.0, 100.0);
        assert_relative_eq!(s.crossing(), 2.96);
        assert_eq!(s.evaluate(2.96).unwrap(), 1);
        assert_eq!(s.evaluate(2.97).unwrap(), 0);
    }

    #[test]
    fn small_and_large_residuals() {
        let s = switch(296.0, 100.0);
        assert_relative_eq!(s.resonance_strength(0.001).unwrap(), 296_000.0, max_relative = 1e-12);
        assert_eq!(s.evaluate(0.001).unwrap(), 1);
        assert_eq!(s.evaluate(2.0).unwrap(), 1);
        assert_relative_eq!(s.resonance_strength(10.0).unwrap(), 29.6, max_relative = 1e-12);
        assert_eq!(s.evaluate(10.0).unwrap(), 0);
    }

    #[test]
    fn saturates_below_floor() {
        for (beta, threshold, epsilon) in [(296.0, 1.0, 1e-10), (2.0, 5.0, 1e-3), (1e4, 0.1, 0.5)] {
            let s = Switch::new(SwitchConfig {
                beta,
                threshold,
                epsilon,
            })
            .unwrap();

            for r in [0.0, epsilon * 0.25, epsilon] {
                assert_eq!(s.resonance_strength(r).unwrap(), beta / epsilon);
            }
        }
    }

    #[test]
    fn strength_strictly_decreasing() {
        let s = Switch::default();
        let residuals: Vec<f64> = (1..200_u32).map(|k| f64::from(k) * 0.37).collect();
        for pair in residuals.windows(2) {
            let a = s.resonance_strength(pair[0]).unwrap();
            let b = s.resonance_strength(pair[1]).unwrap();
            assert!(a > b, "strength({}) = {a} should exceed strength({}) = {b}", pair[0], pair[1]);
        }
    }

    #[test]
    fn decision_matches_crossing_away_from_boundary() {
        let s = switch(50.0, 4.0);
        let crossing = s.crossing();
        for factor in [0.01, 0.5, 0.999, 1.001, 2.0, 100.0] {
            let r = crossing * factor;
            assert_eq!(s.is_resonant(r).unwrap(), factor < 1.0, "r = {r}");
        }
    }

    #[test]
    fn infinite_residual_is_dissonant() {
        let s = Switch::default();
        assert_eq!(s.resonance_strength(f64::INFINITY).unwrap(), 0.0);
        assert_eq!(s.evaluate(f64::INFINITY).unwrap(), 0);
    }

    #[test]
    fn rejects_negative_and_nan() {
        let s = Switch::default();
        assert_eq!(s.evaluate(-1.0), Err(SwitchError::NegativeResidual(-1.0)));
        assert_eq!(s.resonance_strength(f64::NAN), Err(SwitchError::NanResidual));
    }

    #[test]
    fn elementwise_keeps_shape() {
        let s = switch(296.0, 100.0);
        let residuals: Array2<f64> = array![[0.001, 2.0], [10.0, 2.97]];

        let switches = s.evaluate_all(&residuals).unwrap();
        assert_eq!(switches, array![[1_u8, 1], [0, 0]]);

        let strengths = s.strengths(&residuals.view()).unwrap();
        assert_eq!(strengths.shape(), &[2, 2]);
        assert_relative_eq!(strengths[[1, 0]], 29.6, max_relative = 1e-12);
    }

    #[test]
    fn elementwise_rejects_any_negative() {
        let s = Switch::default();
        let residuals = array![1.0, -0.5, 3.0];
        assert_eq!(
            s.evaluate_all(&residuals),
            Err(SwitchError::NegativeResidual(-0.5))
        );
    }

    #[test]
    fn rejects_invalid_config() {
        let base = SwitchConfig::default();
        let bad = [
            (SwitchConfig { beta: 0.0, ..base }, ConfigError::Beta(0.0)),
            (SwitchConfig { threshold: -1.0, ..base }, ConfigError::Threshold(-1.0)),
            (SwitchConfig { epsilon: 0.0, ..base }, ConfigError::Epsilon(0.0)),
        ];
        for (config, expected) in bad {
            assert_eq!(Switch::new(config), Err(expected));
        }
        assert!(matches!(
            Switch::new(SwitchConfig { beta: f64::INFINITY, ..base }),
            Err(ConfigError::Beta(_))
        ));
    }

    #[test]
    fn with_threshold_keeps_beta_and_epsilon() {
        let s = Switch::default().with_threshold(42.0).unwrap();
        assert_relative_eq!(s.threshold(), 42.0);
        assert_relative_eq!(s.beta(), 296.0);
        assert_relative_eq!(s.epsilon(), 1e-10);
        assert!(Switch::default().with_threshold(f64::NAN).is_err());
    }
}
