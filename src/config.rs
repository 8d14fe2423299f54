//! Configuration shared by the n-step estimators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AdvantageError;

/// Discounting configuration fixed at estimator construction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NStepConfig {
    /// Discount factor γ ∈ [0, 1].
    pub gamma: f64,
    /// Lookahead window length. `None` means the full remaining horizon,
    /// so only done flags shorten the window.
    #[cfg_attr(feature = "serde", serde(default))]
    pub n: Option<usize>,
}

impl NStepConfig {
    /// Creates a configuration with the given discount and window.
    pub fn new(gamma: f64, n: Option<usize>) -> Self {
        Self { gamma, n }
    }

    /// Sets the discount factor.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Caps the lookahead window at `n` steps.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = Some(n);
        self
    }

    /// Removes the window cap.
    pub fn with_full_horizon(mut self) -> Self {
        self.n = None;
        self
    }

    /// Window length used for a trajectory of `horizon` steps.
    pub fn window(&self, horizon: usize) -> usize {
        self.n.map_or(horizon, |n| n.min(horizon))
    }

    /// Checks that γ lies in [0, 1] and that `n`, when set, is positive.
    pub fn validate(&self) -> Result<(), AdvantageError> {
        if !(0.0..=1.0).contains(&self.gamma) {
            return Err(AdvantageError::InvalidGamma(self.gamma));
        }
        if self.n == Some(0) {
            return Err(AdvantageError::InvalidHorizon);
        }
        Ok(())
    }
}

impl Default for NStepConfig {
    fn default() -> Self {
        Self {
            gamma: 0.99,
            n: None,
        }
    }
}
