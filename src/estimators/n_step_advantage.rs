//! N-step advantage: the n-step return minus the current value estimate.

use ndarray::{s, Array2, ArrayView2};

use super::n_step_return::NStepReturn;
use super::trait_::Estimator;
use crate::config::NStepConfig;
use crate::error::AdvantageError;

/// Computes `A_t = R_t - V(s_t)` from an owned [`NStepReturn`].
#[derive(Debug, Clone, PartialEq)]
pub struct NStepAdvantage {
    n_step_return: NStepReturn,
}

impl NStepAdvantage {
    /// Creates an estimator with discount `gamma` and optional window `n`.
    pub fn new(gamma: f64, n: Option<usize>) -> Result<Self, AdvantageError> {
        Ok(Self {
            n_step_return: NStepReturn::new(gamma, n)?,
        })
    }

    /// Creates an estimator from a validated configuration.
    pub fn from_config(config: NStepConfig) -> Result<Self, AdvantageError> {
        Ok(Self {
            n_step_return: NStepReturn::from_config(config)?,
        })
    }

    pub fn config(&self) -> &NStepConfig {
        self.n_step_return.config()
    }

    /// The return estimator this advantage is built on.
    pub fn n_step_return(&self) -> &NStepReturn {
        &self.n_step_return
    }

    /// Computes n-step advantages for a batch.
    ///
    /// The baseline is `values[:, t]`, never the bootstrap column.
    /// Errors from the return estimator are propagated unchanged.
    pub fn discounted(
        &self,
        rewards: ArrayView2<'_, f64>,
        values: ArrayView2<'_, f64>,
        dones: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>, AdvantageError> {
        let mut advantages = self.n_step_return.discounted(rewards, values, dones)?;
        advantages -= &values.slice(s![.., ..rewards.ncols()]);
        Ok(advantages)
    }

    /// Computes n-step advantages for a single trajectory.
    pub fn discounted_row(
        &self,
        rewards: &[f64],
        values: &[f64],
        dones: &[bool],
    ) -> Result<Vec<f64>, AdvantageError> {
        let mut advantages = self.n_step_return.discounted_row(rewards, values, dones)?;
        for (a, v) in advantages.iter_mut().zip(values) {
            *a -= v;
        }
        Ok(advantages)
    }
}

impl Estimator for NStepAdvantage {
    fn discounted(
        &self,
        rewards: ArrayView2<'_, f64>,
        values: ArrayView2<'_, f64>,
        dones: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>, AdvantageError> {
        NStepAdvantage::discounted(self, rewards, values, dones)
    }

    fn name(&self) -> &str {
        "n-step advantage"
    }
}

/// Computes n-step advantages for one trajectory.
///
/// # Arguments
///
/// * `rewards` - Per-step rewards
/// * `values` - Per-state value estimates, one longer than `rewards`
/// * `dones` - Per-step episode termination flags
/// * `gamma` - Discount factor
/// * `n` - Window length (`None` = full remaining horizon)
pub fn compute_n_step_advantages(
    rewards: &[f64],
    values: &[f64],
    dones: &[bool],
    gamma: f64,
    n: Option<usize>,
) -> Result<Vec<f64>, AdvantageError> {
    NStepAdvantage::new(gamma, n)?.discounted_row(rewards, values, dones)
}
