//! N-step bootstrapped returns.
//!
//! For each timestep `t` the return is
//!
//! ```text
//! R_t = r_t + γ r_{t+1} + … + γ^{m-1} r_{t+m-1} + γ^m V(s_{t+m})
//! ```
//!
//! where `m = min(n, steps to the end of the episode segment)`. A window
//! that ends on a done step stops at the terminal reward and carries no
//! bootstrap term. A window cut short by `n` or by the end of the row
//! bootstraps from `values`, whose extra last column covers the state
//! after the final reward.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewMut1, Zip};

use super::trait_::Estimator;
use super::validate::{check_batch, check_shape};
use crate::config::NStepConfig;
use crate::error::AdvantageError;

/// Computes n-step returns that stop at episode boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct NStepReturn {
    config: NStepConfig,
}

impl NStepReturn {
    /// Creates an estimator with discount `gamma` and optional window `n`.
    ///
    /// `n = None` uses the full remaining horizon.
    pub fn new(gamma: f64, n: Option<usize>) -> Result<Self, AdvantageError> {
        Self::from_config(NStepConfig::new(gamma, n))
    }

    /// Creates an estimator from a validated configuration.
    pub fn from_config(config: NStepConfig) -> Result<Self, AdvantageError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the estimator configuration.
    pub fn config(&self) -> &NStepConfig {
        &self.config
    }

    /// Computes n-step returns for a batch.
    ///
    /// # Arguments
    ///
    /// * `rewards` - (B, T) rewards
    /// * `values` - (B, T + 1) value estimates including the bootstrap state
    /// * `dones` - (B, T) termination flags, 0.0 or 1.0
    ///
    /// # Returns
    ///
    /// A (B, T) array of returns, rows computed independently.
    pub fn discounted(
        &self,
        rewards: ArrayView2<'_, f64>,
        values: ArrayView2<'_, f64>,
        dones: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>, AdvantageError> {
        let (batch, horizon) = check_batch(&rewards, &values, &dones)?;
        log::debug!(
            "n-step returns: batch={batch} horizon={horizon} gamma={} window={}",
            self.config.gamma,
            self.config.window(horizon),
        );

        let mut returns = Array2::<f64>::zeros((batch, horizon));
        Zip::from(returns.rows_mut())
            .and(rewards.rows())
            .and(values.rows())
            .and(dones.rows())
            .for_each(|out, r, v, d| {
                fill_returns(r, v, |t| d[t] == 1.0, &self.config, out);
            });

        Ok(returns)
    }

    /// Computes n-step returns for a single trajectory.
    ///
    /// `values` must hold one more entry than `rewards`.
    pub fn discounted_row(
        &self,
        rewards: &[f64],
        values: &[f64],
        dones: &[bool],
    ) -> Result<Vec<f64>, AdvantageError> {
        let horizon = rewards.len();
        check_shape("dones", (1, horizon), (1, dones.len()))?;
        check_shape("values", (1, horizon + 1), (1, values.len()))?;

        let mut returns = vec![0.0; horizon];
        fill_returns(
            ArrayView1::from(rewards),
            ArrayView1::from(values),
            |t| dones[t],
            &self.config,
            ArrayViewMut1::from(returns.as_mut_slice()),
        );
        Ok(returns)
    }
}

impl Estimator for NStepReturn {
    fn discounted(
        &self,
        rewards: ArrayView2<'_, f64>,
        values: ArrayView2<'_, f64>,
        dones: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>, AdvantageError> {
        NStepReturn::discounted(self, rewards, values, dones)
    }

    fn name(&self) -> &str {
        "n-step return"
    }
}

/// Computes n-step returns for one trajectory.
///
/// # Arguments
///
/// * `rewards` - Per-step rewards
/// * `values` - Per-state value estimates, one longer than `rewards`
/// * `dones` - Per-step episode termination flags
/// * `gamma` - Discount factor
/// * `n` - Window length (`None` = full remaining horizon)
pub fn compute_n_step_returns(
    rewards: &[f64],
    values: &[f64],
    dones: &[bool],
    gamma: f64,
    n: Option<usize>,
) -> Result<Vec<f64>, AdvantageError> {
    NStepReturn::new(gamma, n)?.discounted_row(rewards, values, dones)
}

/// Writes the return of every timestep of one row into `out`.
///
/// Scans time backwards so the nearest done flag at or after `t` is known
/// when `t` is visited. The sum is accumulated innermost-first:
/// `r_t + γ(r_{t+1} + γ(… + γ V))`.
fn fill_returns(
    rewards: ArrayView1<'_, f64>,
    values: ArrayView1<'_, f64>,
    is_done: impl Fn(usize) -> bool,
    config: &NStepConfig,
    mut out: ArrayViewMut1<'_, f64>,
) {
    let horizon = rewards.len();
    let gamma = config.gamma;
    let mut next_done: Option<usize> = None;

    for t in (0..horizon).rev() {
        if is_done(t) {
            next_done = Some(t);
        }

        let window_end = t + config.window(horizon - t);
        let (end, mut acc) = match next_done {
            Some(d) if d < window_end => (d + 1, 0.0),
            _ => (window_end, values[window_end]),
        };

        for k in (t..end).rev() {
            acc = rewards[k] + gamma * acc;
        }
        out[t] = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn one_step_bootstraps_next_value() {
        let returns =
            compute_n_step_returns(&[1.0, 2.0], &[0.0, 10.0, 20.0], &[false, false], 0.5, Some(1))
                .unwrap();
        assert_close(&returns, &[1.0 + 0.5 * 10.0, 2.0 + 0.5 * 20.0]);
    }

    #[test]
    fn done_step_has_no_bootstrap() {
        let returns =
            compute_n_step_returns(&[1.0, 2.0], &[0.0, 10.0, 20.0], &[true, false], 0.5, Some(3))
                .unwrap();
        assert_close(&returns, &[1.0, 2.0 + 0.5 * 20.0]);
    }

    #[test]
    fn done_at_window_end_drops_bootstrap() {
        // n = 2 ends exactly on the terminal step at t = 1.
        let returns = compute_n_step_returns(
            &[1.0, 2.0, 3.0],
            &[0.0, 10.0, 20.0, 30.0],
            &[false, true, false],
            0.5,
            Some(2),
        )
        .unwrap();
        assert_close(&returns, &[1.0 + 0.5 * 2.0, 2.0, 3.0 + 0.5 * 30.0]);
    }

    #[test]
    fn full_horizon_runs_to_row_end() {
        let returns = compute_n_step_returns(
            &[1.0, 1.0, 1.0],
            &[0.0, 0.0, 0.0, 8.0],
            &[false, false, false],
            0.5,
            None,
        )
        .unwrap();
        assert_close(
            &returns,
            &[
                1.0 + 0.5 * (1.0 + 0.5 * (1.0 + 0.5 * 8.0)),
                1.0 + 0.5 * (1.0 + 0.5 * 8.0),
                1.0 + 0.5 * 8.0,
            ],
        );
    }

    #[test]
    fn empty_trajectory_yields_empty_returns() {
        let returns = compute_n_step_returns(&[], &[3.0], &[], 0.9, None).unwrap();
        assert!(returns.is_empty());
    }

    #[test]
    fn row_length_mismatch_rejected() {
        let err = compute_n_step_returns(&[1.0, 2.0], &[0.0, 1.0], &[false, false], 0.9, None)
            .unwrap_err();
        assert_eq!(
            err,
            AdvantageError::ShapeMismatch {
                name: "values",
                expected: (1, 3),
                actual: (1, 2),
            }
        );
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        assert_eq!(
            NStepReturn::new(2.0, None),
            Err(AdvantageError::InvalidGamma(2.0))
        );
        assert_eq!(
            NStepReturn::new(0.9, Some(0)),
            Err(AdvantageError::InvalidHorizon)
        );
    }

    #[test]
    fn nan_reward_propagates() {
        let returns =
            compute_n_step_returns(&[f64::NAN, 1.0], &[0.0, 0.0, 0.0], &[false, false], 0.9, None)
                .unwrap();
        assert!(returns[0].is_nan());
        assert!((returns[1] - 1.0).abs() < 1e-12);
    }
}
