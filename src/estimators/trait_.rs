//! Estimator trait shared by the n-step return and advantage estimators.

use ndarray::{Array2, ArrayView2};

use crate::error::AdvantageError;

/// Produces one discounted estimate per (trajectory, timestep).
///
/// Inputs are batched with dimension 0 indexing trajectories and
/// dimension 1 indexing time:
/// - `rewards`: (B, T)
/// - `values`: (B, T + 1), the last column holding the bootstrap state
/// - `dones`: (B, T), each entry exactly 0.0 or 1.0
pub trait Estimator: Send + Sync {
    /// Computes a freshly allocated (B, T) array of estimates.
    ///
    /// # Errors
    ///
    /// Returns an [`AdvantageError`] if the input shapes disagree or a done
    /// flag is not 0 or 1. Inputs are never mutated.
    fn discounted(
        &self,
        rewards: ArrayView2<'_, f64>,
        values: ArrayView2<'_, f64>,
        dones: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>, AdvantageError>;

    /// Returns a human-readable name for this estimator.
    fn name(&self) -> &str;
}
