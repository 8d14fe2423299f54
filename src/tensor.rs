//! `tch` tensor front-end for the estimators.
//!
//! Tensors are copied to the host as `f64`, run through the array kernel and
//! copied back with the kind and device of `rewards`.

use ndarray::Array2;
use tch::{Kind, Tensor};

use crate::error::AdvantageError;
use crate::estimators::Estimator;

/// Runs any [`Estimator`] on (B, T) / (B, T + 1) tensors.
pub trait TensorEstimator {
    /// Tensor counterpart of [`Estimator::discounted`].
    fn discounted_tensor(
        &self,
        rewards: &Tensor,
        values: &Tensor,
        dones: &Tensor,
    ) -> Result<Tensor, AdvantageError>;
}

impl<E: Estimator + ?Sized> TensorEstimator for E {
    fn discounted_tensor(
        &self,
        rewards: &Tensor,
        values: &Tensor,
        dones: &Tensor,
    ) -> Result<Tensor, AdvantageError> {
        let rewards_arr = to_array(rewards)?;
        let values_arr = to_array(values)?;
        let dones_arr = to_array(dones)?;

        let out = self.discounted(rewards_arr.view(), values_arr.view(), dones_arr.view())?;
        let (batch, horizon) = out.dim();
        let flat: Vec<f64> = out.iter().copied().collect();

        Ok(Tensor::from_slice(&flat)
            .reshape([batch as i64, horizon as i64])
            .to_kind(rewards.kind())
            .to_device(rewards.device()))
    }
}

fn to_array(tensor: &Tensor) -> Result<Array2<f64>, AdvantageError> {
    let (rows, cols) = tensor
        .size2()
        .map_err(|e| AdvantageError::Tensor(e.to_string()))?;
    let flat = tensor
        .to_kind(Kind::Double)
        .to_device(tch::Device::Cpu)
        .flatten(0, -1);
    let data =
        Vec::<f64>::try_from(&flat).map_err(|e| AdvantageError::Tensor(e.to_string()))?;
    Array2::from_shape_vec((rows as usize, cols as usize), data)
        .map_err(|e| AdvantageError::Tensor(e.to_string()))
}
