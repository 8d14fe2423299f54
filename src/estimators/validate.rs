//! Precondition checks shared by the estimators.

use ndarray::ArrayView2;

use crate::error::AdvantageError;

/// Checks `rewards`/`dones` are (B, T), `values` is (B, T + 1) and every
/// done flag is 0 or 1. Returns `(B, T)`.
pub(crate) fn check_batch(
    rewards: &ArrayView2<'_, f64>,
    values: &ArrayView2<'_, f64>,
    dones: &ArrayView2<'_, f64>,
) -> Result<(usize, usize), AdvantageError> {
    let (batch, horizon) = rewards.dim();

    check_shape("dones", (batch, horizon), dones.dim())?;
    check_shape("values", (batch, horizon + 1), values.dim())?;

    if let Some(((row, col), &value)) = dones
        .indexed_iter()
        .find(|(_, d)| **d != 0.0 && **d != 1.0)
    {
        log::warn!("rejecting done flag {value} at ({row}, {col})");
        return Err(AdvantageError::InvalidDone { row, col, value });
    }

    Ok((batch, horizon))
}

pub(crate) fn check_shape(
    name: &'static str,
    expected: (usize, usize),
    actual: (usize, usize),
) -> Result<(), AdvantageError> {
    if expected != actual {
        log::warn!("rejecting `{name}`: expected shape {expected:?}, got {actual:?}");
        return Err(AdvantageError::ShapeMismatch {
            name,
            expected,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn accepts_consistent_batch() {
        let rewards = Array2::<f64>::zeros((3, 4));
        let values = Array2::<f64>::zeros((3, 5));
        let dones = Array2::<f64>::zeros((3, 4));
        assert_eq!(
            check_batch(&rewards.view(), &values.view(), &dones.view()),
            Ok((3, 4))
        );
    }

    #[test]
    fn values_without_bootstrap_column_rejected() {
        let rewards = Array2::<f64>::zeros((2, 4));
        let values = Array2::<f64>::zeros((2, 4));
        let dones = Array2::<f64>::zeros((2, 4));
        assert_eq!(
            check_batch(&rewards.view(), &values.view(), &dones.view()),
            Err(AdvantageError::ShapeMismatch {
                name: "values",
                expected: (2, 5),
                actual: (2, 4),
            })
        );
    }

    #[test]
    fn dones_batch_mismatch_rejected() {
        let rewards = Array2::<f64>::zeros((2, 4));
        let values = Array2::<f64>::zeros((2, 5));
        let dones = Array2::<f64>::zeros((3, 4));
        let err = check_batch(&rewards.view(), &values.view(), &dones.view()).unwrap_err();
        assert!(matches!(err, AdvantageError::ShapeMismatch { name: "dones", .. }));
    }

    #[test]
    fn fractional_done_rejected() {
        let rewards = Array2::<f64>::zeros((1, 3));
        let values = Array2::<f64>::zeros((1, 4));
        let dones = array![[0.0, 0.5, 1.0]];
        assert_eq!(
            check_batch(&rewards.view(), &values.view(), &dones.view()),
            Err(AdvantageError::InvalidDone {
                row: 0,
                col: 1,
                value: 0.5,
            })
        );
    }

    #[test]
    fn empty_batch_accepted() {
        let rewards = Array2::<f64>::zeros((0, 0));
        let values = Array2::<f64>::zeros((0, 1));
        let dones = Array2::<f64>::zeros((0, 0));
        assert_eq!(
            check_batch(&rewards.view(), &values.view(), &dones.view()),
            Ok((0, 0))
        );
    }
}
