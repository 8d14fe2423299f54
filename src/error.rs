use thiserror::Error;

/// Invalid-argument failures raised before any estimate is computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdvantageError {
    #[error("Discount factor must lie in [0, 1], got {0}")]
    InvalidGamma(f64),

    #[error("Lookahead window n must be a positive integer")]
    InvalidHorizon,

    #[error("Shape mismatch for `{name}`: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        name: &'static str,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("Done flag at ({row}, {col}) must be 0 or 1, got {value}")]
    InvalidDone { row: usize, col: usize, value: f64 },

    #[cfg(feature = "tensor")]
    #[error("Tensor conversion failed: {0}")]
    Tensor(String),
}
