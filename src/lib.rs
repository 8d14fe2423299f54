//! nstep - n-step bootstrapped returns and advantages for policy-gradient RL.
//!
//! Given a batch of trajectories (rewards, value estimates, done flags) the
//! estimators produce one estimate per timestep. Discounting windows stop
//! at episode boundaries and bootstrap from the value estimate at the end
//! of a truncated window.
//!
//! The `tensor` feature adds a `tch` front-end; `serde` makes
//! [`NStepConfig`] (de)serializable.

pub mod config;
pub mod error;
pub mod estimators;
#[cfg(feature = "tensor")]
pub mod tensor;

pub use config::NStepConfig;
pub use error::AdvantageError;
pub use estimators::{
    compute_n_step_advantages, compute_n_step_returns, Estimator, NStepAdvantage, NStepReturn,
};
#[cfg(feature = "tensor")]
pub use tensor::TensorEstimator;
