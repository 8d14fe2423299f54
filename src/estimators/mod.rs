//! N-step return and advantage estimators.

pub mod n_step_advantage;
pub mod n_step_return;
pub mod trait_;
mod validate;


pub use n_step_advantage::{compute_n_step_advantages, NStepAdvantage};
pub use n_step_return::{compute_n_step_returns, NStepReturn};
pub use trait_::Estimator;
