pub mod error;
pub mod estimator;
pub mod math;

pub use error::{Error, Result};
pub use estimator::{estimate, estimate_with_rng, Estimate};
