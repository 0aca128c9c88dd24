pub mod monte_carlo;
pub mod quadrature;

pub use monte_carlo::{monte_carlo_integration, monte_carlo_integration_with_rng};
pub use quadrature::adaptive_simpson;
