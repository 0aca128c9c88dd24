use log::debug;
use rand::Rng;

use crate::error::{Error, Result};
use crate::math::monte_carlo::monte_carlo_integration_with_rng;
use crate::math::quadrature::adaptive_simpson;

/// Lower bound of the fixed integration interval.
pub const LOWER_BOUND: f64 = 2.0;
/// Upper bound of the fixed integration interval.
pub const UPPER_BOUND: f64 = 3.0;

/// Absolute tolerance passed to the quadrature routine when computing the
/// reference value.
const QUADRATURE_TOLERANCE: f64 = 1e-10;

/// The fixed integrand, `f(x) = 3x^2 + 2x`.
pub fn integrand(x: f64) -> f64 {
    3.0 * x * x + 2.0 * x
}

/// Result of a single estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Reference value computed by deterministic quadrature
    pub reference: f64,
    /// Monte Carlo estimate of the integral
    pub estimate: f64,
    /// Signed deviation of the estimate from the reference, in percent
    pub error_percent: f64,
}

/// Estimates the integral of `3x^2 + 2x` over [2, 3] by Monte Carlo sampling
/// and compares it against a quadrature reference value.
///
/// # Arguments
///
/// * `sample_count` - Number of uniform random samples to draw, must be at least 1
///
/// # Returns
///
/// Returns an `Estimate` with the reference value, the Monte Carlo estimate,
/// and the error percentage, or `Error::InvalidSampleCount` when
/// `sample_count` is zero.
///
/// # Examples
///
/// ```
/// let result = mcint::estimate(100_000).unwrap();
/// assert!((result.reference - 24.0).abs() < 1e-9);
/// ```
pub fn estimate(sample_count: usize) -> Result<Estimate> {
    estimate_with_rng(sample_count, &mut rand::thread_rng())
}

/// Runs the estimator against a caller-supplied RNG. Seeding the RNG makes
/// the whole run deterministic, which the tests rely on.
pub fn estimate_with_rng<R>(sample_count: usize, rng: &mut R) -> Result<Estimate>
where
    R: Rng + ?Sized,
{
    if sample_count == 0 {
        return Err(Error::InvalidSampleCount(sample_count));
    }

    let reference = adaptive_simpson(&integrand, LOWER_BOUND, UPPER_BOUND, QUADRATURE_TOLERANCE);
    let estimate =
        monte_carlo_integration_with_rng(integrand, LOWER_BOUND, UPPER_BOUND, sample_count, rng);
    let error_percent = (reference - estimate) / reference * 100.0;
    debug!(
        "sample_count={} reference={} estimate={} error_percent={}",
        sample_count, reference, estimate, error_percent
    );

    Ok(Estimate {
        reference,
        estimate,
        error_percent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_zero_sample_count_is_rejected() {
        assert_eq!(estimate(0), Err(Error::InvalidSampleCount(0)));
    }

    #[test]
    fn test_reference_value_is_24() {
        // Closed form: x^3 + x^2 evaluated at the bounds gives 36 - 12 = 24.
        let result = estimate(10).unwrap();
        assert_relative_eq!(result.reference, 24.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_sample_yields_finite_error() {
        let result = estimate(1).unwrap();
        assert!(result.estimate.is_finite());
        assert!(result.error_percent.is_finite());
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut rng1 = ChaCha20Rng::seed_from_u64(7);
        let mut rng2 = ChaCha20Rng::seed_from_u64(7);
        let r1 = estimate_with_rng(10_000, &mut rng1).unwrap();
        let r2 = estimate_with_rng(10_000, &mut rng2).unwrap();
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_large_sample_count_converges() {
        let mut rng = ChaCha20Rng::seed_from_u64(123);
        let result = estimate_with_rng(100_000, &mut rng).unwrap();
        assert!(
            result.error_percent.abs() < 5.0,
            "error_percent was {}",
            result.error_percent
        );
    }

    #[test]
    fn test_error_percent_matches_definition() {
        let mut rng = ChaCha20Rng::seed_from_u64(9);
        let result = estimate_with_rng(1_000, &mut rng).unwrap();
        let expected = (result.reference - result.estimate) / result.reference * 100.0;
        assert_relative_eq!(result.error_percent, expected, epsilon = 1e-12);
    }
}
