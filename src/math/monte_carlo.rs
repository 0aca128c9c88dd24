use rand::Rng;

/// Performs Monte Carlo integration of the function `f` over the interval [a, b] using the specified number of samples.
pub fn monte_carlo_integration<F>(f: F, a: f64, b: f64, samples: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    monte_carlo_integration_with_rng(f, a, b, samples, &mut rand::thread_rng())
}

/// Same routine driven by a caller-supplied RNG, so a fixed seed yields a reproducible estimate.
pub fn monte_carlo_integration_with_rng<F, R>(f: F, a: f64, b: f64, samples: usize, rng: &mut R) -> f64
where
    F: Fn(f64) -> f64,
    R: Rng + ?Sized,
{
    let mut sum = 0.0;
    for _ in 0..samples {
        let x = rng.gen_range(a..b);
        sum += f(x);
    }
    let avg = sum / samples as f64;
    (b - a) * avg
}
