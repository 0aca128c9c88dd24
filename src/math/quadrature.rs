use num_traits::Float;
use std::fmt::Debug;

/// Recursion ceiling for interval subdivision. At 50 halvings the
/// subintervals are far below f64 spacing for any reasonable input.
const MAX_DEPTH: u32 = 50;

/// Integrates `f` over the interval [a, b] using adaptive Simpson quadrature.
///
/// The interval is subdivided wherever the Richardson error estimate for the
/// local Simpson rule exceeds the tolerance allotted to that subinterval. The
/// result is exact (up to rounding) for polynomials of degree three or less.
///
/// # Arguments
///
/// * `f` - The integrand
/// * `a` - Lower bound of integration
/// * `b` - Upper bound of integration
/// * `tolerance` - Absolute error tolerance for the whole interval
///
/// # Returns
///
/// Returns the approximate value of the definite integral.
///
/// # Examples
///
/// ```
/// use mcint::math::quadrature::adaptive_simpson;
///
/// let result = adaptive_simpson(&|x: f64| x * x, 0.0, 1.0, 1e-10);
/// assert!((result - 1.0 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn adaptive_simpson<T, F>(f: &F, a: T, b: T, tolerance: T) -> T
where
    T: Float + Debug,
    F: Fn(T) -> T,
{
    let two = T::from(2.0).unwrap();
    let m = (a + b) / two;
    let fa = f(a);
    let fm = f(m);
    let fb = f(b);
    let whole = simpson(a, b, fa, fm, fb);
    simpson_step(f, a, b, fa, fm, fb, whole, tolerance, MAX_DEPTH)
}

/// Simpson's rule on [a, b] given the endpoint and midpoint values.
fn simpson<T>(a: T, b: T, fa: T, fm: T, fb: T) -> T
where
    T: Float,
{
    let four = T::from(4.0).unwrap();
    let six = T::from(6.0).unwrap();
    (b - a) / six * (fa + four * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn simpson_step<T, F>(
    f: &F,
    a: T,
    b: T,
    fa: T,
    fm: T,
    fb: T,
    whole: T,
    tolerance: T,
    depth: u32,
) -> T
where
    T: Float + Debug,
    F: Fn(T) -> T,
{
    let two = T::from(2.0).unwrap();
    let fifteen = T::from(15.0).unwrap();
    let m = (a + b) / two;
    let lm = (a + m) / two;
    let rm = (m + b) / two;
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(a, m, fa, flm, fm);
    let right = simpson(m, b, fm, frm, fb);
    let delta = left + right - whole;

    // The factor 15 comes from Richardson extrapolation of the composite rule.
    if depth == 0 || delta.abs() <= fifteen * tolerance {
        left + right + delta / fifteen
    } else {
        let half_tol = tolerance / two;
        simpson_step(f, a, m, fa, flm, fm, left, half_tol, depth - 1)
            + simpson_step(f, m, b, fm, frm, fb, right, half_tol, depth - 1)
    }
}
