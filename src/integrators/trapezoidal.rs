use super::{IntegrationError, Quadrature};
use crate::constants::{DEFAULT_MAX_ITERATIONS, DEFAULT_SUBINTERVALS, DEFAULT_TOLERANCE};
use log::debug;
use serde::{Deserialize, Serialize};

/// Composite trapezoidal sum over `n` equal panels of `[a, b]`.
/// Callers guarantee `a < b` and `n >= 1`.
fn composite_sum<F>(f: &F, a: f64, b: f64, n: u64) -> f64
where
    F: Fn(f64) -> f64,
{
    let h = (b - a) / n as f64;
    let mut sum = 0.5 * (f(a) + f(b));

    for i in 1..n {
        sum += f(a + i as f64 * h);
    }

    h * sum
}

/// Approximates the integral of `f` over `[a, b]` with the composite trapezoidal
/// rule on `n` equal subintervals.
///
/// `f` is evaluated exactly `n + 1` times. Reversed bounds give the negated
/// integral and equal bounds give exactly zero.
pub fn trapezoidal_integrate<F>(f: F, a: f64, b: f64, n: i64) -> Result<f64, IntegrationError>
where
    F: Fn(f64) -> f64,
{
    if n <= 0 {
        return Err(IntegrationError::InvalidArgument(format!(
            "number of subintervals must be positive, got {}",
            n
        )));
    }

    if a == b {
        return Ok(0.0);
    }

    if a > b {
        return trapezoidal_integrate(f, b, a, n).map(|value| -value);
    }

    Ok(composite_sum(&f, a, b, n as u64))
}

/// Outcome of an adaptive integration, including whether the Richardson
/// estimate actually dropped below the tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveEstimate {
    pub value: f64,
    pub error_estimate: f64,
    pub iterations: u32,
    pub subintervals: u64,
    pub converged: bool,
}

impl AdaptiveEstimate {
    fn negated(self) -> Self {
        Self {
            value: -self.value,
            ..self
        }
    }
}

/// Adaptive trapezoidal integration with error estimation.
///
/// Returns the best available estimate even when `max_iterations` is reached
/// without convergence.
pub fn adaptive_trapezoidal_integrate<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: u32,
) -> f64
where
    F: Fn(f64) -> f64,
{
    adaptive_trapezoidal_integrate_with_status(f, a, b, tolerance, max_iterations).value
}

/// Same refinement as [`adaptive_trapezoidal_integrate`], reporting the
/// convergence status alongside the value.
pub fn adaptive_trapezoidal_integrate_with_status<F>(
    f: F,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: u32,
) -> AdaptiveEstimate
where
    F: Fn(f64) -> f64,
{
    if a == b {
        return AdaptiveEstimate {
            value: 0.0,
            error_estimate: 0.0,
            iterations: 0,
            subintervals: 0,
            converged: true,
        };
    }

    if a > b {
        return adaptive_trapezoidal_integrate_with_status(f, b, a, tolerance, max_iterations)
            .negated();
    }

    let mut n: u64 = 1;
    let mut old_result = 0.5 * (b - a) * (f(a) + f(b));
    let mut error_estimate = f64::INFINITY;
    let mut iterations = 0;

    for iteration in 1..=max_iterations {
        n = match n.checked_mul(2) {
            Some(doubled) => doubled,
            None => {
                debug!("Subinterval count overflow after {} refinements", iterations);
                break;
            }
        };

        let new_result = composite_sum(&f, a, b, n);
        // Trapezoidal error is O(h²), so halving h leaves about (new - old) / 3
        error_estimate = (new_result - old_result).abs() / 3.0;
        iterations = iteration;

        // A single refinement has no history to trust
        if error_estimate < tolerance && iteration > 1 {
            return AdaptiveEstimate {
                value: new_result,
                error_estimate,
                iterations,
                subintervals: n,
                converged: true,
            };
        }

        old_result = new_result;
    }

    debug!(
        "Adaptive trapezoid on [{}, {}] stopped after {} refinements (n = {}, error estimate {:e}, tolerance {:e})",
        a, b, iterations, n, error_estimate, tolerance
    );

    AdaptiveEstimate {
        value: old_result,
        error_estimate,
        iterations,
        subintervals: n,
        converged: false,
    }
}

/// Fixed-step trapezoidal rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trapezoidal {
    pub subintervals: i64,
}

impl Trapezoidal {
    pub fn new(subintervals: i64) -> Self {
        Self { subintervals }
    }
}

impl Default for Trapezoidal {
    fn default() -> Self {
        Self::new(DEFAULT_SUBINTERVALS)
    }
}

impl Quadrature for Trapezoidal {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        trapezoidal_integrate(f, a, b, self.subintervals)
    }
}

/// Trapezoidal rule refined by doubling until the Richardson estimate settles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveTrapezoidal {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl AdaptiveTrapezoidal {
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl Default for AdaptiveTrapezoidal {
    fn default() -> Self {
        Self::new(DEFAULT_TOLERANCE, DEFAULT_MAX_ITERATIONS)
    }
}

impl Quadrature for AdaptiveTrapezoidal {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64,
    {
        Ok(adaptive_trapezoidal_integrate(
            f,
            a,
            b,
            self.tolerance,
            self.max_iterations,
        ))
    }
}
