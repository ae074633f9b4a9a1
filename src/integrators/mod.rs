pub mod errors;
pub mod trapezoidal;

pub use errors::IntegrationError;
pub use trapezoidal::{AdaptiveTrapezoidal, Trapezoidal};

/// A rule for approximating the definite integral of a scalar function.
pub trait Quadrature {
    fn integrate<F>(&self, f: F, a: f64, b: f64) -> Result<f64, IntegrationError>
    where
        F: Fn(f64) -> f64;
}
