use super::atmosphere::Atmosphere;
use crate::integrators::{IntegrationError, Quadrature};
use crate::models::body::BodyProperties;
use nalgebra as na;

/// Per-axis drag magnitude `0.5 * rho * v_i² * Cd * A`.
///
/// Components are unsigned; the force opposes the motion along each axis.
pub fn drag_force_at_density<B: BodyProperties>(
    body: &B,
    density: f64,
    velocity: &na::Vector3<f64>,
) -> na::Vector3<f64> {
    velocity.component_mul(velocity)
        * (0.5 * density * body.drag_coefficient() * body.reference_area())
}

/// Drag on `body` at `altitude`, with `velocity` ordered (vx, vy, vh).
pub fn drag_force<B: BodyProperties, Q: Quadrature>(
    atmosphere: &Atmosphere<Q>,
    body: &B,
    velocity: &na::Vector3<f64>,
    altitude: f64,
) -> Result<na::Vector3<f64>, IntegrationError> {
    let rho = atmosphere.density(altitude)?;
    Ok(drag_force_at_density(body, rho, velocity))
}

pub fn drag_acceleration<B: BodyProperties>(force: &na::Vector3<f64>, body: &B) -> f64 {
    force.magnitude() / body.mass()
}
