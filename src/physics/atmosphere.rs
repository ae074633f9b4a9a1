use crate::constants::{G, H_0, P_0, R_AIR, T_COEFFICIENTS};
use crate::integrators::{AdaptiveTrapezoidal, IntegrationError, Quadrature};
use serde::{Deserialize, Serialize};

/// Temperature, pressure and density at one geopotential altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericState {
    pub altitude: f64,    // m
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m³
}

/// Barometric atmosphere built on a quartic temperature fit.
///
/// Pressure follows from hydrostatic balance and the ideal gas law,
/// `P(h) = P0 * exp((g / R) * ∫[h0, h] dx / T(x))`, with the integral evaluated
/// by `Q` on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere<Q = AdaptiveTrapezoidal> {
    pub h0: f64, // geopotential altitude of the boundary condition (m)
    pub p0: f64, // pressure at h0 (Pa)
    pub r: f64,  // specific gas constant (J/(kg·K))
    pub quadrature: Q,
}

impl Atmosphere {
    pub fn new(h0: f64, p0: f64, r: f64) -> Self {
        Self::with_quadrature(h0, p0, r, AdaptiveTrapezoidal::default())
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::new(H_0, P_0, R_AIR)
    }
}

impl<Q: Quadrature> Atmosphere<Q> {
    pub fn with_quadrature(h0: f64, p0: f64, r: f64, quadrature: Q) -> Self {
        Atmosphere {
            h0,
            p0,
            r,
            quadrature,
        }
    }

    /// Valid for -1524 m <= h <= 76200 m.
    pub fn temperature(&self, h: f64) -> f64 {
        T_COEFFICIENTS.iter().fold(0.0, |acc, c| acc * h + c)
    }

    pub fn pressure(&self, h: f64) -> Result<f64, IntegrationError> {
        let integral = self
            .quadrature
            .integrate(|x| 1.0 / self.temperature(x), self.h0, h)?;
        Ok(self.p0 * ((G / self.r) * integral).exp())
    }

    pub fn density(&self, h: f64) -> Result<f64, IntegrationError> {
        Ok(self.pressure(h)? / (self.r * self.temperature(h)))
    }

    pub fn state_at(&self, h: f64) -> Result<AtmosphericState, IntegrationError> {
        let temperature = self.temperature(h);
        let pressure = self.pressure(h)?;

        Ok(AtmosphericState {
            altitude: h,
            temperature,
            pressure,
            density: pressure / (self.r * temperature),
        })
    }
}
