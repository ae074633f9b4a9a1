use crate::models::body::BodyProperties;

/// Flat-plate probe used by the sample report.
pub struct SampleProbe;

impl SampleProbe {
    pub const MASS: f64 = 100.0; // kg
    pub const C_D: f64 = 1.0;
    pub const AREA: f64 = 100.0; // m²
}

impl BodyProperties for SampleProbe {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        Self::AREA
    }
}
