pub const G: f64 = -9.81; // Gravitational acceleration, held constant with altitude (m/s²)
pub const R_AIR: f64 = 287.052874; // Specific gas constant for dry air (J/(kg·K))

// Boundary conditions of the fitted profile
pub const H_0: f64 = -1524.0; // Lowest geopotential altitude of the fit (m)
pub const P_0: f64 = 101325.0; // Pressure at H_0 (Pa)
pub const H_MAX: f64 = 76200.0; // Highest geopotential altitude of the fit (m)

// Quartic fit of the U.S. standard atmosphere temperature table, T(h) in K for h in m
pub const T_COEFFICIENTS: [f64; 5] = [
    2.7e-17,
    -6.074933e-12,
    4.22889669793e-7,
    -9.918936624872612e-3,
    2.89661267963331567898e+2,
];

// Integration defaults
pub const DEFAULT_SUBINTERVALS: i64 = 1000;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: u32 = 20;

// Report
pub const SAMPLE_ALTITUDE: f64 = 10_000.0; // meters
pub const PROFILE_STEP: f64 = 500.0; // meters
