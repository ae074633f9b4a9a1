use atmos::config::vehicle::SampleProbe;
use atmos::constants::*;
use atmos::physics::atmosphere::Atmosphere;
use atmos::physics::drag::{drag_acceleration, drag_force};
use atmos::physics::profile::{sample_profile, write_profile_csv};
use log::info;
use nalgebra as na;
use std::error::Error;
use std::fs::{self, File};
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    static PROBE: SampleProbe = SampleProbe;
    let atmosphere = Atmosphere::new(H_0, P_0, R_AIR);

    let h = SAMPLE_ALTITUDE;
    let state = atmosphere.state_at(h)?;
    println!(
        "For h = {}, T = {}, P = {}, ρ = {}.\n",
        h, state.temperature, state.pressure, state.density
    );

    // (vx, vy, vh) in m/s
    let velocity = na::Vector3::new(100.0, 3000.0, 20.0);
    let f_drag = drag_force(&atmosphere, &PROBE, &velocity, h)?;
    println!(
        "The drag force at altitude {} is [{}, {}, {}] and so with a mass of {} its acceleration is {}.",
        h,
        f_drag.x,
        f_drag.y,
        f_drag.z,
        SampleProbe::MASS,
        drag_acceleration(&f_drag, &PROBE)
    );

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let profile = sample_profile(&atmosphere, H_0, H_MAX, PROFILE_STEP)?;
    let path = output_dir.join("atmosphere_profile.csv");
    write_profile_csv(File::create(&path)?, &profile)?;
    info!("Atmosphere profile has been written to {}", path.display());

    Ok(())
}
