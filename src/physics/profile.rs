use super::atmosphere::{Atmosphere, AtmosphericState};
use crate::integrators::{IntegrationError, Quadrature};
use csv::Writer;
use log::info;
use std::io;

/// Samples the atmosphere every `step` metres from `start`, ending at the last
/// grid point not above `end`.
pub fn sample_profile<Q: Quadrature>(
    atmosphere: &Atmosphere<Q>,
    start: f64,
    end: f64,
    step: f64,
) -> Result<Vec<AtmosphericState>, IntegrationError> {
    if !(step.is_finite() && step > 0.0) {
        return Err(IntegrationError::InvalidArgument(format!(
            "profile step must be positive and finite, got {}",
            step
        )));
    }

    if !(start.is_finite() && end.is_finite()) || end < start {
        return Err(IntegrationError::InvalidArgument(format!(
            "invalid profile range [{}, {}]",
            start, end
        )));
    }

    // Guards against (end - start) / step landing just under an integer
    let steps = ((end - start) / step + 1e-9).floor() as usize;

    let states = (0..=steps)
        .map(|i| atmosphere.state_at(start + i as f64 * step))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Sampled {} altitudes between {} m and {} m",
        states.len(),
        start,
        start + steps as f64 * step
    );

    Ok(states)
}

pub fn write_profile_csv<W: io::Write>(
    writer: W,
    states: &[AtmosphericState],
) -> Result<(), csv::Error> {
    let mut writer = Writer::from_writer(writer);

    for state in states {
        writer.serialize(state)?;
    }

    writer.flush()?;
    Ok(())
}
