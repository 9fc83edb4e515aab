//! Voltage-drop profile around the pore.

use anyhow::{Context, Result, bail};
use poresense_core::{DeviceParams, PerturbationModel, ProfileSample, distance_sweep};
use serde::Serialize;

use crate::output::format_profile;

#[derive(Serialize)]
struct ProfileOutput<'a> {
    v_macro: f64,
    molecule_diameter: f64,
    samples: &'a [ProfileSample],
}

/// Sample the voltage drop at `points` distances in `[start, stop]` and print them.
pub fn run_profile(
    params: &DeviceParams,
    molecule_diameter: f64,
    start: f64,
    stop: f64,
    points: usize,
    json: bool,
) -> Result<()> {
    if !start.is_finite() || !stop.is_finite() || start < 0.0 || stop < start {
        bail!("invalid distance range [{}, {}]", start, stop);
    }

    let model = PerturbationModel::from_params(params, molecule_diameter)
        .context("failed to build perturbation model")?;
    let samples = model.profile(&distance_sweep(start, stop, points));
    log::debug!("sampled {} distances", samples.len());

    if json {
        let output = ProfileOutput {
            v_macro: model.v_macro(),
            molecule_diameter: model.molecule_diameter(),
            samples: &samples,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "Voltage drop profile (v_macro = {} V, molecule = {} nm)",
            model.v_macro(),
            model.molecule_diameter()
        );
        println!();
        print!("{}", format_profile(&samples));
    }

    Ok(())
}
