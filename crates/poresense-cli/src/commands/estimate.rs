//! Resistance-change estimate for one device and analyte.

use anyhow::{Context, Result};
use poresense_core::{DeviceParams, EstimateConfig, sensing_report};

use crate::output::{format_parameters, format_report};

/// Evaluate the device with and without the molecule and print the result.
pub fn run_estimate(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
    json: bool,
) -> Result<()> {
    log::info!(
        "estimating {} x {} nm channel, molecule {} nm",
        params.length,
        params.width,
        molecule_diameter
    );

    let report = sensing_report(params, molecule_diameter, config)
        .context("failed to evaluate device resistance")?;

    if json {
        let value = serde_json::json!({
            "params": params,
            "molecule_diameter": molecule_diameter,
            "threshold": config.threshold,
            "report": report,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        print!("{}", format_parameters(params, molecule_diameter));
        println!();
        print!("{}", format_report(&report));
    }

    Ok(())
}
