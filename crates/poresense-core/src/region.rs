//! Resistance of the active (perturbed) region.

use crate::config::EstimateConfig;
use crate::error::Result;
use crate::integrator::incremental_resistance;
use crate::params::DeviceParams;

/// Resistance (ohm) of the active rectangle with half-extents `x_half` and `y_half`.
///
/// A rectangle that fits inside the pore footprint keeps the bare sheet
/// resistivity; otherwise the perturbation increment is added.
pub fn active_region_resistance(
    params: &DeviceParams,
    molecule_diameter: f64,
    x_half: f64,
    y_half: f64,
    config: &EstimateConfig,
) -> Result<f64> {
    if 2.0 * x_half <= params.pore_diameter && 2.0 * y_half <= params.pore_diameter {
        return Ok(params.resistivity);
    }

    let dr = incremental_resistance(params, molecule_diameter, x_half, y_half, config)?;
    log::debug!("dr: {:.2e}", dr);

    Ok(params.resistivity + dr)
}
