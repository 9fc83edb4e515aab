//! Radius of the region perturbed by a molecule in the pore.

use poresense_solver::newton;

use crate::config::EstimateConfig;
use crate::error::Result;
use crate::params::{DeviceParams, check_molecule_diameter, check_v_macro};
use crate::perturbation::PerturbationModel;

/// Distance (nm) beyond which the voltage drop stays below
/// `config.threshold * v_macro`.
///
/// Returns 0 when there is no molecule (`molecule_diameter <= 0`). A root
/// search that fails, or that lands below `config.min_active_radius`, also
/// yields 0: no detectable active region is a valid outcome, not an error.
pub fn active_radius(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
) -> Result<f64> {
    check_molecule_diameter(molecule_diameter)?;
    if molecule_diameter <= 0.0 {
        return Ok(0.0);
    }

    params.validate()?;
    check_v_macro(params.v_macro)?;
    let model = PerturbationModel::from_params(params, molecule_diameter)?;
    let threshold = config.threshold;

    let result = newton(|r| model.fraction_of_macro(r) - threshold, &config.root);

    match result.converged_root() {
        Some(radius) if radius >= config.min_active_radius => {
            log::debug!(
                "active radius: {:.4e} nm ({} iterations)",
                radius,
                result.iterations
            );
            Ok(radius)
        }
        Some(radius) => {
            log::debug!(
                "active radius {:.4e} nm below minimum {} nm, treating as none",
                radius,
                config.min_active_radius
            );
            Ok(0.0)
        }
        None => {
            log::warn!(
                "active radius search did not converge after {} iterations (r = {}, residual {:e})",
                result.iterations,
                result.root,
                result.residual
            );
            Ok(0.0)
        }
    }
}
