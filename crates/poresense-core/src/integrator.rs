//! Incremental resistance of the perturbed channel region.
//!
//! The perturbation is integrated over the quarter-plane rectangle
//! `[pore_radius, x_extent] x [pore_radius, y_extent]`. For each `y` the
//! voltage drop is integrated along `x`; the reciprocals of those line
//! integrals are then integrated along `y`, which treats each strip as a
//! conductance element in series with its neighbours.

use poresense_solver::{integrate, try_integrate};

use crate::config::EstimateConfig;
use crate::error::{Error, Result};
use crate::params::{DeviceParams, check_molecule_diameter, check_v_macro};
use crate::perturbation::PerturbationModel;

/// Extra resistance (ohm) the perturbation adds to the active rectangle.
///
/// Returns 0 when the pore radius exceeds both extents: the rectangle then
/// lies entirely inside the pore footprint. Quadrature failures, including
/// a vanishing line integral, are returned as errors.
pub fn incremental_resistance(
    params: &DeviceParams,
    molecule_diameter: f64,
    x_extent: f64,
    y_extent: f64,
    config: &EstimateConfig,
) -> Result<f64> {
    params.validate()?;
    check_molecule_diameter(molecule_diameter)?;

    let pore_radius = params.pore_radius();
    if pore_radius > x_extent && pore_radius > y_extent {
        return Ok(0.0);
    }
    check_v_macro(params.v_macro)?;

    let model = PerturbationModel::from_params(params, molecule_diameter)?;
    let quadrature = &config.quadrature;

    let outer = try_integrate(
        |y| -> Result<f64> {
            // Radial distance is sqrt(x^2 + 2y), not sqrt(x^2 + y^2)
            let line = integrate(
                |x| model.voltage_drop_ratio((x * x + y * 2.0).sqrt()),
                pore_radius,
                x_extent,
                quadrature,
            )?;
            Ok(1.0 / line.value)
        },
        pore_radius,
        y_extent,
        quadrature,
    )?;

    log::debug!(
        "outer integral: {:.6e} (error {:.2e}, {} segments)",
        outer.value,
        outer.abs_error,
        outer.subdivisions
    );

    if outer.value == 0.0 {
        return Err(Error::DegenerateRegion { x_extent, y_extent });
    }

    let multiplier = params.resistivity * params.gate_slope / params.ids;
    Ok(multiplier / outer.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DSDNA_DIAMETER, NO_MOLECULE};

    #[test]
    fn test_inside_pore_footprint() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let dr = incremental_resistance(&params, DSDNA_DIAMETER, 1.0, 1.2, &config).unwrap();
        assert_eq!(dr, 0.0);
    }

    #[test]
    fn test_demo_device_increment() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let radius = 18.40485955982142;
        let dr = incremental_resistance(&params, DSDNA_DIAMETER, radius, radius, &config).unwrap();

        let expected = 51735912342.200485 - params.resistivity;
        assert!((dr - expected).abs() / expected < 1e-6, "dr = {:e}", dr);
    }

    #[test]
    fn test_increment_scales_with_operating_point() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let base = incremental_resistance(&params, DSDNA_DIAMETER, 10.0, 10.0, &config).unwrap();

        let steeper = DeviceParams {
            gate_slope: params.gate_slope * 2.0,
            ..params.clone()
        };
        let doubled = incremental_resistance(&steeper, DSDNA_DIAMETER, 10.0, 10.0, &config).unwrap();
        assert!((doubled - 2.0 * base).abs() / base < 1e-12);
    }

    #[test]
    fn test_empty_pore_is_singular() {
        // Zero voltage drop makes every line integral vanish
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let err = incremental_resistance(&params, NO_MOLECULE, 10.0, 10.0, &config).unwrap_err();
        assert!(matches!(
            err,
            Error::Integration(poresense_solver::Error::NonFiniteIntegrand { .. })
        ));
    }

    #[test]
    fn test_collapsed_y_extent_is_degenerate() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let err =
            incremental_resistance(&params, DSDNA_DIAMETER, 10.0, params.pore_radius(), &config)
                .unwrap_err();
        assert_eq!(
            err,
            Error::DegenerateRegion {
                x_extent: 10.0,
                y_extent: 1.5
            }
        );
    }
}
