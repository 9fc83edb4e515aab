//! Sensing signal: resistance change when a molecule occupies the pore.

use serde::Serialize;

use crate::config::EstimateConfig;
use crate::device::{ResistanceBreakdown, device_resistance_breakdown};
use crate::error::Result;
use crate::params::{DeviceParams, NO_MOLECULE};

/// Device resistance with and without the molecule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensingReport {
    /// Evaluation with the molecule in the pore.
    pub on: ResistanceBreakdown,
    /// Evaluation with the pore empty.
    pub off: ResistanceBreakdown,
    /// `(on - off) / off`.
    pub relative_change: f64,
}

impl SensingReport {
    /// Relative change expressed in percent.
    pub fn percent(&self) -> f64 {
        100.0 * self.relative_change
    }
}

/// Evaluate the device twice, with a molecule of `molecule_diameter` and with
/// [`NO_MOLECULE`].
///
/// [`DSDNA_DIAMETER`](crate::params::DSDNA_DIAMETER) is the conventional analyte.
pub fn sensing_report(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
) -> Result<SensingReport> {
    let on = device_resistance_breakdown(params, molecule_diameter, config)?;
    let off = device_resistance_breakdown(params, NO_MOLECULE, config)?;
    let relative_change = (on.total - off.total) / off.total;

    log::debug!(
        "r_on: {:.2e}, r_off: {:.2e}, change: {:.2e}",
        on.total,
        off.total,
        relative_change
    );

    Ok(SensingReport {
        on,
        off,
        relative_change,
    })
}

/// Relative resistance change `(r_on - r_off) / r_off` caused by the molecule.
///
/// The result is a fraction, not scaled by 100.
pub fn percent_resistance_change(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
) -> Result<f64> {
    Ok(sensing_report(params, molecule_diameter, config)?.relative_change)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::DSDNA_DIAMETER;

    #[test]
    fn test_no_molecule_no_change() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        assert_eq!(
            percent_resistance_change(&params, NO_MOLECULE, &config).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_dsdna_signal() {
        let params = DeviceParams::default();
        let config = EstimateConfig::default();
        let report = sensing_report(&params, DSDNA_DIAMETER, &config).unwrap();

        assert!(report.on.total > report.off.total);
        assert!((report.relative_change - 2.532690290089732).abs() < 1e-5);
        assert!((report.percent() - 100.0 * report.relative_change).abs() < 1e-12);
    }
}
