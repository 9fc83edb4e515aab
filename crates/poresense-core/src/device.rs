//! Total device resistance from the channel's resistor network.
//!
//! The channel is split into four kinds of region:
//!
//! ```text
//! |                Contact               |
//! ----------------------------------------
//! |    Rout    |    Rpre    |    Rout    |
//! |            |            |            |
//! |            |------------|            |
//! |            |  Ractive   |            |
//! |            | (pore is   |            |
//! |            |   here)    |            |
//! |            |------------|            |
//! |            |            |            |
//! |            |    Rpre    |            |
//! ----------------------------------------
//! |                Contact               |
//! ```
//!
//! - Contact: fixed contact resistance at each end.
//! - Rpre: unperturbed regions in series with the active region.
//! - Ractive: the region within the active radius, corrected for the
//!   perturbation.
//! - Rout: unperturbed bypass paths in parallel with the centre column.

use serde::Serialize;

use crate::active_radius::active_radius;
use crate::config::EstimateConfig;
use crate::error::Result;
use crate::network::{bypass_resistance, parallel, pre_channel_resistance, series};
use crate::params::{DeviceParams, check_molecule_diameter};
use crate::region::active_region_resistance;

/// Every intermediate of one device resistance evaluation (nm, ohm).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResistanceBreakdown {
    /// Molecule diameter the device was evaluated with.
    pub molecule_diameter: f64,
    /// Radius of the perturbed region.
    pub active_radius: f64,
    /// Half-extent of the active rectangle along x.
    pub x_half_extent: f64,
    /// Half-extent of the active rectangle along y.
    pub y_half_extent: f64,
    /// Resistance of the active region.
    pub r_active: f64,
    /// Resistance of each pre-channel region, if the active region leaves room for one.
    pub r_pre: Option<f64>,
    /// Resistance of each bypass path, if the active region leaves room for one.
    pub r_out: Option<f64>,
    /// Centre column: pre-channel, active, pre-channel in series.
    pub r_sensitive: f64,
    /// Centre column in parallel with the bypass paths.
    pub r_channel: f64,
    /// Channel between the two contacts.
    pub total: f64,
}

/// Total resistance (ohm) of the device with a molecule of the given diameter in the pore.
///
/// Pass [`NO_MOLECULE`](crate::params::NO_MOLECULE) for the empty pore.
pub fn device_resistance(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
) -> Result<f64> {
    Ok(device_resistance_breakdown(params, molecule_diameter, config)?.total)
}

/// Evaluate the device network and keep every intermediate.
pub fn device_resistance_breakdown(
    params: &DeviceParams,
    molecule_diameter: f64,
    config: &EstimateConfig,
) -> Result<ResistanceBreakdown> {
    params.validate()?;
    check_molecule_diameter(molecule_diameter)?;

    let length = params.length;
    let width = params.width;
    let resistivity = params.resistivity;

    let radius = active_radius(params, molecule_diameter, config)?;
    log::debug!("active radius: {:.2e}", radius);

    let (x_half, y_half) = active_half_extents(length, width, radius);

    let r_active = active_region_resistance(params, molecule_diameter, x_half, y_half, config)?;
    log::debug!("r_active: {:.2e}", r_active);

    let mut r_pre = None;
    let r_sensitive = if 2.0 * radius < length && radius > 0.0 {
        let pre = pre_channel_resistance(length, radius, resistivity);
        log::debug!("r_pre: {:.2e}", pre);
        r_pre = Some(pre);
        series(&[pre, r_active, pre])
    } else {
        r_active
    };

    let mut r_out = None;
    let r_channel = if 2.0 * radius < width {
        let out = bypass_resistance(length, width, radius, resistivity);
        log::debug!("r_out: {:.2e}", out);
        r_out = Some(out);
        parallel(&[out, r_sensitive, out])?
    } else {
        r_sensitive
    };
    log::debug!("r_channel: {:.2e}", r_channel);

    let total = series(&[params.r_contact, r_channel, params.r_contact]);

    Ok(ResistanceBreakdown {
        molecule_diameter,
        active_radius: radius,
        x_half_extent: x_half,
        y_half_extent: y_half,
        r_active,
        r_pre,
        r_out,
        r_sensitive,
        r_channel,
        total,
    })
}

/// Half-extents of the active rectangle for active radius `radius`.
///
/// Each extent falls back to the channel length once the active region
/// outgrows the channel. The x test compares against the width while the y
/// test compares against the length.
fn active_half_extents(length: f64, width: f64, radius: f64) -> (f64, f64) {
    let x = if 2.0 * radius > width { length } else { radius };
    let y = if 2.0 * radius > length { length } else { radius };
    (x, y)
}
