//! Resistance model for nanopore-gated channel devices.
//!
//! A charged molecule in a nanopore perturbs the potential of the
//! two-dimensional channel beneath it. This crate estimates how that
//! perturbation changes the channel's resistance:
//!
//! - [`perturbation`]: closed-form voltage drop versus distance from the pore
//! - [`active_radius`]: distance at which the drop becomes negligible
//! - [`integrator`]: incremental resistance of the perturbed rectangle
//! - [`region`]: resistance of the active region
//! - [`device`]: contacts, pre-channel, active and bypass regions combined
//! - [`sensing`]: relative resistance change with and without a molecule
//! - [`network`]: series/parallel reduction
//!
//! # Example
//!
//! ```no_run
//! use poresense_core::{DeviceParams, EstimateConfig, DSDNA_DIAMETER, percent_resistance_change};
//!
//! let params = DeviceParams::default();
//! let change = percent_resistance_change(&params, DSDNA_DIAMETER, &EstimateConfig::default())?;
//! println!("relative change: {:.2e}", change);
//! # Ok::<(), poresense_core::Error>(())
//! ```

pub mod active_radius;
pub mod config;
pub mod device;
pub mod error;
pub mod integrator;
pub mod network;
pub mod params;
pub mod perturbation;
pub mod region;
pub mod sensing;

pub use active_radius::active_radius;
pub use config::EstimateConfig;
pub use device::{ResistanceBreakdown, device_resistance, device_resistance_breakdown};
pub use error::{Error, Result};
pub use integrator::incremental_resistance;
pub use network::{bypass_resistance, parallel, pre_channel_resistance, series};
pub use params::{DSDNA_DIAMETER, DeviceParams, NO_MOLECULE};
pub use perturbation::{PerturbationModel, ProfileSample, distance_sweep};
pub use region::active_region_resistance;
pub use sensing::{SensingReport, percent_resistance_change, sensing_report};
