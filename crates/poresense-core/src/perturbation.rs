//! Point-perturbation model of the voltage drop caused by a molecule in the pore.
//!
//! A molecule occupying the pore blocks part of its cross section. The
//! resulting change in the local electric potential decays with radial
//! distance `r` from the pore centre as
//!
//! ```text
//!            2 V A (4h + d)(c - 1)
//! dV(r) = ---------------------------------------------
//!         pi ln(c) (2h + d) (d^2 (c - 1) + 4 (2h + d) r)
//! ```
//!
//! with macro voltage `V`, molecule cross section `A`, pore height `h`, pore
//! diameter `d` and concentration ratio `c`.

use std::f64::consts::PI;

use serde::Serialize;

use crate::error::Result;
use crate::params::{DeviceParams, check_concentration_ratio};

/// Voltage drop model for one pore and one analyte.
///
/// The distance-independent factors are computed once on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerturbationModel {
    v_macro: f64,
    molecule_diameter: f64,
    /// 2 V A (4h + d)(c - 1)
    numerator: f64,
    /// pi ln(c) (2h + d)
    denominator_scale: f64,
    /// d^2 (c - 1)
    offset: f64,
    /// 4 (2h + d)
    slope: f64,
}

impl PerturbationModel {
    /// Build the model. Fails unless `concentration_ratio` is positive and not 1.
    pub fn new(
        v_macro: f64,
        molecule_diameter: f64,
        pore_height: f64,
        pore_diameter: f64,
        concentration_ratio: f64,
    ) -> Result<Self> {
        check_concentration_ratio(concentration_ratio)?;

        let cross_section = PI * (molecule_diameter / 2.0).powi(2);
        let excess = concentration_ratio - 1.0;
        let access = 2.0 * pore_height + pore_diameter;

        Ok(Self {
            v_macro,
            molecule_diameter,
            numerator: 2.0 * v_macro * cross_section * (4.0 * pore_height + pore_diameter) * excess,
            denominator_scale: PI * concentration_ratio.ln() * access,
            offset: pore_diameter.powi(2) * excess,
            slope: 4.0 * access,
        })
    }

    /// Build the model for a device and analyte.
    pub fn from_params(params: &DeviceParams, molecule_diameter: f64) -> Result<Self> {
        Self::new(
            params.v_macro,
            molecule_diameter,
            params.pore_height,
            params.pore_diameter,
            params.concentration_ratio,
        )
    }

    /// Macro voltage the model was built with (V).
    pub fn v_macro(&self) -> f64 {
        self.v_macro
    }

    /// Molecule diameter the model was built with (nm).
    pub fn molecule_diameter(&self) -> f64 {
        self.molecule_diameter
    }

    /// Closed-form voltage drop at radial distance `r` (nm) from the pore centre (V).
    #[inline]
    pub fn voltage_drop_ratio(&self, r: f64) -> f64 {
        self.numerator / (self.denominator_scale * (self.offset + self.slope * r))
    }

    /// [`voltage_drop_ratio`](Self::voltage_drop_ratio) at `r` divided by the macro voltage.
    ///
    /// This is the quantity compared against the active-radius threshold.
    #[inline]
    pub fn fraction_of_macro(&self, r: f64) -> f64 {
        self.voltage_drop_ratio(r) / self.v_macro
    }

    /// Sample the voltage drop at each distance.
    pub fn profile(&self, distances: &[f64]) -> Vec<ProfileSample> {
        distances
            .iter()
            .map(|&distance| ProfileSample {
                distance,
                voltage_drop_ratio: self.voltage_drop_ratio(distance),
            })
            .collect()
    }
}

/// Voltage drop at one distance from the pore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSample {
    /// Radial distance from the pore centre (nm).
    pub distance: f64,
    /// Voltage drop at that distance (V).
    pub voltage_drop_ratio: f64,
}

/// `points` evenly spaced distances from `start` to `stop` inclusive.
pub fn distance_sweep(start: f64, stop: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
