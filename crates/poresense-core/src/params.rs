//! Device, electrical and chemistry parameters.

use serde::Serialize;

use crate::error::{Error, Result};

/// Molecule diameter meaning "pore is empty" (nm).
pub const NO_MOLECULE: f64 = 0.0;

/// Diameter of double-stranded DNA, the reference analyte (nm).
pub const DSDNA_DIAMETER: f64 = 2.0;

/// Parameters of a nanopore-gated channel device.
///
/// The analyte's molecule diameter is not part of the device; it is passed
/// to each evaluation so the "molecule present" and "pore empty" cases are
/// two explicit calls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceParams {
    // ========================================
    // Geometry (nm)
    // ========================================
    /// Channel length between the contacts.
    pub length: f64,
    /// Channel width.
    pub width: f64,
    /// Nanopore diameter.
    pub pore_diameter: f64,
    /// Nanopore height (membrane thickness).
    pub pore_height: f64,

    // ========================================
    // Electrical
    // ========================================
    /// Macro voltage between the cis and trans chambers (V).
    pub v_macro: f64,
    /// Sheet resistivity of the channel (ohm per square).
    pub resistivity: f64,
    /// Resistance of each contact (ohm).
    pub r_contact: f64,
    /// Drain-source current at the operating point (A).
    pub ids: f64,
    /// Slope of the gating curve at the operating point (A/V).
    pub gate_slope: f64,

    // ========================================
    // Chemistry
    // ========================================
    /// Ratio of chamber concentrations Ccis/Ctrans.
    pub concentration_ratio: f64,
}

impl Default for DeviceParams {
    /// A 500 x 200 nm channel under a 3 nm pore, biased at 300 mV / 10 pA.
    fn default() -> Self {
        let ids = 1e-11;
        let vds = 300e-3;
        Self {
            length: 500.0,
            width: 200.0,
            pore_diameter: 3.0,
            pore_height: 50.0,
            v_macro: 500e-3,
            resistivity: vds / ids,
            r_contact: 1e6,
            ids,
            gate_slope: 1e-10 / 120e-3,
            concentration_ratio: 100.0,
        }
    }
}

impl DeviceParams {
    /// Radius of the nanopore (nm).
    pub fn pore_radius(&self) -> f64 {
        self.pore_diameter / 2.0
    }

    /// Check every parameter against the model's domain.
    ///
    /// `v_macro` is only constrained once a molecule perturbs the channel;
    /// see [`check_v_macro`].
    pub fn validate(&self) -> Result<()> {
        positive("length", self.length)?;
        positive("width", self.width)?;
        positive("pore_diameter", self.pore_diameter)?;
        positive("pore_height", self.pore_height)?;
        positive("resistivity", self.resistivity)?;
        non_zero("ids", self.ids)?;
        non_zero("gate_slope", self.gate_slope)?;
        check_concentration_ratio(self.concentration_ratio)?;

        if !(self.r_contact >= 0.0) || !self.r_contact.is_finite() {
            return Err(Error::InvalidParameter {
                name: "r_contact",
                value: self.r_contact,
                reason: "must be finite and non-negative",
            });
        }
        Ok(())
    }
}

/// Check a molecule diameter. Zero or negative means no molecule.
pub fn check_molecule_diameter(molecule_diameter: f64) -> Result<()> {
    if molecule_diameter.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name: "molecule_diameter",
            value: molecule_diameter,
            reason: "must be finite",
        })
    }
}

/// Check the macro voltage. The active-radius threshold is a fraction of it.
pub(crate) fn check_v_macro(v_macro: f64) -> Result<()> {
    non_zero("v_macro", v_macro)
}

/// Check a concentration ratio: ln(c) appears in a denominator.
pub(crate) fn check_concentration_ratio(concentration_ratio: f64) -> Result<()> {
    let reason = if !concentration_ratio.is_finite() {
        "must be finite"
    } else if concentration_ratio <= 0.0 {
        "must be positive"
    } else if concentration_ratio == 1.0 {
        "must differ from 1 (equal concentrations produce no potential)"
    } else {
        return Ok(());
    };

    Err(Error::InvalidParameter {
        name: "concentration_ratio",
        value: concentration_ratio,
        reason,
    })
}

fn positive(name: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and positive",
        })
    }
}

fn non_zero(name: &'static str, value: f64) -> Result<()> {
    if value != 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value,
            reason: "must be finite and non-zero",
        })
    }
}
