//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use poresense_core::{DSDNA_DIAMETER, DeviceParams, EstimateConfig};
use poresense_solver::{QuadratureConfig, RootConfig};

#[derive(Parser, Debug)]
#[command(name = "poresense")]
#[command(about = "Resistance change of a nanopore-gated channel device")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the resistance change when a molecule occupies the pore
    Estimate {
        #[command(flatten)]
        device: DeviceArgs,

        #[command(flatten)]
        numerics: NumericsArgs,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Tabulate the voltage drop against distance from the pore
    Profile {
        #[command(flatten)]
        device: DeviceArgs,

        /// First distance (nm)
        #[arg(long, default_value = "0")]
        start: f64,

        /// Last distance (nm)
        #[arg(long, default_value = "1000")]
        stop: f64,

        /// Number of evenly spaced distances
        #[arg(long, default_value = "100")]
        points: usize,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Device parameters. Anything not given falls back to the reference device.
#[derive(Args, Debug, Default)]
pub struct DeviceArgs {
    /// Channel length (nm)
    #[arg(long)]
    pub length: Option<f64>,

    /// Channel width (nm)
    #[arg(long)]
    pub width: Option<f64>,

    /// Pore diameter (nm)
    #[arg(long)]
    pub pore_diameter: Option<f64>,

    /// Pore height (nm)
    #[arg(long)]
    pub pore_height: Option<f64>,

    /// Macro voltage between cis and trans chambers (V)
    #[arg(long)]
    pub v_macro: Option<f64>,

    /// Drain-source current at the operating point (A)
    #[arg(long)]
    pub ids: Option<f64>,

    /// Drain-source voltage; sets the resistivity to vds / ids (V)
    #[arg(long, conflicts_with = "resistivity")]
    pub vds: Option<f64>,

    /// Sheet resistivity (ohm per square)
    #[arg(long)]
    pub resistivity: Option<f64>,

    /// Gate slope at the operating point (A/V)
    #[arg(long)]
    pub gate_slope: Option<f64>,

    /// Contact resistance (ohm)
    #[arg(long)]
    pub r_contact: Option<f64>,

    /// Concentration ratio Ccis/Ctrans
    #[arg(long)]
    pub concentration_ratio: Option<f64>,

    /// Molecule diameter (nm); the default is double-stranded DNA
    #[arg(long, default_value_t = DSDNA_DIAMETER)]
    pub molecule_diameter: f64,
}

impl DeviceArgs {
    /// Overlay the given flags on the reference device.
    pub fn to_params(&self) -> DeviceParams {
        let mut params = DeviceParams::default();

        if let Some(v) = self.length {
            params.length = v;
        }
        if let Some(v) = self.width {
            params.width = v;
        }
        if let Some(v) = self.pore_diameter {
            params.pore_diameter = v;
        }
        if let Some(v) = self.pore_height {
            params.pore_height = v;
        }
        if let Some(v) = self.v_macro {
            params.v_macro = v;
        }
        if let Some(v) = self.gate_slope {
            params.gate_slope = v;
        }
        if let Some(v) = self.r_contact {
            params.r_contact = v;
        }
        if let Some(v) = self.concentration_ratio {
            params.concentration_ratio = v;
        }

        // The reference resistivity is vds / ids, so keep that relation when
        // only the operating current changes
        let default_vds = params.resistivity * params.ids;
        if let Some(v) = self.ids {
            params.ids = v;
        }
        params.resistivity = match (self.resistivity, self.vds) {
            (Some(resistivity), _) => resistivity,
            (None, Some(vds)) => vds / params.ids,
            (None, None) => default_vds / params.ids,
        };

        params
    }
}

/// Numerical tuning of the estimate.
#[derive(Args, Debug)]
pub struct NumericsArgs {
    /// Voltage-drop fraction of v_macro that bounds the active region
    #[arg(long, default_value = "0.01")]
    pub threshold: f64,

    /// Maximum quadrature subintervals per integral
    #[arg(long, default_value = "50")]
    pub max_subdivisions: usize,

    /// Relative step tolerance of the active-radius search
    #[arg(long, default_value = "1.49e-8")]
    pub root_x_tol: f64,

    /// Residual tolerance of the active-radius search
    #[arg(long, default_value = "1e-12")]
    pub root_f_tol: f64,
}

impl NumericsArgs {
    pub fn to_config(&self) -> EstimateConfig {
        EstimateConfig::default()
            .with_threshold(self.threshold)
            .with_quadrature(
                QuadratureConfig::default().with_max_subdivisions(self.max_subdivisions),
            )
            .with_root(
                RootConfig::default()
                    .with_x_tol(self.root_x_tol)
                    .with_f_tol(self.root_f_tol),
            )
    }
}
