//! poresense CLI.
//!
//! Estimates the resistance change of a nanopore-gated channel device when a
//! molecule occupies the pore.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Estimate {
            device,
            numerics,
            json,
        } => commands::run_estimate(
            &device.to_params(),
            device.molecule_diameter,
            &numerics.to_config(),
            json,
        ),
        Commands::Profile {
            device,
            start,
            stop,
            points,
            json,
        } => commands::run_profile(
            &device.to_params(),
            device.molecule_diameter,
            start,
            stop,
            points,
            json,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
