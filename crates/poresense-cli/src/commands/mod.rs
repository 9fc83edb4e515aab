//! Subcommand runners.

pub mod estimate;
pub mod profile;

pub use estimate::run_estimate;
pub use profile::run_profile;
