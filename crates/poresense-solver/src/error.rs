//! Error types for numerical routines.

use thiserror::Error;

/// Errors that can occur during quadrature or root finding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The integrand returned NaN or infinity.
    #[error("Integrand is not finite at x = {x}")]
    NonFiniteIntegrand { x: f64 },

    /// Adaptive subdivision ran out before the error target was met.
    #[error(
        "Integration did not converge after {subdivisions} subdivisions \
         (value {value:e}, estimated error {abs_error:e})"
    )]
    IntegrationNotConverged {
        subdivisions: usize,
        value: f64,
        abs_error: f64,
    },

    /// A tolerance or limit in a solver configuration is unusable.
    #[error("Invalid tolerance: {0}")]
    InvalidTolerance(String),
}

/// Result type for numerical routines.
pub type Result<T> = std::result::Result<T, Error>;
