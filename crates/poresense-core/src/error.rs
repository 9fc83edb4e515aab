//! Error types for the device resistance model.

use thiserror::Error;

/// Errors that can occur while evaluating the device model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A parameter lies outside the domain of the model.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A parallel combination contains a zero resistance.
    #[error("Resistance at position {index} is zero; parallel combination is undefined")]
    ZeroResistance { index: usize },

    /// A network reduction was requested with no resistances.
    #[error("Cannot reduce an empty resistor network")]
    EmptyNetwork,

    /// The outer integral over the active region vanished.
    #[error("Active region up to ({x_extent}, {y_extent}) nm integrates to zero")]
    DegenerateRegion { x_extent: f64, y_extent: f64 },

    /// Quadrature failure inside the local-resistance integral.
    #[error("Integration error: {0}")]
    Integration(#[from] poresense_solver::Error),
}

/// Result type for device model evaluation.
pub type Result<T> = std::result::Result<T, Error>;
