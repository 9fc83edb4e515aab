//! Numerical routines for poresense.
//!
//! This crate provides:
//! - Adaptive Gauss-Kronrod quadrature with error estimates
//! - Scalar Newton-Raphson root finding with finite-difference derivatives

pub mod error;
pub mod quadrature;
pub mod roots;

pub use error::{Error, Result};
pub use quadrature::{QuadratureConfig, QuadratureResult, integrate, try_integrate};
pub use roots::{RootConfig, RootResult, newton};
