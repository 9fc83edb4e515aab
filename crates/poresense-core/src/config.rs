//! Numerical settings for a device evaluation.

use poresense_solver::{QuadratureConfig, RootConfig};

/// Default fraction of `v_macro` below which the perturbation is negligible.
pub const DEFAULT_THRESHOLD: f64 = 0.01;

/// Active radii below this many nanometres are treated as numerical noise.
pub const DEFAULT_MIN_ACTIVE_RADIUS: f64 = 1.0;

/// Settings shared by every stage of the resistance estimate.
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    /// Voltage-drop fraction that defines the edge of the active region.
    pub threshold: f64,
    /// Smallest root accepted as an active radius (nm).
    pub min_active_radius: f64,
    /// Quadrature settings for both levels of the local-resistance integral.
    pub quadrature: QuadratureConfig,
    /// Root finder settings for the active radius.
    pub root: RootConfig,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            min_active_radius: DEFAULT_MIN_ACTIVE_RADIUS,
            quadrature: QuadratureConfig::default(),
            root: RootConfig::default(),
        }
    }
}

impl EstimateConfig {
    /// Set the active-radius threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the minimum accepted active radius.
    pub fn with_min_active_radius(mut self, min_active_radius: f64) -> Self {
        self.min_active_radius = min_active_radius;
        self
    }

    /// Set the quadrature configuration.
    pub fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Set the root finder configuration.
    pub fn with_root(mut self, root: RootConfig) -> Self {
        self.root = root;
        self
    }
}
