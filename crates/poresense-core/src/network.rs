//! Series/parallel resistor network reduction.
//!
//! Also holds the closed-form resistances of the unperturbed channel regions
//! that flank the active region.

use num_traits::Float;

use crate::error::{Error, Result};

/// Series combination: the sum of all resistances.
///
/// An empty slice yields zero.
pub fn series<T: Float>(resistances: &[T]) -> T {
    resistances.iter().fold(T::zero(), |acc, &r| acc + r)
}

/// Parallel combination: the reciprocal of the sum of reciprocals.
///
/// Every resistance must be non-zero.
pub fn parallel<T: Float>(resistances: &[T]) -> Result<T> {
    if resistances.is_empty() {
        return Err(Error::EmptyNetwork);
    }

    let mut inverse = T::zero();
    for (index, &r) in resistances.iter().enumerate() {
        if r == T::zero() {
            return Err(Error::ZeroResistance { index });
        }
        inverse = inverse + r.recip();
    }

    Ok(inverse.recip())
}

/// Resistance of one unperturbed pre-channel region in series with the active region.
///
/// `resistivity * (length - 2r) / (4r)` for active radius `r`.
pub fn pre_channel_resistance(length: f64, active_radius: f64, resistivity: f64) -> f64 {
    resistivity * (length - 2.0 * active_radius) / (4.0 * active_radius)
}

/// Resistance of one bypass path running alongside the active region.
///
/// `2 * resistivity * length / (width - 2r)` for active radius `r`.
pub fn bypass_resistance(length: f64, width: f64, active_radius: f64, resistivity: f64) -> f64 {
    2.0 * resistivity * length / (width - 2.0 * active_radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series() {
        assert_eq!(series(&[10.0, 10.0]), 20.0);
        assert_eq!(series(&[5.0, 10.0]), 15.0);
        assert_eq!(series(&[10.0, 10.0, 10.0]), 30.0);
        assert_eq!(series(&[5.0, 10.0, 15.0]), 30.0);
    }

    #[test]
    fn test_series_identity() {
        assert_eq!(series(&[42.0]), 42.0);
        assert_eq!(series::<f64>(&[]), 0.0);
        assert_eq!(series(&[0.0, 7.0, 0.0]), 7.0);
    }

    #[test]
    fn test_series_order_independent() {
        let (a, b, c) = (1.5e6, 3.25e3, 7.0);
        assert_eq!(series(&[a, b, c]), series(&[c, a, b]));
        assert_eq!(series(&[a, b, c]), series(&[b, c, a]));
    }

    #[test]
    fn test_parallel() {
        assert!((parallel(&[10.0, 10.0]).unwrap() - 5.0).abs() < 1e-12);
        assert!((parallel(&[5.0, 20.0]).unwrap() - 4.0).abs() < 1e-12);
        assert!((parallel(&[30.0, 30.0, 30.0]).unwrap() - 10.0).abs() < 1e-12);
        assert!((parallel(&[2.0, 5.0, 10.0]).unwrap() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_single_and_equal() {
        assert_eq!(parallel(&[470.0]).unwrap(), 470.0);
        for r in [1e-3, 1.0, 3.3e3, 2.5e12] {
            let half = parallel(&[r, r]).unwrap();
            assert!((half - r / 2.0).abs() <= 1e-12 * r);
        }
    }

    #[test]
    fn test_parallel_order_independent() {
        let forward = parallel(&[2.0, 5.0, 10.0]).unwrap();
        let backward = parallel(&[10.0, 5.0, 2.0]).unwrap();
        assert!((forward - backward).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_f32() {
        let r: f32 = parallel(&[10.0f32, 10.0]).unwrap();
        assert!((r - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_parallel_zero_resistance() {
        assert_eq!(
            parallel(&[10.0, 0.0, 5.0]),
            Err(Error::ZeroResistance { index: 1 })
        );
        assert_eq!(parallel::<f64>(&[]), Err(Error::EmptyNetwork));
    }

    #[test]
    fn test_pre_channel_resistance() {
        let r_pre = pre_channel_resistance(100.0, 7.0, 983.0);
        assert!((r_pre - 3019.214285714285714).abs() < 1e-9);
    }

    #[test]
    fn test_bypass_resistance() {
        let r_out = bypass_resistance(10.0, 100.0, 7.0, 983.0);
        assert!((r_out - 228.604651162790697).abs() < 1e-9);
    }
}
