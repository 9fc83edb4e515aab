//! Adaptive Gauss-Kronrod quadrature.
//!
//! Integrates a scalar function over a finite interval by repeatedly
//! bisecting the subinterval with the largest error estimate. Each
//! subinterval is evaluated with the 21-point Kronrod rule, and the embedded
//! 10-point Gauss rule provides the error estimate.
//!
//! # Usage
//!
//! ```
//! use poresense_solver::quadrature::{integrate, QuadratureConfig};
//!
//! let result = integrate(|x| x * x, 0.0, 3.0, &QuadratureConfig::default()).unwrap();
//! assert!((result.value - 9.0).abs() < 1e-12);
//! ```

use crate::error::{Error, Result};

/// Kronrod abscissae on [-1, 1], positive half, descending. The last entry is the centre.
const XGK: [f64; 11] = [
    0.995_657_163_025_808_080_735_527_280_689_003,
    0.973_906_528_517_171_720_077_964_012_084_452,
    0.930_157_491_355_708_226_001_207_180_059_508,
    0.865_063_366_688_984_510_732_096_688_423_493,
    0.780_817_726_586_416_897_063_717_578_345_042,
    0.679_409_568_299_024_406_234_327_365_114_874,
    0.562_757_134_668_604_683_339_000_099_272_694,
    0.433_395_394_129_247_190_799_265_943_165_784,
    0.294_392_862_701_460_198_131_126_603_103_866,
    0.148_874_338_981_631_210_884_826_001_129_720,
    0.0,
];

/// Kronrod weights matching [`XGK`].
const WGK: [f64; 11] = [
    0.011_694_638_867_371_874_278_064_396_062_192,
    0.032_558_162_307_964_727_478_818_972_459_390,
    0.054_755_896_574_351_996_031_381_300_244_580,
    0.075_039_674_810_919_952_767_043_140_916_190,
    0.093_125_454_583_697_605_535_065_465_083_366,
    0.109_387_158_802_297_641_899_210_590_325_805,
    0.123_491_976_262_065_851_077_208_814_221_120,
    0.134_709_217_311_473_325_928_054_001_771_707,
    0.142_775_938_577_060_080_797_094_273_138_717,
    0.147_739_104_901_338_491_374_841_515_972_068,
    0.149_445_554_002_916_905_664_936_468_389_821,
];

/// Gauss weights for the odd-indexed Kronrod abscissae (XGK[1], XGK[3], ...).
const WG: [f64; 5] = [
    0.066_671_344_308_688_137_593_568_809_893_332,
    0.149_451_349_150_580_593_145_776_339_657_697,
    0.219_086_362_515_982_043_995_534_934_228_163,
    0.269_266_719_309_996_355_091_226_921_569_469,
    0.295_524_224_714_752_870_173_892_994_651_338,
];

/// Number of integrand evaluations per subinterval.
const POINTS_PER_RULE: usize = 21;

/// Adaptive quadrature configuration.
///
/// Defaults match the tolerances conventionally used by QUADPACK front ends.
#[derive(Debug, Clone)]
pub struct QuadratureConfig {
    /// Absolute error target.
    pub abs_tol: f64,
    /// Relative error target.
    pub rel_tol: f64,
    /// Maximum number of subintervals before giving up.
    pub max_subdivisions: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1.49e-8,
            rel_tol: 1.49e-8,
            max_subdivisions: 50,
        }
    }
}

impl QuadratureConfig {
    /// Set the absolute error target.
    pub fn with_abs_tol(mut self, abs_tol: f64) -> Self {
        self.abs_tol = abs_tol;
        self
    }

    /// Set the relative error target.
    pub fn with_rel_tol(mut self, rel_tol: f64) -> Self {
        self.rel_tol = rel_tol;
        self
    }

    /// Set the subdivision limit.
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = max_subdivisions;
        self
    }

    /// Check that the targets are achievable.
    pub fn validate(&self) -> Result<()> {
        if self.max_subdivisions == 0 {
            return Err(Error::InvalidTolerance(
                "max_subdivisions must be at least 1".to_string(),
            ));
        }
        if !(self.abs_tol >= 0.0) || !(self.rel_tol >= 0.0) {
            return Err(Error::InvalidTolerance(format!(
                "tolerances must be non-negative (abs {}, rel {})",
                self.abs_tol, self.rel_tol
            )));
        }
        if self.abs_tol == 0.0 && self.rel_tol < 50.0 * f64::EPSILON {
            return Err(Error::InvalidTolerance(format!(
                "relative tolerance {:e} is below machine precision",
                self.rel_tol
            )));
        }
        Ok(())
    }

    fn target(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}

/// Result of an adaptive quadrature.
#[derive(Debug, Clone)]
pub struct QuadratureResult {
    /// Approximate definite integral.
    pub value: f64,
    /// Estimated absolute error.
    pub abs_error: f64,
    /// Number of subintervals in the final partition.
    pub subdivisions: usize,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}

/// One subinterval of the adaptive partition.
#[derive(Debug, Clone, Copy)]
struct Segment {
    a: f64,
    b: f64,
    value: f64,
    error: f64,
}

/// Integrate `f` over `[a, b]`.
///
/// `b < a` is allowed and yields the negated integral over `[b, a]`.
/// Fails if the integrand is not finite anywhere it is sampled, or if the
/// error target is not met within `config.max_subdivisions` subintervals.
pub fn integrate<F>(mut f: F, a: f64, b: f64, config: &QuadratureConfig) -> Result<QuadratureResult>
where
    F: FnMut(f64) -> f64,
{
    try_integrate(|x| Ok::<f64, Error>(f(x)), a, b, config)
}

/// Integrate a fallible integrand over `[a, b]`.
///
/// The first error returned by `f` aborts the integration and is propagated
/// unchanged. This lets nested integrals surface the inner failure.
pub fn try_integrate<F, E>(
    mut f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> std::result::Result<QuadratureResult, E>
where
    F: FnMut(f64) -> std::result::Result<f64, E>,
    E: From<Error>,
{
    config.validate()?;

    if a == b {
        return Ok(QuadratureResult {
            value: 0.0,
            abs_error: 0.0,
            subdivisions: 0,
            evaluations: 0,
        });
    }

    let first = kronrod_segment(&mut f, a, b)?;
    let mut segments = vec![first];
    let mut evaluations = POINTS_PER_RULE;

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let abs_error: f64 = segments.iter().map(|s| s.error).sum();

        if abs_error <= config.target(value) {
            log::trace!(
                "quadrature over [{}, {}] converged: {:e} +/- {:e} ({} segments)",
                a,
                b,
                value,
                abs_error,
                segments.len()
            );
            return Ok(QuadratureResult {
                value,
                abs_error,
                subdivisions: segments.len(),
                evaluations,
            });
        }

        if segments.len() >= config.max_subdivisions {
            return Err(Error::IntegrationNotConverged {
                subdivisions: segments.len(),
                value,
                abs_error,
            }
            .into());
        }

        // Bisect the segment with the largest error estimate
        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, l), (_, r)| l.error.total_cmp(&r.error))
            .map(|(i, _)| i)
            .unwrap_or(0);
        let segment = segments.swap_remove(worst);
        let mid = 0.5 * (segment.a + segment.b);

        // Once the interval can no longer be split, more work cannot help
        if mid == segment.a || mid == segment.b {
            segments.push(segment);
            let value: f64 = segments.iter().map(|s| s.value).sum();
            let abs_error: f64 = segments.iter().map(|s| s.error).sum();
            return Err(Error::IntegrationNotConverged {
                subdivisions: segments.len(),
                value,
                abs_error,
            }
            .into());
        }

        segments.push(kronrod_segment(&mut f, segment.a, mid)?);
        segments.push(kronrod_segment(&mut f, mid, segment.b)?);
        evaluations += 2 * POINTS_PER_RULE;
    }
}

/// Apply the 21-point Kronrod rule to `[a, b]` with a QUADPACK-style error estimate.
fn kronrod_segment<F, E>(f: &mut F, a: f64, b: f64) -> std::result::Result<Segment, E>
where
    F: FnMut(f64) -> std::result::Result<f64, E>,
    E: From<Error>,
{
    let center = 0.5 * (a + b);
    let half_length = 0.5 * (b - a);
    let abs_half_length = half_length.abs();

    let mut eval = |x: f64| -> std::result::Result<f64, E> {
        let y = f(x)?;
        if y.is_finite() {
            Ok(y)
        } else {
            Err(Error::NonFiniteIntegrand { x }.into())
        }
    };

    let f_center = eval(center)?;
    let mut result_kronrod = f_center * WGK[10];
    let mut result_gauss = 0.0;
    let mut result_abs = result_kronrod.abs();

    let mut samples = [(0.0_f64, 0.0_f64); 10];
    for (j, sample) in samples.iter_mut().enumerate() {
        let offset = half_length * XGK[j];
        let f_left = eval(center - offset)?;
        let f_right = eval(center + offset)?;
        let pair = f_left + f_right;

        result_kronrod += WGK[j] * pair;
        result_abs += WGK[j] * (f_left.abs() + f_right.abs());
        if j % 2 == 1 {
            result_gauss += WG[j / 2] * pair;
        }
        *sample = (f_left, f_right);
    }

    // Mean absolute deviation from the mean, used to scale the raw estimate
    let mean = 0.5 * result_kronrod;
    let mut result_asc = WGK[10] * (f_center - mean).abs();
    for (j, &(f_left, f_right)) in samples.iter().enumerate() {
        result_asc += WGK[j] * ((f_left - mean).abs() + (f_right - mean).abs());
    }

    let value = result_kronrod * half_length;
    result_abs *= abs_half_length;
    result_asc *= abs_half_length;

    let mut error = ((result_kronrod - result_gauss) * half_length).abs();
    if result_asc != 0.0 && error != 0.0 {
        error = result_asc * (200.0 * error / result_asc).powf(1.5).min(1.0);
    }
    if result_abs > f64::MIN_POSITIVE / (50.0 * f64::EPSILON) {
        error = error.max(50.0 * f64::EPSILON * result_abs);
    }

    Ok(Segment { a, b, value, error })
}
