//! Scalar Newton-Raphson root finding.
//!
//! The derivative is approximated with a forward difference, so callers only
//! supply the function. Failure to converge is reported in the result rather
//! than as an error: whether a missing root is fatal is the caller's decision.

/// Maximum number of step halvings when a Newton step lands on a non-finite value.
const MAX_STEP_HALVINGS: usize = 30;

/// Root finder configuration.
#[derive(Debug, Clone)]
pub struct RootConfig {
    /// Starting point of the iteration.
    pub initial_guess: f64,
    /// Relative step tolerance: converged once `|dx| <= x_tol * max(|x|, 1)`.
    pub x_tol: f64,
    /// Residual tolerance: converged once `|f(x)| <= f_tol`.
    pub f_tol: f64,
    /// Maximum number of Newton iterations.
    pub max_iter: usize,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            initial_guess: 0.0,
            x_tol: 1.49e-8,
            f_tol: 1e-12,
            max_iter: 200,
        }
    }
}

impl RootConfig {
    /// Set the starting point.
    pub fn with_initial_guess(mut self, initial_guess: f64) -> Self {
        self.initial_guess = initial_guess;
        self
    }

    /// Set the relative step tolerance.
    pub fn with_x_tol(mut self, x_tol: f64) -> Self {
        self.x_tol = x_tol;
        self
    }

    /// Set the residual tolerance.
    pub fn with_f_tol(mut self, f_tol: f64) -> Self {
        self.f_tol = f_tol;
        self
    }

    /// Set the iteration limit.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct RootResult {
    /// Last iterate (the root when `converged` is true).
    pub root: f64,
    /// Function value at `root`.
    pub residual: f64,
    /// Number of Newton iterations performed.
    pub iterations: usize,
    /// Whether either tolerance was met.
    pub converged: bool,
}

impl RootResult {
    /// The root, if the search converged.
    pub fn converged_root(&self) -> Option<f64> {
        self.converged.then_some(self.root)
    }
}

/// Find a root of `f` with Newton-Raphson iteration starting at `config.initial_guess`.
///
/// Stops without convergence when the iteration limit is reached, when the
/// function or its derivative becomes non-finite, or when the derivative
/// vanishes.
pub fn newton<F>(mut f: F, config: &RootConfig) -> RootResult
where
    F: FnMut(f64) -> f64,
{
    let mut x = config.initial_guess;
    let mut fx = f(x);

    let stalled = |root: f64, residual: f64, iterations: usize| RootResult {
        root,
        residual,
        iterations,
        converged: false,
    };

    for iteration in 0..config.max_iter {
        if !fx.is_finite() {
            return stalled(x, fx, iteration);
        }
        if fx.abs() <= config.f_tol {
            return RootResult {
                root: x,
                residual: fx,
                iterations: iteration,
                converged: true,
            };
        }

        let h = f64::EPSILON.sqrt() * x.abs().max(1.0);
        let slope = (f(x + h) - fx) / h;
        if !slope.is_finite() || slope == 0.0 {
            log::trace!("newton: derivative vanished at x = {}", x);
            return stalled(x, fx, iteration);
        }

        let mut dx = -fx / slope;
        let mut x_next = x + dx;
        let mut f_next = f(x_next);

        // Pull the step back towards x until the function is finite again
        let mut halvings = 0;
        while !f_next.is_finite() && halvings < MAX_STEP_HALVINGS {
            dx *= 0.5;
            x_next = x + dx;
            f_next = f(x_next);
            halvings += 1;
        }

        x = x_next;
        fx = f_next;

        if fx.is_finite() && dx.abs() <= config.x_tol * x.abs().max(1.0) {
            return RootResult {
                root: x,
                residual: fx,
                iterations: iteration + 1,
                converged: true,
            };
        }
    }

    log::trace!(
        "newton: no convergence after {} iterations (x = {}, f = {:e})",
        config.max_iter,
        x,
        fx
    );
    stalled(x, fx, config.max_iter)
}
