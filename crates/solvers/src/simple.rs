//! A flat API over the structured solvers, using `NaN` as the only failure signal.
//!
//! Every function here validates its arguments through the same config
//! types as the structured API, so an invalid tolerance or a failed solve
//! both come back as `NaN`. Check results with [`f64::is_nan`], never `==`.
//!
//! ```
//! use std::f64::consts::PI;
//!
//! use numeth_solvers::simple;
//!
//! let root = simple::solve_newton(f64::sin, 5.0 * PI / 4.0, 1000, 1e-3);
//! assert!((root - PI).abs() < 1e-3);
//!
//! let none = simple::solve_bisection(|x: f64| x * x + 1.0, 1.0, 1000, 1e-3);
//! assert!(none.is_nan());
//! ```

use numeth_core::Function;

use crate::{
    differentiate::{self, Derivative},
    equation::{self, Config as SolveConfig, Solution},
    quadrature::{self, Config as QuadConfig, Error as QuadError},
};

/// Central-difference derivative of `f` at `x` with step `h`.
pub fn differentiate_central<F: Function>(f: F, x: f64, h: f64) -> f64 {
    differentiate::central(&f, x, h)
}

/// Forward-difference derivative of `f` at `x` with step `h`.
pub fn differentiate_forward<F: Function>(f: F, x: f64, h: f64) -> f64 {
    differentiate::forward(&f, x, h)
}

/// Backward-difference derivative of `f` at `x` with step `h`.
pub fn differentiate_backward<F: Function>(f: F, x: f64, h: f64) -> f64 {
    differentiate::backward(&f, x, h)
}

/// Returns `f'` as a function, estimated with the central stencil.
///
/// Pass the result back in for higher derivatives.
pub fn derivative<F: Function>(f: F, h: f64) -> Derivative<F> {
    differentiate::derivative(f, h)
}

/// Integrates `f` over `[a, b]` with one Gauss-Kronrod G7/K15 pass.
///
/// Returns `(result, error)`, or `(NaN, NaN)` if the tolerances are invalid,
/// the integrand is not finite, or the error exceeds either target. When
/// only the tolerance is missed, the error estimate is kept.
pub fn integrate_fixed<F: Function>(
    f: F,
    a: f64,
    b: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> (f64, f64) {
    let result = QuadConfig::new(abs_tol, rel_tol)
        .map_err(QuadError::from)
        .and_then(|config| quadrature::gauss_kronrod::integrate(&f, a, b, &config));

    match result {
        Ok(estimate) => estimate.into(),
        Err(QuadError::ToleranceNotMet { estimate }) => (f64::NAN, estimate.error),
        Err(_) => (f64::NAN, f64::NAN),
    }
}

/// Integrates `f` over `[a, b]` with adaptive Simpson quadrature.
///
/// Subdivision is unbounded. Returns `(result, error)`, or `(NaN, NaN)` if
/// the tolerances or bounds are invalid or the integrand is not finite.
pub fn integrate_adaptive<F: Function>(
    f: F,
    a: f64,
    b: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> (f64, f64) {
    QuadConfig::new(abs_tol, rel_tol)
        .map_err(QuadError::from)
        .and_then(|config| quadrature::simpson::integrate(&f, a, b, &config))
        .map_or((f64::NAN, f64::NAN), Into::into)
}

/// Finds a root of `f` by bracket search and bisection from `x0`.
///
/// A `max_iter` of zero selects [`equation::DEFAULT_BUDGET`].
pub fn solve_bisection<F: Function>(f: F, x0: f64, max_iter: usize, epsilon: f64) -> f64 {
    root(f, x0, max_iter, epsilon, equation::bisection::solve_unobserved)
}

/// Finds a root of `f` with Newton's method from `x0`.
pub fn solve_newton<F: Function>(f: F, x0: f64, max_iter: usize, epsilon: f64) -> f64 {
    root(f, x0, max_iter, epsilon, equation::newton::solve_unobserved)
}

/// Finds a root of `f` with Halley's method from `x0`.
pub fn solve_halley<F: Function>(f: F, x0: f64, max_iter: usize, epsilon: f64) -> f64 {
    root(f, x0, max_iter, epsilon, equation::halley::solve_unobserved)
}

/// Finds a root of `f` with the secant method from `x0`.
pub fn solve_secant<F: Function>(f: F, x0: f64, max_iter: usize, epsilon: f64) -> f64 {
    root(f, x0, max_iter, epsilon, equation::secant::solve_unobserved)
}

/// Finds a root of `f` with the greed-leveled generic solver from `x0`.
pub fn solve_generic<F: Function>(f: F, x0: f64, max_iter: usize, epsilon: f64) -> f64 {
    root(f, x0, max_iter, epsilon, equation::generic::solve_unobserved)
}

/// Runs `solve` with a default-step config, flattening every failure to `NaN`.
fn root<F, S>(f: F, x0: f64, max_iter: usize, epsilon: f64, solve: S) -> f64
where
    F: Function,
    S: FnOnce(F, f64, &SolveConfig) -> Result<Solution, equation::Error>,
{
    SolveConfig::new(max_iter, epsilon)
        .map_err(equation::Error::from)
        .and_then(|config| solve(f, x0, &config))
        .map_or(f64::NAN, |solution| solution.root())
}
