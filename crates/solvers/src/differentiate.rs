//! Finite-difference differentiation.
//!
//! # Stencils
//!
//! - [`central`] — fourth-order, five-point rule centered on `x`
//!   (the center weight is zero, so four evaluations are made)
//! - [`forward`] — third-order, four-point rule using `x, x+h, x+2h, x+3h`,
//!   for functions undefined below `x`
//! - [`backward`] — the mirror of [`forward`], for functions undefined above `x`
//!
//! Each stencil has an `_estimate` variant that also reports a Richardson
//! error estimate.
//!
//! [`Derivative`] turns a [`Function`] into a function that evaluates the
//! central stencil, and composes: a `Derivative` of a `Derivative` estimates
//! the second derivative.
//!
//! The step `h` matters: too large and truncation error dominates, too small
//! and cancellation does. Values near `1e-3` suit well-scaled inputs.

use numeth_core::Function;

use crate::Estimate;

/// Estimates `f'(x)` with the fourth-order central stencil.
///
/// ```text
/// f'(x) ≈ (f(x-2h) - 8f(x-h) + 8f(x+h) - f(x+2h)) / 12h
/// ```
pub fn central<F: Function>(f: &F, x: f64, h: f64) -> f64 {
    let (m2, m1) = (f.call(x - 2.0 * h), f.call(x - h));
    let (p1, p2) = (f.call(x + h), f.call(x + 2.0 * h));
    // Paired differences first: even functions give exactly zero at the origin.
    ((m2 - p2) + 8.0 * (p1 - m1)) / (12.0 * h)
}

/// Estimates `f'(x)` with a one-sided stencil on `x, x+h, x+2h, x+3h`.
///
/// ```text
/// f'(x) ≈ (-11f(x) + 18f(x+h) - 9f(x+2h) + 2f(x+3h)) / 6h
/// ```
pub fn forward<F: Function>(f: &F, x: f64, h: f64) -> f64 {
    one_sided(f, x, h)
}

/// Estimates `f'(x)` with a one-sided stencil on `x, x-h, x-2h, x-3h`.
pub fn backward<F: Function>(f: &F, x: f64, h: f64) -> f64 {
    one_sided(f, x, -h)
}

/// Estimates `f'(x)` with the central stencil and reports its error.
///
/// The stencil is repeated with step `h / 2`. For a fourth-order rule the
/// Richardson error of the finer value is `|D(h/2) - D(h)| / 15`, and the
/// finer value is the one returned.
pub fn central_estimate<F: Function>(f: &F, x: f64, h: f64) -> Estimate {
    richardson(central(f, x, h), central(f, x, 0.5 * h), 15.0)
}

/// Estimates `f'(x)` with the forward stencil and reports its error.
///
/// Same scheme as [`central_estimate`], but the rule is third order, so the
/// difference is divided by `7`.
pub fn forward_estimate<F: Function>(f: &F, x: f64, h: f64) -> Estimate {
    richardson(forward(f, x, h), forward(f, x, 0.5 * h), 7.0)
}

/// Estimates `f'(x)` with the backward stencil and reports its error.
pub fn backward_estimate<F: Function>(f: &F, x: f64, h: f64) -> Estimate {
    richardson(backward(f, x, h), backward(f, x, 0.5 * h), 7.0)
}

/// `divisor` is `2^p - 1` for a rule of order `p`.
fn richardson(coarse: f64, fine: f64, divisor: f64) -> Estimate {
    Estimate::new(fine, (fine - coarse).abs() / divisor)
}

/// Shared body of [`forward`] and [`backward`]; a negative `h` mirrors the stencil.
fn one_sided<F: Function>(f: &F, x: f64, h: f64) -> f64 {
    let f0 = f.call(x);
    let f1 = f.call(x + h);
    let f2 = f.call(x + 2.0 * h);
    let f3 = f.call(x + 3.0 * h);
    (-11.0 * f0 + 18.0 * f1 - 9.0 * f2 + 2.0 * f3) / (6.0 * h)
}

/// A derivative estimator built from a base function and a fixed step.
///
/// Calling a `Derivative` evaluates [`central`] on the base function.
/// Wrapping a `Derivative` in another `Derivative` yields the second
/// derivative estimate, and so on; each level re-evaluates the level below.
/// Wrap the base in [`Memoized`](numeth_core::Memoized) to share evaluations
/// across nearby points.
#[derive(Debug, Clone, Copy)]
pub struct Derivative<F> {
    f: F,
    h: f64,
}

impl<F: Function> Derivative<F> {
    /// Creates the derivative estimator of `f` with step `h`.
    pub fn new(f: F, h: f64) -> Self {
        Self { f, h }
    }

    /// Returns the finite-difference step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.h
    }
}

impl<F: Function> Function for Derivative<F> {
    fn call(&self, x: f64) -> f64 {
        central(&self.f, x, self.h)
    }
}

/// Returns the derivative estimator of `f` with step `h`.
pub fn derivative<F: Function>(f: F, h: f64) -> Derivative<F> {
    Derivative::new(f, h)
}
