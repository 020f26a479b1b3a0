//! Numerical primitives: finite-difference differentiation, quadrature, and
//! single-variable root finding.
//!
//! # Modules
//!
//! - [`differentiate`] — central and one-sided stencils, plus the composable
//!   [`Derivative`](differentiate::Derivative) provider
//! - [`quadrature`] — adaptive Simpson and non-adaptive Gauss-Kronrod rules
//! - [`equation`] — bracket search, bisection, Newton, secant, Halley, and the
//!   greed-leveled [`generic`](equation::generic) dispatcher
//! - [`simple`] — a flat API that reports failure as `NaN`
//!
//! Every solver takes its parameters through a validated config and returns
//! a structured `Result`. The [`simple`] module wraps those for callers that
//! prefer the NaN-sentinel convention.

mod estimate;

pub mod differentiate;
pub mod equation;
pub mod quadrature;
pub mod simple;

pub use estimate::Estimate;
