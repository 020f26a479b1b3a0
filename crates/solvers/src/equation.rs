//! Solvers for scalar equations: finding `x` such that `f(x) = 0`.
//!
//! Every solver starts from a single point `x0`, evaluates `f` through a
//! fresh [`Memoized`](numeth_core::Memoized) cache, and stops once the
//! residual `|f(x)|` falls below the configured `epsilon`.
//!
//! # Solvers
//!
//! - [`bisection`] — searches for a sign change, then halves the bracket
//! - [`newton`] — Newton's method with a finite-difference derivative
//! - [`secant`] — secant method seeded with a second point near `x0`
//! - [`halley`] — Halley's method with finite-difference derivatives
//! - [`generic`] — adapts the method to the local behavior of `f`, falling
//!   back to a bracketed search when the open methods stall
//!
//! All iterations, including the samples of the bracket search, draw from the
//! single budget given by [`Config::max_iters`].

mod best;
mod bracket;
mod config;
mod error;
mod event;
mod open;
mod solution;

pub mod bisection;
pub mod generic;
pub mod halley;
pub mod newton;
pub mod secant;
pub mod step;

pub use bracket::{Bracket, Search, Sign, find_bracket};
pub use config::{Config, ConfigError, DEFAULT_BUDGET};
pub use error::Error;
pub use event::{Action, Event};
pub use solution::{Solution, Status};
pub use step::Method;

/// Rejects non-finite starting points before any evaluation.
fn check_start(x0: f64) -> Result<(), Error> {
    if x0.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteStart { x0 })
    }
}
