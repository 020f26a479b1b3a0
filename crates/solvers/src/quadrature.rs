//! Definite integrals of a single-variable function.
//!
//! - [`simpson`]: adaptive Simpson with Richardson error estimation.
//! - [`gauss_kronrod`]: a single, non-adaptive G7/K15 pass.
//! - [`gauss_kronrod_adaptive`]: G7/K15 passes on a worst-error-first
//!   worklist of subintervals.
//!
//! All rules take their tolerances from a shared [`Config`] and return an
//! [`Estimate`](crate::Estimate) of the integral and its absolute error.
//! Integrating over `[b, a]` negates the result over `[a, b]`.

mod config;
mod error;

pub mod gauss_kronrod;
pub mod gauss_kronrod_adaptive;
pub mod simpson;

pub use config::{Config, ConfigError, DEFAULT_SUBDIVISIONS};
pub use error::Error;

/// Rejects non-finite integration bounds.
fn check_bounds(a: f64, b: f64) -> Result<(), Error> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteBounds { a, b })
    }
}
