use thiserror::Error;

use super::ConfigError;

/// Errors that can occur while integrating.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("integration bounds are not finite: [{a}, {b}]")]
    NonFiniteBounds { a: f64, b: f64 },

    #[error("integrand is not finite on [{a}, {b}]")]
    NonFiniteIntegrand { a: f64, b: f64 },

    #[error("tolerance not met on [{a}, {b}] at maximum depth {depth}")]
    MaxDepth { depth: usize, a: f64, b: f64 },

    #[error(
        "error estimate {} exceeds the tolerance for result {}",
        .estimate.error,
        .estimate.value
    )]
    ToleranceNotMet { estimate: crate::Estimate },
}
