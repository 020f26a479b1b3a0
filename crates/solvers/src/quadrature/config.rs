use thiserror::Error;

use crate::Estimate;

/// Tolerances for the quadrature rules.
///
/// A segment is accepted only when its error estimate meets both the
/// absolute and the relative target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    abs_tol: f64,
    rel_tol: f64,
    max_depth: Option<usize>,
    max_subdivisions: usize,
}

/// Default cap on splits for adaptive Gauss-Kronrod.
pub const DEFAULT_SUBDIVISIONS: usize = 1000;

/// Errors that can occur when validating a quadrature config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("abs_tol must be finite and positive")]
    AbsTol,

    #[error("rel_tol must be finite and positive")]
    RelTol,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-4, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with no subdivision depth limit and
    /// [`DEFAULT_SUBDIVISIONS`] splits.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is not finite and positive.
    pub fn new(abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if !abs_tol.is_finite() || abs_tol <= 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol <= 0.0 {
            return Err(ConfigError::RelTol);
        }

        Ok(Self {
            abs_tol,
            rel_tol,
            max_depth: None,
            max_subdivisions: DEFAULT_SUBDIVISIONS,
        })
    }

    /// Limits how many times an adaptive rule may halve a segment.
    ///
    /// Without a limit, an integrand that never meets the tolerances (for
    /// example one with a jump) is subdivided until floating-point spacing
    /// stops it, which can take a very long time.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..self
        }
    }

    /// Sets how many splits adaptive Gauss-Kronrod may make in total.
    ///
    /// Adaptive Simpson ignores this limit.
    #[must_use]
    pub fn with_max_subdivisions(self, max_subdivisions: usize) -> Self {
        Self {
            max_subdivisions,
            ..self
        }
    }

    /// Returns the absolute error target.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative error target.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the subdivision depth limit, if any.
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Returns the split limit for adaptive Gauss-Kronrod.
    #[must_use]
    pub fn max_subdivisions(&self) -> usize {
        self.max_subdivisions
    }

    /// Whether `estimate` meets both error targets.
    pub(super) fn accepts(&self, estimate: &Estimate) -> bool {
        estimate.error <= self.abs_tol && estimate.error <= self.rel_tol * estimate.value.abs()
    }
}
