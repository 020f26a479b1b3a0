use thiserror::Error;

/// Iteration budget used when [`Config::max_iters`] is zero.
pub const DEFAULT_BUDGET: usize = 10_000;

/// Configuration shared by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    epsilon: f64,
    derivative_step: f64,
    bracket_step: f64,
}

/// Errors that can occur when validating an equation solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("epsilon must be finite and positive")]
    Epsilon,

    #[error("derivative_step must be finite and positive")]
    DerivativeStep,

    #[error("bracket_step must be finite and positive")]
    BracketStep,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-4).unwrap()
    }
}

impl Config {
    /// Creates a new config with the default derivative and bracket steps.
    ///
    /// A `max_iters` of zero selects [`DEFAULT_BUDGET`].
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite and positive.
    pub fn new(max_iters: usize, epsilon: f64) -> Result<Self, ConfigError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }

        Ok(Self {
            max_iters,
            epsilon,
            derivative_step: 1e-3,
            bracket_step: 1e-2,
        })
    }

    /// Sets the step `h` of the finite-difference derivatives.
    ///
    /// # Errors
    ///
    /// Returns an error if `h` is not finite and positive.
    pub fn with_derivative_step(self, h: f64) -> Result<Self, ConfigError> {
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::DerivativeStep);
        }
        Ok(Self {
            derivative_step: h,
            ..self
        })
    }

    /// Sets the base step `h0` of the bracket search and the secant seed.
    ///
    /// # Errors
    ///
    /// Returns an error if `h0` is not finite and positive.
    pub fn with_bracket_step(self, h0: f64) -> Result<Self, ConfigError> {
        if !h0.is_finite() || h0 <= 0.0 {
            return Err(ConfigError::BracketStep);
        }
        Ok(Self {
            bracket_step: h0,
            ..self
        })
    }

    /// Returns the configured iteration limit (zero means "use the default").
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the iteration budget actually spent by the solvers.
    #[must_use]
    pub fn budget(&self) -> usize {
        if self.max_iters == 0 {
            DEFAULT_BUDGET
        } else {
            self.max_iters
        }
    }

    /// Returns the absolute residual tolerance.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the finite-difference step for derivative estimates.
    #[must_use]
    pub fn derivative_step(&self) -> f64 {
        self.derivative_step
    }

    /// Returns the base step of the bracket search.
    #[must_use]
    pub fn bracket_step(&self) -> f64 {
        self.bracket_step
    }
}

/// Returns `percent`% of `budget`, rounded down, without overflowing.
pub(super) fn share(budget: usize, percent: usize) -> usize {
    budget / 100 * percent + budget % 100 * percent / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 100);
        assert_eq!(config.budget(), 100);
        assert_eq!(config.derivative_step(), 1e-3);
        assert_eq!(config.bracket_step(), 1e-2);
    }

    #[test]
    fn share_matches_direct_percentage() {
        for budget in [0, 1, 7, 99, 100, 101, 1000, 12_345] {
            assert_eq!(share(budget, 35), budget * 35 / 100);
            assert_eq!(share(budget, 60), budget * 3 / 5);
        }
    }

    #[test]
    fn share_of_largest_budget_does_not_overflow() {
        let open = share(usize::MAX, 60);
        assert!(open < usize::MAX);
        assert!(open >= usize::MAX / 5 * 3);
        assert!(share(usize::MAX, 35) >= usize::MAX / 4);
    }

    #[test]
    fn zero_iters_selects_default_budget() {
        let config = Config::new(0, 1e-6).expect("valid config");
        assert_eq!(config.budget(), DEFAULT_BUDGET);
    }

    #[test]
    fn rejects_bad_epsilon() {
        assert_eq!(Config::new(10, 0.0), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, -1e-3), Err(ConfigError::Epsilon));
        assert_eq!(Config::new(10, f64::NAN), Err(ConfigError::Epsilon));
    }

    #[test]
    fn rejects_bad_steps() {
        let config = Config::default();
        assert_eq!(
            config.with_derivative_step(0.0),
            Err(ConfigError::DerivativeStep)
        );
        assert_eq!(
            config.with_bracket_step(f64::INFINITY),
            Err(ConfigError::BracketStep)
        );
    }

    #[test]
    fn builders_replace_only_their_field() {
        let config = Config::new(50, 1e-8)
            .and_then(|c| c.with_derivative_step(1e-4))
            .and_then(|c| c.with_bracket_step(0.5))
            .expect("valid config");

        assert_eq!(config.max_iters(), 50);
        assert_eq!(config.epsilon(), 1e-8);
        assert_eq!(config.derivative_step(), 1e-4);
        assert_eq!(config.bracket_step(), 0.5);
    }
}
