//! The secant method.
//!
//! Replaces Newton's derivative with the slope through the last two
//! iterates. The second seed point is `x0 + h0`, with `h0` from
//! [`Config::bracket_step`].

use numeth_core::{Function, Memoized, Observer};

use super::{Action, Config, Error, Event, Method, Solution, check_start, open, step};

/// Finds a root of `f` with the secant method starting at `x0`.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if two consecutive iterates
/// have identical residuals or a step is non-finite.
pub fn solve<F, Obs>(f: F, x0: f64, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    check_start(x0)?;

    let f = Memoized::new(f);
    let seed = x0 + config.bracket_step();

    open::iterate(&f, x0, seed, Method::Secant, config, observer, |x, prev| {
        step::secant(&f, x, prev)
    })
}

/// Finds a root of `f` with the secant method, without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(f: F, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}
