//! Halley's method with finite-difference derivatives.
//!
//! Converges cubically near a simple root, the fastest formula offered
//! here, but it needs both derivative estimates to behave. The second
//! derivative is the central stencil applied to the first.

use numeth_core::{Function, Memoized, Observer};

use crate::differentiate::Derivative;

use super::{Action, Config, Error, Event, Method, Solution, check_start, open, step};

/// Finds a root of `f` with Halley's method starting at `x0`.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if a step degenerates
/// (zero denominator or a non-finite iterate).
pub fn solve<F, Obs>(f: F, x0: f64, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    check_start(x0)?;

    let h = config.derivative_step();
    let f = Memoized::new(f);
    let df = Memoized::new(Derivative::new(|x: f64| f.call(x), h));
    let d2f = Memoized::new(Derivative::new(|x: f64| df.call(x), h));

    open::iterate(&f, x0, x0, Method::Halley, config, observer, |x, _| {
        step::halley(&f, &df, &d2f, x)
    })
}

/// Finds a root of `f` with Halley's method, without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(f: F, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}
