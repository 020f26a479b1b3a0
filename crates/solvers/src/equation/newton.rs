//! Newton's method with a finite-difference derivative.
//!
//! Converges quadratically near a simple root, but needs `f` to be smooth
//! with a non-vanishing derivative along the path of iterates. The
//! derivative is the central stencil with step [`Config::derivative_step`].

use numeth_core::{Function, Memoized, Observer};

use crate::differentiate::Derivative;

use super::{Action, Config, Error, Event, Method, Solution, check_start, open, step};

/// Finds a root of `f` with Newton's method starting at `x0`.
///
/// The observer receives an [`Event`] for every iterate whose residual is
/// tested and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if a step degenerates
/// (zero derivative estimate or a non-finite iterate).
pub fn solve<F, Obs>(f: F, x0: f64, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    check_start(x0)?;

    let f = Memoized::new(f);
    let df = Memoized::new(Derivative::new(|x: f64| f.call(x), config.derivative_step()));

    open::iterate(&f, x0, x0, Method::Newton, config, observer, |x, _| {
        step::newton(&f, &df, x)
    })
}

/// Finds a root of `f` with Newton's method, without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(f: F, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use crate::equation::Status;

    fn config() -> Config {
        Config::new(1000, 1e-3).expect("valid config")
    }

    #[test]
    fn finds_pi_from_five_quarters_pi() {
        let solution = solve_unobserved(f64::sin, 5.0 * PI / 4.0, &config()).expect("solves");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x, PI, epsilon = 1e-3);
        assert!(solution.residual.abs() < 1e-3);
    }

    #[test]
    fn finds_square_root_quickly() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::new(20, 1e-12).expect("valid config");
        let solution = solve_unobserved(f, 1.0, &config).expect("solves");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-10);
        assert!(solution.iters < 10);
    }

    #[test]
    fn fails_on_flat_start() {
        // cos'(0) = 0 and the central stencil is exactly symmetric there.
        let result = solve_unobserved(f64::cos, 0.0, &config());
        assert!(matches!(
            result,
            Err(Error::DegenerateStep {
                method: Method::Newton,
                ..
            })
        ));
    }

    #[test]
    fn rootless_function_never_converges() {
        let f = |x: f64| x * x + 1.0;
        match solve_unobserved(f, 1.0, &config()) {
            Ok(solution) => assert!(solution.root().is_nan()),
            Err(error) => assert!(matches!(error, Error::DegenerateStep { .. })),
        }
    }

    #[test]
    fn rejects_non_finite_start() {
        let result = solve_unobserved(f64::sin, f64::NAN, &config());
        assert!(matches!(result, Err(Error::NonFiniteStart { .. })));
    }

    #[test]
    fn observer_sees_each_iterate_and_can_stop() {
        let mut seen = Vec::new();
        let observer = |event: &Event| {
            seen.push(event.x);
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution = solve(f64::sin, 5.0 * PI / 4.0, &config(), observer).expect("stops");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_eq!(seen.len(), 2);
        assert_abs_diff_eq!(seen[0], 5.0 * PI / 4.0);
        assert!(solution.root().is_nan());
    }
}
