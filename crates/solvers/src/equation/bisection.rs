//! Bisection from a single starting point.
//!
//! # Algorithm
//!
//! 1. Search rightward from `x0` for a sign change with [`find_bracket`].
//! 2. Halve the bracket, keeping the half with the sign change, until the
//!    midpoint residual falls below `epsilon`.
//!
//! Both phases draw from the same iteration budget. Once a bracket is
//! found, convergence is guaranteed for continuous functions, at the cost
//! of one bit of accuracy per iteration.

use numeth_core::{Function, Memoized, Observer};

use super::{
    Action, Config, Error, Event, Method, Solution, Status, best::Best, check_start, find_bracket,
    step,
};

/// Finds a root of `f` by bracket search and bisection starting at `x0`.
///
/// The observer receives an [`Event`] for each midpoint (not for the bracket
/// search samples) and may return [`Action::StopEarly`].
///
/// # Errors
///
/// Returns an error if `x0` is not finite or no sign change is found within
/// the bracket search share of the budget.
pub fn solve<F, Obs>(f: F, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    check_start(x0)?;

    let f = Memoized::new(f);
    let budget = config.budget();
    let epsilon = config.epsilon();

    let search = find_bracket(&f, x0, budget, config.bracket_step());
    let mut iters = search.iters;
    let bracket = search.bracket.ok_or(Error::NoBracket { x0, iters })?;

    let (mut left, left_residual) = bracket.left();
    let (mut right, right_residual) = bracket.right();
    for (x, residual) in [(left, left_residual), (right, right_residual)] {
        if residual.abs() < epsilon {
            return Ok(Solution::converged(x, residual, iters));
        }
    }

    let mut best = Best::new(left, left_residual);
    best.update(right, right_residual);

    while iters < budget {
        iters += 1;

        let mid = 0.5 * (left + right);
        let residual = f.call(mid);
        best.update(mid, residual);

        let event = Event {
            iter: iters,
            method: Method::Bisection,
            x: mid,
            residual,
            bracket: Some([left, right]),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.finish(Status::StoppedByObserver, iters));
        }

        if residual.abs() < epsilon {
            return Ok(Solution::converged(mid, residual, iters));
        }

        (left, right) = step::bisect(&f, left, right);
    }

    Ok(best.finish(Status::MaxIters, iters))
}

/// Finds a root of `f` by bisection, without observer support.
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

    use std::{cell::Cell, f64::consts::PI};

    use approx::assert_abs_diff_eq;

    fn config() -> Config {
        Config::new(1000, 1e-3).expect("valid config")
    }

    #[test]
    fn finds_pi_from_three_quarters_pi() {
        let solution = solve_unobserved(f64::sin, 3.0 * PI / 4.0, &config()).expect("solves");

        assert_eq!(solution.status, Status::Converged);
        assert_abs_diff_eq!(solution.x, PI, epsilon = 1e-3);
    }

    #[test]
    fn short_budget_uses_geometric_search() {
        // 100 iterations: 25 linear samples reach 0.25, geometric samples reach 1.28.
        let config = Config::new(100, 1e-4).expect("valid config");
        let solution = solve_unobserved(f64::sin, 3.0 * PI / 4.0, &config).expect("solves");

        assert!(solution.is_converged());
        assert_abs_diff_eq!(solution.x, PI, epsilon = 1e-4);
    }

    #[test]
    fn fails_without_sign_change() {
        let f = |x: f64| x * x + 1.0;
        let result = solve_unobserved(f, 1.0, &config());
        assert!(matches!(result, Err(Error::NoBracket { iters: 350, .. })));
    }

    #[test]
    fn iterations_include_bracket_search() {
        let solution = solve_unobserved(f64::sin, 3.0 * PI / 4.0, &config()).expect("solves");
        // 79 samples find the bracket before bisection starts.
        assert!(solution.iters > 79);
    }

    #[test]
    fn budget_exhaustion_reports_best_point() {
        let config = Config::new(82, 1e-17).expect("valid config");
        let solution = solve_unobserved(f64::sin, 3.0 * PI / 4.0, &config).expect("runs");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 82);
        assert!(solution.root().is_nan());
        assert!(solution.residual.abs() < 0.2);
    }

    #[test]
    fn events_carry_shrinking_brackets() {
        let mut widths = Vec::new();
        let observer = |event: &Event| {
            let [left, right] = event.bracket.expect("bisection reports brackets");
            widths.push(right - left);
            None
        };

        solve(f64::sin, 3.0 * PI / 4.0, &config(), observer).expect("solves");

        assert!(widths.len() > 2);
        for pair in widths.windows(2) {
            assert_abs_diff_eq!(pair[1], 0.5 * pair[0], epsilon = 1e-12);
        }
    }

    #[test]
    fn evaluates_each_point_once() {
        let calls = Cell::new(0usize);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x.sin()
        };

        let solution = solve_unobserved(f, 3.0 * PI / 4.0, &config()).expect("solves");

        // One evaluation at x0, one per sample, one per midpoint.
        assert_eq!(calls.get(), 1 + solution.iters);
    }
}
