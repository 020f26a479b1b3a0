//! Adaptive Gauss-Kronrod quadrature.
//!
//! Starts from one G7/K15 pass over `[a, b]` and keeps every subinterval on a
//! max-heap keyed by its error estimate. Each round pops the worst interval,
//! halves it, and pushes both halves with fresh passes. The sums over the
//! heap are the running result and error; the loop stops once they meet both
//! tolerances.
//!
//! Unlike [`simpson`](super::simpson), every split costs 30 evaluations and
//! no value is reused, but the effort goes where the error is.

use std::{cmp::Ordering, collections::BinaryHeap};

use numeth_core::Function;

use crate::Estimate;

use super::{Config, Error, check_bounds, gauss_kronrod::pass};

/// A subinterval with its own G7/K15 estimate.
#[derive(Debug, Clone, Copy)]
struct Interval {
    a: f64,
    b: f64,
    estimate: Estimate,
    depth: usize,
}

impl Interval {
    fn new<F: Function>(f: &F, a: f64, b: f64, depth: usize) -> Result<Self, Error> {
        let estimate = pass(f, a, b);
        if !estimate.value.is_finite() || !estimate.error.is_finite() {
            return Err(Error::NonFiniteIntegrand { a, b });
        }
        Ok(Self {
            a,
            b,
            estimate,
            depth,
        })
    }

    /// Returns the midpoint if it lies strictly between the endpoints.
    fn midpoint(&self) -> Option<f64> {
        let mid = 0.5 * (self.a + self.b);
        let (lo, hi) = (self.a.min(self.b), self.a.max(self.b));
        (lo < mid && mid < hi).then_some(mid)
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Interval {}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate.error.total_cmp(&other.estimate.error)
    }
}

/// Sums the estimates of every interval on the heap.
fn total(heap: &BinaryHeap<Interval>) -> Estimate {
    heap.iter().fold(Estimate::new(0.0, 0.0), |sum, interval| {
        Estimate::new(
            sum.value + interval.estimate.value,
            sum.error + interval.estimate.error,
        )
    })
}

/// Integrates `f` over `[a, b]`, splitting the worst interval until the
/// summed error meets both `abs_tol` and `rel_tol·|result|`.
///
/// # Errors
///
/// Returns an error if a bound is not finite, if any pass is not finite, or
/// if the interval to split is already at [`Config::max_depth`].
/// Returns [`Error::ToleranceNotMet`] with the current totals once
/// [`Config::max_subdivisions`] splits have been made, or when the worst
/// interval is too narrow to halve.
pub fn integrate<F: Function>(f: &F, a: f64, b: f64, config: &Config) -> Result<Estimate, Error> {
    check_bounds(a, b)?;

    let mut heap = BinaryHeap::from([Interval::new(f, a, b, 0)?]);
    let mut estimate = total(&heap);
    let mut splits = 0;

    while !config.accepts(&estimate) {
        if splits == config.max_subdivisions() {
            return Err(Error::ToleranceNotMet { estimate });
        }

        let worst = heap.pop().ok_or(Error::ToleranceNotMet { estimate })?;
        let Interval { a, b, depth, .. } = worst;

        if config.max_depth().is_some_and(|max| depth >= max) {
            return Err(Error::MaxDepth { depth, a, b });
        }
        let Some(mid) = worst.midpoint() else {
            return Err(Error::ToleranceNotMet { estimate });
        };

        heap.push(Interval::new(f, a, mid, depth + 1)?);
        heap.push(Interval::new(f, mid, b, depth + 1)?);
        splits += 1;
        estimate = total(&heap);
    }

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, f64::consts::PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::quadrature::gauss_kronrod;

    fn tight() -> Config {
        Config::new(1e-9, 1e-9).expect("valid config")
    }

    #[test]
    fn smooth_integrand_needs_one_pass() {
        let calls = Cell::new(0);
        let f = |x: f64| {
            calls.set(calls.get() + 1);
            x.sin()
        };

        let estimate = integrate(&f, 0.0, PI, &tight()).expect("integrates");

        assert_abs_diff_eq!(estimate.value, 2.0, epsilon = 1e-12);
        assert_eq!(calls.get(), 15);
    }

    #[test]
    fn kink_is_resolved_by_splitting() {
        let f = |x: f64| x.abs();

        let single = gauss_kronrod::integrate(&f, -1.0, 0.7, &tight());
        assert!(matches!(single, Err(Error::ToleranceNotMet { .. })));

        let estimate = integrate(&f, -1.0, 0.7, &tight()).expect("integrates");
        assert_abs_diff_eq!(estimate.value, 0.5 + 0.245, epsilon = 1e-8);
        assert!(estimate.error <= 1e-9);
    }

    #[test]
    fn reversed_bounds_negate() {
        let estimate = integrate(&f64::exp, 1.0, 0.0, &tight()).expect("integrates");
        assert_relative_eq!(estimate.value, 1.0 - 1.0_f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn depth_limit_stops_at_the_kink() {
        let config = Config::new(1e-12, 1e-12)
            .expect("valid config")
            .with_max_depth(2);

        let result = integrate(&|x: f64| x.abs(), -1.0, 0.7, &config);

        let Err(Error::MaxDepth { depth, a, b }) = result else {
            panic!("expected MaxDepth, got {result:?}");
        };
        assert_eq!(depth, 2);
        assert!(a < 0.0 && 0.0 < b);
    }

    #[test]
    fn split_limit_reports_current_totals() {
        let config = Config::new(1e-12, 1e-12)
            .expect("valid config")
            .with_max_subdivisions(3);

        let result = integrate(&|x: f64| x.abs(), -1.0, 0.7, &config);

        let Err(Error::ToleranceNotMet { estimate }) = result else {
            panic!("expected ToleranceNotMet, got {result:?}");
        };
        assert_abs_diff_eq!(estimate.value, 0.745, epsilon = 1e-3);
        assert!(estimate.error > 1e-12);
    }

    #[test]
    fn pole_is_reported() {
        let result = integrate(&|x: f64| 1.0 / x, -1.0, 1.0, &tight());
        assert!(matches!(result, Err(Error::NonFiniteIntegrand { .. })));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let result = integrate(&f64::exp, 0.0, f64::NAN, &tight());
        assert!(matches!(result, Err(Error::NonFiniteBounds { .. })));
    }
}
