//! An observer that records solver events.

use crate::traits::HasResidual;

/// Records a copy of every observed event.
///
/// [`Trace::record`] lends the trace to a solver as an observer that never
/// intervenes, so the events stay available once the solve returns.
///
/// ```rust
/// use numeth_observers::Trace;
/// use numeth_solvers::equation::{Config, Event, newton};
///
/// let mut trace = Trace::<Event>::new();
/// let config = Config::new(100, 1e-9).unwrap();
/// newton::solve(f64::cos, 1.0, &config, trace.record()).unwrap();
///
/// assert!(!trace.is_empty());
/// assert!(trace.residuals().last().unwrap().abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<E> {
    events: Vec<E>,
}

impl<E> Default for Trace<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Trace<E> {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in order.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Consumes the trace, returning the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone> Trace<E> {
    /// Returns an observer that appends each event to this trace.
    pub fn record<A>(&mut self) -> impl FnMut(&E) -> Option<A> + '_ {
        move |event: &E| {
            self.events.push(event.clone());
            None
        }
    }
}

impl<E: HasResidual> Trace<E> {
    /// Returns the residuals of the recorded events that carry one.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.events
            .iter()
            .map(HasResidual::residual)
            .filter(|residual| !residual.is_nan())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;
    use numeth_solvers::equation::{self, Config, bisection, generic};

    fn config() -> Config {
        Config::new(1000, 1e-6).expect("valid config")
    }

    #[test]
    fn records_bisection_midpoints() {
        let mut trace = Trace::<equation::Event>::new();
        let solution = bisection::solve(f64::sin, 3.0 * PI / 4.0, &config(), trace.record())
            .expect("solves");

        assert_eq!(trace.len(), solution.iters - trace.events()[0].iter + 1);
        assert!(trace.events().iter().all(|event| event.bracket.is_some()));
        assert_relative_eq!(trace.events().last().unwrap().x, solution.x);
    }

    #[test]
    fn generic_residuals_skip_transitions() {
        let mut trace = Trace::<generic::Event>::new();
        let solution = generic::solve(f64::cos, 0.0, &config(), trace.record()).expect("solves");

        let stepped = trace
            .events()
            .iter()
            .filter(|event| matches!(event, generic::Event::Stepped { .. }))
            .count();

        assert!(solution.is_converged());
        assert!(trace.len() > stepped);
        assert_eq!(trace.residuals().len(), stepped);
    }

    #[test]
    fn into_events_returns_everything() {
        let mut trace = Trace::<equation::Event>::new();
        let _ = equation::newton::solve(f64::sin, 3.0, &config(), trace.record());

        let count = trace.len();
        assert_eq!(trace.into_events().len(), count);
    }
}
