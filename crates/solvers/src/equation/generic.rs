//! The generic solver: adapts its iteration formula to the local behavior of `f`.
//!
//! # Algorithm
//!
//! The solver keeps a [`Greed`] level mapping to a formula:
//! `Lowest` → bisection, `Medium` → Newton, `High` → secant, `Highest` → Halley.
//! It starts at `Highest`, drops one level whenever a formula fails, and
//! rises one level after every successful step.
//!
//! **Open phase** (60% of the budget): formulas are applied directly at the
//! running iterate. A failed step retries at the same iterate one level
//! lower. Failing at `Medium` abandons the phase, since bisection cannot run
//! without a bracket.
//!
//! **Bracketed phase** (the rest of the budget): [`find_bracket`] searches
//! from `x0`; if it fails, so does the solve. Each iteration then halves the
//! bracket at its midpoint and, above `Lowest`, tries the current formula
//! from that midpoint (secant through the midpoint and the opposite
//! endpoint). A candidate that is non-finite, falls outside the bracket,
//! or has a non-finite residual is a failure; a good candidate shrinks the
//! bracket further. A midpoint with a non-finite residual leaves the bracket
//! unchanged and also counts as a failure. This phase only ends by
//! converging or running out of budget.
//!
//! # Observer Events
//!
//! Every tested residual is reported as [`Event::Stepped`]; greed changes,
//! the end of the open phase, and the bracket found are reported too.
//! Observers can return [`Action::StopEarly`] after any event.
//!
//! Note that this solver makes no promise about which root it finds.

mod event;
mod greed;


pub use event::Event;
pub use greed::{Greed, Phase};

use std::ops::ControlFlow;

use numeth_core::{Function, Memoized, Observer};

use crate::differentiate::Derivative;

use super::{
    Action, Bracket, Config, Error, Method, Solution, Status, best::Best, check_start,
    config::share, find_bracket, step,
};

/// Finds a root of `f` starting at `x0`, choosing formulas by greed level.
///
/// See the [module docs](self) for the algorithm and observer events.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, or if the open phase does not
/// converge and no sign change is found with the remaining budget.
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

    let mut dispatcher = Dispatcher {
        formulas: Formulas {
            f: &f,
            df: &df,
            d2f: &d2f,
        },
        config,
        observer,
        greed: Greed::Highest,
        iters: 0,
        best: Best::new(x0, f.call(x0)),
    };
    dispatcher.run(x0)
}

/// Finds a root of `f` with the generic solver, without observer support.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<F: Function>(f: F, x0: f64, config: &Config) -> Result<Solution, Error> {
    solve(f, x0, config, ())
}

/// The function and its derivative estimators, shared by every formula.
struct Formulas<'a, F, D, D2> {
    f: &'a F,
    df: &'a D,
    d2f: &'a D2,
}

impl<F: Function, D: Function, D2: Function> Formulas<'_, F, D, D2> {
    /// Applies the formula for `greed` at `x`; `other` seeds the secant.
    ///
    /// Bisection has no open form and always yields `NaN` here.
    fn step(&self, greed: Greed, x: f64, other: f64) -> f64 {
        match greed.method() {
            Method::Bisection => f64::NAN,
            Method::Newton => step::newton(self.f, self.df, x),
            Method::Secant => step::secant(self.f, x, other),
            Method::Halley => step::halley(self.f, self.df, self.d2f, x),
        }
    }
}

struct Dispatcher<'a, F, D, D2, Obs> {
    formulas: Formulas<'a, F, D, D2>,
    config: &'a Config,
    observer: Obs,
    greed: Greed,
    iters: usize,
    best: Best,
}

impl<F, D, D2, Obs> Dispatcher<'_, F, D, D2, Obs>
where
    F: Function,
    D: Function,
    D2: Function,
    Obs: Observer<Event, Action>,
{
    fn run(&mut self, x0: f64) -> Result<Solution, Error> {
        if let ControlFlow::Break(solution) = self.open_phase(x0) {
            return Ok(solution);
        }

        let bracket = match self.search(x0)? {
            ControlFlow::Break(solution) => return Ok(solution),
            ControlFlow::Continue(bracket) => bracket,
        };

        if let ControlFlow::Break(solution) = self.bracketed_phase(bracket) {
            return Ok(solution);
        }

        Ok(self.best.finish(Status::MaxIters, self.iters))
    }

    fn open_phase(&mut self, x0: f64) -> ControlFlow<Solution> {
        let open_budget = share(self.config.budget(), 60);
        let (mut x, mut prev) = (x0, x0 + self.config.bracket_step());

        while self.iters < open_budget {
            self.iters += 1;
            self.visit(Phase::Open, x)?;

            let next = self.formulas.step(self.greed, x, prev);
            if next.is_finite() {
                self.raise(Phase::Open)?;
                (prev, x) = (x, next);
            } else if !self.lower(Phase::Open)? {
                let iter = self.iters;
                self.emit(&Event::OpenPhaseAbandoned { iter, x })?;
                break;
            }
        }

        ControlFlow::Continue(())
    }

    fn search(&mut self, x0: f64) -> Result<ControlFlow<Solution, Bracket>, Error> {
        let remaining = self.config.budget() - self.iters;
        let search = find_bracket(self.formulas.f, x0, remaining, self.config.bracket_step());
        self.iters += search.iters;

        let bracket = search.bracket.ok_or(Error::NoBracket {
            x0,
            iters: self.iters,
        })?;

        let [left, right] = bracket.as_array();
        let iter = self.iters;
        if let ControlFlow::Break(solution) = self.emit(&Event::Bracketed { iter, left, right }) {
            return Ok(ControlFlow::Break(solution));
        }
        Ok(ControlFlow::Continue(bracket))
    }

    fn bracketed_phase(&mut self, mut bracket: Bracket) -> ControlFlow<Solution> {
        let epsilon = self.config.epsilon();
        for (x, residual) in [bracket.left(), bracket.right()] {
            if residual.abs() < epsilon {
                return ControlFlow::Break(Solution::converged(x, residual, self.iters));
            }
        }

        while self.iters < self.config.budget() {
            self.iters += 1;

            let mid = bracket.midpoint();
            let residual = self.visit(Phase::Bracketed, mid)?;
            if !bracket.shrink(mid, residual) {
                self.lower(Phase::Bracketed)?;
                continue;
            }

            if self.greed == Greed::Lowest {
                self.raise(Phase::Bracketed)?;
                continue;
            }

            let other = opposite(&bracket, mid);
            let candidate = self.formulas.step(self.greed, mid, other);
            if candidate.is_finite() && bracket.contains(candidate) {
                let residual = self.visit(Phase::Bracketed, candidate)?;
                if bracket.shrink(candidate, residual) {
                    self.raise(Phase::Bracketed)?;
                } else {
                    self.lower(Phase::Bracketed)?;
                }
            } else {
                self.lower(Phase::Bracketed)?;
            }
        }

        ControlFlow::Continue(())
    }

    /// Tests the residual at `x`, ending the solve if it converged.
    fn visit(&mut self, phase: Phase, x: f64) -> ControlFlow<Solution, f64> {
        let residual = self.formulas.f.call(x);
        self.best.update(x, residual);

        self.emit(&Event::Stepped {
            iter: self.iters,
            phase,
            greed: self.greed,
            x,
            residual,
        })?;

        if residual.abs() < self.config.epsilon() {
            return ControlFlow::Break(Solution::converged(x, residual, self.iters));
        }
        ControlFlow::Continue(residual)
    }

    fn raise(&mut self, phase: Phase) -> ControlFlow<Solution> {
        let from = self.greed;
        let to = from.raised();
        if to == from {
            return ControlFlow::Continue(());
        }

        self.greed = to;
        let iter = self.iters;
        self.emit(&Event::Upgraded {
            iter,
            phase,
            from,
            to,
        })
    }

    /// Drops greed one level; continues with `false` if already at the phase floor.
    fn lower(&mut self, phase: Phase) -> ControlFlow<Solution, bool> {
        let from = self.greed;
        let Some(to) = from.lowered(phase) else {
            return ControlFlow::Continue(false);
        };

        self.greed = to;
        let iter = self.iters;
        self.emit(&Event::Downgraded {
            iter,
            phase,
            from,
            to,
        })?;
        ControlFlow::Continue(true)
    }

    fn emit(&mut self, event: &Event) -> ControlFlow<Solution> {
        match self.observer.observe(event) {
            Some(Action::StopEarly) => {
                ControlFlow::Break(self.best.finish(Status::StoppedByObserver, self.iters))
            }
            None => ControlFlow::Continue(()),
        }
    }
}

/// Returns the endpoint of `bracket` that is not `x`.
#[allow(clippy::float_cmp)]
fn opposite(bracket: &Bracket, x: f64) -> f64 {
    let [left, right] = bracket.as_array();
    if left == x { right } else { left }
}
