use numeth_core::{Function, Observer};

use super::{Action, Config, Error, Event, Method, Solution, Status, best::Best};

/// Drives an open (non-bracketing) iteration to convergence or failure.
///
/// `step` maps the current iterate and the previous one to the next iterate.
/// The residual is tested at each iterate before stepping, and every tested
/// iterate consumes one unit of the budget. A non-finite step ends the solve
/// with [`Error::DegenerateStep`].
pub(super) fn iterate<F, Obs, S>(
    f: &F,
    x0: f64,
    seed: f64,
    method: Method,
    config: &Config,
    mut observer: Obs,
    step: S,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
    S: Fn(f64, f64) -> f64,
{
    let budget = config.budget();
    let (mut x, mut prev) = (x0, seed);
    let mut best = Best::new(x0, f.call(x0));

    for iter in 1..=budget {
        let residual = f.call(x);
        best.update(x, residual);

        let event = Event {
            iter,
            method,
            x,
            residual,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(best.finish(Status::StoppedByObserver, iter));
        }

        if residual.abs() < config.epsilon() {
            return Ok(Solution::converged(x, residual, iter));
        }

        let next = step(x, prev);
        if !next.is_finite() {
            return Err(Error::DegenerateStep {
                method,
                x,
                iters: iter,
            });
        }
        (prev, x) = (x, next);
    }

    Ok(best.finish(Status::MaxIters, budget))
}
