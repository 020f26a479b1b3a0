use thiserror::Error;

use super::{ConfigError, Method};

/// Errors that can occur while solving an equation.
///
/// Running out of iterations is not an error: the solver returns a
/// [`Solution`](super::Solution) with [`Status::MaxIters`](super::Status::MaxIters).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("starting point is not finite: x0 = {x0}")]
    NonFiniteStart { x0: f64 },

    #[error("no sign change found from x0 = {x0} within {iters} iterations")]
    NoBracket { x0: f64, iters: usize },

    #[error("{method} step degenerated at x = {x} after {iters} iterations")]
    DegenerateStep { method: Method, x: f64, iters: usize },
}
