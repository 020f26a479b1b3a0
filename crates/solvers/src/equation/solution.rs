/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// A point with `|f(x)| < epsilon` was found.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an equation solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The root when converged, otherwise the best point seen.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(super) fn converged(x: f64, residual: f64, iters: usize) -> Self {
        Self {
            status: Status::Converged,
            x,
            residual,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the root, or `NaN` if the solver did not converge.
    ///
    /// A best-effort point that misses the tolerance is never returned here;
    /// read [`Solution::x`] directly to inspect it.
    #[must_use]
    pub fn root(&self) -> f64 {
        if self.is_converged() { self.x } else { f64::NAN }
    }
}
