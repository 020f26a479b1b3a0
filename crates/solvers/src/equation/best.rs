use super::{Solution, Status};

/// Tracks the best point encountered so far.
///
/// The best point is defined by minimum residual magnitude. A `NaN`
/// residual is always displaced by the next comparable one.
#[derive(Debug, Clone, Copy)]
pub(super) struct Best {
    x: f64,
    residual: f64,
}

impl Best {
    /// Starts tracking from an initial point.
    pub(super) fn new(x: f64, residual: f64) -> Self {
        Self { x, residual }
    }

    /// Updates the best point if the residual magnitude improves.
    pub(super) fn update(&mut self, x: f64, residual: f64) {
        if self.residual.is_nan() || residual.abs() < self.residual.abs() {
            self.x = x;
            self.residual = residual;
        }
    }

    /// Finalizes the solver using the best available point.
    pub(super) fn finish(self, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.x,
            residual: self.residual,
            iters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn update_keeps_best_residual() {
        let mut best = Best::new(1.0, 2.0);
        best.update(2.0, -1.5);
        best.update(3.0, 1.0);

        let solution = best.finish(Status::StoppedByObserver, 0);

        assert_relative_eq!(solution.x, 3.0);
        assert_relative_eq!(solution.residual, 1.0);
    }

    #[test]
    fn update_ignores_worse_residual() {
        let mut best = Best::new(1.0, -0.5);
        best.update(2.0, 2.0);
        best.update(4.0, f64::NAN);

        let solution = best.finish(Status::StoppedByObserver, 0);

        assert_relative_eq!(solution.x, 1.0);
        assert_relative_eq!(solution.residual, -0.5);
    }

    #[test]
    fn nan_start_is_replaced() {
        let mut best = Best::new(0.0, f64::NAN);
        best.update(1.0, 5.0);

        let solution = best.finish(Status::MaxIters, 7);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 7);
        assert_relative_eq!(solution.x, 1.0);
        assert_relative_eq!(solution.residual, 5.0);
    }
}
