use numeth_core::Function;

use super::config::share;

/// An interval `[left, right]` whose endpoint residuals have opposite signs
/// (or one of them is zero), so a continuous function has a root inside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    left: f64,
    right: f64,
    left_residual: f64,
    right_residual: f64,
}

impl Bracket {
    /// Creates a bracket from two evaluated points, ordering them by `x`.
    ///
    /// Returns `None` if the residuals do not straddle zero, if any value is
    /// non-finite, or if the points coincide.
    #[must_use]
    pub fn new(a: (f64, f64), b: (f64, f64)) -> Option<Self> {
        let ((left, left_residual), (right, right_residual)) =
            if a.0 <= b.0 { (a, b) } else { (b, a) };

        let finite = [left, right, left_residual, right_residual]
            .iter()
            .all(|v| v.is_finite());

        #[allow(clippy::float_cmp)]
        if !finite || left == right || left_residual * right_residual > 0.0 {
            return None;
        }

        Some(Self {
            left,
            right,
            left_residual,
            right_residual,
        })
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the left endpoint and its residual.
    #[must_use]
    pub fn left(&self) -> (f64, f64) {
        (self.left, self.left_residual)
    }

    /// Returns the right endpoint and its residual.
    #[must_use]
    pub fn right(&self) -> (f64, f64) {
        (self.right, self.right_residual)
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if `x` lies strictly between the endpoints.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Shrinks the bracket to a new interior point and its residual.
    ///
    /// The endpoint whose residual shares the sign of `residual` is replaced,
    /// which keeps the opposite-sign invariant. A non-finite `x` or
    /// `residual` carries no sign information: the bracket is left unchanged
    /// and `false` is returned.
    pub fn shrink(&mut self, x: f64, residual: f64) -> bool {
        if !x.is_finite() || !residual.is_finite() {
            return false;
        }

        if Sign::of(residual) == Sign::of(self.right_residual) {
            self.right = x;
            self.right_residual = residual;
        } else {
            self.left = x;
            self.left_residual = residual;
        }
        true
    }
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Outcome of [`find_bracket`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Search {
    /// The bracket found, or `None` if the budget ran out first.
    pub bracket: Option<Bracket>,

    /// Samples spent, never more than the budget.
    pub iters: usize,
}

/// Searches rightward from `x0` for a point where `f` changes sign.
///
/// The search samples `f(x0 + step)` in two phases:
///
/// 1. Linear: `step = h0, 2·h0, 3·h0, …` for a quarter of the budget.
/// 2. Geometric: `step = h0, 2·h0, 4·h0, …` for the next tenth of the budget.
///
/// The first sample with `f(x0)·f(x0 + step) ≤ 0` ends the search. The
/// linear phase finds nearby roots cheaply; the geometric phase escapes flat
/// regions without paying for a long linear walk. The geometric phase also
/// ends if the sample point overflows.
///
/// Evaluating `f(x0)` does not count against the budget.
pub fn find_bracket<F: Function>(f: &F, x0: f64, budget: usize, h0: f64) -> Search {
    let f0 = f.call(x0);
    let linear = budget / 4;
    let geometric = share(budget, 35) - linear;
    let sample = |step: f64| {
        let x = x0 + step;
        Bracket::new((x0, f0), (x, f.call(x)))
    };

    let mut iters = 0;

    let mut step = h0;
    for _ in 0..linear {
        iters += 1;
        if let Some(bracket) = sample(step) {
            return Search::found(bracket, iters);
        }
        step += h0;
    }

    let mut step = h0;
    for _ in 0..geometric {
        if !(x0 + step).is_finite() {
            break;
        }
        iters += 1;
        if let Some(bracket) = sample(step) {
            return Search::found(bracket, iters);
        }
        step *= 2.0;
    }

    Search {
        bracket: None,
        iters,
    }
}

impl Search {
    fn found(bracket: Bracket, iters: usize) -> Self {
        Self {
            bracket: Some(bracket),
            iters,
        }
    }
}
