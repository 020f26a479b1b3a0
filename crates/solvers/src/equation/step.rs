//! One-step update rules.
//!
//! Each open-method formula returns the next iterate, or `NaN` when its
//! denominator vanishes exactly. Callers treat any non-finite result as a
//! failed step.

use std::fmt;

use numeth_core::Function;

/// The iteration formulas, from most robust to most aggressive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    Newton,
    Secant,
    Halley,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Bisection => "bisection",
            Method::Newton => "newton",
            Method::Secant => "secant",
            Method::Halley => "halley",
        };
        f.write_str(name)
    }
}

/// Halves the interval `[xi, xi_1]` and returns the half that keeps a sign change.
///
/// Returns `(xi, mid)` if `f(mid)·f(xi) ≤ 0`, otherwise `(mid, xi_1)`.
pub fn bisect<F: Function>(f: &F, xi: f64, xi_1: f64) -> (f64, f64) {
    let mid = 0.5 * (xi + xi_1);
    if f.call(mid) * f.call(xi) <= 0.0 {
        (xi, mid)
    } else {
        (mid, xi_1)
    }
}

/// Newton step: `x - f(x) / f'(x)`.
pub fn newton<F: Function, D: Function>(f: &F, df: &D, x: f64) -> f64 {
    let slope = df.call(x);
    if slope == 0.0 {
        return f64::NAN;
    }
    x - f.call(x) / slope
}

/// Secant step through `(xi, f(xi))` and `(xi_1, f(xi_1))`.
pub fn secant<F: Function>(f: &F, xi: f64, xi_1: f64) -> f64 {
    let (fi, fi_1) = (f.call(xi), f.call(xi_1));
    #[allow(clippy::float_cmp)]
    if fi == fi_1 {
        return f64::NAN;
    }
    xi - fi * (xi - xi_1) / (fi - fi_1)
}

/// Halley step: `x - 2·f·f' / (2·f'² - f·f'')`.
pub fn halley<F: Function, D: Function, D2: Function>(f: &F, df: &D, d2f: &D2, x: f64) -> f64 {
    let (fx, d1, d2) = (f.call(x), df.call(x), d2f.call(x));
    let denominator = 2.0 * d1 * d1 - fx * d2;
    if denominator == 0.0 {
        return f64::NAN;
    }
    x - 2.0 * fx * d1 / denominator
}
