use super::Method;

/// Control actions supported by the equation solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point found so far.
    StopEarly,
}

/// Iteration event emitted by the fixed-strategy solvers.
///
/// One event is emitted per iterate whose residual is tested, before the
/// convergence check, so observers see the converging point too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter, including any iterations spent on bracket search.
    pub iter: usize,

    /// The method producing the iterate.
    pub method: Method,

    /// The iterate.
    pub x: f64,

    /// Residual `f(x)`.
    pub residual: f64,

    /// Current bracket, for bracketing methods.
    pub bracket: Option<[f64; 2]>,
}
