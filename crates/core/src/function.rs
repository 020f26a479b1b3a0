/// A deterministic scalar function of one real variable.
///
/// Solvers evaluate a `Function` many times per call and may cache the
/// results, so implementations must return the same output for the same
/// input and must not rely on side effects being repeated.
///
/// Closures and function items taking and returning `f64` implement this
/// trait automatically.
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures and function items.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
