/// A numerical result paired with an estimate of its absolute error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// The computed value.
    pub value: f64,

    /// Estimated absolute error of `value`.
    pub error: f64,
}

impl Estimate {
    /// Creates a new estimate.
    #[must_use]
    pub fn new(value: f64, error: f64) -> Self {
        Self { value, error }
    }
}

impl From<Estimate> for (f64, f64) {
    fn from(estimate: Estimate) -> Self {
        (estimate.value, estimate.error)
    }
}
