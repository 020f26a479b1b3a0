use std::{cell::RefCell, collections::HashMap};

use crate::Function;

/// A [`Function`] wrapper that caches every evaluation by exact input.
///
/// The first call at a given `x` evaluates the wrapped function and stores
/// the result; later calls with the identical `x` return the stored value.
/// Inputs are keyed by their IEEE-754 bit pattern, so numerically close but
/// distinct inputs never share an entry (`0.0` and `-0.0` are distinct too).
///
/// The cache only grows and is never shared: construct a fresh `Memoized`
/// for each top-level solve.
#[derive(Debug)]
pub struct Memoized<F> {
    f: F,
    cache: RefCell<HashMap<u64, f64>>,
}

impl<F: Function> Memoized<F> {
    /// Wraps `f` with an empty cache.
    pub fn new(f: F) -> Self {
        Self {
            f,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the number of distinct inputs evaluated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns true if nothing has been evaluated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Returns the cached value at `x` without evaluating.
    #[must_use]
    pub fn cached(&self, x: f64) -> Option<f64> {
        self.cache.borrow().get(&x.to_bits()).copied()
    }

    /// Consumes the wrapper and returns the inner function.
    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F: Function> Function for Memoized<F> {
    fn call(&self, x: f64) -> f64 {
        let key = x.to_bits();
        if let Some(&value) = self.cache.borrow().get(&key) {
            return value;
        }

        // The borrow is released before evaluating so nested wrappers that
        // reach back into this cache cannot trip the `RefCell`.
        let value = self.f.call(x);
        self.cache.borrow_mut().insert(key, value);
        value
    }
}
