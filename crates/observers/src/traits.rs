//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that may carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use numeth_core::Observer;
//! use numeth_observers::traits::{CanStopEarly, HasResidual};
//! use numeth_solvers::equation::{Config, Status, generic, newton};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//!
//! let config = Config::new(100, 1e-12).unwrap();
//!
//! // The same observer steers two solvers with different event types.
//! let observer = GoodEnough { tolerance: 1e-3 };
//! let solution = newton::solve(f64::sin, 3.0, &config, observer).unwrap();
//! assert_eq!(solution.status, Status::StoppedByObserver);
//!
//! let observer = GoodEnough { tolerance: 1e-3 };
//! let solution = generic::solve(f64::sin, 3.0, &config, observer).unwrap();
//! assert!(solution.residual.abs() < 1e-3);
//! ```

use numeth_solvers::equation::{self, generic};

/// An event that may carry a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event carries no residual.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for equation::Event {
    fn residual(&self) -> f64 {
        self.residual
    }
}

impl HasResidual for generic::Event {
    fn residual(&self) -> f64 {
        generic::Event::residual(self)
    }
}

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
