//! Reusable observers for numeth solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the equation solvers in `numeth-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//! - [`trace`] — [`Trace`], an observer that records every event
//!
//! [`Observer`]: numeth_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod trace;
pub mod traits;

pub use trace::Trace;
