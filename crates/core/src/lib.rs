//! Core traits and types for the numeth numerical primitives.
//!
//! This crate defines the shared abstractions that the differentiation,
//! quadrature, and root-finding solvers build on:
//!
//! - [`Function`] — a deterministic scalar mapping `f64 -> f64`
//! - [`Memoized`] — a [`Function`] wrapper that evaluates each distinct input
//!   at most once
//! - [`Observer`] — receives solver events and optionally returns control actions

mod function;
mod memo;
mod observer;

pub use function::Function;
pub use memo::Memoized;
pub use observer::Observer;
