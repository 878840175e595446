//! Shared seams for the calibra solvers.
//!
//! This crate defines the traits solvers are written against:
//!
//! - [`function::Function`] — a caller-supplied scalar function.
//! - [`observe::Observer`] — a sink for solver events.

pub mod function;
pub mod observe;
