//! Numerical solvers for the calibra toolkit.
//!
//! Currently a single solver: [`bisection`], which inverts a monotonically
//! increasing scalar function against a target value. It backs inversion
//! problems such as implied-volatility recovery, where a pricing function
//! must be solved for the input that reproduces an observed output.

pub mod bisection;
