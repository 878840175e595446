use thiserror::Error;

/// Errors that can occur during bisection solving.
///
/// All variants are precondition violations raised before the first
/// refinement step. Running out of iterations is not an error; see
/// [`Status::IterationLimit`](super::Status::IterationLimit).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error(
        "function is not increasing over [{lower}, {upper}]: \
         f(lower) = {f_lower}, f(midpoint) = {f_midpoint}, f(upper) = {f_upper}"
    )]
    NotIncreasing {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_midpoint: f64,
        f_upper: f64,
    },
}
