/// A scalar function of one real variable.
///
/// Solvers treat implementors as opaque: they choose the evaluation points
/// and assume nothing beyond what their own contract states (for example,
/// the bisection solver requires monotone increase over its search
/// interval, and spot-checks it).
pub trait Function {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for plain closures.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
