/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    ///
    /// The solver still reports its current midpoint; callers who need to
    /// distinguish this from convergence inspect the status.
    IterationLimit,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Best estimate of the root.
    pub x: f64,
    /// Function value at the reported estimate.
    pub value: f64,
    /// Iteration count when the solver finished.
    pub iterations: usize,
}
