/// Event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A refinement step: the bracket was narrowed and the new midpoint
    /// evaluated.
    Midpoint {
        /// Iteration counter (1-based within the bisection loop).
        iteration: usize,
        /// Current search bracket.
        bracket: [f64; 2],
        /// The midpoint that was evaluated.
        x: f64,
        /// Function value at the midpoint.
        value: f64,
    },
    /// The iteration cap was reached before the tolerance was met.
    ///
    /// Carries the same fields as the emitted warning so a diagnostic sink
    /// can capture it without depending on process-wide logging state.
    IterationLimit {
        max_iteration: usize,
        target: f64,
        value: f64,
        tolerance: f64,
    },
}
