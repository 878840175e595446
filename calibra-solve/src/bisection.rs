mod config;
mod error;
mod event;
mod solution;

pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use calibra_core::{function::Function, observe::Observer};
use tracing::warn;

/// Inverts a monotonically increasing function against a target value.
///
/// Classic bisection: the search interval is halved each step based on
/// whether the midpoint value falls below or above `target`, until
/// `|f(x) - target|` drops under the configured tolerance or the iteration
/// cap is reached. The cap is not an error; the solver returns its current
/// midpoint either way and the status says which terminal state fired.
///
/// Monotonicity is the caller's responsibility. A single spot-check at the
/// initial midpoint (`f(upper) > f(mid) > f(lower)`) guards against a
/// misconfigured function but does not prove monotonicity over the whole
/// interval.
///
/// Observers see each refinement step and the iteration-limit diagnostic.
///
/// # Errors
///
/// Returns an error if the config is invalid or the monotonicity spot-check
/// fails.
pub fn solve<F, Obs>(
    f: &F,
    target: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut lower = config.lower_bound;
    let mut upper = config.upper_bound;

    let mut midpoint = 0.5 * (lower + upper);
    let mut y = f.eval(midpoint);

    let f_lower = f.eval(lower);
    let f_upper = f.eval(upper);
    if !(f_lower < y && y < f_upper) {
        return Err(Error::NotIncreasing {
            lower,
            upper,
            f_lower,
            f_midpoint: y,
            f_upper,
        });
    }

    let mut iterations = 0;
    loop {
        if iterations >= config.max_iteration {
            warn!(
                "max number of iterations ({}) reached: target={}, current={}, tolerance={}",
                config.max_iteration, target, y, config.tolerance
            );
            observer.observe(&Event::IterationLimit {
                max_iteration: config.max_iteration,
                target,
                value: y,
                tolerance: config.tolerance,
            });
            return Ok(Solution {
                status: Status::IterationLimit,
                x: midpoint,
                value: y,
                iterations,
            });
        }

        // An exact hit converges even at zero tolerance.
        #[allow(clippy::float_cmp)]
        if (y - target).abs() < config.tolerance || y == target {
            return Ok(Solution {
                status: Status::Converged,
                x: midpoint,
                value: y,
                iterations,
            });
        }

        if y < target {
            lower = midpoint;
        } else if y > target {
            upper = midpoint;
        }

        midpoint = 0.5 * (lower + upper);
        y = f.eval(midpoint);
        iterations += 1;

        observer.observe(&Event::Midpoint {
            iteration: iterations,
            bracket: [lower, upper],
            x: midpoint,
            value: y,
        });
    }
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid or the monotonicity spot-check
/// fails.
pub fn solve_unobserved<F>(f: &F, target: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function,
{
    solve(f, target, config, ())
}
