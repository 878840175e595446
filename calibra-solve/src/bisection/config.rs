/// Configuration for the bisection solver.
///
/// Defaults match the toolkit's implied-volatility inversion use: a search
/// interval of `[1e-8, 10]`, a tolerance of `1e-8`, and 30 iterations
/// (about the minimum tolerance 30 halvings of that span can resolve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub tolerance: f64,
    pub max_iteration: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lower_bound: 1e-8,
            upper_bound: 10.0,
            tolerance: 1e-8,
            max_iteration: 30,
        }
    }
}

impl Config {
    /// Validates the bounds, tolerance, and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns an error if a bound is non-finite, the bounds are inverted
    /// or equal, the tolerance is negative or non-finite, or the iteration
    /// cap lies outside the open interval (2, 100).
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.lower_bound.is_finite() || !self.upper_bound.is_finite() {
            return Err("bounds must be finite");
        }
        if self.upper_bound <= self.lower_bound {
            return Err("upper_bound must be greater than lower_bound");
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err("tolerance must be finite and non-negative");
        }
        if self.max_iteration <= 2 || self.max_iteration >= 100 {
            return Err("max_iteration must lie strictly between 2 and 100");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_documented_values() {
        let config = Config::default();
        assert_eq!(config.lower_bound, 1e-8);
        assert_eq!(config.upper_bound, 10.0);
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.max_iteration, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_inverted_or_equal_bounds() {
        let config = Config {
            lower_bound: 5.0,
            upper_bound: 5.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            lower_bound: 10.0,
            upper_bound: 1.0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let config = Config {
            upper_bound: f64::INFINITY,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            lower_bound: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_negative_tolerance() {
        let config = Config {
            tolerance: -1e-8,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn accepts_zero_tolerance() {
        let config = Config {
            tolerance: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn iteration_cap_bounds_are_exclusive() {
        let at = |max_iteration| Config {
            max_iteration,
            ..Config::default()
        };
        assert!(at(2).validate().is_err());
        assert!(at(3).validate().is_ok());
        assert!(at(99).validate().is_ok());
        assert!(at(100).validate().is_err());
    }
}
