//! Generator configuration.

/// Configuration for [`random_matrix`](super::random_matrix).
///
/// # Examples
///
/// ```
/// use u_tsp::generate::MatrixConfig;
///
/// let config = MatrixConfig::new(6)
///     .with_cost_range(1.0, 50.0)
///     .with_symmetric(false)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Number of cities. At least 2.
    pub size: usize,

    /// Lowest off-diagonal cost (inclusive).
    pub min_cost: f64,

    /// Highest off-diagonal cost (inclusive).
    pub max_cost: f64,

    /// Mirror the upper triangle so that `cost(i, j) == cost(j, i)`.
    pub symmetric: bool,

    /// Draw whole-number costs only.
    pub integral: bool,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            size: 5,
            min_cost: 1.0,
            max_cost: 100.0,
            symmetric: true,
            integral: true,
            seed: None,
        }
    }
}

impl MatrixConfig {
    /// Default configuration for `size` cities.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_cost_range(mut self, min: f64, max: f64) -> Self {
        self.min_cost = min;
        self.max_cost = max;
        self
    }

    pub fn with_symmetric(mut self, symmetric: bool) -> Self {
        self.symmetric = symmetric;
        self
    }

    pub fn with_integral(mut self, integral: bool) -> Self {
        self.integral = integral;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.size < 2 {
            return Err(format!("size must be at least 2, got {}", self.size));
        }
        if !self.min_cost.is_finite() || !self.max_cost.is_finite() {
            return Err("cost range must be finite".into());
        }
        if self.min_cost < 0.0 {
            return Err(format!("min_cost must be non-negative, got {}", self.min_cost));
        }
        if self.min_cost > self.max_cost {
            return Err("min_cost must not exceed max_cost".into());
        }
        if self.integral && self.min_cost.ceil() > self.max_cost.floor() {
            return Err(format!(
                "no whole number in [{}, {}]",
                self.min_cost, self.max_cost
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatrixConfig::default();
        assert_eq!(config.size, 5);
        assert!(config.symmetric);
        assert!(config.integral);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_small_size() {
        assert!(MatrixConfig::new(1).validate().is_err());
    }

    #[test]
    fn test_validate_negative_min() {
        let config = MatrixConfig::new(3).with_cost_range(-1.0, 5.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_range() {
        let config = MatrixConfig::new(3).with_cost_range(5.0, 1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_non_finite() {
        let config = MatrixConfig::new(3).with_cost_range(0.0, f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_no_whole_number() {
        let config = MatrixConfig::new(3).with_cost_range(1.2, 1.8);
        assert!(config.validate().is_err());
        assert!(config.with_integral(false).validate().is_ok());
    }
}
