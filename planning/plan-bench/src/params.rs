//! Benchmark run parameters.
//!
//! [`BenchmarkParams`] bundles everything a benchmark run needs: the trial
//! budget, the per-axis perturbation magnitude, the shared obstacle
//! radius, the base obstacle centers, and the fixed start/goal
//! configurations. The base centers are owned here and never mutated by a
//! run — trials perturb independent copies.
//!
//! # Example
//!
//! ```
//! use plan_bench::BenchmarkParams;
//! use plan_types::JointConfig;
//! use nalgebra::Point3;
//!
//! let params = BenchmarkParams::new(
//!     vec![Point3::new(0.55, 0.0, 0.25)],
//!     JointConfig::from_slice(&[0.0, 0.0]),
//!     JointConfig::from_slice(&[1.0, 1.0]),
//! )
//! .with_trial_count(10)
//! .with_variation(0.05);
//!
//! assert!(params.validate().is_empty());
//! ```

use nalgebra::Point3;
use plan_types::JointConfig;

/// Parameters for a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkParams {
    /// Number of independent trials to attempt.
    trial_count: usize,
    /// Maximum per-axis perturbation magnitude.
    variation: f64,
    /// Shared sphere radius for all obstacles.
    radius: f64,
    /// Base obstacle centers; never mutated by a run.
    base_centers: Vec<Point3<f64>>,
    /// Fixed start configuration.
    start: JointConfig,
    /// Fixed goal configuration.
    goal: JointConfig,
}

impl BenchmarkParams {
    /// Creates parameters with the reference defaults: 100 trials,
    /// variation 0.01, radius 0.2.
    #[must_use]
    pub fn new(base_centers: Vec<Point3<f64>>, start: JointConfig, goal: JointConfig) -> Self {
        Self {
            trial_count: 100,
            variation: 0.01,
            radius: 0.2,
            base_centers,
            start,
            goal,
        }
    }

    /// Sets the number of trials.
    #[must_use]
    pub const fn with_trial_count(mut self, count: usize) -> Self {
        self.trial_count = count;
        self
    }

    /// Sets the maximum per-axis perturbation magnitude.
    #[must_use]
    pub const fn with_variation(mut self, variation: f64) -> Self {
        self.variation = variation;
        self
    }

    /// Sets the shared obstacle radius.
    #[must_use]
    pub const fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Returns the number of trials.
    #[must_use]
    pub const fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Returns the maximum per-axis perturbation magnitude.
    #[must_use]
    pub const fn variation(&self) -> f64 {
        self.variation
    }

    /// Returns the shared obstacle radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the base obstacle centers.
    #[must_use]
    pub fn base_centers(&self) -> &[Point3<f64>] {
        &self.base_centers
    }

    /// Returns the start configuration.
    #[must_use]
    pub const fn start(&self) -> &JointConfig {
        &self.start
    }

    /// Returns the goal configuration.
    #[must_use]
    pub const fn goal(&self) -> &JointConfig {
        &self.goal
    }

    /// Validates the parameters, returning a list of issues.
    ///
    /// An empty list means the parameters are usable. A zero trial count
    /// is valid (it produces an empty result set).
    ///
    /// # Example
    ///
    /// ```
    /// use plan_bench::BenchmarkParams;
    /// use plan_types::JointConfig;
    /// use nalgebra::Point3;
    ///
    /// let params = BenchmarkParams::new(
    ///     vec![Point3::origin()],
    ///     JointConfig::from_slice(&[0.0]),
    ///     JointConfig::from_slice(&[1.0]),
    /// )
    /// .with_radius(-1.0);
    ///
    /// assert_eq!(params.validate().len(), 1);
    /// ```
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.variation < 0.0 {
            issues.push("variation must be non-negative".to_string());
        }
        if self.radius <= 0.0 {
            issues.push("radius must be positive".to_string());
        }
        if self.base_centers.is_empty() {
            issues.push("base obstacle list must be non-empty".to_string());
        }
        if self.start.is_empty() || self.goal.is_empty() {
            issues.push("start and goal configurations must be non-empty".to_string());
        }
        if self.start.len() != self.goal.len() {
            issues.push(format!(
                "start has {} joints but goal has {}",
                self.start.len(),
                self.goal.len()
            ));
        }
        issues
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn valid_params() -> BenchmarkParams {
        BenchmarkParams::new(
            vec![Point3::new(0.55, 0.0, 0.25), Point3::new(0.0, 0.55, 0.25)],
            JointConfig::from_slice(&[0.0, 0.0]),
            JointConfig::from_slice(&[1.0, 1.0]),
        )
    }

    #[test]
    fn test_defaults_match_reference() {
        let params = valid_params();
        assert_eq!(params.trial_count(), 100);
        assert_eq!(params.variation(), 0.01);
        assert_eq!(params.radius(), 0.2);
    }

    #[test]
    fn test_builder() {
        let params = valid_params()
            .with_trial_count(7)
            .with_variation(0.0)
            .with_radius(0.3);
        assert_eq!(params.trial_count(), 7);
        assert_eq!(params.variation(), 0.0);
        assert_eq!(params.radius(), 0.3);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(valid_params().validate().is_empty());
    }

    #[test]
    fn test_validate_accepts_zero_trials() {
        assert!(valid_params().with_trial_count(0).validate().is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_variation() {
        let issues = valid_params().with_variation(-0.1).validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("variation"));
    }

    #[test]
    fn test_validate_rejects_non_positive_radius() {
        assert_eq!(valid_params().with_radius(0.0).validate().len(), 1);
        assert_eq!(valid_params().with_radius(-0.2).validate().len(), 1);
    }

    #[test]
    fn test_validate_rejects_empty_obstacles() {
        let params = BenchmarkParams::new(
            vec![],
            JointConfig::from_slice(&[0.0]),
            JointConfig::from_slice(&[1.0]),
        );
        assert!(params
            .validate()
            .iter()
            .any(|issue| issue.contains("obstacle")));
    }

    #[test]
    fn test_validate_rejects_mismatched_endpoints() {
        let params = BenchmarkParams::new(
            vec![Point3::origin()],
            JointConfig::from_slice(&[0.0, 0.0]),
            JointConfig::from_slice(&[1.0]),
        );
        assert!(params.validate().iter().any(|issue| issue.contains("joints")));
    }
}
