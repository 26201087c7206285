//! Trial results and result collections.
//!
//! A [`TrialResult`] is the flat record produced by one successful
//! benchmark trial: planning and simplification timings, initial and
//! simplified path costs, and the planner iteration count. A [`ResultSet`]
//! is the ordered, append-only collection of those records — one entry per
//! feasible trial, so its length never exceeds the configured trial count.
//!
//! # Example
//!
//! ```
//! use plan_types::{ResultSet, TrialResult};
//! use std::time::Duration;
//!
//! let result = TrialResult::new()
//!     .with_planning_time(Duration::from_micros(10_000))
//!     .with_planning_iterations(5)
//!     .with_initial_path_cost(3.2)
//!     .with_simplified_path_cost(1.0);
//!
//! let mut results = ResultSet::new();
//! results.push(result);
//! assert_eq!(results.len(), 1);
//! ```

use std::time::Duration;

/// The outcome of one successful benchmark trial.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Time spent planning.
    planning_time: Duration,
    /// Time spent simplifying the planned path.
    simplification_time: Duration,
    /// Cost of the path as returned by the planner.
    initial_path_cost: f64,
    /// Cost of the path after simplification.
    simplified_path_cost: f64,
    /// Planner iterations consumed.
    planning_iterations: usize,
}

impl TrialResult {
    /// Creates an empty trial result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the planning time.
    #[must_use]
    pub const fn with_planning_time(mut self, elapsed: Duration) -> Self {
        self.planning_time = elapsed;
        self
    }

    /// Sets the simplification time.
    #[must_use]
    pub const fn with_simplification_time(mut self, elapsed: Duration) -> Self {
        self.simplification_time = elapsed;
        self
    }

    /// Sets the initial path cost.
    #[must_use]
    pub const fn with_initial_path_cost(mut self, cost: f64) -> Self {
        self.initial_path_cost = cost;
        self
    }

    /// Sets the simplified path cost.
    #[must_use]
    pub const fn with_simplified_path_cost(mut self, cost: f64) -> Self {
        self.simplified_path_cost = cost;
        self
    }

    /// Sets the planner iteration count.
    #[must_use]
    pub const fn with_planning_iterations(mut self, iterations: usize) -> Self {
        self.planning_iterations = iterations;
        self
    }

    /// Returns the time spent planning.
    #[must_use]
    pub const fn planning_time(&self) -> Duration {
        self.planning_time
    }

    /// Returns the time spent simplifying.
    #[must_use]
    pub const fn simplification_time(&self) -> Duration {
        self.simplification_time
    }

    /// Returns the cost of the path as returned by the planner.
    #[must_use]
    pub const fn initial_path_cost(&self) -> f64 {
        self.initial_path_cost
    }

    /// Returns the cost of the path after simplification.
    #[must_use]
    pub const fn simplified_path_cost(&self) -> f64 {
        self.simplified_path_cost
    }

    /// Returns the planner iterations consumed.
    #[must_use]
    pub const fn planning_iterations(&self) -> usize {
        self.planning_iterations
    }
}

/// An ordered, append-only collection of trial results.
///
/// Failed (infeasible) trials contribute no entry, so the collection's
/// length is at most the configured trial count.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResultSet {
    /// Results in trial order.
    results: Vec<TrialResult>,
}

impl ResultSet {
    /// Creates an empty result set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            results: Vec::new(),
        }
    }

    /// Appends a trial result.
    pub fn push(&mut self, result: TrialResult) {
        self.results.push(result);
    }

    /// Returns the number of recorded trials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns `true` if no trials were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns the recorded results in trial order.
    #[must_use]
    pub fn results(&self) -> &[TrialResult] {
        &self.results
    }

    /// Returns the result at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&TrialResult> {
        self.results.get(index)
    }

    /// Returns an iterator over the recorded results.
    pub fn iter(&self) -> std::slice::Iter<'_, TrialResult> {
        self.results.iter()
    }
}

impl FromIterator<TrialResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = TrialResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a TrialResult;
    type IntoIter = std::slice::Iter<'a, TrialResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_result_builder() {
        let result = TrialResult::new()
            .with_planning_time(Duration::from_micros(150))
            .with_simplification_time(Duration::from_micros(30))
            .with_initial_path_cost(4.5)
            .with_simplified_path_cost(3.1)
            .with_planning_iterations(12);

        assert_eq!(result.planning_time(), Duration::from_micros(150));
        assert_eq!(result.simplification_time(), Duration::from_micros(30));
        assert_eq!(result.initial_path_cost(), 4.5);
        assert_eq!(result.simplified_path_cost(), 3.1);
        assert_eq!(result.planning_iterations(), 12);
    }

    #[test]
    fn test_trial_result_default_is_zeroed() {
        let result = TrialResult::default();
        assert_eq!(result.planning_time(), Duration::ZERO);
        assert_eq!(result.planning_iterations(), 0);
        assert_eq!(result.initial_path_cost(), 0.0);
    }

    #[test]
    fn test_result_set_push_preserves_order() {
        let mut results = ResultSet::new();
        assert!(results.is_empty());

        results.push(TrialResult::new().with_planning_iterations(1));
        results.push(TrialResult::new().with_planning_iterations(2));

        assert_eq!(results.len(), 2);
        assert_eq!(results.get(0).unwrap().planning_iterations(), 1);
        assert_eq!(results.get(1).unwrap().planning_iterations(), 2);
        assert!(results.get(2).is_none());
    }

    #[test]
    fn test_result_set_from_iterator() {
        let results: ResultSet = (0..3)
            .map(|i| TrialResult::new().with_planning_iterations(i))
            .collect();

        assert_eq!(results.len(), 3);
        let iterations: Vec<usize> = results.iter().map(TrialResult::planning_iterations).collect();
        assert_eq!(iterations, vec![0, 1, 2]);
    }

    #[test]
    fn test_result_set_equality_for_determinism_checks() {
        let make = || -> ResultSet {
            (0..2)
                .map(|i| {
                    TrialResult::new()
                        .with_planning_time(Duration::from_micros(10))
                        .with_planning_iterations(i)
                })
                .collect()
        };
        assert_eq!(make(), make());
    }
}
