//! Error types for planning operations.
//!
//! This module defines the [`PlanningError`] enum shared by the planning
//! collaborators and the orchestration layer. Collaborator failures are
//! never recovered from by the harness — they propagate to the driver.

/// Errors that can occur during planning, simplification, or playback.
///
/// # Example
///
/// ```
/// use plan_types::PlanningError;
///
/// let error = PlanningError::NoPathFound { iterations: 1000 };
/// assert!(error.to_string().contains("no path found"));
/// assert!(error.is_no_path_found());
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PlanningError {
    /// The planner exhausted its budget without connecting the endpoints.
    #[error("no path found after {iterations} iterations")]
    NoPathFound {
        /// Iterations consumed before giving up.
        iterations: usize,
    },

    /// A configuration has the wrong number of joints for this operation.
    ///
    /// Typically a compact configuration handed to a flattened planner
    /// variant, or a flattening width smaller than the configuration.
    #[error("configuration has {actual} joints, expected {expected}")]
    DimensionMismatch {
        /// The joint count the operation expected.
        expected: usize,
        /// The joint count it received.
        actual: usize,
    },

    /// A settings value is outside its valid range.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Trajectory playback failed.
    #[error("visualization failed: {0}")]
    Visualization(String),
}

impl PlanningError {
    /// Creates an invalid-settings error with the given message.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::PlanningError;
    ///
    /// let error = PlanningError::invalid_settings("max_samples must be positive");
    /// assert!(error.to_string().contains("max_samples"));
    /// ```
    #[must_use]
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings(message.into())
    }

    /// Creates a visualization error with the given message.
    #[must_use]
    pub fn visualization(message: impl Into<String>) -> Self {
        Self::Visualization(message.into())
    }

    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }

    /// Returns `true` if this is a dimension mismatch.
    #[must_use]
    pub const fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_found_display() {
        let error = PlanningError::NoPathFound { iterations: 500 };
        let msg = error.to_string();
        assert!(msg.contains("no path found"));
        assert!(msg.contains("500"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let error = PlanningError::DimensionMismatch {
            expected: 14,
            actual: 7,
        };
        let msg = error.to_string();
        assert!(msg.contains("14"));
        assert!(msg.contains("7"));
    }

    #[test]
    fn test_invalid_settings_helper() {
        let error = PlanningError::invalid_settings("radius must be positive");
        assert!(matches!(error, PlanningError::InvalidSettings(msg) if msg.contains("radius")));
    }

    #[test]
    fn test_visualization_helper() {
        let error = PlanningError::visualization("no display");
        assert!(error.to_string().contains("visualization failed"));
    }

    #[test]
    fn test_predicates() {
        assert!(PlanningError::NoPathFound { iterations: 1 }.is_no_path_found());
        assert!(!PlanningError::NoPathFound { iterations: 1 }.is_dimension_mismatch());
        assert!(PlanningError::DimensionMismatch {
            expected: 2,
            actual: 1
        }
        .is_dimension_mismatch());
    }
}
