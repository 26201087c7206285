//! Error types for benchmark orchestration.

use plan_types::PlanningError;

/// Errors that can occur while orchestrating a benchmark run.
///
/// Collaborator failures pass through unchanged; the orchestrator itself
/// only rejects malformed parameters.
///
/// # Example
///
/// ```
/// use plan_bench::BenchError;
///
/// let error = BenchError::invalid_params("radius must be positive");
/// assert!(error.to_string().contains("radius"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BenchError {
    /// The benchmark parameters failed validation.
    #[error("invalid benchmark parameters: {0}")]
    InvalidParams(String),

    /// A planning collaborator failed; propagated without recovery.
    #[error(transparent)]
    Planning(#[from] PlanningError),
}

impl BenchError {
    /// Creates an invalid-parameters error with the given message.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }

    /// Returns `true` if this is a parameter-validation failure.
    #[must_use]
    pub const fn is_invalid_params(&self) -> bool {
        matches!(self, Self::InvalidParams(_))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_params_display() {
        let error = BenchError::invalid_params("trial budget exhausted");
        assert!(error.to_string().contains("invalid benchmark parameters"));
        assert!(error.is_invalid_params());
    }

    #[test]
    fn test_planning_error_passes_through() {
        let error: BenchError = PlanningError::NoPathFound { iterations: 9 }.into();
        assert!(error.to_string().contains("no path found"));
        assert!(!error.is_invalid_params());
    }
}
