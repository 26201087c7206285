//! Core types for motion-planning benchmarks.
//!
//! This crate provides the foundational types for a planning-benchmark
//! harness: joint-space configurations and paths, sphere obstacle scenes,
//! planner settings, per-trial results, and the capability traits the
//! trial orchestrator drives.
//!
//! # Overview
//!
//! The domain is organized into several conceptual areas:
//!
//! - **Configurations**: Points in joint space ([`JointConfig`]), with
//!   compact and flattened (zero-padded) forms
//! - **Scenes**: Sphere obstacles and per-trial environments
//!   ([`SphereObstacle`], [`Environment`])
//! - **Paths**: Joint-space waypoint sequences with summed segment cost
//!   ([`JointPath`])
//! - **Settings**: Planner variant selection and builder-style settings
//!   with an opaque override bag ([`PlannerKind`], [`PlanSettings`],
//!   [`SimplifySettings`], [`PlannerOverrides`])
//! - **Results**: Flat per-trial records and ordered collections
//!   ([`TrialResult`], [`ResultSet`])
//! - **Capabilities**: The validator/planner/simplifier seams the
//!   orchestrator consumes ([`StateValidator`], [`Planner`],
//!   [`Simplifier`])
//!
//! # Example
//!
//! ```
//! use plan_types::{Environment, JointConfig, PlanSettings, SphereObstacle};
//! use nalgebra::Point3;
//!
//! // The fixed endpoints of a benchmark problem
//! let start = JointConfig::from_slice(&[0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785]);
//! let goal = JointConfig::from_slice(&[2.35, 1.0, 0.0, -0.8, 0.0, 2.5, 0.785]);
//!
//! // A trial's obstacle scene
//! let mut env = Environment::new();
//! env.add_sphere(SphereObstacle::new(Point3::new(0.55, 0.0, 0.25), 0.2));
//!
//! // Settings for the planning collaborator
//! let settings = PlanSettings::default().with_max_iterations(50_000);
//! assert!(settings.validate().is_empty());
//! assert_eq!(start.len(), goal.len());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for the data model

#![doc(html_root_url = "https://docs.rs/plan-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod configuration;
pub mod environment;
pub mod error;
pub mod obstacle;
pub mod path;
pub mod result;
pub mod settings;
pub mod traits;

// Re-export main types at crate root for convenience
pub use configuration::JointConfig;
pub use environment::Environment;
pub use error::PlanningError;
pub use obstacle::SphereObstacle;
pub use path::JointPath;
pub use result::{ResultSet, TrialResult};
pub use settings::{
    OverrideValue, PlanSettings, PlannerKind, PlannerOverrides, SimplifySettings,
};
pub use traits::{PlanOutcome, Planner, SimplifyOutcome, Simplifier, StateValidator};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod integration_tests {
    use super::*;
    use nalgebra::Point3;
    use std::time::Duration;

    /// Test that all types can be constructed and used together.
    #[test]
    fn test_full_workflow_types() {
        let start = JointConfig::from_slice(&[0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785]);
        let goal = JointConfig::from_slice(&[2.35, 1.0, 0.0, -0.8, 0.0, 2.5, 0.785]);

        // Flattened forms for the flattened planner variant
        let start_flat = start.flattened(14).unwrap();
        assert_eq!(start_flat.len(), 14);

        // A trial environment
        let mut env = Environment::new();
        for x in [0.55, -0.55] {
            env.add_sphere(SphereObstacle::new(Point3::new(x, 0.0, 0.25), 0.2));
        }
        assert_eq!(env.len(), 2);

        // Settings with overrides applied last
        let overrides = PlannerOverrides::new().with("max_samples", OverrideValue::Int(2000));
        let mut settings = PlanSettings::default();
        settings.apply_overrides(&overrides);
        assert_eq!(settings.max_samples(), 2000);

        // A path between the endpoints and its trial record
        let path = JointPath::from_endpoints(start, goal);
        let result = TrialResult::new()
            .with_planning_time(Duration::from_micros(1500))
            .with_initial_path_cost(path.cost())
            .with_planning_iterations(42);

        let mut results = ResultSet::new();
        results.push(result);
        assert_eq!(results.len(), 1);
        assert!(results.get(0).unwrap().initial_path_cost() > 0.0);
    }

    /// Test outcome assembly the way an orchestrator consumes it.
    #[test]
    fn test_outcome_assembly() {
        let path = JointPath::from_endpoints(
            JointConfig::from_slice(&[0.0]),
            JointConfig::from_slice(&[1.0]),
        );
        let planned = PlanOutcome::new(path.clone(), Duration::from_micros(10), 3);
        let simplified = SimplifyOutcome::new(path, Duration::from_micros(2), 1.0, 1.0);

        let record = TrialResult::new()
            .with_planning_time(planned.elapsed())
            .with_simplification_time(simplified.elapsed())
            .with_initial_path_cost(simplified.initial_cost())
            .with_simplified_path_cost(simplified.simplified_cost())
            .with_planning_iterations(planned.iterations());

        assert_eq!(record.planning_iterations(), 3);
        assert_eq!(record.simplification_time(), Duration::from_micros(2));
    }
}
