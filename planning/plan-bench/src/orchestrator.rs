//! The benchmark trial loop.
//!
//! [`TrialOrchestrator`] runs N independent randomized trials against a
//! fixed start/goal pair: each trial permutes and perturbs the base
//! obstacle centers, builds a fresh environment, checks endpoint
//! feasibility, and — when feasible — plans, simplifies, and records a
//! trial result. Infeasible trials are skipped silently and contribute no
//! entry.
//!
//! Randomness is drawn from an explicitly passed generator; seeding it
//! makes the whole trial sequence reproducible, permutations and
//! perturbations included, as long as the collaborators are themselves
//! deterministic.
//!
//! # Example
//!
//! ```
//! use plan_bench::{BenchmarkParams, TrialOrchestrator};
//! use plan_types::{
//!     Environment, JointConfig, JointPath, PlanOutcome, Planner, PlanningError,
//!     SimplifyOutcome, Simplifier, StateValidator,
//! };
//! use nalgebra::Point3;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::time::Duration;
//!
//! struct Permissive;
//! impl StateValidator for Permissive {
//!     fn is_valid(&self, _: &JointConfig, _: &Environment) -> bool {
//!         true
//!     }
//! }
//!
//! struct Direct;
//! impl Planner for Direct {
//!     fn plan(
//!         &mut self,
//!         start: &JointConfig,
//!         goal: &JointConfig,
//!         _: &Environment,
//!     ) -> Result<PlanOutcome, PlanningError> {
//!         let path = JointPath::from_endpoints(start.clone(), goal.clone());
//!         Ok(PlanOutcome::new(path, Duration::from_micros(50), 1))
//!     }
//! }
//!
//! struct Identity;
//! impl Simplifier for Identity {
//!     fn simplify(
//!         &mut self,
//!         path: &JointPath,
//!         _: &Environment,
//!     ) -> Result<SimplifyOutcome, PlanningError> {
//!         let cost = path.cost();
//!         Ok(SimplifyOutcome::new(path.clone(), Duration::from_micros(5), cost, cost))
//!     }
//! }
//!
//! let params = BenchmarkParams::new(
//!     vec![Point3::new(0.55, 0.0, 0.25)],
//!     JointConfig::from_slice(&[0.0, 0.0]),
//!     JointConfig::from_slice(&[1.0, 1.0]),
//! )
//! .with_trial_count(5);
//!
//! let mut orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
//! let mut rng = StdRng::seed_from_u64(0);
//! let results = orchestrator.run_benchmark(&params, &mut rng).unwrap();
//! assert_eq!(results.len(), 5);
//! ```

use nalgebra::{Point3, Vector3};
use rand::seq::SliceRandom;
use rand::Rng;
use plan_types::{
    Environment, Planner, ResultSet, Simplifier, SphereObstacle, StateValidator, TrialResult,
};
use tracing::{debug, info};

use crate::error::BenchError;
use crate::params::BenchmarkParams;

/// Runs randomized planning trials and collects their results.
///
/// Owns its three collaborators for the duration of a run. Trials execute
/// strictly sequentially; the only state shared across trials is the
/// random generator and the append-only result set.
pub struct TrialOrchestrator<V, P, S> {
    /// Endpoint feasibility checks.
    validator: V,
    /// The planning collaborator.
    planner: P,
    /// The path-simplification collaborator.
    simplifier: S,
}

impl<V, P, S> TrialOrchestrator<V, P, S>
where
    V: StateValidator,
    P: Planner,
    S: Simplifier,
{
    /// Creates an orchestrator from its collaborators.
    #[must_use]
    pub const fn new(validator: V, planner: P, simplifier: S) -> Self {
        Self {
            validator,
            planner,
            simplifier,
        }
    }

    /// Consumes the orchestrator and returns its collaborators.
    #[must_use]
    pub fn into_parts(self) -> (V, P, S) {
        (self.validator, self.planner, self.simplifier)
    }

    /// Runs the configured number of trials and collects the results.
    ///
    /// Each trial:
    ///
    /// 1. shuffles a working copy of the base obstacle centers (the base
    ///    list is never touched; the working list persists across trials
    ///    so permutations compound),
    /// 2. deep-copies the permuted list and perturbs each copied center
    ///    by an independent per-axis draw uniform in
    ///    `[-variation, +variation)`,
    /// 3. builds a fresh [`Environment`] from the perturbed centers and
    ///    the shared radius,
    /// 4. validates start then goal, skipping the trial silently if
    ///    either is infeasible,
    /// 5. plans, simplifies, and records a [`TrialResult`].
    ///
    /// A zero trial count is a valid degenerate case: no collaborator is
    /// invoked and the result set is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidParams`] if the parameters fail
    /// validation, or the propagated [`BenchError::Planning`] if a
    /// planner or simplifier call fails. No recovery or retry is
    /// attempted.
    pub fn run_benchmark<R: Rng>(
        &mut self,
        params: &BenchmarkParams,
        rng: &mut R,
    ) -> Result<ResultSet, BenchError> {
        let issues = params.validate();
        if !issues.is_empty() {
            return Err(BenchError::invalid_params(issues.join("; ")));
        }

        info!(
            trials = params.trial_count(),
            obstacles = params.base_centers().len(),
            variation = params.variation(),
            "starting benchmark run"
        );

        let mut results = ResultSet::new();
        let mut working: Vec<Point3<f64>> = params.base_centers().to_vec();

        for trial in 0..params.trial_count() {
            working.shuffle(rng);

            // This trial's independently owned copy of the scene.
            let mut centers = working.clone();
            for center in &mut centers {
                *center += perturbation(params.variation(), rng);
            }

            let mut environment = Environment::new();
            for center in &centers {
                environment.add_sphere(SphereObstacle::new(*center, params.radius()));
            }

            if !self.validator.is_valid(params.start(), &environment)
                || !self.validator.is_valid(params.goal(), &environment)
            {
                debug!(trial, "endpoint infeasible, skipping trial");
                continue;
            }

            let planned = self
                .planner
                .plan(params.start(), params.goal(), &environment)?;
            let simplified = self.simplifier.simplify(planned.path(), &environment)?;

            debug!(
                trial,
                iterations = planned.iterations(),
                planning_us = planned.elapsed().as_micros() as u64,
                "trial complete"
            );

            results.push(
                TrialResult::new()
                    .with_planning_time(planned.elapsed())
                    .with_simplification_time(simplified.elapsed())
                    .with_initial_path_cost(simplified.initial_cost())
                    .with_simplified_path_cost(simplified.simplified_cost())
                    .with_planning_iterations(planned.iterations()),
            );
        }

        info!(
            recorded = results.len(),
            skipped = params.trial_count() - results.len(),
            "benchmark run complete"
        );
        Ok(results)
    }
}

/// Draws one per-axis uniform perturbation in `[-variation, +variation)`.
///
/// A zero variation draws nothing: sampling an empty range would panic,
/// and the degenerate case must leave centers exact.
fn perturbation<R: Rng>(variation: f64, rng: &mut R) -> Vector3<f64> {
    if variation <= 0.0 {
        return Vector3::zeros();
    }
    Vector3::new(
        rng.gen_range(-variation..variation),
        rng.gen_range(-variation..variation),
        rng.gen_range(-variation..variation),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use plan_types::{JointConfig, JointPath, PlanOutcome, PlanningError, SimplifyOutcome};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    struct Permissive;
    impl StateValidator for Permissive {
        fn is_valid(&self, _: &JointConfig, _: &Environment) -> bool {
            true
        }
    }

    struct Direct;
    impl Planner for Direct {
        fn plan(
            &mut self,
            start: &JointConfig,
            goal: &JointConfig,
            _: &Environment,
        ) -> Result<PlanOutcome, PlanningError> {
            let path = JointPath::from_endpoints(start.clone(), goal.clone());
            Ok(PlanOutcome::new(path, Duration::from_micros(10), 1))
        }
    }

    struct Identity;
    impl Simplifier for Identity {
        fn simplify(
            &mut self,
            path: &JointPath,
            _: &Environment,
        ) -> Result<SimplifyOutcome, PlanningError> {
            let cost = path.cost();
            Ok(SimplifyOutcome::new(
                path.clone(),
                Duration::from_micros(1),
                cost,
                cost,
            ))
        }
    }

    fn params() -> BenchmarkParams {
        BenchmarkParams::new(
            vec![Point3::new(0.55, 0.0, 0.25), Point3::new(0.0, 0.55, 0.8)],
            JointConfig::from_slice(&[0.0, 0.0]),
            JointConfig::from_slice(&[1.0, 1.0]),
        )
        .with_trial_count(3)
    }

    #[test]
    fn test_rejects_invalid_params() {
        let mut orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
        let mut rng = StdRng::seed_from_u64(0);

        let bad = params().with_radius(-0.5);
        let err = orchestrator.run_benchmark(&bad, &mut rng).unwrap_err();
        assert!(err.is_invalid_params());
    }

    #[test]
    fn test_zero_trials_is_empty() {
        let mut orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
        let mut rng = StdRng::seed_from_u64(0);

        let results = orchestrator
            .run_benchmark(&params().with_trial_count(0), &mut rng)
            .unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_all_feasible_records_every_trial() {
        let mut orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
        let mut rng = StdRng::seed_from_u64(0);

        let results = orchestrator.run_benchmark(&params(), &mut rng).unwrap();
        assert_eq!(results.len(), 3);
        for result in &results {
            assert_eq!(result.planning_time(), Duration::from_micros(10));
            assert_eq!(result.planning_iterations(), 1);
        }
    }

    #[test]
    fn test_planner_error_propagates() {
        struct Failing;
        impl Planner for Failing {
            fn plan(
                &mut self,
                _: &JointConfig,
                _: &JointConfig,
                _: &Environment,
            ) -> Result<PlanOutcome, PlanningError> {
                Err(PlanningError::NoPathFound { iterations: 7 })
            }
        }

        let mut orchestrator = TrialOrchestrator::new(Permissive, Failing, Identity);
        let mut rng = StdRng::seed_from_u64(0);

        let err = orchestrator.run_benchmark(&params(), &mut rng).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Planning(PlanningError::NoPathFound { iterations: 7 })
        ));
    }

    #[test]
    fn test_perturbation_zero_variation() {
        let mut rng = StdRng::seed_from_u64(0);
        let delta = perturbation(0.0, &mut rng);
        assert_eq!(delta, Vector3::zeros());
    }

    #[test]
    fn test_perturbation_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let delta = perturbation(0.01, &mut rng);
            assert!(delta.x.abs() <= 0.01);
            assert!(delta.y.abs() <= 0.01);
            assert!(delta.z.abs() <= 0.01);
        }
    }

    #[test]
    fn test_into_parts() {
        let orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
        let (_validator, _planner, _simplifier) = orchestrator.into_parts();
    }
}
