//! Trial orchestration for motion-planning benchmarks.
//!
//! This crate runs randomized planning trials over the capability seams
//! defined in `plan-types` and aggregates their results:
//!
//! - [`TrialOrchestrator`]: the benchmark loop — permute, perturb,
//!   validate, plan, simplify, record
//! - [`BenchmarkParams`]: the run's inputs, with builder-style setup and
//!   validation
//! - [`summarize`] / [`BenchmarkSummary`]: post-hoc descriptive
//!   statistics over a [`plan_types::ResultSet`]
//! - [`scene`]: the canonical fourteen-sphere cage problem
//!
//! # Quick Start
//!
//! ```
//! use plan_bench::{scene, summarize, TrialOrchestrator};
//! use plan_types::{
//!     Environment, JointConfig, JointPath, PlanOutcome, Planner, PlanningError,
//!     SimplifyOutcome, Simplifier, StateValidator,
//! };
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use std::time::Duration;
//!
//! // Collaborators normally come from a planning library; here they are
//! // minimal stand-ins.
//! struct Permissive;
//! impl StateValidator for Permissive {
//!     fn is_valid(&self, _: &JointConfig, _: &Environment) -> bool {
//!         true
//!     }
//! }
//! struct Direct;
//! impl Planner for Direct {
//!     fn plan(
//!         &mut self,
//!         start: &JointConfig,
//!         goal: &JointConfig,
//!         _: &Environment,
//!     ) -> Result<PlanOutcome, PlanningError> {
//!         let path = JointPath::from_endpoints(start.clone(), goal.clone());
//!         Ok(PlanOutcome::new(path, Duration::from_micros(120), 4))
//!     }
//! }
//! struct Identity;
//! impl Simplifier for Identity {
//!     fn simplify(
//!         &mut self,
//!         path: &JointPath,
//!         _: &Environment,
//!     ) -> Result<SimplifyOutcome, PlanningError> {
//!         let cost = path.cost();
//!         Ok(SimplifyOutcome::new(path.clone(), Duration::from_micros(8), cost, cost))
//!     }
//! }
//!
//! let params = scene::cage_params().with_trial_count(10);
//! let mut orchestrator = TrialOrchestrator::new(Permissive, Direct, Identity);
//!
//! // A fixed seed makes the whole trial sequence reproducible.
//! let mut rng = StdRng::seed_from_u64(0);
//! let results = orchestrator.run_benchmark(&params, &mut rng).unwrap();
//! assert_eq!(results.len(), 10);
//!
//! println!("{}", summarize(&results));
//! ```

#![doc(html_root_url = "https://docs.rs/plan-bench/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod orchestrator;
pub mod params;
pub mod scene;
pub mod stats;

pub use error::BenchError;
pub use orchestrator::TrialOrchestrator;
pub use params::BenchmarkParams;
pub use stats::{summarize, BenchmarkSummary, FieldSummary};
