//! The single-shot visualization preview pass.
//!
//! Independent of the benchmark trial loop: the preview builds one
//! environment from the *unperturbed* base obstacle centers, runs exactly
//! one planning call on the flattened start/goal forms, resamples the
//! planned path into a timed trajectory, and hands it to a [`Visualizer`]
//! for playback. It draws no randomness, so running it after a benchmark
//! leaves the benchmark's seeded sequence untouched.

use nalgebra::Point3;
use plan_types::{Environment, JointConfig, Planner, PlanningError, SphereObstacle};
use tracing::info;

use crate::playback::{RobotModel, Visualizer};
use crate::trajectory::{path_trajectory, Trajectory};

/// Runs one planning call over the unperturbed scene and plays it back.
///
/// # Example
///
/// ```
/// use plan_types::{
///     Environment, JointConfig, JointPath, PlanOutcome, Planner, PlanningError,
/// };
/// use plan_viz::{PreviewPass, RobotModel, TraceVisualizer};
/// use nalgebra::Point3;
/// use std::time::Duration;
///
/// struct Direct;
/// impl Planner for Direct {
///     fn plan(
///         &mut self,
///         start: &JointConfig,
///         goal: &JointConfig,
///         _: &Environment,
///     ) -> Result<PlanOutcome, PlanningError> {
///         let path = JointPath::from_endpoints(start.clone(), goal.clone());
///         Ok(PlanOutcome::new(path, Duration::from_micros(80), 2))
///     }
/// }
///
/// let robot = RobotModel::new("arm", 2).with_flat_width(4);
/// let mut planner = Direct;
/// let mut visualizer = TraceVisualizer::new();
///
/// let trajectory = PreviewPass::new()
///     .run(
///         &mut planner,
///         &mut visualizer,
///         &robot,
///         &[Point3::new(0.5, 0.0, 0.25)],
///         0.2,
///         &JointConfig::from_slice(&[0.0, 0.0]),
///         &JointConfig::from_slice(&[1.0, 1.0]),
///     )
///     .unwrap();
///
/// assert_eq!(trajectory.len(), 100);
/// assert_eq!(visualizer.frames_played(), 100);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPass {
    /// Playback duration in seconds.
    duration: f64,
    /// Number of trajectory frames to sample.
    steps: usize,
}

impl Default for PreviewPass {
    fn default() -> Self {
        Self {
            duration: 1.5,
            steps: 100,
        }
    }
}

impl PreviewPass {
    /// Creates a preview pass with the reference playback defaults:
    /// 100 frames over 1.5 seconds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the playback duration in seconds.
    #[must_use]
    pub const fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the number of trajectory frames.
    #[must_use]
    pub const fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Returns the playback duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Returns the number of trajectory frames.
    #[must_use]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Plans once over the unperturbed scene and animates the result.
    ///
    /// The start and goal are flattened to the robot's flattened width
    /// before planning; the returned trajectory is the one handed to the
    /// visualizer.
    ///
    /// # Errors
    ///
    /// Propagates any planner, conversion, or playback failure unchanged.
    pub fn run<P, Z>(
        &self,
        planner: &mut P,
        visualizer: &mut Z,
        robot: &RobotModel,
        base_centers: &[Point3<f64>],
        radius: f64,
        start: &JointConfig,
        goal: &JointConfig,
    ) -> Result<Trajectory, PlanningError>
    where
        P: Planner,
        Z: Visualizer,
    {
        let mut environment = Environment::new();
        for center in base_centers {
            environment.add_sphere(SphereObstacle::new(*center, radius));
        }

        let start_flat = start.flattened(robot.flat_width())?;
        let goal_flat = goal.flattened(robot.flat_width())?;

        let outcome = planner.plan(&start_flat, &goal_flat, &environment)?;
        info!(
            nanoseconds = outcome.elapsed().as_nanos() as u64,
            iterations = outcome.iterations(),
            "preview planning complete"
        );

        let trajectory = path_trajectory(outcome.path(), self.duration, self.steps)?;
        visualizer.animate(robot, &trajectory, environment.spheres())?;
        Ok(trajectory)
    }
}
