//! Playback seams.
//!
//! [`Visualizer`] is the capability the preview pass hands a finished
//! trajectory to. [`TraceVisualizer`] is the headless implementation:
//! it plays nothing on screen and instead reports frames through the
//! logging layer, which keeps the preview flow exercisable in tests and
//! on machines without a display.

use std::path::{Path, PathBuf};

use plan_types::{PlanningError, SphereObstacle};
use tracing::{debug, info};

use crate::trajectory::Trajectory;

/// A robot description for playback.
///
/// Carries naming and dimensional metadata only — no kinematics. The
/// flattened width is the configuration width the flattened planner
/// variants (and therefore trajectories) use.
///
/// # Example
///
/// ```
/// use plan_viz::RobotModel;
///
/// let robot = RobotModel::new("seven-joint-arm", 7)
///     .with_flat_width(14)
///     .with_joint_names(vec!["shoulder".into(), "elbow".into()]);
///
/// assert_eq!(robot.dof(), 7);
/// assert_eq!(robot.flat_width(), 14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RobotModel {
    /// Human-readable robot name.
    name: String,
    /// Degrees of freedom of the compact configuration.
    dof: usize,
    /// Width of the flattened configuration form.
    flat_width: usize,
    /// Joint names, for visualizers that label joints.
    joint_names: Vec<String>,
    /// Optional path to the robot's model file.
    model_path: Option<PathBuf>,
}

impl RobotModel {
    /// Creates a robot model with `flat_width` defaulting to `dof`.
    #[must_use]
    pub fn new(name: impl Into<String>, dof: usize) -> Self {
        Self {
            name: name.into(),
            dof,
            flat_width: dof,
            joint_names: Vec::new(),
            model_path: None,
        }
    }

    /// Creates the seven-joint arm description used by the cage problem.
    #[must_use]
    pub fn seven_joint_arm() -> Self {
        Self::new("seven-joint-arm", 7).with_flat_width(14)
    }

    /// Sets the flattened configuration width.
    #[must_use]
    pub const fn with_flat_width(mut self, width: usize) -> Self {
        self.flat_width = width;
        self
    }

    /// Sets the joint names.
    #[must_use]
    pub fn with_joint_names(mut self, names: Vec<String>) -> Self {
        self.joint_names = names;
        self
    }

    /// Sets the path to the robot's model file.
    #[must_use]
    pub fn with_model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Returns the robot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the degrees of freedom.
    #[must_use]
    pub const fn dof(&self) -> usize {
        self.dof
    }

    /// Returns the flattened configuration width.
    #[must_use]
    pub const fn flat_width(&self) -> usize {
        self.flat_width
    }

    /// Returns the joint names.
    #[must_use]
    pub fn joint_names(&self) -> &[String] {
        &self.joint_names
    }

    /// Returns the model file path, if set.
    #[must_use]
    pub fn model_path(&self) -> Option<&Path> {
        self.model_path.as_deref()
    }
}

/// Plays back a trajectory in an obstacle scene.
pub trait Visualizer {
    /// Animates `trajectory` for `robot` among `obstacles`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlanningError`] if playback fails.
    fn animate(
        &mut self,
        robot: &RobotModel,
        trajectory: &Trajectory,
        obstacles: &[SphereObstacle],
    ) -> Result<(), PlanningError>;
}

/// Headless playback that reports frames through the logging layer.
///
/// # Example
///
/// ```
/// use plan_types::JointConfig;
/// use plan_viz::{interpolated_trajectory, RobotModel, TraceVisualizer, Visualizer};
///
/// let trajectory = interpolated_trajectory(
///     &JointConfig::from_slice(&[0.0]),
///     &JointConfig::from_slice(&[1.0]),
///     1.0,
///     10,
/// )
/// .unwrap();
///
/// let mut visualizer = TraceVisualizer::new();
/// visualizer
///     .animate(&RobotModel::new("arm", 1), &trajectory, &[])
///     .unwrap();
/// assert_eq!(visualizer.frames_played(), 10);
/// ```
#[derive(Debug, Default)]
pub struct TraceVisualizer {
    frames_played: usize,
}

impl TraceVisualizer {
    /// Creates a headless visualizer.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames_played: 0 }
    }

    /// Returns the total number of frames played so far.
    #[must_use]
    pub const fn frames_played(&self) -> usize {
        self.frames_played
    }
}

impl Visualizer for TraceVisualizer {
    fn animate(
        &mut self,
        robot: &RobotModel,
        trajectory: &Trajectory,
        obstacles: &[SphereObstacle],
    ) -> Result<(), PlanningError> {
        if trajectory.is_empty() {
            return Err(PlanningError::visualization(
                "cannot animate an empty trajectory",
            ));
        }

        info!(
            robot = robot.name(),
            frames = trajectory.len(),
            duration_s = trajectory.duration(),
            obstacles = obstacles.len(),
            "playing trajectory"
        );

        for waypoint in trajectory {
            debug!(
                time_s = waypoint.time(),
                joints = waypoint.config().len(),
                "frame"
            );
            self.frames_played += 1;
        }
        Ok(())
    }
}
