//! Timed trajectories for playback.
//!
//! A [`Trajectory`] is a renderable sequence of timestamped flattened
//! configurations. Two conversions produce one:
//!
//! - [`interpolated_trajectory`]: straight joint-space interpolation
//!   between two endpoint configurations
//! - [`path_trajectory`]: resampling a planned [`JointPath`] by
//!   joint-space arc length into uniformly spaced frames
//!
//! # Example
//!
//! ```
//! use plan_types::JointConfig;
//! use plan_viz::interpolated_trajectory;
//!
//! let start = JointConfig::from_slice(&[0.0, 0.0]);
//! let goal = JointConfig::from_slice(&[1.0, 2.0]);
//!
//! let trajectory = interpolated_trajectory(&start, &goal, 3.0, 100).unwrap();
//! assert_eq!(trajectory.len(), 100);
//! assert!((trajectory.duration() - 3.0).abs() < 1e-12);
//! ```

use plan_types::{JointConfig, JointPath, PlanningError};

/// One playback frame: a configuration at a point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedWaypoint {
    /// Seconds from playback start.
    time: f64,
    /// The configuration to hold at this time.
    config: JointConfig,
}

impl TimedWaypoint {
    /// Creates a timed waypoint.
    #[must_use]
    pub const fn new(time: f64, config: JointConfig) -> Self {
        Self { time, config }
    }

    /// Returns the time in seconds from playback start.
    #[must_use]
    pub const fn time(&self) -> f64 {
        self.time
    }

    /// Returns the configuration at this time.
    #[must_use]
    pub const fn config(&self) -> &JointConfig {
        &self.config
    }
}

/// An ordered sequence of timed playback frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    /// Frames in time order.
    waypoints: Vec<TimedWaypoint>,
}

impl Trajectory {
    /// Creates a trajectory from timed waypoints.
    #[must_use]
    pub fn new(waypoints: Vec<TimedWaypoint>) -> Self {
        Self { waypoints }
    }

    /// Returns the number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the trajectory has no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns the frames in time order.
    #[must_use]
    pub fn waypoints(&self) -> &[TimedWaypoint] {
        &self.waypoints
    }

    /// Returns the playback duration: the time of the last frame.
    ///
    /// Zero for an empty trajectory.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.waypoints.last().map_or(0.0, TimedWaypoint::time)
    }

    /// Returns an iterator over the frames.
    pub fn iter(&self) -> std::slice::Iter<'_, TimedWaypoint> {
        self.waypoints.iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TimedWaypoint;
    type IntoIter = std::slice::Iter<'a, TimedWaypoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}

/// Linearly interpolates between two configurations.
///
/// Coordinates missing from the shorter configuration are treated as
/// zero, matching configuration distance semantics.
fn lerp_config(a: &JointConfig, b: &JointConfig, s: f64) -> JointConfig {
    let width = a.len().max(b.len());
    let values = (0..width)
        .map(|i| {
            let from = a.get(i).unwrap_or(0.0);
            let to = b.get(i).unwrap_or(0.0);
            from + (to - from) * s
        })
        .collect();
    JointConfig::new(values)
}

/// Checks the sampling arguments shared by both conversions.
fn check_sampling(duration: f64, steps: usize) -> Result<(), PlanningError> {
    if steps < 2 {
        return Err(PlanningError::invalid_settings(format!(
            "trajectory needs at least 2 samples, got {steps}"
        )));
    }
    if duration <= 0.0 {
        return Err(PlanningError::invalid_settings(format!(
            "trajectory duration must be positive, got {duration}"
        )));
    }
    Ok(())
}

/// Builds a trajectory by straight joint-space interpolation between two
/// configurations, sampled at `steps` frames over `duration` seconds.
///
/// # Errors
///
/// Returns [`PlanningError::InvalidSettings`] if `steps < 2` or
/// `duration` is not positive.
///
/// # Example
///
/// ```
/// use plan_types::JointConfig;
/// use plan_viz::interpolated_trajectory;
///
/// let start = JointConfig::from_slice(&[0.0]);
/// let goal = JointConfig::from_slice(&[1.0]);
/// let trajectory = interpolated_trajectory(&start, &goal, 2.0, 5).unwrap();
///
/// assert_eq!(trajectory.waypoints()[0].config(), &start);
/// assert_eq!(trajectory.waypoints()[4].config(), &goal);
/// ```
pub fn interpolated_trajectory(
    start: &JointConfig,
    goal: &JointConfig,
    duration: f64,
    steps: usize,
) -> Result<Trajectory, PlanningError> {
    check_sampling(duration, steps)?;

    #[allow(clippy::cast_precision_loss)]
    let last = (steps - 1) as f64;
    let waypoints = (0..steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let s = i as f64 / last;
            TimedWaypoint::new(duration * s, lerp_config(start, goal, s))
        })
        .collect();
    Ok(Trajectory::new(waypoints))
}

/// Resamples a planned path into a uniform timed trajectory.
///
/// Frames are spaced uniformly in joint-space arc length along the path,
/// so playback speed is constant regardless of how unevenly the planner
/// placed its waypoints. A zero-length path holds its single pose for the
/// whole duration.
///
/// # Errors
///
/// Returns [`PlanningError::Visualization`] for an empty path, or
/// [`PlanningError::InvalidSettings`] for bad sampling arguments.
///
/// # Example
///
/// ```
/// use plan_types::{JointConfig, JointPath};
/// use plan_viz::path_trajectory;
///
/// let path = JointPath::new(vec![
///     JointConfig::from_slice(&[0.0]),
///     JointConfig::from_slice(&[0.5]),
///     JointConfig::from_slice(&[2.0]),
/// ]);
///
/// let trajectory = path_trajectory(&path, 1.5, 100).unwrap();
/// assert_eq!(trajectory.len(), 100);
/// assert_eq!(trajectory.waypoints()[99].config(), &JointConfig::from_slice(&[2.0]));
/// ```
pub fn path_trajectory(
    path: &JointPath,
    duration: f64,
    steps: usize,
) -> Result<Trajectory, PlanningError> {
    check_sampling(duration, steps)?;

    let Some(first) = path.first() else {
        return Err(PlanningError::visualization(
            "cannot build a trajectory from an empty path",
        ));
    };

    let total = path.cost();
    #[allow(clippy::cast_precision_loss)]
    let last = (steps - 1) as f64;

    if total <= 0.0 {
        // Single waypoint or coincident waypoints: hold the pose.
        let waypoints = (0..steps)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let s = i as f64 / last;
                TimedWaypoint::new(duration * s, first.clone())
            })
            .collect();
        return Ok(Trajectory::new(waypoints));
    }

    // Cumulative arc length at each path waypoint.
    let configs = path.waypoints();
    let mut cumulative = Vec::with_capacity(configs.len());
    let mut acc = 0.0;
    cumulative.push(0.0);
    for pair in configs.windows(2) {
        acc += pair[0].distance(&pair[1]);
        cumulative.push(acc);
    }

    let mut waypoints = Vec::with_capacity(steps);
    let mut segment = 0;
    for i in 0..steps {
        #[allow(clippy::cast_precision_loss)]
        let s = i as f64 / last;
        let target = total * s;

        // Advance to the segment containing the target arc length.
        while segment + 2 < cumulative.len() && cumulative[segment + 1] < target {
            segment += 1;
        }

        let seg_start = cumulative[segment];
        let seg_len = cumulative[segment + 1] - seg_start;
        let t = if seg_len > 0.0 {
            ((target - seg_start) / seg_len).clamp(0.0, 1.0)
        } else {
            0.0
        };

        waypoints.push(TimedWaypoint::new(
            duration * s,
            lerp_config(&configs[segment], &configs[segment + 1], t),
        ));
    }

    Ok(Trajectory::new(waypoints))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(values: &[f64]) -> JointConfig {
        JointConfig::from_slice(values)
    }

    #[test]
    fn test_interpolated_endpoints_and_count() {
        let start = config(&[0.0, 0.0]);
        let goal = config(&[1.0, 2.0]);
        let trajectory = interpolated_trajectory(&start, &goal, 3.0, 100).unwrap();

        assert_eq!(trajectory.len(), 100);
        assert_eq!(trajectory.waypoints()[0].config(), &start);
        assert_eq!(trajectory.waypoints()[99].config(), &goal);
        assert_relative_eq!(trajectory.duration(), 3.0, epsilon = 1e-12);
        assert_relative_eq!(trajectory.waypoints()[0].time(), 0.0);
    }

    #[test]
    fn test_interpolated_midpoint() {
        let start = config(&[0.0]);
        let goal = config(&[2.0]);
        let trajectory = interpolated_trajectory(&start, &goal, 1.0, 3).unwrap();

        assert_relative_eq!(trajectory.waypoints()[1].config().values()[0], 1.0);
        assert_relative_eq!(trajectory.waypoints()[1].time(), 0.5);
    }

    #[test]
    fn test_interpolated_rejects_bad_sampling() {
        let a = config(&[0.0]);
        assert!(interpolated_trajectory(&a, &a, 1.0, 1).is_err());
        assert!(interpolated_trajectory(&a, &a, 0.0, 10).is_err());
        assert!(interpolated_trajectory(&a, &a, -1.0, 10).is_err());
    }

    #[test]
    fn test_path_trajectory_uniform_arc_length() {
        // Uneven waypoint spacing: 0 -> 0.5 -> 2.0
        let path = JointPath::new(vec![config(&[0.0]), config(&[0.5]), config(&[2.0])]);
        let trajectory = path_trajectory(&path, 1.0, 5).unwrap();

        // Samples should be uniform in arc length: 0, 0.5, 1.0, 1.5, 2.0
        let positions: Vec<f64> = trajectory
            .iter()
            .map(|w| w.config().values()[0])
            .collect();
        for (actual, expected) in positions.iter().zip([0.0, 0.5, 1.0, 1.5, 2.0]) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_path_trajectory_preserves_endpoints() {
        let path = JointPath::new(vec![
            config(&[0.0, 1.0]),
            config(&[0.3, 0.5]),
            config(&[1.0, -1.0]),
        ]);
        let trajectory = path_trajectory(&path, 1.5, 100).unwrap();

        assert_eq!(trajectory.waypoints()[0].config(), path.first().unwrap());
        assert_eq!(trajectory.waypoints()[99].config(), path.last().unwrap());
        assert_relative_eq!(trajectory.duration(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_path_trajectory_holds_pose_for_degenerate_path() {
        let path = JointPath::new(vec![config(&[0.7, 0.7])]);
        let trajectory = path_trajectory(&path, 2.0, 10).unwrap();

        assert_eq!(trajectory.len(), 10);
        for waypoint in &trajectory {
            assert_eq!(waypoint.config(), &config(&[0.7, 0.7]));
        }
        assert_relative_eq!(trajectory.duration(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_path_trajectory_rejects_empty_path() {
        let err = path_trajectory(&JointPath::empty(), 1.0, 10).unwrap_err();
        assert!(err.to_string().contains("empty path"));
    }

    #[test]
    fn test_trajectory_accessors() {
        let trajectory = Trajectory::new(vec![
            TimedWaypoint::new(0.0, config(&[0.0])),
            TimedWaypoint::new(1.0, config(&[1.0])),
        ]);
        assert_eq!(trajectory.len(), 2);
        assert!(!trajectory.is_empty());
        assert_relative_eq!(trajectory.duration(), 1.0);

        let empty = Trajectory::default();
        assert!(empty.is_empty());
        assert_relative_eq!(empty.duration(), 0.0);
    }
}
