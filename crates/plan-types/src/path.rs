//! Joint-space paths.
//!
//! A [`JointPath`] is an ordered sequence of configurations through joint
//! space, as returned by a planner and consumed by a simplifier. Path cost
//! is the sum of Euclidean joint-space distances between consecutive
//! waypoints.
//!
//! # Example
//!
//! ```
//! use plan_types::{JointConfig, JointPath};
//!
//! let path = JointPath::new(vec![
//!     JointConfig::from_slice(&[0.0, 0.0]),
//!     JointConfig::from_slice(&[1.0, 0.0]),
//!     JointConfig::from_slice(&[1.0, 1.0]),
//! ]);
//!
//! assert_eq!(path.len(), 3);
//! assert!((path.cost() - 2.0).abs() < 1e-12);
//! ```

use crate::configuration::JointConfig;

/// An ordered sequence of joint-space waypoints.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointPath {
    /// Waypoints from start to goal.
    waypoints: Vec<JointConfig>,
}

impl JointPath {
    /// Creates a path from a sequence of waypoints.
    #[must_use]
    pub fn new(waypoints: Vec<JointConfig>) -> Self {
        Self { waypoints }
    }

    /// Creates an empty path.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Creates a two-waypoint path from endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::{JointConfig, JointPath};
    ///
    /// let path = JointPath::from_endpoints(
    ///     JointConfig::from_slice(&[0.0]),
    ///     JointConfig::from_slice(&[1.0]),
    /// );
    /// assert_eq!(path.len(), 2);
    /// ```
    #[must_use]
    pub fn from_endpoints(start: JointConfig, goal: JointConfig) -> Self {
        Self {
            waypoints: vec![start, goal],
        }
    }

    /// Returns the number of waypoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Returns `true` if the path has no waypoints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Returns the waypoints in order.
    #[must_use]
    pub fn waypoints(&self) -> &[JointConfig] {
        &self.waypoints
    }

    /// Returns the first waypoint, if any.
    #[must_use]
    pub fn first(&self) -> Option<&JointConfig> {
        self.waypoints.first()
    }

    /// Returns the last waypoint, if any.
    #[must_use]
    pub fn last(&self) -> Option<&JointConfig> {
        self.waypoints.last()
    }

    /// Returns an iterator over the waypoints.
    pub fn iter(&self) -> std::slice::Iter<'_, JointConfig> {
        self.waypoints.iter()
    }

    /// Returns the path cost: the sum of joint-space distances between
    /// consecutive waypoints.
    ///
    /// Empty and single-waypoint paths cost zero.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::{JointConfig, JointPath};
    ///
    /// let path = JointPath::new(vec![
    ///     JointConfig::from_slice(&[0.0, 0.0]),
    ///     JointConfig::from_slice(&[3.0, 4.0]),
    /// ]);
    /// assert!((path.cost() - 5.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.waypoints
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Consumes the path and returns its waypoints.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<JointConfig> {
        self.waypoints
    }
}

impl<'a> IntoIterator for &'a JointPath {
    type Item = &'a JointConfig;
    type IntoIter = std::slice::Iter<'a, JointConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.waypoints.iter()
    }
}
