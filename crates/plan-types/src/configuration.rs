//! Joint-space configurations.
//!
//! A [`JointConfig`] is a point in a robot's joint space: a fixed-length
//! ordered sequence of real-valued joint coordinates. The harness treats it
//! as an opaque numeric vector — no kinematic model is attached.
//!
//! Two forms of the same configuration appear in practice: a "compact" form
//! matching the robot's degrees of freedom, and a "flattened" form padded
//! with trailing zeros to the width a flattened planner variant expects.
//! The two forms are distinct values; callers pick the form matching the
//! planner variant in use.
//!
//! # Example
//!
//! ```
//! use plan_types::JointConfig;
//!
//! let compact = JointConfig::from_slice(&[0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785]);
//! assert_eq!(compact.len(), 7);
//!
//! let flat = compact.flattened(14).unwrap();
//! assert_eq!(flat.len(), 14);
//! assert_eq!(flat.get(13), Some(0.0));
//! ```

use crate::error::PlanningError;

/// A fixed-length joint-space configuration.
///
/// Immutable once constructed: there are no public mutators, so a start or
/// goal configuration owned by an orchestration run can never change under
/// it.
///
/// # Example
///
/// ```
/// use plan_types::JointConfig;
///
/// let config = JointConfig::new(vec![0.1, 0.2, 0.3]);
/// assert_eq!(config.values(), &[0.1, 0.2, 0.3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JointConfig {
    /// Joint coordinates, one per degree of freedom.
    values: Vec<f64>,
}

impl JointConfig {
    /// Creates a configuration from a vector of joint coordinates.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Creates a configuration from a slice of joint coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::JointConfig;
    ///
    /// let config = JointConfig::from_slice(&[1.0, 2.0]);
    /// assert_eq!(config.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Returns the number of joint coordinates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the configuration has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the joint coordinates as a slice.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the coordinate at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns a flattened copy of this configuration, right-padded with
    /// zeros to `width` coordinates.
    ///
    /// Flattened planner variants operate on configurations padded to a
    /// wider fixed width; the padding coordinates are always zero.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningError::DimensionMismatch`] if `width` is smaller
    /// than the current length — flattening never truncates.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::JointConfig;
    ///
    /// let compact = JointConfig::from_slice(&[1.0, 2.0]);
    /// let flat = compact.flattened(4).unwrap();
    /// assert_eq!(flat.values(), &[1.0, 2.0, 0.0, 0.0]);
    ///
    /// assert!(compact.flattened(1).is_err());
    /// ```
    pub fn flattened(&self, width: usize) -> Result<Self, PlanningError> {
        if width < self.values.len() {
            return Err(PlanningError::DimensionMismatch {
                expected: width,
                actual: self.values.len(),
            });
        }

        let mut values = self.values.clone();
        values.resize(width, 0.0);
        Ok(Self { values })
    }

    /// Returns the Euclidean joint-space distance to another configuration.
    ///
    /// Coordinates missing from the shorter configuration are treated as
    /// zero, so a configuration and its flattened form are at distance
    /// zero.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::JointConfig;
    ///
    /// let a = JointConfig::from_slice(&[0.0, 0.0]);
    /// let b = JointConfig::from_slice(&[3.0, 4.0]);
    /// assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    ///
    /// let flat = a.flattened(5).unwrap();
    /// assert!(a.distance(&flat) < 1e-12);
    /// ```
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let width = self.values.len().max(other.values.len());
        let mut sum = 0.0;
        for i in 0..width {
            let a = self.values.get(i).copied().unwrap_or(0.0);
            let b = other.values.get(i).copied().unwrap_or(0.0);
            let d = a - b;
            sum += d * d;
        }
        sum.sqrt()
    }
}

impl From<Vec<f64>> for JointConfig {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}
