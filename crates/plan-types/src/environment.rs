//! Collision environments.
//!
//! An [`Environment`] is the ordered aggregate of obstacles a single trial
//! plans against. Each trial builds its own environment from scratch and
//! discards it at trial end — environments are never shared across trials,
//! so perturbed obstacle state cannot alias between trials.
//!
//! The environment is opaque to the orchestration layer beyond
//! construction: collision queries against it are the collaborators'
//! concern.
//!
//! # Example
//!
//! ```
//! use plan_types::{Environment, SphereObstacle};
//! use nalgebra::Point3;
//!
//! let mut env = Environment::new();
//! env.add_sphere(SphereObstacle::new(Point3::new(0.55, 0.0, 0.25), 0.2));
//! env.add_sphere(SphereObstacle::new(Point3::new(0.0, 0.55, 0.25), 0.2));
//! assert_eq!(env.len(), 2);
//! ```

use crate::obstacle::SphereObstacle;

/// An obstacle scene built from sphere primitives.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Environment {
    /// Obstacles in insertion order.
    spheres: Vec<SphereObstacle>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            spheres: Vec::new(),
        }
    }

    /// Creates an environment from an ordered list of spheres.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::{Environment, SphereObstacle};
    /// use nalgebra::Point3;
    ///
    /// let env = Environment::from_spheres(vec![
    ///     SphereObstacle::new(Point3::origin(), 0.2),
    /// ]);
    /// assert_eq!(env.len(), 1);
    /// ```
    #[must_use]
    pub fn from_spheres(spheres: Vec<SphereObstacle>) -> Self {
        Self { spheres }
    }

    /// Adds a sphere obstacle to the scene.
    pub fn add_sphere(&mut self, sphere: SphereObstacle) {
        self.spheres.push(sphere);
    }

    /// Returns the obstacles in insertion order.
    #[must_use]
    pub fn spheres(&self) -> &[SphereObstacle] {
        &self.spheres
    }

    /// Returns the number of obstacles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// Returns `true` if the scene has no obstacles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
