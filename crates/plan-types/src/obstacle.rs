//! Sphere obstacle primitives.
//!
//! Obstacle scenes in this harness are built from spheres: a 3-D center
//! plus a scalar radius. Perturbation produces independent copies via
//! [`SphereObstacle::translated`] — the original value is never mutated.

use nalgebra::{Point3, Vector3};

/// A sphere obstacle: center point plus radius.
///
/// # Example
///
/// ```
/// use plan_types::SphereObstacle;
/// use nalgebra::{Point3, Vector3};
///
/// let sphere = SphereObstacle::new(Point3::new(0.55, 0.0, 0.25), 0.2);
/// assert!(sphere.contains(&Point3::new(0.55, 0.0, 0.3)));
///
/// let moved = sphere.translated(Vector3::new(0.01, 0.0, 0.0));
/// assert!((moved.center.x - 0.56).abs() < 1e-12);
/// assert!((sphere.center.x - 0.55).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphereObstacle {
    /// Center in world coordinates.
    pub center: Point3<f64>,
    /// Sphere radius.
    pub radius: f64,
}

impl SphereObstacle {
    /// Creates a sphere obstacle from a center and radius.
    #[must_use]
    pub const fn new(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns an independent copy translated by `delta`.
    ///
    /// The receiver is unchanged; perturbed scenes are built from
    /// translated copies so the base scene survives any number of trials.
    #[must_use]
    pub fn translated(&self, delta: Vector3<f64>) -> Self {
        Self {
            center: self.center + delta,
            radius: self.radius,
        }
    }

    /// Checks if a point lies inside or on the sphere.
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        (point - self.center).norm() <= self.radius
    }

    /// Returns the signed distance from a point to the sphere surface.
    ///
    /// Negative inside the sphere, zero on the surface, positive outside.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::SphereObstacle;
    /// use nalgebra::Point3;
    ///
    /// let sphere = SphereObstacle::new(Point3::origin(), 1.0);
    /// assert!((sphere.signed_distance(&Point3::new(2.0, 0.0, 0.0)) - 1.0).abs() < 1e-12);
    /// assert!(sphere.signed_distance(&Point3::origin()) < 0.0);
    /// ```
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        (point - self.center).norm() - self.radius
    }
}
