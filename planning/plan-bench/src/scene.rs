//! The canonical sphere-cage benchmark problem.
//!
//! A fixed scene of fourteen spheres arranged in two rings around a
//! seven-joint arm, plus the fixed start and goal configurations the
//! benchmark connects. The lower ring sits at z = 0.25, the upper ring at
//! z = 0.8; all spheres share one radius chosen per run.
//!
//! # Example
//!
//! ```
//! use plan_bench::scene;
//!
//! let centers = scene::sphere_cage_centers();
//! assert_eq!(centers.len(), 14);
//! assert_eq!(scene::cage_start().len(), 7);
//! ```

use nalgebra::Point3;
use plan_types::JointConfig;

use crate::params::BenchmarkParams;

/// Flattened configuration width for the seven-joint arm.
pub const FLAT_JOINT_WIDTH: usize = 14;

/// Returns the fourteen sphere centers of the cage scene.
#[must_use]
pub fn sphere_cage_centers() -> Vec<Point3<f64>> {
    vec![
        Point3::new(0.55, 0.0, 0.25),
        Point3::new(0.35, 0.35, 0.25),
        Point3::new(0.0, 0.55, 0.25),
        Point3::new(-0.55, 0.0, 0.25),
        Point3::new(-0.35, -0.35, 0.25),
        Point3::new(0.0, -0.55, 0.25),
        Point3::new(0.35, -0.35, 0.25),
        Point3::new(0.35, 0.35, 0.8),
        Point3::new(0.0, 0.55, 0.8),
        Point3::new(-0.35, 0.35, 0.8),
        Point3::new(-0.55, 0.0, 0.8),
        Point3::new(-0.35, -0.35, 0.8),
        Point3::new(0.0, -0.55, 0.8),
        Point3::new(0.35, -0.35, 0.8),
    ]
}

/// Returns the fixed start configuration of the cage problem.
#[must_use]
pub fn cage_start() -> JointConfig {
    JointConfig::from_slice(&[0.0, -0.785, 0.0, -2.356, 0.0, 1.571, 0.785])
}

/// Returns the fixed goal configuration of the cage problem.
#[must_use]
pub fn cage_goal() -> JointConfig {
    JointConfig::from_slice(&[2.35, 1.0, 0.0, -0.8, 0.0, 2.5, 0.785])
}

/// Returns benchmark parameters for the cage problem with the reference
/// defaults.
///
/// # Example
///
/// ```
/// use plan_bench::scene;
///
/// let params = scene::cage_params();
/// assert!(params.validate().is_empty());
/// assert_eq!(params.base_centers().len(), 14);
/// ```
#[must_use]
pub fn cage_params() -> BenchmarkParams {
    BenchmarkParams::new(sphere_cage_centers(), cage_start(), cage_goal())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_cage_has_two_rings() {
        let centers = sphere_cage_centers();
        assert_eq!(centers.len(), 14);

        let lower = centers.iter().filter(|c| c.z == 0.25).count();
        let upper = centers.iter().filter(|c| c.z == 0.8).count();
        assert_eq!(lower, 7);
        assert_eq!(upper, 7);
    }

    #[test]
    fn test_endpoints_are_seven_joint() {
        assert_eq!(cage_start().len(), 7);
        assert_eq!(cage_goal().len(), 7);
        assert_ne!(cage_start(), cage_goal());
    }

    #[test]
    fn test_endpoints_flatten_to_planner_width() {
        let flat = cage_start().flattened(FLAT_JOINT_WIDTH).unwrap();
        assert_eq!(flat.len(), FLAT_JOINT_WIDTH);
        assert!(flat.values()[7..].iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_cage_params_defaults() {
        let params = cage_params();
        assert_eq!(params.trial_count(), 100);
        assert_eq!(params.variation(), 0.01);
        assert_eq!(params.radius(), 0.2);
        assert!(params.validate().is_empty());
    }
}
