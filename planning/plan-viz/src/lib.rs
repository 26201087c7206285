//! Trajectory conversion and playback for motion-planning benchmarks.
//!
//! This crate turns planned joint-space paths into renderable timed
//! trajectories and defines the playback seam the preview pass drives:
//!
//! - [`Trajectory`] / [`TimedWaypoint`]: timestamped playback frames
//! - [`interpolated_trajectory`]: straight interpolation between two
//!   configurations
//! - [`path_trajectory`]: arc-length resampling of a planned path
//! - [`Visualizer`] / [`TraceVisualizer`]: the playback capability and
//!   its headless implementation
//! - [`PreviewPass`]: one unperturbed-scene planning call, converted and
//!   played back
//!
//! The preview flow is deliberately separate from the benchmark loop in
//! `plan-bench`: it consumes no randomness and never contributes to the
//! statistical results.

#![doc(html_root_url = "https://docs.rs/plan-viz/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod playback;
pub mod preview;
pub mod trajectory;

pub use playback::{RobotModel, TraceVisualizer, Visualizer};
pub use preview::PreviewPass;
pub use trajectory::{interpolated_trajectory, path_trajectory, TimedWaypoint, Trajectory};
