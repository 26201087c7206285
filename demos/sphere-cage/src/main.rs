//! Sphere-cage arm-planning benchmark driver.
//!
//! Runs the fourteen-sphere cage problem in two modes:
//!
//! - `--benchmark`: seeded randomized trials through the orchestration
//!   loop, printing a summary statistics table
//! - `--visualize` (default on): one planning pass over the unperturbed
//!   scene, played back through the headless visualizer
//!
//! The planning collaborators here are demo stand-ins: a point-robot
//! validator over the sphere scene, a straight-line planner, and a
//! pass-through simplifier. Wiring a real planning library in means
//! implementing the `plan-types` capability traits and swapping these
//! out.

use std::time::Instant;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use nalgebra::Point3;
use plan_bench::{scene, summarize, TrialOrchestrator};
use plan_types::{
    Environment, JointConfig, JointPath, PlanOutcome, PlanSettings, Planner, PlannerKind,
    PlannerOverrides, PlanningError, SimplifyOutcome, SimplifySettings, Simplifier,
    StateValidator,
};
use plan_viz::{interpolated_trajectory, PreviewPass, RobotModel, TraceVisualizer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Sphere-cage arm-planning benchmark
#[derive(Parser)]
#[command(name = "sphere-cage")]
#[command(about = "Randomized sphere-cage planning trials and playback", long_about = None)]
#[command(version)]
struct Cli {
    /// Maximum per-axis obstacle perturbation
    #[arg(long, default_value_t = 0.01)]
    variation: f64,

    /// Run the randomized benchmark and print summary statistics
    #[arg(long)]
    benchmark: bool,

    /// Number of benchmark trials
    #[arg(long, default_value_t = 100)]
    n_trials: usize,

    /// Shared obstacle radius
    #[arg(long, default_value_t = 0.2)]
    radius: f64,

    /// Play back a planned trajectory after any benchmarking
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    visualize: bool,

    /// Planner variant to configure
    #[arg(long, value_enum, default_value_t = PlannerChoice::FlatPrm)]
    planner: PlannerChoice,

    /// Planner-specific override as NAME=VALUE; repeatable, forwarded
    /// verbatim to the settings layer
    #[arg(long = "set", value_name = "NAME=VALUE")]
    set: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PlannerChoice {
    FlatPrm,
    Prm,
    Rrtc,
}

impl From<PlannerChoice> for PlannerKind {
    fn from(choice: PlannerChoice) -> Self {
        match choice {
            PlannerChoice::FlatPrm => Self::FlatPrm,
            PlannerChoice::Prm => Self::Prm,
            PlannerChoice::Rrtc => Self::Rrtc,
        }
    }
}

/// Demo validator for a point robot: the first three joint coordinates
/// are the robot's position, which must clear every sphere.
struct PointValidator;

impl StateValidator for PointValidator {
    fn is_valid(&self, config: &JointConfig, environment: &Environment) -> bool {
        let position = Point3::new(
            config.get(0).unwrap_or(0.0),
            config.get(1).unwrap_or(0.0),
            config.get(2).unwrap_or(0.0),
        );
        environment
            .spheres()
            .iter()
            .all(|sphere| !sphere.contains(&position))
    }
}

/// Demo planner: connects the endpoints directly, timing the call.
struct LinePlanner;

impl Planner for LinePlanner {
    fn plan(
        &mut self,
        start: &JointConfig,
        goal: &JointConfig,
        _environment: &Environment,
    ) -> Result<PlanOutcome, PlanningError> {
        let timer = Instant::now();
        let path = JointPath::from_endpoints(start.clone(), goal.clone());
        Ok(PlanOutcome::new(path, timer.elapsed(), 1))
    }
}

/// Demo simplifier: returns the path unchanged, timing the call.
struct PassThroughSimplifier;

impl Simplifier for PassThroughSimplifier {
    fn simplify(
        &mut self,
        path: &JointPath,
        _environment: &Environment,
    ) -> Result<SimplifyOutcome, PlanningError> {
        let timer = Instant::now();
        let cost = path.cost();
        Ok(SimplifyOutcome::new(path.clone(), timer.elapsed(), cost, cost))
    }
}

fn run_benchmark(cli: &Cli) -> Result<()> {
    let params = scene::cage_params()
        .with_trial_count(cli.n_trials)
        .with_variation(cli.variation)
        .with_radius(cli.radius);

    let mut orchestrator =
        TrialOrchestrator::new(PointValidator, LinePlanner, PassThroughSimplifier);

    // Fixed seed: the whole trial sequence is reproducible run to run.
    let mut rng = StdRng::seed_from_u64(0);
    let results = orchestrator.run_benchmark(&params, &mut rng)?;

    info!(
        recorded = results.len(),
        requested = cli.n_trials,
        "benchmark finished"
    );
    println!("{}", summarize(&results));
    Ok(())
}

fn run_visualization(cli: &Cli) -> Result<()> {
    let robot = RobotModel::seven_joint_arm();
    let start = scene::cage_start();
    let goal = scene::cage_goal();

    // Reference straight-line playback between the flattened endpoints.
    let start_flat = start.flattened(robot.flat_width())?;
    let goal_flat = goal.flattened(robot.flat_width())?;
    let reference = interpolated_trajectory(&start_flat, &goal_flat, 3.0, 100)?;
    info!(
        frames = reference.len(),
        duration_s = reference.duration(),
        "reference trajectory built"
    );

    let mut planner = LinePlanner;
    let mut visualizer = TraceVisualizer::new();
    let trajectory = PreviewPass::new().run(
        &mut planner,
        &mut visualizer,
        &robot,
        &scene::sphere_cage_centers(),
        cli.radius,
        &start,
        &goal,
    )?;

    info!(
        frames = visualizer.frames_played(),
        duration_s = trajectory.duration(),
        "playback complete"
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let overrides = PlannerOverrides::from_pairs(&cli.set)?;
    let kind = PlannerKind::from(cli.planner);

    let mut plan_settings = PlanSettings::default();
    plan_settings.apply_overrides(&overrides);
    let mut simplify_settings = SimplifySettings::default();
    simplify_settings.apply_overrides(&overrides);

    let mut issues = plan_settings.validate();
    issues.extend(simplify_settings.validate());
    if !issues.is_empty() {
        anyhow::bail!("invalid settings: {}", issues.join("; "));
    }

    info!(
        planner = kind.name(),
        flattened = kind.uses_flattened(),
        max_iterations = plan_settings.max_iterations(),
        max_samples = plan_settings.max_samples(),
        connection_radius = plan_settings.connection_radius(),
        shortcut_samples = simplify_settings.shortcut_samples(),
        overrides = overrides.len(),
        "planner configured"
    );

    if cli.benchmark {
        run_benchmark(&cli)?;
    }

    if cli.visualize {
        run_visualization(&cli)?;
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_match_reference() {
        let cli = Cli::parse_from(["sphere-cage"]);
        assert!((cli.variation - 0.01).abs() < 1e-12);
        assert!(!cli.benchmark);
        assert_eq!(cli.n_trials, 100);
        assert!((cli.radius - 0.2).abs() < 1e-12);
        assert!(cli.visualize);
        assert!(matches!(cli.planner, PlannerChoice::FlatPrm));
        assert!(cli.set.is_empty());
    }

    #[test]
    fn test_cli_parses_overrides_and_flags() {
        let cli = Cli::parse_from([
            "sphere-cage",
            "--benchmark",
            "--n-trials",
            "10",
            "--visualize",
            "false",
            "--planner",
            "rrtc",
            "--set",
            "max_samples=500",
            "--set",
            "roadmap=sparse",
        ]);
        assert!(cli.benchmark);
        assert_eq!(cli.n_trials, 10);
        assert!(!cli.visualize);
        assert!(matches!(cli.planner, PlannerChoice::Rrtc));
        assert_eq!(cli.set.len(), 2);

        let overrides = PlannerOverrides::from_pairs(&cli.set).unwrap();
        let mut settings = PlanSettings::default();
        settings.apply_overrides(&overrides);
        assert_eq!(settings.max_samples(), 500);
    }

    #[test]
    fn test_point_validator_respects_spheres() {
        let mut environment = Environment::new();
        environment.add_sphere(plan_types::SphereObstacle::new(
            Point3::new(0.0, 0.0, 0.0),
            0.5,
        ));

        let validator = PointValidator;
        let inside = JointConfig::from_slice(&[0.1, 0.0, 0.0, 9.9]);
        let outside = JointConfig::from_slice(&[2.0, 0.0, 0.0, 9.9]);

        assert!(!validator.is_valid(&inside, &environment));
        assert!(validator.is_valid(&outside, &environment));
    }

    #[test]
    fn test_cage_endpoints_are_feasible_for_point_robot() {
        let mut environment = Environment::new();
        for center in scene::sphere_cage_centers() {
            environment.add_sphere(plan_types::SphereObstacle::new(center, 0.2));
        }

        let validator = PointValidator;
        assert!(validator.is_valid(&scene::cage_start(), &environment));
        assert!(validator.is_valid(&scene::cage_goal(), &environment));
    }

    #[test]
    fn test_line_planner_connects_endpoints() {
        let mut planner = LinePlanner;
        let outcome = planner
            .plan(
                &JointConfig::from_slice(&[0.0, 0.0]),
                &JointConfig::from_slice(&[1.0, 1.0]),
                &Environment::new(),
            )
            .unwrap();
        assert_eq!(outcome.path().len(), 2);
        assert_eq!(outcome.iterations(), 1);
    }

    #[test]
    fn test_pass_through_simplifier_keeps_cost() {
        let path = JointPath::from_endpoints(
            JointConfig::from_slice(&[0.0, 0.0]),
            JointConfig::from_slice(&[3.0, 4.0]),
        );
        let mut simplifier = PassThroughSimplifier;
        let outcome = simplifier.simplify(&path, &Environment::new()).unwrap();
        assert!((outcome.initial_cost() - 5.0).abs() < 1e-12);
        assert!((outcome.simplified_cost() - 5.0).abs() < 1e-12);
    }
}
