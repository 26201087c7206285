//! Descriptive statistics over benchmark results.
//!
//! Summarization operates over a [`ResultSet`] only — it never re-runs
//! trials or touches a collaborator. Each of the five trial-result fields
//! gets a [`FieldSummary`] with count, mean, sample standard deviation,
//! min, quartiles, and max; the two timing fields are converted to
//! microseconds before aggregation.
//!
//! # Example
//!
//! ```
//! use plan_bench::summarize;
//! use plan_types::{ResultSet, TrialResult};
//! use std::time::Duration;
//!
//! let results: ResultSet = (1..=4)
//!     .map(|i| {
//!         TrialResult::new()
//!             .with_planning_time(Duration::from_micros(i * 100))
//!             .with_planning_iterations(5)
//!     })
//!     .collect();
//!
//! let summary = summarize(&results);
//! assert_eq!(summary.planning_time_us().count(), 4);
//! assert!((summary.planning_time_us().mean() - 250.0).abs() < 1e-9);
//! assert!((summary.planning_iterations().std_dev() - 0.0).abs() < 1e-9);
//! ```

use std::fmt;
use std::time::Duration;

use plan_types::{ResultSet, TrialResult};

/// Descriptive statistics for one numeric field.
///
/// Mirrors the usual dataframe `describe()` row set: count, mean, sample
/// standard deviation (n−1 denominator), min, 25%/50%/75% quartiles
/// (linear interpolation), max. All statistics except the count are NaN
/// when there are no values; the standard deviation is NaN for a single
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSummary {
    count: usize,
    mean: f64,
    std_dev: f64,
    min: f64,
    q25: f64,
    median: f64,
    q75: f64,
    max: f64,
}

impl FieldSummary {
    /// Computes a summary over a slice of values.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                count: 0,
                mean: f64::NAN,
                std_dev: f64::NAN,
                min: f64::NAN,
                q25: f64::NAN,
                median: f64::NAN,
                q75: f64::NAN,
                max: f64::NAN,
            };
        }

        let count = values.len();
        #[allow(clippy::cast_precision_loss)]
        let n = count as f64;
        let mean = values.iter().sum::<f64>() / n;

        let std_dev = if count < 2 {
            f64::NAN
        } else {
            let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
            (sum_sq / (n - 1.0)).sqrt()
        };

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Self {
            count,
            mean,
            std_dev,
            min: sorted[0],
            q25: percentile(&sorted, 0.25),
            median: percentile(&sorted, 0.50),
            q75: percentile(&sorted, 0.75),
            max: sorted[count - 1],
        }
    }

    /// Returns the number of values.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns the mean.
    #[must_use]
    pub const fn mean(&self) -> f64 {
        self.mean
    }

    /// Returns the sample standard deviation (n−1 denominator).
    #[must_use]
    pub const fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Returns the minimum.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the 25th percentile.
    #[must_use]
    pub const fn q25(&self) -> f64 {
        self.q25
    }

    /// Returns the median.
    #[must_use]
    pub const fn median(&self) -> f64 {
        self.median
    }

    /// Returns the 75th percentile.
    #[must_use]
    pub const fn q75(&self) -> f64 {
        self.q75
    }

    /// Returns the maximum.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }
}

/// Linearly interpolated percentile over sorted values.
///
/// `sorted` must be non-empty and ascending; `q` in `[0, 1]`.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let position = q * (sorted.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = position.floor() as usize;
    let fraction = position - position.floor();

    if lower + 1 >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}

/// Converts a duration to fractional microseconds.
fn duration_us(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e6
}

#[allow(clippy::cast_precision_loss)]
fn iterations_as_f64(result: &TrialResult) -> f64 {
    result.planning_iterations() as f64
}

/// Per-field descriptive statistics for a benchmark run.
///
/// Rendered with `Display` as a `describe()`-style table, fields as
/// columns and statistics as rows.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkSummary {
    planning_time_us: FieldSummary,
    simplification_time_us: FieldSummary,
    initial_path_cost: FieldSummary,
    simplified_path_cost: FieldSummary,
    planning_iterations: FieldSummary,
}

impl BenchmarkSummary {
    /// Returns the planning-time summary, in microseconds.
    #[must_use]
    pub const fn planning_time_us(&self) -> &FieldSummary {
        &self.planning_time_us
    }

    /// Returns the simplification-time summary, in microseconds.
    #[must_use]
    pub const fn simplification_time_us(&self) -> &FieldSummary {
        &self.simplification_time_us
    }

    /// Returns the initial-path-cost summary.
    #[must_use]
    pub const fn initial_path_cost(&self) -> &FieldSummary {
        &self.initial_path_cost
    }

    /// Returns the simplified-path-cost summary.
    #[must_use]
    pub const fn simplified_path_cost(&self) -> &FieldSummary {
        &self.simplified_path_cost
    }

    /// Returns the planner-iteration summary.
    #[must_use]
    pub const fn planning_iterations(&self) -> &FieldSummary {
        &self.planning_iterations
    }
}

/// Computes per-field descriptive statistics over a result set.
///
/// Timing fields are converted to microseconds before aggregation. The
/// input is read as-is: trials are never re-run.
#[must_use]
pub fn summarize(results: &ResultSet) -> BenchmarkSummary {
    let field = |extract: fn(&TrialResult) -> f64| -> FieldSummary {
        let values: Vec<f64> = results.iter().map(extract).collect();
        FieldSummary::from_values(&values)
    };

    BenchmarkSummary {
        planning_time_us: field(|r| duration_us(r.planning_time())),
        simplification_time_us: field(|r| duration_us(r.simplification_time())),
        initial_path_cost: field(TrialResult::initial_path_cost),
        simplified_path_cost: field(TrialResult::simplified_path_cost),
        planning_iterations: field(iterations_as_f64),
    }
}

impl fmt::Display for BenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const COLUMNS: [&str; 5] = [
            "planning_time",
            "simplification_time",
            "initial_path_cost",
            "simplified_path_cost",
            "planning_iterations",
        ];

        let summaries = [
            &self.planning_time_us,
            &self.simplification_time_us,
            &self.initial_path_cost,
            &self.simplified_path_cost,
            &self.planning_iterations,
        ];

        let cell = |value: f64| -> String {
            if value.is_nan() {
                "-".to_string()
            } else {
                format!("{value:.6}")
            }
        };

        write!(f, "{:>7}", "")?;
        for column in COLUMNS {
            write!(f, "  {column:>20}")?;
        }
        writeln!(f)?;

        write!(f, "{:>7}", "count")?;
        for summary in summaries {
            write!(f, "  {:>20}", summary.count())?;
        }
        writeln!(f)?;

        let rows: [(&str, fn(&FieldSummary) -> f64); 7] = [
            ("mean", FieldSummary::mean),
            ("std", FieldSummary::std_dev),
            ("min", FieldSummary::min),
            ("25%", FieldSummary::q25),
            ("50%", FieldSummary::median),
            ("75%", FieldSummary::q75),
            ("max", FieldSummary::max),
        ];

        for (label, stat) in rows {
            write!(f, "{label:>7}")?;
            for summary in summaries {
                write!(f, "  {:>20}", cell(stat(summary)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
