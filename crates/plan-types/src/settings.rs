//! Planner and simplifier settings.
//!
//! This module defines the configuration surface the orchestration layer
//! hands to its planning collaborators:
//!
//! - [`PlannerKind`]: which planner variant to configure
//! - [`PlanSettings`] / [`SimplifySettings`]: builder-style settings
//! - [`PlannerOverrides`]: an opaque name→value bag of planner-specific
//!   options, forwarded verbatim from the process surface and interpreted
//!   only by the settings layer
//!
//! # Example
//!
//! ```
//! use plan_types::{PlanSettings, PlannerOverrides, OverrideValue};
//!
//! let overrides = PlannerOverrides::new()
//!     .with("max_iterations", OverrideValue::Int(500))
//!     .with("connection_radius", OverrideValue::Float(2.5));
//!
//! let mut settings = PlanSettings::default();
//! settings.apply_overrides(&overrides);
//! assert_eq!(settings.max_iterations(), 500);
//! ```

use crate::error::PlanningError;

/// Identifier selecting a planner variant.
///
/// The flattened variant consumes flattened (zero-padded) configurations;
/// the others consume compact configurations. The orchestrator picks the
/// configuration form matching the variant in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlannerKind {
    /// Flattened probabilistic roadmap (the reference default).
    #[default]
    FlatPrm,
    /// Standard probabilistic roadmap.
    Prm,
    /// Bidirectional rapidly-exploring random tree.
    Rrtc,
}

impl PlannerKind {
    /// Returns the canonical name of this variant.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::PlannerKind;
    ///
    /// assert_eq!(PlannerKind::FlatPrm.name(), "flat_prm");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FlatPrm => "flat_prm",
            Self::Prm => "prm",
            Self::Rrtc => "rrtc",
        }
    }

    /// Parses a variant from its canonical name.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::PlannerKind;
    ///
    /// assert_eq!(PlannerKind::from_name("rrtc"), Some(PlannerKind::Rrtc));
    /// assert_eq!(PlannerKind::from_name("dijkstra"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flat_prm" => Some(Self::FlatPrm),
            "prm" => Some(Self::Prm),
            "rrtc" => Some(Self::Rrtc),
            _ => None,
        }
    }

    /// Returns `true` if this variant consumes flattened configurations.
    #[must_use]
    pub const fn uses_flattened(&self) -> bool {
        matches!(self, Self::FlatPrm)
    }
}

/// A single planner-specific option value.
///
/// Values are forwarded verbatim; the orchestrator never interprets them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverrideValue {
    /// A floating-point option.
    Float(f64),
    /// An integer option.
    Int(i64),
    /// A boolean option.
    Bool(bool),
    /// An uninterpreted text option.
    Text(String),
}

impl OverrideValue {
    /// Parses a value from its textual form.
    ///
    /// Tries `bool`, then integer, then float; anything else is kept as
    /// text.
    ///
    /// # Example
    ///
    /// ```
    /// use plan_types::OverrideValue;
    ///
    /// assert_eq!(OverrideValue::parse("true"), OverrideValue::Bool(true));
    /// assert_eq!(OverrideValue::parse("42"), OverrideValue::Int(42));
    /// assert_eq!(OverrideValue::parse("0.5"), OverrideValue::Float(0.5));
    /// assert_eq!(
    ///     OverrideValue::parse("euclidean"),
    ///     OverrideValue::Text("euclidean".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        if let Ok(value) = text.parse::<bool>() {
            return Self::Bool(value);
        }
        if let Ok(value) = text.parse::<i64>() {
            return Self::Int(value);
        }
        if let Ok(value) = text.parse::<f64>() {
            return Self::Float(value);
        }
        Self::Text(text.to_string())
    }

    /// Returns the value as a float, converting integers.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            #[allow(clippy::cast_precision_loss)]
            Self::Int(value) => Some(*value as f64),
            _ => None,
        }
    }

    /// Returns the value as an integer.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the value as text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// An ordered, opaque bag of planner-specific option overrides.
///
/// Re-expresses the dynamic keyword passthrough of the reference driver as
/// an explicit mapping: the process surface fills the bag, the settings
/// layer consumes the names it recognizes, and unrecognized names pass
/// through untouched for other collaborators. Insertion order is
/// preserved.
///
/// # Example
///
/// ```
/// use plan_types::{OverrideValue, PlannerOverrides};
///
/// let overrides = PlannerOverrides::from_pairs(&[
///     "max_samples=2000".to_string(),
///     "roadmap=sparse".to_string(),
/// ]).unwrap();
///
/// assert_eq!(overrides.len(), 2);
/// assert_eq!(
///     overrides.get("max_samples"),
///     Some(&OverrideValue::Int(2000))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlannerOverrides {
    /// Name→value entries in insertion order.
    entries: Vec<(String, OverrideValue)>,
}

impl PlannerOverrides {
    /// Creates an empty override bag.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an override, replacing any previous value for the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: OverrideValue) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an override, replacing any previous value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: OverrideValue) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Returns the value for `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OverrideValue> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, OverrideValue)> {
        self.entries.iter()
    }

    /// Builds a bag from `name=value` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`PlanningError::InvalidSettings`] for a pair with no `=` or
    /// an empty name.
    pub fn from_pairs(pairs: &[String]) -> Result<Self, PlanningError> {
        let mut overrides = Self::new();
        for pair in pairs {
            let (name, value) = pair.split_once('=').ok_or_else(|| {
                PlanningError::invalid_settings(format!("override '{pair}' is not name=value"))
            })?;
            if name.is_empty() {
                return Err(PlanningError::invalid_settings(format!(
                    "override '{pair}' has an empty name"
                )));
            }
            overrides.set(name, OverrideValue::parse(value));
        }
        Ok(overrides)
    }
}

/// Settings for a planning call.
///
/// # Example
///
/// ```
/// use plan_types::PlanSettings;
///
/// let settings = PlanSettings::default()
///     .with_max_iterations(50_000)
///     .with_connection_radius(1.0);
///
/// assert!(settings.validate().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanSettings {
    /// Maximum planner iterations before giving up.
    max_iterations: usize,
    /// Maximum number of sampled configurations.
    max_samples: usize,
    /// Neighbor connection radius in joint space.
    connection_radius: f64,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            max_samples: 10_000,
            connection_radius: 1.5,
        }
    }
}

impl PlanSettings {
    /// Sets the maximum planner iterations.
    #[must_use]
    pub const fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the maximum number of sampled configurations.
    #[must_use]
    pub const fn with_max_samples(mut self, samples: usize) -> Self {
        self.max_samples = samples;
        self
    }

    /// Sets the neighbor connection radius.
    #[must_use]
    pub const fn with_connection_radius(mut self, radius: f64) -> Self {
        self.connection_radius = radius;
        self
    }

    /// Returns the maximum planner iterations.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the maximum number of sampled configurations.
    #[must_use]
    pub const fn max_samples(&self) -> usize {
        self.max_samples
    }

    /// Returns the neighbor connection radius.
    #[must_use]
    pub const fn connection_radius(&self) -> f64 {
        self.connection_radius
    }

    /// Applies recognized overrides from the bag.
    ///
    /// Recognized names: `max_iterations`, `max_samples`,
    /// `connection_radius`. Unrecognized names are left in the bag for
    /// other collaborators.
    pub fn apply_overrides(&mut self, overrides: &PlannerOverrides) {
        if let Some(value) = overrides.get("max_iterations").and_then(OverrideValue::as_i64) {
            self.max_iterations = value.max(0).unsigned_abs() as usize;
        }
        if let Some(value) = overrides.get("max_samples").and_then(OverrideValue::as_i64) {
            self.max_samples = value.max(0).unsigned_abs() as usize;
        }
        if let Some(value) = overrides
            .get("connection_radius")
            .and_then(OverrideValue::as_f64)
        {
            self.connection_radius = value;
        }
    }

    /// Validates the settings, returning a list of issues.
    ///
    /// An empty list means the settings are usable.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.max_iterations == 0 {
            issues.push("max_iterations must be positive".to_string());
        }
        if self.max_samples == 0 {
            issues.push("max_samples must be positive".to_string());
        }
        if self.connection_radius <= 0.0 {
            issues.push("connection_radius must be positive".to_string());
        }
        issues
    }
}

/// Settings for a path-simplification call.
///
/// # Example
///
/// ```
/// use plan_types::SimplifySettings;
///
/// let settings = SimplifySettings::default().with_shortcut_samples(50);
/// assert_eq!(settings.shortcut_samples(), 50);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimplifySettings {
    /// Maximum simplification passes.
    max_iterations: usize,
    /// Number of random shortcut attempts per pass.
    shortcut_samples: usize,
}

impl Default for SimplifySettings {
    fn default() -> Self {
        Self {
            max_iterations: 10,
            shortcut_samples: 100,
        }
    }
}

impl SimplifySettings {
    /// Sets the maximum simplification passes.
    #[must_use]
    pub const fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the number of random shortcut attempts per pass.
    #[must_use]
    pub const fn with_shortcut_samples(mut self, samples: usize) -> Self {
        self.shortcut_samples = samples;
        self
    }

    /// Returns the maximum simplification passes.
    #[must_use]
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Returns the number of random shortcut attempts per pass.
    #[must_use]
    pub const fn shortcut_samples(&self) -> usize {
        self.shortcut_samples
    }

    /// Applies recognized overrides from the bag.
    ///
    /// Recognized names: `simplify_max_iterations`, `shortcut_samples`.
    pub fn apply_overrides(&mut self, overrides: &PlannerOverrides) {
        if let Some(value) = overrides
            .get("simplify_max_iterations")
            .and_then(OverrideValue::as_i64)
        {
            self.max_iterations = value.max(0).unsigned_abs() as usize;
        }
        if let Some(value) = overrides
            .get("shortcut_samples")
            .and_then(OverrideValue::as_i64)
        {
            self.shortcut_samples = value.max(0).unsigned_abs() as usize;
        }
    }

    /// Validates the settings, returning a list of issues.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.max_iterations == 0 {
            issues.push("max_iterations must be positive".to_string());
        }
        issues
    }
}
