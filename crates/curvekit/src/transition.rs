//! Time-based transitions and their JSON configuration.
//!
//! A [`Transition`] binds a curve and an output range to a real duration, so
//! motion code can ask for the value and velocity at an elapsed time instead
//! of a normalized progress. Transitions are declared in a [`MotionConfig`]:
//!
//! ```json
//! {
//!   "transitions": [
//!     { "name": "fade_in", "curve": "SineOut", "duration_secs": 0.25 },
//!     { "name": "drop", "curve": "bounce_out", "range": { "start": 0.0, "end": 480.0 },
//!       "duration_secs": 1.2 }
//!   ]
//! }
//! ```
//!
//! `curve` takes a variant name (any case, `_`/`-` separators allowed) or a
//! raw catalog index.

use crate::catalog::{EasingType, Range};
use crate::result::{CurveError, CurveResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A curve played over a fixed duration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// Transition name (unique within a config)
    pub name: String,
    /// Curve to follow
    pub curve: EasingType,
    /// Output range, `(0, 1)` when omitted
    #[serde(default)]
    pub range: Range,
    /// Duration in seconds
    pub duration_secs: f64,
}

impl Transition {
    /// Create a transition over the unit range
    #[must_use]
    pub fn new(name: impl Into<String>, curve: EasingType, duration_secs: f64) -> Self {
        Self {
            name: name.into(),
            curve,
            range: Range::UNIT,
            duration_secs,
        }
    }

    /// Set the output range
    #[must_use]
    pub fn with_range(mut self, start: f64, end: f64) -> Self {
        self.range = Range::new(start, end);
        self
    }

    /// Check duration and bounds.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(CurveError::invalid_transition(
                &self.name,
                format!(
                    "duration must be a positive number of seconds, got {}",
                    self.duration_secs
                ),
            ));
        }
        if !self.range.is_finite() {
            return Err(CurveError::invalid_transition(
                &self.name,
                "range bounds must be finite",
            ));
        }
        Ok(())
    }

    /// Normalized progress after `elapsed_secs`, clamped to `[0, 1]`.
    #[must_use]
    pub fn progress_at(&self, elapsed_secs: f64) -> f64 {
        (elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }

    /// Curve output after `elapsed_secs`.
    ///
    /// Holds `range.start` until the transition begins and `range.end` once it
    /// has finished. The curve functions echo a progress of exactly 0 or 1,
    /// so both ends are answered here instead of by the curve.
    #[must_use]
    pub fn value_at(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs <= 0.0 {
            return self.range.start;
        }
        if self.is_finished(elapsed_secs) {
            return self.range.end;
        }
        self.curve.ease(self.progress_at(elapsed_secs), self.range)
    }

    /// Rate of change per second after `elapsed_secs`, zero outside the
    /// transition.
    #[must_use]
    pub fn velocity_at(&self, elapsed_secs: f64) -> f64 {
        if elapsed_secs <= 0.0 || self.is_finished(elapsed_secs) {
            return 0.0;
        }
        self.curve.slope(self.progress_at(elapsed_secs), self.range) / self.duration_secs
    }

    /// Whether the transition has reached its end.
    #[must_use]
    pub fn is_finished(&self, elapsed_secs: f64) -> bool {
        elapsed_secs >= self.duration_secs
    }
}

/// A set of named transitions, usually loaded from JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Declared transitions
    #[serde(default)]
    pub transitions: Vec<Transition>,
}

impl MotionConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> CurveResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        tracing::debug!(
            transitions = config.transitions.len(),
            "loaded motion config"
        );
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> CurveResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading motion config");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> CurveResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every transition and reject duplicate names.
    pub fn validate(&self) -> CurveResult<()> {
        let mut seen = HashSet::new();
        for transition in &self.transitions {
            transition.validate()?;
            if !seen.insert(transition.name.as_str()) {
                return Err(CurveError::DuplicateTransition {
                    name: transition.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Find a transition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.name == name)
    }

    /// Number of transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if the config has no transitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
