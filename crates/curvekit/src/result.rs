//! Result and error types for curvekit.
//!
//! Evaluating a curve never fails. These errors only come from the outer
//! layers: parsing curve names, reading transition configs and validating
//! their contents.

use thiserror::Error;

/// Result type for curvekit operations
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur outside the pure evaluation path
#[derive(Debug, Error)]
pub enum CurveError {
    /// Curve name did not match any catalog entry
    #[error("Unknown easing curve: {name}")]
    UnknownCurve {
        /// Name as given by the caller
        name: String,
    },

    /// Raw identifier index outside the catalog
    #[error("Unknown easing curve index: {index}")]
    UnknownIndex {
        /// Raw index as persisted by external tooling
        index: u64,
    },

    /// Transition definition failed validation
    #[error("Invalid transition '{name}': {message}")]
    InvalidTransition {
        /// Transition name
        name: String,
        /// Error message
        message: String,
    },

    /// Two transitions in one config share a name
    #[error("Duplicate transition name: {name}")]
    DuplicateTransition {
        /// Transition name
        name: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CurveError {
    /// Create an unknown curve error
    #[must_use]
    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }

    /// Create an invalid transition error
    #[must_use]
    pub fn invalid_transition(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTransition {
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_curve_display() {
        let err = CurveError::unknown_curve("wobble");
        assert_eq!(err.to_string(), "Unknown easing curve: wobble");
    }

    #[test]
    fn test_unknown_index_display() {
        let err = CurveError::UnknownIndex { index: 99 };
        assert_eq!(err.to_string(), "Unknown easing curve index: 99");
    }

    #[test]
    fn test_invalid_transition_display() {
        let err = CurveError::invalid_transition("fade", "duration must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid transition 'fade': duration must be positive"
        );
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: CurveError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
