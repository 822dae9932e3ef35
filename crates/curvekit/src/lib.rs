//! curvekit: easing curves and their derivatives.
//!
//! A closed catalog of interpolation curves that map a normalized progress
//! to an output between a start and an end bound, each paired with its
//! analytic derivative so motion code can also read off instantaneous
//! velocity.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────────────┐    ┌───────────────────────┐
//! │  EasingType  │───►│  dispatch tables   │───►│ value::*  derivative::* │
//! │  (catalog)   │    │  (const fn arrays) │    │ (progress, start, end)  │
//! └──────────────┘    └────────────────────┘    └───────────────────────┘
//!         │                     │
//!         ▼                     ▼
//!   transition::MotionConfig   sampling (keyframes, derivative checks)
//! ```
//!
//! # Example
//!
//! ```
//! use curvekit::{evaluate, lookup_value_function, EasingType};
//!
//! let y = evaluate(EasingType::QuadInOut, 0.25, 0.0, 10.0);
//! assert!((y - 1.25).abs() < 1e-12);
//!
//! // Raw indices persisted by editor tooling may be out of date.
//! assert!(lookup_value_function(EasingType::QuadInOut.index()).is_some());
//! assert!(lookup_value_function(999).is_none());
//! ```
//!
//! Every value and derivative function echoes a progress of exactly `0.0` or
//! `1.0` back unchanged instead of remapping it to `start`/`end`.

#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod derivative;
pub mod dispatch;
mod result;
pub mod sampling;
pub mod transition;
pub mod value;

pub use catalog::{CurveFamily, Direction, EasingType, Range};
pub use dispatch::{
    derivative_function, evaluate, evaluate_derivative, evaluate_unit, lookup_derivative_function,
    lookup_value_function, value_function, velocity, EasingFn,
};
pub use result::{CurveError, CurveResult};
pub use sampling::{
    central_difference, check_catalog, check_curves, check_derivative, sample_curve,
    verify_curve, CurveVerification, DerivativeCheck, Keyframe, DEFAULT_SLOPE_TOLERANCE,
    DEFAULT_STEP, DERIVATIVE_SAMPLE_POINTS,
};
pub use transition::{MotionConfig, Transition};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::catalog::*;
    pub use super::dispatch::*;
    pub use super::result::{CurveError, CurveResult};
    pub use super::sampling::*;
    pub use super::transition::*;
}
