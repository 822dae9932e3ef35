//! Dispatch table from curve identifiers to value and derivative functions.
//!
//! # Architecture
//!
//! ```text
//! EasingType ──index──► VALUE_FUNCTIONS[i]       ──► f(progress, start, end)
//!            └─index──► DERIVATIVE_FUNCTIONS[i]  ──► f'(progress, start, end)
//!
//! raw index (persisted) ──► lookup_*_function ──► Option<EasingFn>
//! ```
//!
//! Both tables are `const` arrays ordered like [`EasingType::ALL`], so a
//! lookup is a bounds-checked index and the tables can be read from any
//! thread without synchronization.

use crate::catalog::{EasingType, Range};
use crate::derivative as d;
use crate::value as v;

/// Signature shared by every value and derivative function:
/// `(progress, start, end) -> output`.
pub type EasingFn = fn(f64, f64, f64) -> f64;

const VALUE_FUNCTIONS: [EasingFn; EasingType::COUNT] = [
    v::linear,
    v::sine_in,
    v::sine_out,
    v::sine_in_out,
    v::quad_in,
    v::quad_out,
    v::quad_in_out,
    v::cubic_in,
    v::cubic_out,
    v::cubic_in_out,
    v::quart_in,
    v::quart_out,
    v::quart_in_out,
    v::quint_in,
    v::quint_out,
    v::quint_in_out,
    v::expo_in,
    v::expo_out,
    v::expo_in_out,
    v::circ_in,
    v::circ_out,
    v::circ_in_out,
    v::back_in,
    v::back_out,
    v::back_in_out,
    v::elastic_in,
    v::elastic_out,
    v::elastic_in_out,
    v::bounce_in,
    v::bounce_out,
    v::bounce_in_out,
    v::spring,
];

const DERIVATIVE_FUNCTIONS: [EasingFn; EasingType::COUNT] = [
    d::linear_d,
    d::sine_in_d,
    d::sine_out_d,
    d::sine_in_out_d,
    d::quad_in_d,
    d::quad_out_d,
    d::quad_in_out_d,
    d::cubic_in_d,
    d::cubic_out_d,
    d::cubic_in_out_d,
    d::quart_in_d,
    d::quart_out_d,
    d::quart_in_out_d,
    d::quint_in_d,
    d::quint_out_d,
    d::quint_in_out_d,
    d::expo_in_d,
    d::expo_out_d,
    d::expo_in_out_d,
    d::circ_in_d,
    d::circ_out_d,
    d::circ_in_out_d,
    d::back_in_d,
    d::back_out_d,
    d::back_in_out_d,
    d::elastic_in_d,
    d::elastic_out_d,
    d::elastic_in_out_d,
    d::bounce_in_d,
    d::bounce_out_d,
    d::bounce_in_out_d,
    d::spring_d,
];

/// Value function for a curve.
#[must_use]
pub fn value_function(curve: EasingType) -> EasingFn {
    VALUE_FUNCTIONS[curve.index()]
}

/// Derivative function for a curve.
#[must_use]
pub fn derivative_function(curve: EasingType) -> EasingFn {
    DERIVATIVE_FUNCTIONS[curve.index()]
}

/// Value function for a raw identifier index.
///
/// Returns `None` for indices outside the catalog instead of falling back to
/// a default curve; callers decide how to degrade.
#[must_use]
pub fn lookup_value_function(index: usize) -> Option<EasingFn> {
    let found = VALUE_FUNCTIONS.get(index).copied();
    if found.is_none() {
        tracing::debug!(index, "no value function for easing index");
    }
    found
}

/// Derivative function for a raw identifier index, `None` outside the
/// catalog.
#[must_use]
pub fn lookup_derivative_function(index: usize) -> Option<EasingFn> {
    let found = DERIVATIVE_FUNCTIONS.get(index).copied();
    if found.is_none() {
        tracing::debug!(index, "no derivative function for easing index");
    }
    found
}

/// Evaluate a curve at `progress` within `[start, end]`.
#[must_use]
pub fn evaluate(curve: EasingType, progress: f64, start: f64, end: f64) -> f64 {
    value_function(curve)(progress, start, end)
}

/// Evaluate a curve over the default `(0, 1)` range.
#[must_use]
pub fn evaluate_unit(curve: EasingType, progress: f64) -> f64 {
    evaluate(curve, progress, Range::UNIT.start, Range::UNIT.end)
}

/// Slope of a curve at `progress` with respect to progress.
#[must_use]
pub fn evaluate_derivative(curve: EasingType, progress: f64, start: f64, end: f64) -> f64 {
    derivative_function(curve)(progress, start, end)
}

/// Instantaneous rate of change per second for a transition lasting
/// `duration_secs`.
///
/// The derivative functions work in normalized time; this divides by the real
/// duration. A zero duration yields an infinite or NaN result.
#[must_use]
pub fn velocity(curve: EasingType, progress: f64, duration_secs: f64, start: f64, end: f64) -> f64 {
    evaluate_derivative(curve, progress, start, end) / duration_secs
}
