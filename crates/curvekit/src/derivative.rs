//! Derivatives of the easing value functions.
//!
//! Each function returns the slope of its paired curve in [`crate::value`]
//! with respect to normalized progress, in the units of the remapped range.
//! This is not a velocity: divide by the real duration of the transition
//! (see [`crate::dispatch::velocity`]).
//!
//! The same endpoint shortcut applies: a progress of exactly `0.0` or `1.0`
//! is returned unchanged.

use crate::value::{
    bounce_curve_slope, elastic_shape, is_endpoint, BACK_IN_OUT_SCALE, BACK_OVERSHOOT,
    ELASTIC_PERIOD,
};
use std::f64::consts::{LN_2, PI};

#[must_use]
pub fn linear_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    end - start
}

/// Approximate slope of [`crate::value::spring`].
///
/// The closed form here is known to be slightly off. It is kept as the
/// historical formula rather than silently replaced, so treat the result as
/// an estimate.
#[must_use]
pub fn spring_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let t = value.clamp(0.0, 1.0);
    let delta = end - start;
    let phase = PI * t * (2.5 * t * t * t + 0.2);
    let decay = (1.0 - t).powf(2.2);

    delta
        * (6.0 * (1.0 - t) / 5.0 + 1.0)
        * (-2.2 * (1.0 - t).powf(1.2) * phase.sin()
            + decay * (PI * (2.5 * t * t * t + 0.2) + 7.5 * PI * t * t * t) * phase.cos()
            + 1.0)
        - 6.0 * delta * (decay * phase.sin() + t / 5.0)
}

#[must_use]
pub fn quad_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    2.0 * (end - start) * value
}

#[must_use]
pub fn quad_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    -delta * value - delta * (value - 2.0)
}

#[must_use]
pub fn quad_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return 2.0 * delta * v;
    }
    let u = v - 1.0;
    2.0 * delta * (1.0 - u)
}

#[must_use]
pub fn cubic_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    3.0 * (end - start) * value * value
}

#[must_use]
pub fn cubic_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    3.0 * delta * u * u
}

#[must_use]
pub fn cubic_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return 3.0 * delta * v * v;
    }
    let u = v - 2.0;
    3.0 * delta * u * u
}

#[must_use]
pub fn quart_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    4.0 * (end - start) * value * value * value
}

#[must_use]
pub fn quart_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    -4.0 * delta * u * u * u
}

#[must_use]
pub fn quart_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return 4.0 * delta * v * v * v;
    }
    let u = v - 2.0;
    -4.0 * delta * u * u * u
}

#[must_use]
pub fn quint_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    5.0 * (end - start) * value * value * value * value
}

#[must_use]
pub fn quint_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    5.0 * delta * u * u * u * u
}

#[must_use]
pub fn quint_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return 5.0 * delta * v * v * v * v;
    }
    let u = v - 2.0;
    5.0 * delta * u * u * u * u
}

#[must_use]
pub fn sine_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    (end - start) * 0.5 * PI * (0.5 * PI * value).sin()
}

#[must_use]
pub fn sine_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    (PI * 0.5) * delta * (value * (PI * 0.5)).cos()
}

#[must_use]
pub fn sine_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * 0.5 * PI * (PI * value).sin()
}

#[must_use]
pub fn expo_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    10.0 * LN_2 * (end - start) * 2.0_f64.powf(10.0 * (value - 1.0))
}

#[must_use]
pub fn expo_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    5.0 * LN_2 * delta * 2.0_f64.powf(1.0 - 10.0 * value)
}

#[must_use]
pub fn expo_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return 10.0 * LN_2 * delta * 2.0_f64.powf(10.0 * (v - 1.0));
    }
    let u = v - 1.0;
    (10.0 * LN_2 * delta) / 2.0_f64.powf(10.0 * u)
}

/// Grows without bound as progress approaches 1.
#[must_use]
pub fn circ_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    ((end - start) * value) / (1.0 - value * value).sqrt()
}

#[must_use]
pub fn circ_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    (-delta * u) / (1.0 - u * u).sqrt()
}

/// Infinite at the midpoint, where both arcs meet vertically.
#[must_use]
pub fn circ_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return (delta * v) / (1.0 - v * v).sqrt();
    }
    let u = v - 2.0;
    (-delta * u) / (1.0 - u * u).sqrt()
}

/// Delegates to [`bounce_out_d`] on the reflected progress.
///
/// Below about `1.1e-16`, `1.0 - value` rounds to `1.0` and the endpoint
/// shortcut of the delegate answers with `1.0` instead of a slope.
#[must_use]
pub fn bounce_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    bounce_out_d(1.0 - value, start, end)
}

#[must_use]
pub fn bounce_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    (end - start) * bounce_curve_slope(value)
}

// The half-speed value scale and the 2x progress scale cancel out.
#[must_use]
pub fn bounce_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    if value < 0.5 {
        return bounce_in_d(value * 2.0, 0.0, delta);
    }
    bounce_out_d(value * 2.0 - 1.0, 0.0, delta)
}

#[must_use]
pub fn back_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let s = BACK_OVERSHOOT;
    let delta = end - start;
    3.0 * (s + 1.0) * delta * value * value - 2.0 * s * delta * value
}

#[must_use]
pub fn back_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let s = BACK_OVERSHOOT;
    let delta = end - start;
    let u = value - 1.0;
    delta * ((s + 1.0) * u * u + 2.0 * u * ((s + 1.0) * u + s))
}

#[must_use]
pub fn back_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * ((s + 1.0) * v * v + 2.0 * v * ((s + 1.0) * v - s));
    }
    let u = v - 2.0;
    delta * ((s + 1.0) * u * u + 2.0 * u * ((s + 1.0) * u + s))
}

/// Delegates to [`elastic_out_d`] on the reflected progress.
///
/// Below about `1.1e-16`, `1.0 - value` rounds to `1.0` and the endpoint
/// shortcut of the delegate answers with `1.0` instead of a slope.
#[must_use]
pub fn elastic_in_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    elastic_out_d(1.0 - value, start, end)
}

#[must_use]
pub fn elastic_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let (a, s) = elastic_shape(delta);
    let p = ELASTIC_PERIOD;
    let phase = (2.0 * PI * (value - s)) / p;
    let decay = 2.0_f64.powf(1.0 - 10.0 * value);

    (a * PI * decay * phase.cos()) / p - 5.0 * LN_2 * a * decay * phase.sin()
}

#[must_use]
pub fn elastic_in_out_d(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let (a, s) = elastic_shape(delta);
    let p = ELASTIC_PERIOD;
    let u = value / 0.5 - 1.0;
    let phase = 2.0 * PI * (u - s) / p;

    if u < 0.0 {
        let growth = 2.0_f64.powf(10.0 * u);
        return -a * growth * (10.0 * LN_2 * phase.sin() + (2.0 * PI / p) * phase.cos());
    }
    let decay = 2.0_f64.powf(10.0 * u);
    a * ((2.0 * PI / p) * phase.cos() - 10.0 * LN_2 * phase.sin()) / decay
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::value;

    const STEP: f64 = 1e-6;

    fn numeric(f: fn(f64, f64, f64) -> f64, t: f64, start: f64, end: f64) -> f64 {
        (f(t + STEP, start, end) - f(t - STEP, start, end)) / (2.0 * STEP)
    }

    #[test]
    fn test_endpoints_echo_raw_progress() {
        assert_eq!(quad_in_d(0.0, 0.0, 10.0), 0.0);
        assert_eq!(quad_in_d(1.0, 0.0, 10.0), 1.0);
        assert_eq!(elastic_in_d(1.0, 0.0, 10.0), 1.0);
        assert_eq!(spring_d(0.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_linear_is_delta() {
        assert!((linear_d(0.3, 2.0, 7.0) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_in_out_includes_chain_factor() {
        // quad_in_out is 2t^2 on the first half
        assert!((quad_in_out_d(0.25, 0.0, 1.0) - 1.0).abs() < 1e-12);
        // cubic_in_out is 4t^3 on the first half
        assert!((cubic_in_out_d(0.25, 0.0, 1.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_in_out_slopes_continuous_at_midpoint() {
        for (f, slope) in [
            (quad_in_out_d as fn(f64, f64, f64) -> f64, 2.0),
            (cubic_in_out_d, 3.0),
            (quart_in_out_d, 4.0),
            (quint_in_out_d, 5.0),
            (expo_in_out_d, 10.0 * LN_2),
            (elastic_in_out_d, 10.0 * LN_2),
        ] {
            let below = f(0.5 - 1e-12, 0.0, 1.0);
            let at = f(0.5, 0.0, 1.0);
            assert!((below - slope).abs() < 1e-6, "below midpoint: {below}");
            assert!((at - slope).abs() < 1e-6, "at midpoint: {at}");
        }
    }

    #[test]
    fn test_circ_in_out_vertical_at_midpoint() {
        assert!(circ_in_out_d(0.5, 0.0, 1.0).is_infinite());
    }

    #[test]
    fn test_bounce_in_delegates_to_out() {
        for t in [0.05, 0.4, 0.77] {
            assert_eq!(bounce_in_d(t, 1.0, 3.0), bounce_out_d(1.0 - t, 1.0, 3.0));
        }
    }

    #[test]
    fn test_elastic_in_delegates_to_out() {
        for t in [0.05, 0.4, 0.77] {
            assert_eq!(elastic_in_d(t, 1.0, 3.0), elastic_out_d(1.0 - t, 1.0, 3.0));
        }
    }

    #[test]
    fn test_reflected_delegation_rounds_tiny_progress() {
        // 1.0 - 1e-17 == 1.0, so the delegate sees an endpoint
        assert_eq!(bounce_in_d(1e-17, 0.0, 10.0), 1.0);
        assert_eq!(elastic_in_d(1e-17, 0.0, 10.0), 1.0);
        // at 1e-15 the reflected progress is distinct from 1.0 again
        let t = 1e-15;
        let expected = 10.0 * 2.0 * 7.5625 * (1.0 - t - 2.625 / 2.75);
        assert!((bounce_in_d(t, 0.0, 10.0) - expected).abs() < 1e-9);
        assert!((expected - 6.875).abs() < 1e-6);
    }

    #[test]
    fn test_matches_numeric_slope_on_scaled_range() {
        let pairs: [(fn(f64, f64, f64) -> f64, fn(f64, f64, f64) -> f64); 6] = [
            (value::back_in_out, back_in_out_d),
            (value::bounce_in_out, bounce_in_out_d),
            (value::elastic_in, elastic_in_d),
            (value::elastic_in_out, elastic_in_out_d),
            (value::expo_out, expo_out_d),
            (value::circ_out, circ_out_d),
        ];
        for (f, d) in pairs {
            for t in [0.15, 0.35, 0.65, 0.85] {
                let expected = numeric(f, t, -2.0, 6.0);
                let actual = d(t, -2.0, 6.0);
                assert!(
                    (expected - actual).abs() < 1e-3,
                    "t={t}: numeric {expected} vs analytic {actual}"
                );
            }
        }
    }

    #[test]
    fn test_spring_d_is_finite() {
        for i in 1..100 {
            let t = f64::from(i) / 100.0;
            assert!(spring_d(t, 0.0, 1.0).is_finite());
        }
    }
}
