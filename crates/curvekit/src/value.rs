//! Easing value functions.
//!
//! Every function has the [`EasingFn`](crate::EasingFn) shape
//! `(progress, start, end) -> f64`. The curve is computed over the
//! normalized progress and remapped linearly into `[start, end]`.
//!
//! A progress of exactly `0.0` or `1.0` is echoed back unchanged, without
//! being remapped. Callers that pass a non-unit range get `0.0`/`1.0` at the
//! endpoints, not `start`/`end`. Existing assets depend on this, so it is
//! kept as is.
//!
//! Progress is not clamped (only [`spring`] clamps), so Back, Elastic and
//! friends can be driven past the endpoints on purpose.

use std::f64::consts::PI;

/// Overshoot of the Back family.
pub(crate) const BACK_OVERSHOOT: f64 = 1.70158;
/// Extra overshoot applied by `BackInOut`.
pub(crate) const BACK_IN_OUT_SCALE: f64 = 1.525;

/// Oscillation period of the Elastic family (in progress units).
pub(crate) const ELASTIC_PERIOD: f64 = 0.3;
/// Elastic amplitude. Zero selects the default (the range delta).
pub(crate) const ELASTIC_AMPLITUDE: f64 = 0.0;

pub(crate) const BOUNCE_COEFFICIENT: f64 = 7.5625;
pub(crate) const BOUNCE_DIVISOR: f64 = 2.75;

/// Relative distance from the end at which an Elastic progress snaps to `end`.
const ELASTIC_SNAP_EPSILON: f64 = 1e-6;

/// Endpoint shortcut shared by every value and derivative function.
#[inline]
pub(crate) fn is_endpoint(value: f64) -> bool {
    value == 0.0 || value == 1.0
}

/// Equality within [`ELASTIC_SNAP_EPSILON`] scaled by the larger magnitude.
#[inline]
fn approximately(a: f64, b: f64) -> bool {
    (a - b).abs() < ELASTIC_SNAP_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Amplitude and phase shift of an Elastic curve spanning `delta`.
///
/// With the fixed zero amplitude the first branch is always taken; the
/// `asin` branch only matters for an amplitude at least as large as `|delta|`.
pub(crate) fn elastic_shape(delta: f64) -> (f64, f64) {
    let amplitude = ELASTIC_AMPLITUDE;
    if amplitude == 0.0 || amplitude < delta.abs() {
        (delta, ELASTIC_PERIOD / 4.0)
    } else {
        (
            amplitude,
            ELASTIC_PERIOD / (2.0 * PI) * (delta / amplitude).asin(),
        )
    }
}

/// Normalized bounce-out curve, without the endpoint shortcut.
pub(crate) fn bounce_curve(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_DIVISOR {
        BOUNCE_COEFFICIENT * t * t
    } else if t < 2.0 / BOUNCE_DIVISOR {
        let t = t - 1.5 / BOUNCE_DIVISOR;
        BOUNCE_COEFFICIENT * t * t + 0.75
    } else if t < 2.5 / BOUNCE_DIVISOR {
        let t = t - 2.25 / BOUNCE_DIVISOR;
        BOUNCE_COEFFICIENT * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_DIVISOR;
        BOUNCE_COEFFICIENT * t * t + 0.984_375
    }
}

/// Slope of [`bounce_curve`], with the same segment thresholds.
pub(crate) fn bounce_curve_slope(t: f64) -> f64 {
    let offset = if t < 1.0 / BOUNCE_DIVISOR {
        0.0
    } else if t < 2.0 / BOUNCE_DIVISOR {
        1.5 / BOUNCE_DIVISOR
    } else if t < 2.5 / BOUNCE_DIVISOR {
        2.25 / BOUNCE_DIVISOR
    } else {
        2.625 / BOUNCE_DIVISOR
    };
    2.0 * BOUNCE_COEFFICIENT * (t - offset)
}

/// Constant speed from `start` to `end`.
#[must_use]
pub fn linear(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    (end - start) * value + start
}

/// Hand-tuned damped spring. Clamps progress to `[0, 1]`.
#[must_use]
pub fn spring(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let t = value.clamp(0.0, 1.0);
    let eased = ((t * PI * (0.2 + 2.5 * t * t * t)).sin() * (1.0 - t).powf(2.2) + t)
        * (1.0 + 1.2 * (1.0 - t));
    start + (end - start) * eased
}

#[must_use]
pub fn quad_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * value * value + start
}

#[must_use]
pub fn quad_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    -delta * value * (value - 2.0) + start
}

#[must_use]
pub fn quad_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * v * v + start;
    }
    let v = v - 1.0;
    -delta * 0.5 * (v * (v - 2.0) - 1.0) + start
}

#[must_use]
pub fn cubic_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * value * value * value + start
}

#[must_use]
pub fn cubic_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    delta * (u * u * u + 1.0) + start
}

#[must_use]
pub fn cubic_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * v * v * v + start;
    }
    let u = v - 2.0;
    delta * 0.5 * (u * u * u + 2.0) + start
}

#[must_use]
pub fn quart_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * value * value * value * value + start
}

#[must_use]
pub fn quart_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    -delta * (u * u * u * u - 1.0) + start
}

#[must_use]
pub fn quart_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * v * v * v * v + start;
    }
    let u = v - 2.0;
    -delta * 0.5 * (u * u * u * u - 2.0) + start
}

#[must_use]
pub fn quint_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * value * value * value * value * value + start
}

#[must_use]
pub fn quint_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    delta * (u * u * u * u * u + 1.0) + start
}

#[must_use]
pub fn quint_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * v * v * v * v * v + start;
    }
    let u = v - 2.0;
    delta * 0.5 * (u * u * u * u * u + 2.0) + start
}

#[must_use]
pub fn sine_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    -delta * (value * (PI * 0.5)).cos() + delta + start
}

#[must_use]
pub fn sine_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * (value * (PI * 0.5)).sin() + start
}

#[must_use]
pub fn sine_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    -delta * 0.5 * ((PI * value).cos() - 1.0) + start
}

/// `2^(10(t-1))`. Does not reach exactly zero just above `t = 0`.
#[must_use]
pub fn expo_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * 2.0_f64.powf(10.0 * (value - 1.0)) + start
}

#[must_use]
pub fn expo_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * (-(2.0_f64.powf(-10.0 * value)) + 1.0) + start
}

#[must_use]
pub fn expo_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * 2.0_f64.powf(10.0 * (v - 1.0)) + start;
    }
    let u = v - 1.0;
    delta * 0.5 * (-(2.0_f64.powf(-10.0 * u)) + 2.0) + start
}

#[must_use]
pub fn circ_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    -delta * ((1.0 - value * value).sqrt() - 1.0) + start
}

#[must_use]
pub fn circ_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let u = value - 1.0;
    delta * (1.0 - u * u).sqrt() + start
}

#[must_use]
pub fn circ_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if v < 1.0 {
        return -delta * 0.5 * ((1.0 - v * v).sqrt() - 1.0) + start;
    }
    let u = v - 2.0;
    delta * 0.5 * ((1.0 - u * u).sqrt() + 1.0) + start
}

/// Bounce-out reflected in time and value.
#[must_use]
pub fn bounce_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta - delta * bounce_curve(1.0 - value) + start
}

/// Four decaying parabolic hops settling on `end`.
#[must_use]
pub fn bounce_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    delta * bounce_curve(value) + start
}

#[must_use]
pub fn bounce_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    if value < 0.5 {
        let t = value * 2.0;
        return (delta - delta * bounce_curve(1.0 - t)) * 0.5 + start;
    }
    delta * bounce_curve(value * 2.0 - 1.0) * 0.5 + delta * 0.5 + start
}

/// Pulls back below `start` before accelerating towards `end`.
#[must_use]
pub fn back_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let s = BACK_OVERSHOOT;
    delta * value * value * ((s + 1.0) * value - s) + start
}

/// Shoots past `end` and settles back.
#[must_use]
pub fn back_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let s = BACK_OVERSHOOT;
    let u = value - 1.0;
    delta * (u * u * ((s + 1.0) * u + s) + 1.0) + start
}

#[must_use]
pub fn back_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let s = BACK_OVERSHOOT * BACK_IN_OUT_SCALE;
    let v = value / 0.5;
    if v < 1.0 {
        return delta * 0.5 * (v * v * ((s + 1.0) * v - s)) + start;
    }
    let u = v - 2.0;
    delta * 0.5 * (u * u * ((s + 1.0) * u + s) + 2.0) + start
}

#[must_use]
pub fn elastic_in(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    if approximately(value, 1.0) {
        return start + delta;
    }

    let (a, s) = elastic_shape(delta);
    let u = value - 1.0;
    -(a * 2.0_f64.powf(10.0 * u) * ((u - s) * (2.0 * PI) / ELASTIC_PERIOD).sin()) + start
}

#[must_use]
pub fn elastic_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    if approximately(value, 1.0) {
        return start + delta;
    }

    let (a, s) = elastic_shape(delta);
    a * 2.0_f64.powf(-10.0 * value) * ((value - s) * (2.0 * PI) / ELASTIC_PERIOD).sin()
        + delta
        + start
}

#[must_use]
pub fn elastic_in_out(value: f64, start: f64, end: f64) -> f64 {
    if is_endpoint(value) {
        return value;
    }

    let delta = end - start;
    let v = value / 0.5;
    if approximately(v, 2.0) {
        return start + delta;
    }

    let (a, s) = elastic_shape(delta);
    let u = v - 1.0;
    let wave = ((u - s) * (2.0 * PI) / ELASTIC_PERIOD).sin();
    if v < 1.0 {
        return -0.5 * (a * 2.0_f64.powf(10.0 * u) * wave) + start;
    }
    a * 2.0_f64.powf(-10.0 * u) * wave * 0.5 + delta + start
}
