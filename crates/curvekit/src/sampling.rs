//! Curve sampling and verification.
//!
//! Samples curves into keyframes, checks recorded keyframes against a
//! curve, and checks each analytic derivative against a central finite
//! difference of its value function.

use crate::catalog::{EasingType, Range};
use crate::dispatch::EasingFn;
use serde::{Deserialize, Serialize};

/// Progress values at which derivatives are checked.
pub const DERIVATIVE_SAMPLE_POINTS: [f64; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];

/// Default finite-difference step.
///
/// Small enough that the curvature jump of `ElasticInOut` at its midpoint
/// stays well inside [`DEFAULT_SLOPE_TOLERANCE`]; at `1e-4` it alone
/// contributes an error of about `0.04`.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Default tolerance between analytic and numeric slopes.
pub const DEFAULT_SLOPE_TOLERANCE: f64 = 1e-2;

/// A sampled point of a curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Normalized progress
    pub t: f64,
    /// Curve output at `t`
    pub value: f64,
}

/// Result of checking keyframes against a curve.
#[derive(Clone, Debug, Serialize)]
pub struct CurveVerification {
    /// Expected curve
    pub expected: EasingType,
    /// Range the curve was evaluated in
    pub range: Range,
    /// Maximum deviation from expected curve
    pub max_deviation: f64,
    /// Mean deviation
    pub mean_deviation: f64,
    /// Whether verification passed
    pub passed: bool,
    /// Per-keyframe deviations
    pub deviations: Vec<f64>,
}

/// Check recorded keyframes against an expected curve.
///
/// An empty keyframe list passes trivially.
#[must_use]
pub fn verify_curve(
    keyframes: &[Keyframe],
    expected: EasingType,
    range: Range,
    tolerance: f64,
) -> CurveVerification {
    if keyframes.is_empty() {
        return CurveVerification {
            expected,
            range,
            max_deviation: 0.0,
            mean_deviation: 0.0,
            passed: true,
            deviations: Vec::new(),
        };
    }

    let mut max_dev: f64 = 0.0;
    let mut sum_dev: f64 = 0.0;
    let mut deviations = Vec::with_capacity(keyframes.len());

    for kf in keyframes {
        let deviation = (kf.value - expected.ease(kf.t, range)).abs();
        deviations.push(deviation);
        sum_dev += deviation;
        if deviation > max_dev {
            max_dev = deviation;
        }
    }

    let mean_dev = sum_dev / keyframes.len() as f64;

    CurveVerification {
        expected,
        range,
        max_deviation: max_dev,
        mean_deviation: mean_dev,
        passed: max_dev <= tolerance,
        deviations,
    }
}

/// Sample a curve at `num_samples` equally spaced points, both endpoints
/// included.
#[must_use]
pub fn sample_curve(curve: EasingType, num_samples: usize, range: Range) -> Vec<Keyframe> {
    match num_samples {
        0 => Vec::new(),
        1 => vec![Keyframe {
            t: 0.0,
            value: curve.ease(0.0, range),
        }],
        _ => (0..num_samples)
            .map(|i| {
                let t = i as f64 / (num_samples - 1) as f64;
                Keyframe {
                    t,
                    value: curve.ease(t, range),
                }
            })
            .collect(),
    }
}

/// Central difference of `f` around `t`.
#[must_use]
pub fn central_difference(f: EasingFn, t: f64, step: f64, range: Range) -> f64 {
    (f(t + step, range.start, range.end) - f(t - step, range.start, range.end)) / (2.0 * step)
}

/// One analytic-versus-numeric slope comparison.
#[derive(Clone, Debug, Serialize)]
pub struct DerivativeCheck {
    /// Curve checked
    pub curve: EasingType,
    /// Progress the slopes were taken at
    pub t: f64,
    /// Slope from the derivative function
    pub analytic: f64,
    /// Slope from the central difference
    pub numeric: f64,
    /// Absolute difference
    pub error: f64,
    /// The derivative is a known approximation; never fails the check
    pub approximate: bool,
    /// Whether the check passed
    pub passed: bool,
}

/// Compare a curve's derivative with a central difference of its value.
#[must_use]
pub fn check_derivative(
    curve: EasingType,
    t: f64,
    step: f64,
    range: Range,
    tolerance: f64,
) -> DerivativeCheck {
    let analytic = curve.slope(t, range);
    let numeric = central_difference(curve.function(), t, step, range);
    let error = (analytic - numeric).abs();
    let approximate = curve == EasingType::Spring;

    DerivativeCheck {
        curve,
        t,
        analytic,
        numeric,
        error,
        approximate,
        passed: approximate || error <= tolerance,
    }
}

/// Whether `t` is a point where `curve` has no finite slope.
fn is_singular(curve: EasingType, t: f64) -> bool {
    curve == EasingType::CircInOut && t == 0.5
}

/// Check every catalog curve at [`DERIVATIVE_SAMPLE_POINTS`] over the unit
/// range.
///
/// The `CircInOut` midpoint is skipped: both arcs meet there with a vertical
/// tangent.
#[must_use]
pub fn check_catalog(step: f64, tolerance: f64) -> Vec<DerivativeCheck> {
    check_curves(&EasingType::ALL, step, tolerance)
}

/// Same as [`check_catalog`] for a subset of curves.
#[must_use]
pub fn check_curves(curves: &[EasingType], step: f64, tolerance: f64) -> Vec<DerivativeCheck> {
    curves
        .iter()
        .flat_map(|&curve| {
            DERIVATIVE_SAMPLE_POINTS
                .iter()
                .filter(move |&&t| !is_singular(curve, t))
                .map(move |&t| check_derivative(curve, t, step, Range::UNIT, tolerance))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_curve_perfect_match() {
        let keyframes: Vec<Keyframe> = (0..=10)
            .map(|i| {
                let t = f64::from(i) / 10.0;
                Keyframe { t, value: t }
            })
            .collect();
        let result = verify_curve(&keyframes, EasingType::Linear, Range::UNIT, 0.01);
        assert!(result.passed);
        assert!(result.max_deviation < 0.001);
    }

    #[test]
    fn test_verify_curve_mismatch() {
        // Provide linear values for a quadratic curve
        let keyframes: Vec<Keyframe> = (1..10)
            .map(|i| {
                let t = f64::from(i) / 10.0;
                Keyframe { t, value: t }
            })
            .collect();
        let result = verify_curve(&keyframes, EasingType::QuadIn, Range::UNIT, 0.01);
        assert!(!result.passed);
        assert!(result.max_deviation > 0.01);
    }

    #[test]
    fn test_verify_curve_empty() {
        let result = verify_curve(&[], EasingType::Linear, Range::UNIT, 0.01);
        assert!(result.passed);
        assert!(result.deviations.is_empty());
    }

    #[test]
    fn test_verify_curve_in_range() {
        let range = Range::new(0.0, 10.0);
        let keyframes = vec![Keyframe { t: 0.5, value: 2.5 }];
        let result = verify_curve(&keyframes, EasingType::QuadIn, range, 1e-9);
        assert!(result.passed);
    }

    #[test]
    fn test_mean_deviation() {
        let keyframes = vec![
            Keyframe {
                t: 0.5,
                value: 0.52,
            }, // 0.02 off
            Keyframe {
                t: 0.8,
                value: 0.84,
            }, // 0.04 off
        ];
        let result = verify_curve(&keyframes, EasingType::Linear, Range::UNIT, 0.05);
        assert!((result.mean_deviation - 0.03).abs() < 0.001);
        assert_eq!(result.deviations.len(), 2);
    }

    #[test]
    fn test_sample_curve_linear() {
        let samples = sample_curve(EasingType::Linear, 11, Range::UNIT);
        assert_eq!(samples.len(), 11);
        assert!((samples[0].t).abs() < f64::EPSILON);
        assert!((samples[10].t - 1.0).abs() < f64::EPSILON);
        assert!((samples[5].value - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_sample_curve_endpoints_echo() {
        let samples = sample_curve(EasingType::QuadIn, 3, Range::new(10.0, 20.0));
        assert_eq!(samples[0].value, 0.0);
        assert!((samples[1].value - 12.5).abs() < 1e-12);
        assert_eq!(samples[2].value, 1.0);
    }

    #[test]
    fn test_sample_curve_empty_and_single() {
        assert!(sample_curve(EasingType::Linear, 0, Range::UNIT).is_empty());
        let single = sample_curve(EasingType::Linear, 1, Range::UNIT);
        assert_eq!(single.len(), 1);
        assert!((single[0].t).abs() < f64::EPSILON);
    }

    #[test]
    fn test_central_difference_linear() {
        let slope = central_difference(
            EasingType::Linear.function(),
            0.5,
            DEFAULT_STEP,
            Range::new(0.0, 4.0),
        );
        assert!((slope - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_check_catalog_passes() {
        let checks = check_catalog(DEFAULT_STEP, DEFAULT_SLOPE_TOLERANCE);
        // 32 curves x 5 points, minus the CircInOut midpoint
        assert_eq!(checks.len(), EasingType::COUNT * 5 - 1);
        for check in &checks {
            assert!(
                check.passed,
                "{} at t={}: analytic {} numeric {}",
                check.curve, check.t, check.analytic, check.numeric
            );
        }
    }

    #[test]
    fn test_spring_marked_approximate() {
        let check = check_derivative(
            EasingType::Spring,
            0.5,
            DEFAULT_STEP,
            Range::UNIT,
            DEFAULT_SLOPE_TOLERANCE,
        );
        assert!(check.approximate);
        assert!(check.passed);
    }

    #[test]
    fn test_check_curves_subset() {
        let checks = check_curves(&[EasingType::CircInOut], DEFAULT_STEP, 1e-2);
        assert_eq!(checks.len(), 4);
        assert!(checks.iter().all(|c| c.t != 0.5));
    }
}
