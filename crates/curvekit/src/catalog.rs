//! Curve catalog: the closed set of easing curve identifiers.
//!
//! The variant order is a compatibility contract. Editor tooling may persist
//! a curve as its raw index, so variants must never be reordered and new
//! ones may only be appended.

use crate::dispatch::{self, EasingFn};
use crate::result::{CurveError, CurveResult};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output range a normalized curve is remapped into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Value the curve leaves from
    pub start: f64,
    /// Value the curve arrives at
    pub end: f64,
}

impl Default for Range {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Range {
    /// The normalized (0, 1) range
    pub const UNIT: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    /// Create a range
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed width of the range (`end - start`)
    #[must_use]
    pub fn delta(self) -> f64 {
        self.end - self.start
    }

    /// Check that both bounds are finite
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}

/// Curve family, shared by the In/Out/InOut variants of one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveFamily {
    /// Straight line
    Linear,
    /// Quarter or half sine wave
    Sine,
    /// Second power
    Quad,
    /// Third power
    Cubic,
    /// Fourth power
    Quart,
    /// Fifth power
    Quint,
    /// Base-2 exponential
    Expo,
    /// Quarter circle arc
    Circ,
    /// Cubic with overshoot
    Back,
    /// Damped sine oscillation
    Elastic,
    /// Piecewise decaying parabolas
    Bounce,
    /// Empirical damped spring
    Spring,
}

impl CurveFamily {
    /// Whether the family deliberately leaves `[start, end]` (or is exempt
    /// from range monotonicity for other reasons).
    #[must_use]
    pub const fn overshoots(self) -> bool {
        matches!(self, Self::Back | Self::Elastic | Self::Bounce | Self::Spring)
    }
}

/// Where the non-linearity of a curve sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Slow start
    In,
    /// Slow finish
    Out,
    /// Slow start and finish, split at the midpoint
    InOut,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => write!(f, "in"),
            Self::Out => write!(f, "out"),
            Self::InOut => write!(f, "in_out"),
        }
    }
}

/// Identifier of an easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum EasingType {
    /// Constant speed
    Linear = 0,
    /// Sine ease-in
    SineIn,
    /// Sine ease-out
    SineOut,
    /// Sine ease-in-out
    SineInOut,
    /// Quadratic ease-in
    QuadIn,
    /// Quadratic ease-out
    QuadOut,
    /// Quadratic ease-in-out
    QuadInOut,
    /// Cubic ease-in
    CubicIn,
    /// Cubic ease-out
    CubicOut,
    /// Cubic ease-in-out
    CubicInOut,
    /// Quartic ease-in
    QuartIn,
    /// Quartic ease-out
    QuartOut,
    /// Quartic ease-in-out
    QuartInOut,
    /// Quintic ease-in
    QuintIn,
    /// Quintic ease-out
    QuintOut,
    /// Quintic ease-in-out
    QuintInOut,
    /// Exponential ease-in
    ExpoIn,
    /// Exponential ease-out
    ExpoOut,
    /// Exponential ease-in-out
    ExpoInOut,
    /// Circular ease-in
    CircIn,
    /// Circular ease-out
    CircOut,
    /// Circular ease-in-out
    CircInOut,
    /// Back (overshoot) ease-in
    BackIn,
    /// Back (overshoot) ease-out
    BackOut,
    /// Back (overshoot) ease-in-out
    BackInOut,
    /// Elastic ease-in
    ElasticIn,
    /// Elastic ease-out
    ElasticOut,
    /// Elastic ease-in-out
    ElasticInOut,
    /// Bounce ease-in
    BounceIn,
    /// Bounce ease-out
    BounceOut,
    /// Bounce ease-in-out
    BounceInOut,
    /// Damped spring
    Spring,
}

impl EasingType {
    /// Number of curves in the catalog
    pub const COUNT: usize = 32;

    /// Every curve, in index order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Linear,
        Self::SineIn,
        Self::SineOut,
        Self::SineInOut,
        Self::QuadIn,
        Self::QuadOut,
        Self::QuadInOut,
        Self::CubicIn,
        Self::CubicOut,
        Self::CubicInOut,
        Self::QuartIn,
        Self::QuartOut,
        Self::QuartInOut,
        Self::QuintIn,
        Self::QuintOut,
        Self::QuintInOut,
        Self::ExpoIn,
        Self::ExpoOut,
        Self::ExpoInOut,
        Self::CircIn,
        Self::CircOut,
        Self::CircInOut,
        Self::BackIn,
        Self::BackOut,
        Self::BackInOut,
        Self::ElasticIn,
        Self::ElasticOut,
        Self::ElasticInOut,
        Self::BounceIn,
        Self::BounceOut,
        Self::BounceInOut,
        Self::Spring,
    ];

    /// Raw index of this curve
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Curve for a raw index, `None` outside the catalog
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Variant name, e.g. `"QuadInOut"`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::SineIn => "SineIn",
            Self::SineOut => "SineOut",
            Self::SineInOut => "SineInOut",
            Self::QuadIn => "QuadIn",
            Self::QuadOut => "QuadOut",
            Self::QuadInOut => "QuadInOut",
            Self::CubicIn => "CubicIn",
            Self::CubicOut => "CubicOut",
            Self::CubicInOut => "CubicInOut",
            Self::QuartIn => "QuartIn",
            Self::QuartOut => "QuartOut",
            Self::QuartInOut => "QuartInOut",
            Self::QuintIn => "QuintIn",
            Self::QuintOut => "QuintOut",
            Self::QuintInOut => "QuintInOut",
            Self::ExpoIn => "ExpoIn",
            Self::ExpoOut => "ExpoOut",
            Self::ExpoInOut => "ExpoInOut",
            Self::CircIn => "CircIn",
            Self::CircOut => "CircOut",
            Self::CircInOut => "CircInOut",
            Self::BackIn => "BackIn",
            Self::BackOut => "BackOut",
            Self::BackInOut => "BackInOut",
            Self::ElasticIn => "ElasticIn",
            Self::ElasticOut => "ElasticOut",
            Self::ElasticInOut => "ElasticInOut",
            Self::BounceIn => "BounceIn",
            Self::BounceOut => "BounceOut",
            Self::BounceInOut => "BounceInOut",
            Self::Spring => "Spring",
        }
    }

    /// Family this curve belongs to
    #[must_use]
    pub const fn family(self) -> CurveFamily {
        match self {
            Self::Linear => CurveFamily::Linear,
            Self::SineIn | Self::SineOut | Self::SineInOut => CurveFamily::Sine,
            Self::QuadIn | Self::QuadOut | Self::QuadInOut => CurveFamily::Quad,
            Self::CubicIn | Self::CubicOut | Self::CubicInOut => CurveFamily::Cubic,
            Self::QuartIn | Self::QuartOut | Self::QuartInOut => CurveFamily::Quart,
            Self::QuintIn | Self::QuintOut | Self::QuintInOut => CurveFamily::Quint,
            Self::ExpoIn | Self::ExpoOut | Self::ExpoInOut => CurveFamily::Expo,
            Self::CircIn | Self::CircOut | Self::CircInOut => CurveFamily::Circ,
            Self::BackIn | Self::BackOut | Self::BackInOut => CurveFamily::Back,
            Self::ElasticIn | Self::ElasticOut | Self::ElasticInOut => CurveFamily::Elastic,
            Self::BounceIn | Self::BounceOut | Self::BounceInOut => CurveFamily::Bounce,
            Self::Spring => CurveFamily::Spring,
        }
    }

    /// Direction of the curve, `None` for Linear and Spring
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Linear | Self::Spring => None,
            Self::SineIn
            | Self::QuadIn
            | Self::CubicIn
            | Self::QuartIn
            | Self::QuintIn
            | Self::ExpoIn
            | Self::CircIn
            | Self::BackIn
            | Self::ElasticIn
            | Self::BounceIn => Some(Direction::In),
            Self::SineOut
            | Self::QuadOut
            | Self::CubicOut
            | Self::QuartOut
            | Self::QuintOut
            | Self::ExpoOut
            | Self::CircOut
            | Self::BackOut
            | Self::ElasticOut
            | Self::BounceOut => Some(Direction::Out),
            Self::SineInOut
            | Self::QuadInOut
            | Self::CubicInOut
            | Self::QuartInOut
            | Self::QuintInOut
            | Self::ExpoInOut
            | Self::CircInOut
            | Self::BackInOut
            | Self::ElasticInOut
            | Self::BounceInOut => Some(Direction::InOut),
        }
    }

    /// Whether the curve may leave its output range
    #[must_use]
    pub const fn overshoots(self) -> bool {
        self.family().overshoots()
    }

    /// Value function for this curve
    #[must_use]
    pub fn function(self) -> EasingFn {
        dispatch::value_function(self)
    }

    /// Derivative function for this curve
    #[must_use]
    pub fn derivative(self) -> EasingFn {
        dispatch::derivative_function(self)
    }

    /// Evaluate the curve at `progress` within `range`.
    #[must_use]
    pub fn ease(self, progress: f64, range: Range) -> f64 {
        self.function()(progress, range.start, range.end)
    }

    /// Slope of the curve at `progress` within `range`.
    #[must_use]
    pub fn slope(self, progress: f64, range: Range) -> f64 {
        self.derivative()(progress, range.start, range.end)
    }
}

impl fmt::Display for EasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase with separators removed, so `QuadInOut`, `quad_in_out` and
/// `quad-in-out` compare equal.
fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for EasingType {
    type Err = CurveError;

    fn from_str(s: &str) -> CurveResult<Self> {
        let folded = fold_name(s.trim());
        Self::ALL
            .iter()
            .copied()
            .find(|curve| fold_name(curve.name()) == folded)
            .ok_or_else(|| CurveError::unknown_curve(s))
    }
}

impl TryFrom<u64> for EasingType {
    type Error = CurveError;

    fn try_from(index: u64) -> CurveResult<Self> {
        usize::try_from(index)
            .ok()
            .and_then(Self::from_index)
            .ok_or(CurveError::UnknownIndex { index })
    }
}

struct EasingTypeVisitor;

impl Visitor<'_> for EasingTypeVisitor {
    type Value = EasingType;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an easing curve name or catalog index")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<EasingType, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<EasingType, E> {
        EasingType::try_from(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<EasingType, E> {
        u64::try_from(v)
            .map_err(|_| E::custom(format!("negative easing curve index: {v}")))
            .and_then(|index| self.visit_u64(index))
    }
}

impl<'de> Deserialize<'de> for EasingType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(EasingTypeVisitor)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_in_index_order() {
        for (i, curve) in EasingType::ALL.iter().enumerate() {
            assert_eq!(curve.index(), i);
            assert_eq!(EasingType::from_index(i), Some(*curve));
        }
    }

    #[test]
    fn test_stable_indices() {
        assert_eq!(EasingType::Linear.index(), 0);
        assert_eq!(EasingType::QuadInOut.index(), 6);
        assert_eq!(EasingType::BounceOut.index(), 29);
        assert_eq!(EasingType::Spring.index(), 31);
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(EasingType::from_index(EasingType::COUNT), None);
        assert_eq!(EasingType::from_index(usize::MAX), None);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(EasingType::QuadInOut.to_string(), "QuadInOut");
        assert_eq!(EasingType::Spring.to_string(), "Spring");
    }

    #[test]
    fn test_parse_variants() {
        assert_eq!("QuadInOut".parse::<EasingType>().unwrap(), EasingType::QuadInOut);
        assert_eq!("quad_in_out".parse::<EasingType>().unwrap(), EasingType::QuadInOut);
        assert_eq!("elastic-out".parse::<EasingType>().unwrap(), EasingType::ElasticOut);
        assert_eq!(" LINEAR ".parse::<EasingType>().unwrap(), EasingType::Linear);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "wobble".parse::<EasingType>().unwrap_err();
        assert!(matches!(err, CurveError::UnknownCurve { ref name } if name == "wobble"));
    }

    #[test]
    fn test_names_round_trip() {
        for curve in EasingType::ALL {
            assert_eq!(curve.name().parse::<EasingType>().unwrap(), curve);
        }
    }

    #[test]
    fn test_family_and_direction() {
        assert_eq!(EasingType::BackInOut.family(), CurveFamily::Back);
        assert_eq!(EasingType::BackInOut.direction(), Some(Direction::InOut));
        assert_eq!(EasingType::Linear.direction(), None);
        assert_eq!(EasingType::Spring.family(), CurveFamily::Spring);
    }

    #[test]
    fn test_overshoots() {
        let overshooting: Vec<_> = EasingType::ALL
            .iter()
            .filter(|c| c.overshoots())
            .collect();
        assert_eq!(overshooting.len(), 10);
        assert!(!EasingType::QuintOut.overshoots());
        assert!(EasingType::BounceIn.overshoots());
    }

    #[test]
    fn test_try_from_index() {
        assert_eq!(EasingType::try_from(4_u64).unwrap(), EasingType::QuadIn);
        assert!(matches!(
            EasingType::try_from(32_u64),
            Err(CurveError::UnknownIndex { index: 32 })
        ));
    }

    #[test]
    fn test_serde_by_name_or_index() {
        let json = serde_json::to_string(&EasingType::CircOut).unwrap();
        assert_eq!(json, "\"CircOut\"");
        let parsed: EasingType = serde_json::from_str("\"circ_out\"").unwrap();
        assert_eq!(parsed, EasingType::CircOut);
        let parsed: EasingType = serde_json::from_str("20").unwrap();
        assert_eq!(parsed, EasingType::CircOut);
        assert!(serde_json::from_str::<EasingType>("-1").is_err());
        assert!(serde_json::from_str::<EasingType>("\"nope\"").is_err());
    }

    #[test]
    fn test_range_default_and_delta() {
        assert_eq!(Range::default(), Range::new(0.0, 1.0));
        assert!((Range::new(2.0, -3.0).delta() + 5.0).abs() < f64::EPSILON);
        assert!(!Range::new(0.0, f64::NAN).is_finite());
    }

    #[test]
    fn test_ease_and_slope_methods() {
        let range = Range::new(0.0, 10.0);
        assert!((EasingType::Linear.ease(0.5, range) - 5.0).abs() < f64::EPSILON);
        assert!((EasingType::Linear.slope(0.5, range) - 10.0).abs() < f64::EPSILON);
    }
}
