//! Easing curve definitions
//!
//! Curves are stored as data only. Evaluating them over time belongs to the
//! animation layer.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// A cubic bezier easing curve with fixed endpoints at (0, 0) and (1, 1)
///
/// `(x1, y1)` and `(x2, y2)` are the two interior control points. No range
/// check is applied; overshooting curves are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct CubicCurve {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicCurve {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Control coefficients in `(x1, y1, x2, y2)` order
    pub const fn coefficients(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Linear interpolation between two curves, coefficient by coefficient
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            x1: from.x1 + (to.x1 - from.x1) * t,
            y1: from.y1 + (to.y1 - from.y1) * t,
            x2: from.x2 + (to.x2 - from.x2) * t,
            y2: from.y2 + (to.y2 - from.y2) * t,
        }
    }
}

impl From<[f32; 4]> for CubicCurve {
    fn from([x1, y1, x2, y2]: [f32; 4]) -> Self {
        Self::new(x1, y1, x2, y2)
    }
}

impl From<CubicCurve> for [f32; 4] {
    fn from(curve: CubicCurve) -> Self {
        curve.coefficients()
    }
}

/// Two joined cubic segments meeting at `midpoint`
///
/// Describes the shape of [`Curve::Emphasized`]. The first segment runs from
/// (0, 0) through `a1` and `b1` to `midpoint`, the second from `midpoint`
/// through `a2` and `b2` to (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreePointCubic {
    pub a1: (f32, f32),
    pub b1: (f32, f32),
    pub midpoint: (f32, f32),
    pub a2: (f32, f32),
    pub b2: (f32, f32),
}

/// Control points of the built-in emphasized curve
pub const EMPHASIZED: ThreePointCubic = ThreePointCubic {
    a1: (0.05, 0.0),
    b1: (0.133333, 0.06),
    midpoint: (0.166666, 0.4),
    a2: (0.208333, 0.82),
    b2: (0.25, 1.0),
};

/// An easing token value
///
/// `Linear` and `Emphasized` are named built-ins; everything else is a plain
/// cubic bezier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveRepr", into = "CurveRepr")]
pub enum Curve {
    /// Identity curve
    #[default]
    Linear,
    /// Composite ease-in-out curve, see [`EMPHASIZED`]
    Emphasized,
    Cubic(CubicCurve),
}

impl Curve {
    pub const fn cubic(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Curve::Cubic(CubicCurve::new(x1, y1, x2, y2))
    }

    /// Name of a built-in curve, `None` for cubic curves
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Curve::Linear => Some("linear"),
            Curve::Emphasized => Some("emphasized"),
            Curve::Cubic(_) => None,
        }
    }

    pub fn as_cubic(&self) -> Option<&CubicCurve> {
        match self {
            Curve::Cubic(curve) => Some(curve),
            _ => None,
        }
    }

    /// Segment data for composite curves
    pub fn three_point(&self) -> Option<&'static ThreePointCubic> {
        match self {
            Curve::Emphasized => Some(&EMPHASIZED),
            _ => None,
        }
    }

    /// Blend two curves
    ///
    /// Cubic pairs blend per coefficient. Named curves cannot be blended and
    /// switch from `from` to `to` at the halfway point.
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        match (from, to) {
            (Curve::Cubic(a), Curve::Cubic(b)) => Curve::Cubic(CubicCurve::lerp(a, b, t)),
            _ if from == to => *from,
            _ if t < 0.5 => *from,
            _ => *to,
        }
    }
}

impl From<CubicCurve> for Curve {
    fn from(curve: CubicCurve) -> Self {
        Curve::Cubic(curve)
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Curve::Cubic(c) => write!(f, "cubic-bezier({}, {}, {}, {})", c.x1, c.y1, c.x2, c.y2),
            named => f.write_str(named.name().unwrap_or_default()),
        }
    }
}

/// Config representation: a built-in name or four coefficients
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum CurveRepr {
    Named(String),
    Coefficients([f32; 4]),
}

impl TryFrom<CurveRepr> for Curve {
    type Error = MotionError;

    fn try_from(repr: CurveRepr) -> Result<Self, Self::Error> {
        match repr {
            CurveRepr::Named(name) => match name.as_str() {
                "linear" => Ok(Curve::Linear),
                "emphasized" => Ok(Curve::Emphasized),
                _ => Err(MotionError::InvalidCurve(name)),
            },
            CurveRepr::Coefficients(coefficients) => Ok(Curve::Cubic(coefficients.into())),
        }
    }
}

impl From<Curve> for CurveRepr {
    fn from(curve: Curve) -> Self {
        match curve {
            Curve::Cubic(c) => CurveRepr::Coefficients(c.coefficients()),
            named => CurveRepr::Named(named.name().unwrap_or_default().to_string()),
        }
    }
}
