//! Constructor inputs, side classification, and errors for `Line`.

use std::fmt;

use nalgebra::Vector2;

/// Error type shared by line construction and input resolution.
#[derive(Clone, Debug, PartialEq)]
pub enum LineError {
    /// Ambiguous or incomplete set of named constructor inputs.
    InvalidArguments { reason: String },
    /// The two defining points coincide (direction and slope undefined).
    InvalidGeometry { reason: String },
    /// A supplied coordinate or scalar is NaN or infinite.
    NonFinite { name: &'static str, value: f64 },
}

impl LineError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(reason: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArguments { reason } => write!(f, "invalid arguments: {reason}"),
            Self::InvalidGeometry { reason } => write!(f, "invalid geometry: {reason}"),
            Self::NonFinite { name, value } => {
                write!(f, "non-finite input: {name} = {value}")
            }
        }
    }
}

impl std::error::Error for LineError {}

/// Constructor input: exactly one of the two supported forms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineSpec {
    /// Two distinct points on the line.
    TwoPoints {
        p1: Vector2<f64>,
        p2: Vector2<f64>,
    },
    /// `y = m·x + b`. Cannot represent vertical lines.
    SlopeIntercept { m: f64, b: f64 },
}

impl LineSpec {
    /// Resolve a set of optional named inputs into exactly one form.
    ///
    /// Accepts `{p1, p2}` or `{m, b}`; anything else (both pairs, a partial
    /// pair, or nothing) is `InvalidArguments`. Intended for callers adapting
    /// dynamic input, e.g. a scripting binding with keyword arguments.
    pub fn from_parts(
        p1: Option<Vector2<f64>>,
        p2: Option<Vector2<f64>>,
        m: Option<f64>,
        b: Option<f64>,
    ) -> Result<Self, LineError> {
        match (p1, p2, m, b) {
            (Some(p1), Some(p2), None, None) => Ok(Self::TwoPoints { p1, p2 }),
            (None, None, Some(m), Some(b)) => Ok(Self::SlopeIntercept { m, b }),
            _ => Err(LineError::invalid(
                "use {p1, p2} or {m, b}, e.g. Line(p1=(1,2), p2=(3,4)) or Line(m=1, b=2)",
            )),
        }
    }
}

/// Which side of the (directed) line a point falls on.
///
/// Relative to the direction vector `p2 - p1` in a right-handed coordinate
/// system: a point with negative cross product `dir × (p2 - p)` is `Left`,
/// positive is `Right`, exact zero is `On`. Callers order points by `sign()`,
/// so the convention is load-bearing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    On,
    Right,
}

impl Side {
    /// Integer encoding: `Left = 1`, `On = 0`, `Right = -1`.
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::On => 0,
            Side::Right => -1,
        }
    }
}

/// Implicit line equation `a·x + b·y = c` (constant on the right-hand side).
///
/// For a line through `p1`, `p2`: `a = y1 - y2`, `b = x2 - x1`,
/// `c = -(x1·y2 - x2·y1)`. The coefficients depend on which two points were
/// used, but the solution set does not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Implicit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Implicit {
    /// Coefficients of the line through `p1` and `p2`.
    #[inline]
    pub fn through(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self {
            a: p1.y - p2.y,
            b: p2.x - p1.x,
            c: -(p1.x * p2.y - p2.x * p1.y),
        }
    }

    /// Evaluate the residual `a·x + b·y - c` (zero on the line).
    #[inline]
    pub fn residual(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
}
