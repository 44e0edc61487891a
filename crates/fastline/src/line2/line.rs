//! The `Line` value type: construction and closed-form queries.

use std::fmt;

use nalgebra::Vector2;

use crate::parallelogram_area;

use super::types::{Implicit, LineError, LineSpec, Side};
use super::util::{ensure_finite, ensure_finite_point};

/// X-coordinate of the second synthesized point in slope-intercept
/// construction (the first sits at x = 0). Any distinct value works.
const SLOPE_FORM_X2: f64 = 10.0;

/// An infinite 2D line, immutable after construction.
///
/// Every representation is derived once at construction and cached:
/// the defining points, slope-intercept form, the displacement `p2 - p1`
/// with its norm, and the implicit coefficients. Queries read the cached
/// fields verbatim, so concurrent reads are safe without synchronization.
///
/// Vertical lines are representable from two points only; their `m`/`b`
/// are non-finite (IEEE division), which `is_vertical` reports explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    m: f64,
    b: f64,
    // cached to avoid per-query recomputation
    dir: Vector2<f64>,
    dir_norm: f64,
    implicit: Implicit,
}

impl Line {
    /// Construct from a resolved input form.
    pub fn new(spec: LineSpec) -> Result<Self, LineError> {
        match spec {
            LineSpec::TwoPoints { p1, p2 } => Self::from_points(p1, p2),
            LineSpec::SlopeIntercept { m, b } => Self::from_slope_intercept(m, b),
        }
    }

    /// Construct from two distinct points.
    ///
    /// `p1 == p2` is rejected: a zero-length displacement has no direction
    /// and every query would silently return NaN. `x1 == x2` with distinct
    /// points is a valid vertical line; `m` and `b` come out non-finite.
    pub fn from_points(p1: Vector2<f64>, p2: Vector2<f64>) -> Result<Self, LineError> {
        ensure_finite_point("p1.x", "p1.y", p1)?;
        ensure_finite_point("p2.x", "p2.y", p2)?;
        if p1 == p2 {
            return Err(LineError::degenerate(format!(
                "p1 and p2 coincide at ({}, {})",
                p1.x, p1.y
            )));
        }
        let m = (p2.y - p1.y) / (p2.x - p1.x);
        let b = p1.y - m * p1.x;
        Ok(Self::assemble(p1, p2, m, b))
    }

    /// Construct from `y = m·x + b` (both finite; vertical lines cannot be
    /// expressed in this form).
    ///
    /// Synthesizes two representative points at `x = 0` and `x = 10`, then
    /// derives the cached fields exactly as the two-point path does.
    pub fn from_slope_intercept(m: f64, b: f64) -> Result<Self, LineError> {
        ensure_finite("m", m)?;
        ensure_finite("b", b)?;
        let p1 = Vector2::new(0.0, b);
        let p2 = Vector2::new(SLOPE_FORM_X2, m * SLOPE_FORM_X2 + b);
        Ok(Self::assemble(p1, p2, m, b))
    }

    fn assemble(p1: Vector2<f64>, p2: Vector2<f64>, m: f64, b: f64) -> Self {
        let dir = p2 - p1;
        Self {
            p1,
            p2,
            m,
            b,
            dir,
            dir_norm: dir.norm(),
            implicit: Implicit::through(p1, p2),
        }
    }

    /// `y = m·x + b`. Non-finite only when the line is vertical.
    #[inline]
    pub fn solve(&self, x: f64) -> f64 {
        self.m * x + self.b
    }

    /// `x = (y - b) / m`, with IEEE semantics for horizontal lines:
    /// `m == 0` yields ±∞ for `y != b` and NaN for `y == b` (any x solves it).
    #[inline]
    pub fn solve_for_x(&self, y: f64) -> f64 {
        (y - self.b) / self.m
    }

    /// Classify which side of the line `p` falls on (exact-zero comparison).
    ///
    /// No tolerance is applied: a point an ULP off the line classifies as
    /// `Left` or `Right`. Near-collinear callers should use `side_of_eps`.
    #[inline]
    pub fn side_of(&self, p: Vector2<f64>) -> Side {
        self.side_of_eps(p, 0.0)
    }

    /// Side classification with slack: cross products within `eps` of zero
    /// count as `On`.
    pub fn side_of_eps(&self, p: Vector2<f64>, eps: f64) -> Side {
        let xp = parallelogram_area(self.dir, self.p2 - p);
        if xp > eps {
            Side::Right
        } else if xp < -eps {
            Side::Left
        } else {
            Side::On
        }
    }

    /// Perpendicular Euclidean distance from `p` to the infinite line.
    ///
    /// Always non-negative; exactly zero only for points exactly on the line.
    #[inline]
    pub fn distance_to(&self, p: Vector2<f64>) -> f64 {
        parallelogram_area(self.dir, self.p1 - p).abs() / self.dir_norm
    }

    /// Intersection point with `other`, or `None` for parallel lines
    /// (exact-zero determinant test).
    ///
    /// Coincident lines also return `None`; they are not distinguished from
    /// merely-parallel distinct lines.
    #[inline]
    pub fn intersection(&self, other: &Line) -> Option<Vector2<f64>> {
        self.intersection_eps(other, 0.0)
    }

    /// Intersection with slack: determinants within `eps` of zero count as
    /// parallel. Cramer's rule on the implicit forms `a·x + b·y = c`.
    pub fn intersection_eps(&self, other: &Line, eps: f64) -> Option<Vector2<f64>> {
        let l = self.implicit;
        let r = other.implicit;
        let d = l.a * r.b - l.b * r.a;
        if d.abs() <= eps {
            return None;
        }
        Some(Vector2::new(
            (l.c * r.b - l.b * r.c) / d,
            (l.a * r.c - l.c * r.a) / d,
        ))
    }

    /// First defining point.
    #[inline]
    pub fn p1(&self) -> Vector2<f64> {
        self.p1
    }

    /// Second defining point.
    #[inline]
    pub fn p2(&self) -> Vector2<f64> {
        self.p2
    }

    /// Both defining points as a pair.
    #[inline]
    pub fn points(&self) -> (Vector2<f64>, Vector2<f64>) {
        (self.p1, self.p2)
    }

    /// Slope. Non-finite for vertical lines.
    #[inline]
    pub fn m(&self) -> f64 {
        self.m
    }

    /// Y-intercept. Non-finite for vertical lines.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Cached displacement `p2 - p1` (not normalized).
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.dir
    }

    /// Cached implicit coefficients `a·x + b·y = c`.
    #[inline]
    pub fn implicit(&self) -> Implicit {
        self.implicit
    }

    /// Whether the defining points share an x-coordinate (slope undefined).
    #[inline]
    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Line: ({}, {}) ({}, {}) m: {} b: {}",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y, self.m, self.b
        )
    }
}
