//! Fast 2D line primitives.
//!
//! Purpose
//! - Provide a single immutable `Line` value type with O(1) queries:
//!   evaluation, side classification, perpendicular distance, intersection.
//! - Keep the API minimal (KISS, YAGNI) and numerically explicit: exact-zero
//!   comparisons by default, opt-in tolerances via `_eps` variants.
//!
//! Numerics policy
//! - Construction is the only place invalid input is rejected. Every query is
//!   total over its documented domain and propagates IEEE-754 semantics for
//!   the edge cases (vertical slope form, horizontal `solve_for_x`).

pub mod line2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use line2::{Implicit, Line, LineError, LineSpec, Side};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line2::{Implicit, Line, LineError, LineSpec, Side};
    pub use nalgebra::Vector2 as Vec2;
}

/// Signed area of the parallelogram spanned by vectors `a` and `b` in R².
/// Positive for a→b counterclockwise, negative otherwise.
#[inline]
pub fn parallelogram_area(a: Vec2<f64>, b: Vec2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}
