//! Infinite 2D lines (two-point or slope-intercept form).
//!
//! Purpose
//! - Provide one immutable `Line` with every representation (defining points,
//!   slope-intercept, displacement, implicit coefficients) derived eagerly at
//!   construction so queries never recompute.
//!
//! Why this design
//! - Queries dominate construction in typical use (sweeps, hit tests), so the
//!   redundant cached forms pay for themselves on the first few calls.
//! - Default comparisons against zero are exact; callers that want slack use
//!   the `_eps` variants instead of a hidden global tolerance.
//!
//! Code cross-refs: `line::Line`, `types::{LineSpec, Side, Implicit, LineError}`

mod line;
mod types;
mod util;

pub use line::Line;
pub use types::{Implicit, LineError, LineSpec, Side};
