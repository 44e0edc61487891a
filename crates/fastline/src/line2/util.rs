use nalgebra::Vector2;

use super::types::LineError;

#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), LineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LineError::NonFinite { name, value })
    }
}

#[inline]
pub(crate) fn ensure_finite_point(
    x_name: &'static str,
    y_name: &'static str,
    p: Vector2<f64>,
) -> Result<(), LineError> {
    ensure_finite(x_name, p.x)?;
    ensure_finite(y_name, p.y)
}
