//! Scalar helpers shared by the samplers.

use crate::TABLE_SIZE;

/// Lattice index of the cell containing `value`, wrapped into `0..256`.
///
/// Wraps in floating point so coordinates beyond the `i32` range keep their
/// period of 256 cells. NaN and infinities map to 0; the fractional part
/// computed alongside it still carries the NaN.
#[inline]
#[must_use]
pub fn lattice_index(value: f64) -> usize {
    value.floor().rem_euclid(TABLE_SIZE as f64) as usize
}

/// Split a coordinate into its wrapped lattice index and fractional offset.
///
/// The offset is in `[0, 1)` for finite input.
#[inline]
#[must_use]
pub fn split(value: f64) -> (usize, f64) {
    (lattice_index(value), value - value.floor())
}

/// Quintic fade curve `t^3 (6t^2 - 15t + 10)`.
///
/// First and second derivatives vanish at 0 and 1, so the interpolated field
/// has no creases at lattice boundaries.
#[inline]
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
