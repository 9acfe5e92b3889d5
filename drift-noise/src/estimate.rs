//! Finite-difference gradient estimation.
//!
//! All estimators take the field as a closure, so they work on any noise path
//! or on composite fields built on top of one.

use glam::{DVec2, DVec3, DVec4};

/// Step used for forward differences.
pub const EPSILON: f64 = 1e-3;

/// Forward-difference derivative of a 1D field.
#[inline]
pub fn gradient_1d(x: f64, f: impl Fn(f64) -> f64) -> f64 {
    let f0 = f(x);
    (f(x + EPSILON) - f0) / EPSILON
}

/// Forward-difference gradient of a 2D field.
#[inline]
pub fn gradient_2d(x: f64, y: f64, f: impl Fn(f64, f64) -> f64) -> DVec2 {
    let f0 = f(x, y);
    DVec2::new(f(x + EPSILON, y) - f0, f(x, y + EPSILON) - f0) / EPSILON
}

/// Forward-difference gradient of a 3D field.
#[inline]
pub fn gradient_3d(x: f64, y: f64, z: f64, f: impl Fn(f64, f64, f64) -> f64) -> DVec3 {
    let f0 = f(x, y, z);
    DVec3::new(
        f(x + EPSILON, y, z) - f0,
        f(x, y + EPSILON, z) - f0,
        f(x, y, z + EPSILON) - f0,
    ) / EPSILON
}

/// Forward-difference gradient of a 4D field.
#[inline]
pub fn gradient_4d(
    x: f64,
    y: f64,
    z: f64,
    w: f64,
    f: impl Fn(f64, f64, f64, f64) -> f64,
) -> DVec4 {
    let f0 = f(x, y, z, w);
    DVec4::new(
        f(x + EPSILON, y, z, w) - f0,
        f(x, y + EPSILON, z, w) - f0,
        f(x, y, z + EPSILON, w) - f0,
        f(x, y, z, w + EPSILON) - f0,
    ) / EPSILON
}

/// Seamlessly tiling gradient of a 2D coordinate.
///
/// `(x, y)` is mapped onto a torus in 4D as `(sin x, cos x, sin y, cos y)` and
/// the gradient of `f` is taken there, so the result repeats every `2 * PI`
/// along both axes. The result is normalized; a vanishing gradient yields zero.
pub fn tiled_gradient(x: f64, y: f64, f: impl Fn(f64, f64, f64, f64) -> f64) -> DVec4 {
    let (sin_x, cos_x) = x.sin_cos();
    let (sin_y, cos_y) = y.sin_cos();
    gradient_4d(sin_x, cos_x, sin_y, cos_y, f).normalize_or_zero()
}
