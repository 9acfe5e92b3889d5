//! Cached evaluation through the corner table and gradient caches.

use glam::{DVec3, DVec4};

use crate::gradients::{GradientCache, grad_2d};
use crate::math::{fade, lerp, split};
use crate::permutation::{CornerTable, PermutationTable};

use super::{GradientNoise, bilerp};

/// Evaluates noise with one corner-table lookup per 2D cell and cached
/// gradient vectors for the last hash level.
///
/// Corner ordering and signs are identical to
/// [`DirectSampler`](super::DirectSampler).
#[derive(Debug, Clone, Copy)]
pub struct CachedSampler<'a> {
    perm: &'a PermutationTable,
    corners: &'a CornerTable,
    gradients: &'a GradientCache,
}

impl<'a> CachedSampler<'a> {
    /// Wrap a consistent set of tables.
    #[must_use]
    pub const fn new(
        perm: &'a PermutationTable,
        corners: &'a CornerTable,
        gradients: &'a GradientCache,
    ) -> Self {
        Self {
            perm,
            corners,
            gradients,
        }
    }

    #[inline]
    fn dot_3d(&self, hash: usize, x: f64, y: f64, z: f64) -> f64 {
        self.gradients.get_3d(hash).dot(DVec3::new(x, y, z))
    }

    #[inline]
    fn dot_4d(&self, hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.gradients.get_4d(hash).dot(DVec4::new(x, y, z, w))
    }
}

impl GradientNoise for CachedSampler<'_> {
    fn noise_1d(&self, x: f64) -> f64 {
        let (xi, x) = split(x);
        let u = fade(x);

        lerp(
            self.gradients.get_1d(xi) * x,
            self.gradients.get_1d(xi + 1) * (x - 1.0),
            u,
        )
    }

    fn noise_2d(&self, x: f64, y: f64) -> f64 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let u = fade(x);
        let v = fade(y);

        let cell = self.corners.get(xi, yi);

        bilerp(
            grad_2d(usize::from(cell.aa), x, y),
            grad_2d(usize::from(cell.ba), x - 1.0, y),
            grad_2d(usize::from(cell.ab), x, y - 1.0),
            grad_2d(usize::from(cell.bb), x - 1.0, y - 1.0),
            u,
            v,
        )
    }

    fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let u = fade(x);
        let v = fade(y);
        let s = fade(z);

        let cell = self.corners.get(xi, yi);
        let aa = usize::from(cell.aa) + zi;
        let ab = usize::from(cell.ab) + zi;
        let ba = usize::from(cell.ba) + zi;
        let bb = usize::from(cell.bb) + zi;

        let (x1, y1, z1) = (x - 1.0, y - 1.0, z - 1.0);

        let near = bilerp(
            self.dot_3d(aa, x, y, z),
            self.dot_3d(ba, x1, y, z),
            self.dot_3d(ab, x, y1, z),
            self.dot_3d(bb, x1, y1, z),
            u,
            v,
        );
        let far = bilerp(
            self.dot_3d(aa + 1, x, y, z1),
            self.dot_3d(ba + 1, x1, y, z1),
            self.dot_3d(ab + 1, x, y1, z1),
            self.dot_3d(bb + 1, x1, y1, z1),
            u,
            v,
        );

        lerp(near, far, s)
    }

    fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let (wi, w) = split(w);
        let u = fade(x);
        let v = fade(y);
        let s = fade(z);
        let t = fade(w);

        let a = self.perm.hash(xi) + yi;
        let b = self.perm.hash(xi + 1) + yi;

        // The (A, Z) and (B, Z) cells hold the third hash level of the x0 and
        // x1 halves: `aa` is the z0/y0 corner, `ab` z1/y0, `ba` z0/y1, `bb` z1/y1.
        let lo = self.corners.get(a, zi);
        let hi = self.corners.get(b, zi);

        let aaa = usize::from(lo.aa) + wi;
        let aab = usize::from(lo.ab) + wi;
        let aba = usize::from(lo.ba) + wi;
        let abb = usize::from(lo.bb) + wi;
        let baa = usize::from(hi.aa) + wi;
        let bab = usize::from(hi.ab) + wi;
        let bba = usize::from(hi.ba) + wi;
        let bbb = usize::from(hi.bb) + wi;

        let (x1, y1, z1, w1) = (x - 1.0, y - 1.0, z - 1.0, w - 1.0);

        let layer = |dw: usize, w: f64| {
            let near = bilerp(
                self.dot_4d(aaa + dw, x, y, z, w),
                self.dot_4d(baa + dw, x1, y, z, w),
                self.dot_4d(aba + dw, x, y1, z, w),
                self.dot_4d(bba + dw, x1, y1, z, w),
                u,
                v,
            );
            let far = bilerp(
                self.dot_4d(aab + dw, x, y, z1, w),
                self.dot_4d(bab + dw, x1, y, z1, w),
                self.dot_4d(abb + dw, x, y1, z1, w),
                self.dot_4d(bbb + dw, x1, y1, z1, w),
                u,
                v,
            );
            lerp(near, far, s)
        };

        lerp(layer(0, w), layer(1, w1), t)
    }
}
