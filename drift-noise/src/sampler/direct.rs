//! Direct evaluation: every corner hash is a chained permutation walk.

use crate::gradients::{grad_1d, grad_2d, grad_3d, grad_4d};
use crate::math::{fade, lerp, split};
use crate::permutation::PermutationTable;

use super::{GradientNoise, bilerp};

/// Evaluates noise straight from the permutation table.
#[derive(Debug, Clone, Copy)]
pub struct DirectSampler<'a> {
    perm: &'a PermutationTable,
}

impl<'a> DirectSampler<'a> {
    /// Wrap a permutation table.
    #[must_use]
    pub const fn new(perm: &'a PermutationTable) -> Self {
        Self { perm }
    }
}

impl GradientNoise for DirectSampler<'_> {
    fn noise_1d(&self, x: f64) -> f64 {
        let p = self.perm;
        let (xi, x) = split(x);
        let u = fade(x);

        lerp(grad_1d(p.hash(xi), x), grad_1d(p.hash(xi + 1), x - 1.0), u)
    }

    fn noise_2d(&self, x: f64, y: f64) -> f64 {
        let p = self.perm;
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let u = fade(x);
        let v = fade(y);

        let a = p.hash(xi) + yi;
        let b = p.hash(xi + 1) + yi;

        bilerp(
            grad_2d(p.hash(a), x, y),
            grad_2d(p.hash(b), x - 1.0, y),
            grad_2d(p.hash(a + 1), x, y - 1.0),
            grad_2d(p.hash(b + 1), x - 1.0, y - 1.0),
            u,
            v,
        )
    }

    fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let p = self.perm;
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let u = fade(x);
        let v = fade(y);
        let s = fade(z);

        let a = p.hash(xi) + yi;
        let b = p.hash(xi + 1) + yi;
        let aa = p.hash(a) + zi;
        let ab = p.hash(a + 1) + zi;
        let ba = p.hash(b) + zi;
        let bb = p.hash(b + 1) + zi;

        let (x1, y1, z1) = (x - 1.0, y - 1.0, z - 1.0);

        let near = bilerp(
            grad_3d(p.hash(aa), x, y, z),
            grad_3d(p.hash(ba), x1, y, z),
            grad_3d(p.hash(ab), x, y1, z),
            grad_3d(p.hash(bb), x1, y1, z),
            u,
            v,
        );
        let far = bilerp(
            grad_3d(p.hash(aa + 1), x, y, z1),
            grad_3d(p.hash(ba + 1), x1, y, z1),
            grad_3d(p.hash(ab + 1), x, y1, z1),
            grad_3d(p.hash(bb + 1), x1, y1, z1),
            u,
            v,
        );

        lerp(near, far, s)
    }

    fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        let p = self.perm;
        let (xi, x) = split(x);
        let (yi, y) = split(y);
        let (zi, z) = split(z);
        let (wi, w) = split(w);
        let u = fade(x);
        let v = fade(y);
        let s = fade(z);
        let t = fade(w);

        let a = p.hash(xi) + yi;
        let b = p.hash(xi + 1) + yi;
        let aa = p.hash(a) + zi;
        let ab = p.hash(a + 1) + zi;
        let ba = p.hash(b) + zi;
        let bb = p.hash(b + 1) + zi;

        let aaa = p.hash(aa) + wi;
        let aab = p.hash(aa + 1) + wi;
        let aba = p.hash(ab) + wi;
        let abb = p.hash(ab + 1) + wi;
        let baa = p.hash(ba) + wi;
        let bab = p.hash(ba + 1) + wi;
        let bba = p.hash(bb) + wi;
        let bbb = p.hash(bb + 1) + wi;

        let (x1, y1, z1, w1) = (x - 1.0, y - 1.0, z - 1.0, w - 1.0);

        // `dw` selects the w layer: 0 for the near corner hashes, 1 for the far.
        let layer = |dw: usize, w: f64| {
            let near = bilerp(
                grad_4d(p.hash(aaa + dw), x, y, z, w),
                grad_4d(p.hash(baa + dw), x1, y, z, w),
                grad_4d(p.hash(aba + dw), x, y1, z, w),
                grad_4d(p.hash(bba + dw), x1, y1, z, w),
                u,
                v,
            );
            let far = bilerp(
                grad_4d(p.hash(aab + dw), x, y, z1, w),
                grad_4d(p.hash(bab + dw), x1, y, z1, w),
                grad_4d(p.hash(abb + dw), x, y1, z1, w),
                grad_4d(p.hash(bbb + dw), x1, y1, z1, w),
                u,
                v,
            );
            lerp(near, far, s)
        };

        lerp(layer(0, w), layer(1, w1), t)
    }
}
