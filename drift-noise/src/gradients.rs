//! Gradient catalogs and the per-permutation gradient caches.
//!
//! Each catalog is a fixed, power-of-two sized set of direction vectors, so a
//! corner hash selects one with a bit mask. The vectors are evenly spread but
//! not unit length.

use glam::{DVec2, DVec3, DVec4};

use crate::TABLE_SIZE;
use crate::permutation::PermutationTable;

/// 1D gradients.
pub const CATALOG_1D: [f64; 2] = [1.0, -1.0];

/// 2D gradients: the four diagonals.
pub const CATALOG_2D: [DVec2; 4] = [
    DVec2::new(1.0, 1.0),
    DVec2::new(1.0, -1.0),
    DVec2::new(-1.0, 1.0),
    DVec2::new(-1.0, -1.0),
];

/// 3D gradients: the twelve cube-edge directions, padded to sixteen with
/// four repeats.
pub const CATALOG_3D: [DVec3; 16] = [
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(1.0, -1.0, 0.0),
    DVec3::new(-1.0, -1.0, 0.0),
    DVec3::new(1.0, 0.0, 1.0),
    DVec3::new(-1.0, 0.0, 1.0),
    DVec3::new(1.0, 0.0, -1.0),
    DVec3::new(-1.0, 0.0, -1.0),
    DVec3::new(0.0, 1.0, 1.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(0.0, 1.0, -1.0),
    DVec3::new(0.0, -1.0, -1.0),
    DVec3::new(1.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, 1.0),
    DVec3::new(-1.0, 1.0, 0.0),
    DVec3::new(0.0, -1.0, -1.0),
];

/// 4D gradients. The first 24 have one zero component and three `+-1`
/// components; the last 8 have two zeros and two `+-1` components.
pub const CATALOG_4D: [DVec4; 32] = [
    DVec4::new(0.0, -1.0, -1.0, -1.0),
    DVec4::new(0.0, -1.0, -1.0, 1.0),
    DVec4::new(0.0, -1.0, 1.0, -1.0),
    DVec4::new(0.0, -1.0, 1.0, 1.0),
    DVec4::new(0.0, 1.0, -1.0, -1.0),
    DVec4::new(0.0, 1.0, -1.0, 1.0),
    DVec4::new(0.0, 1.0, 1.0, -1.0),
    DVec4::new(0.0, 1.0, 1.0, 1.0),
    DVec4::new(-1.0, -1.0, 0.0, -1.0),
    DVec4::new(-1.0, 1.0, 0.0, -1.0),
    DVec4::new(1.0, -1.0, 0.0, -1.0),
    DVec4::new(1.0, 1.0, 0.0, -1.0),
    DVec4::new(-1.0, -1.0, 0.0, 1.0),
    DVec4::new(-1.0, 1.0, 0.0, 1.0),
    DVec4::new(1.0, -1.0, 0.0, 1.0),
    DVec4::new(1.0, 1.0, 0.0, 1.0),
    DVec4::new(-1.0, 0.0, -1.0, -1.0),
    DVec4::new(1.0, 0.0, -1.0, -1.0),
    DVec4::new(-1.0, 0.0, -1.0, 1.0),
    DVec4::new(1.0, 0.0, -1.0, 1.0),
    DVec4::new(-1.0, 0.0, 1.0, -1.0),
    DVec4::new(1.0, 0.0, 1.0, -1.0),
    DVec4::new(-1.0, 0.0, 1.0, 1.0),
    DVec4::new(1.0, 0.0, 1.0, 1.0),
    DVec4::new(0.0, -1.0, -1.0, 0.0),
    DVec4::new(0.0, -1.0, -1.0, 0.0),
    DVec4::new(0.0, -1.0, 1.0, 0.0),
    DVec4::new(0.0, -1.0, 1.0, 0.0),
    DVec4::new(0.0, 1.0, -1.0, 0.0),
    DVec4::new(0.0, 1.0, -1.0, 0.0),
    DVec4::new(0.0, 1.0, 1.0, 0.0),
    DVec4::new(0.0, 1.0, 1.0, 0.0),
];

/// Dot product of the 1D gradient selected by `hash` with offset `x`.
#[inline]
#[must_use]
pub fn grad_1d(hash: usize, x: f64) -> f64 {
    CATALOG_1D[hash & 1] * x
}

/// Dot product of the 2D gradient selected by `hash` with the corner offset.
#[inline]
#[must_use]
pub fn grad_2d(hash: usize, x: f64, y: f64) -> f64 {
    CATALOG_2D[hash & 3].dot(DVec2::new(x, y))
}

/// Dot product of the 3D gradient selected by `hash` with the corner offset.
#[inline]
#[must_use]
pub fn grad_3d(hash: usize, x: f64, y: f64, z: f64) -> f64 {
    CATALOG_3D[hash & 15].dot(DVec3::new(x, y, z))
}

/// Dot product of the 4D gradient selected by `hash` with the corner offset.
#[inline]
#[must_use]
pub fn grad_4d(hash: usize, x: f64, y: f64, z: f64, w: f64) -> f64 {
    CATALOG_4D[hash & 31].dot(DVec4::new(x, y, z, w))
}

/// Per-slot gradient vectors for one permutation.
///
/// `cache_nd[p]` is the catalog vector selected by `perm[p]`, so the cached
/// sampler skips the last permutation lookup and the mask.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCache {
    pub(crate) cache_1d: [f64; TABLE_SIZE],
    pub(crate) cache_2d: [DVec2; TABLE_SIZE],
    pub(crate) cache_3d: [DVec3; TABLE_SIZE],
    pub(crate) cache_4d: [DVec4; TABLE_SIZE],
}

impl GradientCache {
    /// Build the caches for `perm`.
    #[must_use]
    pub fn build(perm: &PermutationTable) -> Self {
        let mut cache = Self {
            cache_1d: [0.0; TABLE_SIZE],
            cache_2d: [DVec2::ZERO; TABLE_SIZE],
            cache_3d: [DVec3::ZERO; TABLE_SIZE],
            cache_4d: [DVec4::ZERO; TABLE_SIZE],
        };

        for (p, &hash) in perm.values().iter().enumerate() {
            let hash = usize::from(hash);
            cache.cache_1d[p] = CATALOG_1D[hash & (CATALOG_1D.len() - 1)];
            cache.cache_2d[p] = CATALOG_2D[hash & (CATALOG_2D.len() - 1)];
            cache.cache_3d[p] = CATALOG_3D[hash & (CATALOG_3D.len() - 1)];
            cache.cache_4d[p] = CATALOG_4D[hash & (CATALOG_4D.len() - 1)];
        }

        cache
    }

    /// 1D gradient for permutation slot `p`.
    #[inline]
    #[must_use]
    pub const fn get_1d(&self, p: usize) -> f64 {
        self.cache_1d[p & crate::TABLE_MASK]
    }

    /// 2D gradient for permutation slot `p`.
    #[inline]
    #[must_use]
    pub const fn get_2d(&self, p: usize) -> DVec2 {
        self.cache_2d[p & crate::TABLE_MASK]
    }

    /// 3D gradient for permutation slot `p`.
    #[inline]
    #[must_use]
    pub const fn get_3d(&self, p: usize) -> DVec3 {
        self.cache_3d[p & crate::TABLE_MASK]
    }

    /// 4D gradient for permutation slot `p`.
    #[inline]
    #[must_use]
    pub const fn get_4d(&self, p: usize) -> DVec4 {
        self.cache_4d[p & crate::TABLE_MASK]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permutation::PermutationStrategy;

    #[test]
    fn catalog_sizes_are_powers_of_two() {
        assert!(CATALOG_1D.len().is_power_of_two());
        assert!(CATALOG_2D.len().is_power_of_two());
        assert!(CATALOG_3D.len().is_power_of_two());
        assert!(CATALOG_4D.len().is_power_of_two());
    }

    #[test]
    fn catalog_4d_shape() {
        for (i, g) in CATALOG_4D.iter().enumerate() {
            let components = g.to_array();
            assert!(
                components.iter().all(|c| [-1.0, 0.0, 1.0].contains(c)),
                "{g} has a component outside -1, 0, 1"
            );

            let zeros = components.iter().filter(|c| **c == 0.0).count();
            let expected = if i < 24 { 1 } else { 2 };
            assert_eq!(zeros, expected, "entry {i} ({g}) has the wrong number of zeros");
        }
    }

    #[test]
    fn catalog_3d_edges() {
        for g in CATALOG_3D {
            assert!((g.length_squared() - 2.0).abs() < 1e-12);
        }
    }

    #[test]
    fn cache_matches_catalog() {
        let perm = PermutationTable::build(42, PermutationStrategy::Shuffle);
        let cache = GradientCache::build(&perm);

        for p in 0..TABLE_SIZE {
            let hash = perm.hash(p);
            assert!((cache.get_1d(p) - CATALOG_1D[hash & 1]).abs() < f64::EPSILON);
            assert_eq!(cache.get_2d(p), CATALOG_2D[hash & 3]);
            assert_eq!(cache.get_3d(p), CATALOG_3D[hash & 15]);
            assert_eq!(cache.get_4d(p), CATALOG_4D[hash & 31]);
        }
    }
}
