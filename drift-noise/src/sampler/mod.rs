//! Noise evaluation paths.
//!
//! [`DirectSampler`] walks the permutation chain for every corner.
//! [`CachedSampler`] resolves the same corners through the corner table and
//! gradient caches. Both produce the same field; they differ only in how many
//! indirections a sample costs.

mod cached;
mod direct;

use std::fmt;
use std::str::FromStr;

use glam::{DVec2, DVec3, DVec4};
use serde::{Deserialize, Serialize};

pub use cached::CachedSampler;
pub use direct::DirectSampler;

use crate::error::NoiseError;
use crate::estimate;
use crate::math::lerp;

/// A continuous noise field in 1 to 4 dimensions.
///
/// Values are nominally in `[-1, 1]` and exactly 0 at integer coordinates.
pub trait GradientNoise {
    /// Sample the 1D field.
    fn noise_1d(&self, x: f64) -> f64;

    /// Sample the 2D field.
    fn noise_2d(&self, x: f64, y: f64) -> f64;

    /// Sample the 3D field.
    fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64;

    /// Sample the 4D field.
    fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64;

    /// Forward-difference gradient of the 2D field.
    fn gradient_2d(&self, x: f64, y: f64) -> DVec2 {
        estimate::gradient_2d(x, y, |x, y| self.noise_2d(x, y))
    }

    /// Forward-difference gradient of the 3D field.
    fn gradient_3d(&self, x: f64, y: f64, z: f64) -> DVec3 {
        estimate::gradient_3d(x, y, z, |x, y, z| self.noise_3d(x, y, z))
    }

    /// Forward-difference gradient of the 4D field.
    fn gradient_4d(&self, x: f64, y: f64, z: f64, w: f64) -> DVec4 {
        estimate::gradient_4d(x, y, z, w, |x, y, z, w| self.noise_4d(x, y, z, w))
    }

    /// Normalized gradient of the 4D field on the torus embedding of `(x, y)`.
    ///
    /// Repeats with period `2 * PI` along both axes.
    fn tiled_gradient(&self, x: f64, y: f64) -> DVec4 {
        estimate::tiled_gradient(x, y, |x, y, z, w| self.noise_4d(x, y, z, w))
    }
}

/// Which evaluation path a [`Sampler`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalPath {
    /// Chained permutation lookups per corner.
    #[default]
    Direct,
    /// Corner table and gradient cache lookups.
    Cached,
}

impl EvalPath {
    /// The config name of this path.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Cached => "cached",
        }
    }
}

impl fmt::Display for EvalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EvalPath {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "cached" => Ok(Self::Cached),
            other => Err(NoiseError::UnknownEvalPath(other.to_owned())),
        }
    }
}

/// Either evaluation path, chosen at runtime.
///
/// Uses enum dispatch rather than `dyn` so the per-sample call stays
/// inlinable.
#[derive(Debug, Clone, Copy)]
pub enum Sampler<'a> {
    /// Direct path.
    Direct(DirectSampler<'a>),
    /// Cached path.
    Cached(CachedSampler<'a>),
}

impl Sampler<'_> {
    /// The path this sampler evaluates with.
    #[must_use]
    pub const fn path(&self) -> EvalPath {
        match self {
            Self::Direct(_) => EvalPath::Direct,
            Self::Cached(_) => EvalPath::Cached,
        }
    }
}

impl GradientNoise for Sampler<'_> {
    #[inline]
    fn noise_1d(&self, x: f64) -> f64 {
        match self {
            Self::Direct(s) => s.noise_1d(x),
            Self::Cached(s) => s.noise_1d(x),
        }
    }

    #[inline]
    fn noise_2d(&self, x: f64, y: f64) -> f64 {
        match self {
            Self::Direct(s) => s.noise_2d(x, y),
            Self::Cached(s) => s.noise_2d(x, y),
        }
    }

    #[inline]
    fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        match self {
            Self::Direct(s) => s.noise_3d(x, y, z),
            Self::Cached(s) => s.noise_3d(x, y, z),
        }
    }

    #[inline]
    fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        match self {
            Self::Direct(s) => s.noise_4d(x, y, z, w),
            Self::Cached(s) => s.noise_4d(x, y, z, w),
        }
    }
}

/// Bilinear blend of one lattice face.
///
/// Corners are `(x0 y0, x1 y0, x0 y1, x1 y1)`; `u` blends along x, `v` along y.
#[inline]
pub(crate) fn bilerp(c00: f64, c10: f64, c01: f64, c11: f64, u: f64, v: f64) -> f64 {
    lerp(lerp(c00, c10, u), lerp(c01, c11, u), v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseEngine;

    #[test]
    fn eval_path_from_str() {
        assert_eq!("direct".parse::<EvalPath>().ok(), Some(EvalPath::Direct));
        assert_eq!("cached".parse::<EvalPath>().ok(), Some(EvalPath::Cached));
        assert!(matches!(
            "fast".parse::<EvalPath>(),
            Err(NoiseError::UnknownEvalPath(name)) if name == "fast"
        ));
    }

    #[test]
    fn sampler_reports_path() {
        let engine = NoiseEngine::new(1);
        assert_eq!(engine.sampler(EvalPath::Direct).path(), EvalPath::Direct);
        assert_eq!(engine.sampler(EvalPath::Cached).path(), EvalPath::Cached);
    }

    #[test]
    fn dispatch_matches_concrete_samplers() {
        let engine = NoiseEngine::new(9);
        let direct = engine.sampler(EvalPath::Direct);
        let cached = engine.sampler(EvalPath::Cached);

        for i in 0..50 {
            let t = f64::from(i) * 0.173 - 4.0;
            assert!((direct.noise_3d(t, -t, 0.5 * t) - engine.noise_3d(t, -t, 0.5 * t)).abs() < 1e-12);
            assert!(
                (cached.noise_3d(t, -t, 0.5 * t) - engine.cached_noise_3d(t, -t, 0.5 * t)).abs()
                    < 1e-12
            );
        }
    }
}
