//! The noise engine: one seeded, internally consistent set of lookup tables.

use std::fmt;
use std::time::Instant;

use glam::{DVec2, DVec3, DVec4};
use serde::Serialize;

use crate::config::EngineConfig;
use crate::gradients::{CATALOG_1D, CATALOG_2D, CATALOG_3D, CATALOG_4D, GradientCache};
use crate::permutation::{CornerHashes, CornerTable, PermutationStrategy, PermutationTable};
use crate::sampler::{CachedSampler, DirectSampler, EvalPath, GradientNoise, Sampler};
use crate::TABLE_SIZE;

/// Owns the permutation table and everything derived from it.
///
/// Building or reseeding produces all tables together, so a reader never
/// sees a corner table or gradient cache from a different permutation.
/// Independent engines with different seeds can coexist freely.
#[derive(Clone)]
pub struct NoiseEngine {
    seed: u64,
    strategy: PermutationStrategy,
    perm: PermutationTable,
    corners: CornerTable,
    /// Boxed because the four caches are ~20KB.
    gradients: Box<GradientCache>,
}

impl NoiseEngine {
    /// Build an engine with the default permutation strategy.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_strategy(seed, PermutationStrategy::default())
    }

    /// Build an engine with an explicit permutation strategy.
    #[must_use]
    pub fn with_strategy(seed: u64, strategy: PermutationStrategy) -> Self {
        let start = Instant::now();

        let perm = PermutationTable::build(seed, strategy);
        let corners = CornerTable::derive(&perm);
        let gradients = Box::new(GradientCache::build(&perm));

        tracing::debug!(seed, ?strategy, elapsed = ?start.elapsed(), "built noise tables");

        Self {
            seed,
            strategy,
            perm,
            corners,
            gradients,
        }
    }

    /// Build an engine from configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_strategy(config.seed, config.permutation)
    }

    /// Rebuild every table for a new seed, keeping the strategy.
    ///
    /// The replacement is built in full before it is swapped in.
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::with_strategy(seed, self.strategy);
    }

    /// The seed the current tables were built from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// The permutation strategy used for this engine.
    #[must_use]
    pub const fn strategy(&self) -> PermutationStrategy {
        self.strategy
    }

    /// The direct evaluation path.
    #[must_use]
    pub const fn direct(&self) -> DirectSampler<'_> {
        DirectSampler::new(&self.perm)
    }

    /// The cached evaluation path.
    #[must_use]
    pub fn cached(&self) -> CachedSampler<'_> {
        CachedSampler::new(&self.perm, &self.corners, &self.gradients)
    }

    /// A sampler for the given path.
    #[must_use]
    pub fn sampler(&self, path: EvalPath) -> Sampler<'_> {
        match path {
            EvalPath::Direct => Sampler::Direct(self.direct()),
            EvalPath::Cached => Sampler::Cached(self.cached()),
        }
    }

    /// 1D noise, direct path.
    #[must_use]
    pub fn noise_1d(&self, x: f64) -> f64 {
        self.direct().noise_1d(x)
    }

    /// 2D noise, direct path.
    #[must_use]
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.direct().noise_2d(x, y)
    }

    /// 3D noise, direct path.
    #[must_use]
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.direct().noise_3d(x, y, z)
    }

    /// 4D noise, direct path.
    #[must_use]
    pub fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.direct().noise_4d(x, y, z, w)
    }

    /// 1D noise, cached path.
    #[must_use]
    pub fn cached_noise_1d(&self, x: f64) -> f64 {
        self.cached().noise_1d(x)
    }

    /// 2D noise, cached path.
    #[must_use]
    pub fn cached_noise_2d(&self, x: f64, y: f64) -> f64 {
        self.cached().noise_2d(x, y)
    }

    /// 3D noise, cached path.
    #[must_use]
    pub fn cached_noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.cached().noise_3d(x, y, z)
    }

    /// 4D noise, cached path.
    #[must_use]
    pub fn cached_noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.cached().noise_4d(x, y, z, w)
    }

    // ── Table export ────────────────────────────────────────────────────────

    /// The permutation table.
    #[must_use]
    pub const fn permutation(&self) -> &[u8; TABLE_SIZE] {
        self.perm.values()
    }

    /// The corner table, 65536 cells, row-major with `y` as the row.
    #[must_use]
    pub fn corner_table(&self) -> &[CornerHashes] {
        self.corners.cells()
    }

    /// The corner table flattened to `aa ab ba bb` bytes per cell.
    #[must_use]
    pub fn corner_table_bytes(&self) -> Vec<u8> {
        self.corners
            .cells()
            .iter()
            .flat_map(|cell| cell.to_array())
            .collect()
    }

    /// Gradient cache for 1D noise, one entry per permutation slot.
    #[must_use]
    pub fn cache_1d(&self) -> &[f64; TABLE_SIZE] {
        &self.gradients.cache_1d
    }

    /// Gradient cache for 2D noise.
    #[must_use]
    pub fn cache_2d(&self) -> &[DVec2; TABLE_SIZE] {
        &self.gradients.cache_2d
    }

    /// Gradient cache for 3D noise.
    #[must_use]
    pub fn cache_3d(&self) -> &[DVec3; TABLE_SIZE] {
        &self.gradients.cache_3d
    }

    /// Gradient cache for 4D noise.
    #[must_use]
    pub fn cache_4d(&self) -> &[DVec4; TABLE_SIZE] {
        &self.gradients.cache_4d
    }

    /// Flat copy of every table for external consumers.
    #[must_use]
    pub fn snapshot(&self, include_corners: bool) -> TableSnapshot {
        TableSnapshot {
            seed: self.seed,
            strategy: self.strategy,
            permutation: self.perm.values().to_vec(),
            corner_table: include_corners.then(|| self.corner_table_bytes()),
            catalog_1d: CATALOG_1D.iter().map(|&g| g as f32).collect(),
            catalog_2d: flatten(CATALOG_2D.iter().map(|g| g.to_array())),
            catalog_3d: flatten(CATALOG_3D.iter().map(|g| g.to_array())),
            catalog_4d: flatten(CATALOG_4D.iter().map(|g| g.to_array())),
            cache_1d: self.gradients.cache_1d.iter().map(|&g| g as f32).collect(),
            cache_2d: flatten(self.gradients.cache_2d.iter().map(|g| g.to_array())),
            cache_3d: flatten(self.gradients.cache_3d.iter().map(|g| g.to_array())),
            cache_4d: flatten(self.gradients.cache_4d.iter().map(|g| g.to_array())),
        }
    }
}

impl GradientNoise for NoiseEngine {
    fn noise_1d(&self, x: f64) -> f64 {
        self.direct().noise_1d(x)
    }

    fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.direct().noise_2d(x, y)
    }

    fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.direct().noise_3d(x, y, z)
    }

    fn noise_4d(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.direct().noise_4d(x, y, z, w)
    }
}

impl fmt::Debug for NoiseEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NoiseEngine")
            .field("seed", &self.seed)
            .field("strategy", &self.strategy)
            .field("perm", &self.perm)
            .finish_non_exhaustive()
    }
}

fn flatten<const N: usize>(vectors: impl Iterator<Item = [f64; N]>) -> Vec<f32> {
    vectors.flatten().map(|c| c as f32).collect()
}

/// Every table of one engine as flat arrays.
///
/// Vectors are flattened component-wise (`x y`, `x y z`, `x y z w`). The
/// corner table is optional since it is 256KB.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    /// Seed the tables were built from.
    pub seed: u64,
    /// Permutation strategy.
    pub strategy: PermutationStrategy,
    /// 256 permutation values.
    pub permutation: Vec<u8>,
    /// 65536 cells of `aa ab ba bb`, row-major with `y` as the row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_table: Option<Vec<u8>>,
    /// 1D catalog.
    pub catalog_1d: Vec<f32>,
    /// 2D catalog.
    pub catalog_2d: Vec<f32>,
    /// 3D catalog.
    pub catalog_3d: Vec<f32>,
    /// 4D catalog.
    pub catalog_4d: Vec<f32>,
    /// 1D gradient cache.
    pub cache_1d: Vec<f32>,
    /// 2D gradient cache.
    pub cache_2d: Vec<f32>,
    /// 3D gradient cache.
    pub cache_3d: Vec<f32>,
    /// 4D gradient cache.
    pub cache_4d: Vec<f32>,
}
