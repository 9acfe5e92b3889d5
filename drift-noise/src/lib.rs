//! Permutation-table gradient noise in 1 to 4 dimensions.
//!
//! - [`NoiseEngine`] - Owns the permutation, corner table and gradient caches
//! - [`GradientNoise`] - Evaluation interface, implemented by the direct and cached paths
//! - [`estimate`] - Finite-difference gradients, including the seamless tiled variant
//! - [`NoiseStyle`] - Named presets (`none`, `simple`, `simpleTiled`)
//! - [`SharedNoise`] - Publishes a fully built engine to concurrent readers
//!
//! ```
//! use drift_noise::{GradientNoise, NoiseEngine};
//!
//! let engine = NoiseEngine::new(42);
//! assert_eq!(engine.noise_1d(3.0), 0.0);
//! assert_eq!(engine.cached().noise_2d(0.5, 0.5), engine.noise_2d(0.5, 0.5));
//! ```

pub mod config;
mod engine;
mod error;
pub mod estimate;
pub mod gradients;
mod grid;
pub mod math;
mod permutation;
mod sampler;
mod shared;
mod style;

pub use config::EngineConfig;
pub use engine::{NoiseEngine, TableSnapshot};
pub use error::NoiseError;
pub use grid::{GridSpec, sample_gradient_grid, sample_grid};
pub use permutation::{CornerHashes, CornerTable, PermutationStrategy, PermutationTable};
pub use sampler::{CachedSampler, DirectSampler, EvalPath, GradientNoise, Sampler};
pub use shared::SharedNoise;
pub use style::NoiseStyle;

/// Number of entries in every lattice table.
pub const TABLE_SIZE: usize = 256;

/// Mask applied to all lattice index arithmetic (`& 0xFF` is `mod 256`).
pub const TABLE_MASK: usize = TABLE_SIZE - 1;
