//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::permutation::PermutationStrategy;
use crate::sampler::EvalPath;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// How to build and evaluate a [`NoiseEngine`](crate::NoiseEngine).
///
/// Every field has a default, so an empty object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Seed for the permutation table.
    pub seed: u64,
    /// How the permutation is drawn.
    pub permutation: PermutationStrategy,
    /// Which evaluation path readers use.
    pub eval_path: EvalPath,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            permutation: PermutationStrategy::default(),
            eval_path: EvalPath::default(),
        }
    }
}
