//! A handle that publishes complete engines to concurrent readers.
//!
//! Readers take a snapshot with [`SharedNoise::load`] and sample from it with
//! no locking. [`SharedNoise::initialize`] builds the replacement tables in
//! full before swapping them in, so a reader always sees one consistent
//! table set; readers still holding the old snapshot keep using it.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::engine::NoiseEngine;
use crate::error::NoiseError;
use crate::permutation::PermutationStrategy;

/// Shared, swappable engine slot.
#[derive(Debug, Default)]
pub struct SharedNoise {
    engine: ArcSwapOption<NoiseEngine>,
}

impl SharedNoise {
    /// A handle with no engine yet. Reads fail until [`initialize`](Self::initialize).
    #[must_use]
    pub fn empty() -> Self {
        Self {
            engine: ArcSwapOption::empty(),
        }
    }

    /// A handle publishing an already built engine.
    #[must_use]
    pub fn new(engine: NoiseEngine) -> Self {
        Self {
            engine: ArcSwapOption::new(Some(Arc::new(engine))),
        }
    }

    /// Build tables for `seed` and publish them.
    pub fn initialize(&self, seed: u64, strategy: PermutationStrategy) {
        self.publish(NoiseEngine::with_strategy(seed, strategy));
    }

    /// Publish a built engine, replacing the current one.
    pub fn publish(&self, engine: NoiseEngine) {
        let seed = engine.seed();
        self.engine.store(Some(Arc::new(engine)));
        tracing::debug!(seed, "published noise engine");
    }

    /// Snapshot of the current engine.
    pub fn load(&self) -> Result<Arc<NoiseEngine>, NoiseError> {
        self.engine.load_full().ok_or(NoiseError::NotInitialized)
    }

    /// Whether an engine has been published.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.engine.load().is_some()
    }
}
