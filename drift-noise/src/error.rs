use thiserror::Error;

/// Errors surfaced by the noise crate.
///
/// Sampling itself never fails; these cover the handle, grid and name lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// The shared handle was read before any engine was published.
    #[error("noise engine is not initialized")]
    NotInitialized,
    /// A sampling grid is unusable.
    #[error("invalid grid: {reason}")]
    InvalidGrid {
        /// What is wrong with the grid.
        reason: &'static str,
    },
    /// A style name did not match any preset.
    #[error("unknown noise style `{0}` (expected none, simple or simpleTiled)")]
    UnknownStyle(String),
    /// An evaluation path name did not match.
    #[error("unknown evaluation path `{0}` (expected direct or cached)")]
    UnknownEvalPath(String),
}
