//! Run configuration, read from a JSON5 file.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use drift_noise::{EngineConfig, GridSpec, NoiseStyle};
use serde::Deserialize;

/// Config file used when no path is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "drift.json5";

/// Everything one `drift` run needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DriftConfig {
    /// Seed, permutation strategy and evaluation path.
    pub engine: EngineConfig,
    /// Which preset to sample.
    pub style: NoiseStyle,
    /// Where to sample.
    pub grid: GridSpec,
    /// Report file.
    pub output: PathBuf,
    /// Also write the lookup tables into the report.
    pub dump_tables: bool,
    /// Include the 256KB corner table when dumping tables.
    pub include_corner_table: bool,
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            style: NoiseStyle::default(),
            grid: GridSpec::default(),
            output: PathBuf::from("drift-report.json"),
            dump_tables: false,
            include_corner_table: false,
        }
    }
}

impl DriftConfig {
    /// Load the config at `path`, or the defaults if the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::warn!("{} not found, using default config", path.display());
                return Ok(Self::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        };

        Self::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Parse a JSON5 config document.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json5::from_str(text)?;
        config.grid.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use drift_noise::{EvalPath, PermutationStrategy};

    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(DriftConfig::parse("{}").expect("valid"), DriftConfig::default());
    }

    #[test]
    fn full_document() {
        let config = DriftConfig::parse(
            r#"{
                // comments are fine in JSON5
                engine: { seed: 9, permutation: 'rejection', eval_path: 'cached' },
                style: 'simpleTiled',
                grid: { width: 4, height: 2, step: 0.5 },
                output: 'out.json',
                dump_tables: true,
            }"#,
        )
        .expect("valid");

        assert_eq!(config.engine.seed, 9);
        assert_eq!(config.engine.permutation, PermutationStrategy::Rejection);
        assert_eq!(config.engine.eval_path, EvalPath::Cached);
        assert_eq!(config.style, NoiseStyle::SimpleTiled);
        assert_eq!(config.grid.width, 4);
        assert_eq!(config.grid.height, 2);
        assert!((config.grid.origin_x).abs() < f64::EPSILON);
        assert_eq!(config.output, PathBuf::from("out.json"));
        assert!(config.dump_tables);
        assert!(!config.include_corner_table);
    }

    #[test]
    fn rejects_bad_style() {
        assert!(DriftConfig::parse("{ style: 'wobbly' }").is_err());
    }

    #[test]
    fn rejects_empty_grid() {
        assert!(DriftConfig::parse("{ grid: { width: 0 } }").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let config = DriftConfig::load(Path::new("/nonexistent/drift.json5")).expect("fallback");
        assert_eq!(config, DriftConfig::default());
    }
}
