//! `drift`: sample a gradient-noise style over a grid and write a JSON report.
//!
//! Usage: `drift [config.json5]`

mod config;
mod logging;
mod report;

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use drift_noise::{NoiseEngine, sample_gradient_grid, sample_grid};

use crate::config::{DEFAULT_CONFIG_PATH, DriftConfig};
use crate::report::{FieldStats, Report};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config_path = env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = DriftConfig::load(&config_path)?;

    let start = Instant::now();
    let engine = NoiseEngine::from_config(&config.engine);
    tracing::info!(
        "Noise tables for seed {} built in {:?}",
        engine.seed(),
        start.elapsed()
    );

    let sampler = engine.sampler(config.engine.eval_path);
    let start = Instant::now();
    let values = sample_grid(&sampler, config.style, &config.grid)?;
    let gradients = sample_gradient_grid(&sampler, config.style, &config.grid)?;
    let stats = FieldStats::from_values(&values);
    tracing::info!(
        style = %config.style,
        path = %config.engine.eval_path,
        samples = values.len(),
        min = stats.min,
        max = stats.max,
        mean = stats.mean,
        elapsed = ?start.elapsed(),
        "sampled grid"
    );
    if stats.non_finite > 0 {
        tracing::warn!("{} samples were not finite", stats.non_finite);
    }

    let report = Report {
        seed: engine.seed(),
        style: config.style,
        eval_path: config.engine.eval_path,
        grid: config.grid,
        stats,
        values,
        gradients: gradients.iter().map(|g| g.to_array()).collect(),
        tables: config
            .dump_tables
            .then(|| engine.snapshot(config.include_corner_table)),
    };

    let file = File::create(&config.output)
        .with_context(|| format!("failed to create {}", config.output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    writer.flush()?;

    tracing::info!("Report written to {}", config.output.display());
    Ok(())
}
