//! JSON report of one sampling run.

use drift_noise::{EvalPath, GridSpec, NoiseStyle, TableSnapshot};
use serde::Serialize;

/// Summary statistics over the finite samples of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldStats {
    /// Smallest finite sample.
    pub min: f64,
    /// Largest finite sample.
    pub max: f64,
    /// Mean of the finite samples.
    pub mean: f64,
    /// Samples that were NaN or infinite.
    pub non_finite: usize,
}

impl FieldStats {
    /// Compute stats over `values`. An all non-finite input yields zeros.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut count = 0usize;

        for &v in values.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }

        if count == 0 {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
                non_finite: values.len(),
            };
        }

        Self {
            min,
            max,
            mean: sum / count as f64,
            non_finite: values.len() - count,
        }
    }
}

/// Everything written to the output file.
#[derive(Debug, Serialize)]
pub struct Report {
    /// Engine seed.
    pub seed: u64,
    /// Sampled preset.
    pub style: NoiseStyle,
    /// Evaluation path used.
    pub eval_path: EvalPath,
    /// The sampled grid.
    pub grid: GridSpec,
    /// Value statistics.
    pub stats: FieldStats,
    /// Row-major field values.
    pub values: Vec<f64>,
    /// Row-major normalized gradients, `[x, y, z, w]` each.
    pub gradients: Vec<[f64; 4]>,
    /// Lookup tables, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<TableSnapshot>,
}
