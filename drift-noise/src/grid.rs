//! Parallel evaluation of a style over a rectangular grid.

use glam::DVec4;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::sampler::GradientNoise;
use crate::style::NoiseStyle;

/// A row-major sampling grid.
///
/// Sample `(col, row)` sits at `(origin_x + col * step, origin_y + row * step)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Samples per row.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// X coordinate of the first column.
    pub origin_x: f64,
    /// Y coordinate of the first row.
    pub origin_y: f64,
    /// Distance between neighbouring samples.
    pub step: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            origin_x: 0.0,
            origin_y: 0.0,
            step: 0.125,
        }
    }
}

impl GridSpec {
    /// Check the grid can be sampled.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidGrid {
                reason: "width and height must be non-zero",
            });
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(NoiseError::InvalidGrid {
                reason: "width * height overflows usize",
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(NoiseError::InvalidGrid {
                reason: "step must be finite and positive",
            });
        }
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(NoiseError::InvalidGrid {
                reason: "origin must be finite",
            });
        }
        Ok(())
    }

    /// Total sample count, saturating for grids that fail [`Self::validate`].
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Whether the grid has no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// X coordinate of column `col`.
    #[inline]
    #[must_use]
    pub fn x(&self, col: usize) -> f64 {
        self.origin_x + col as f64 * self.step
    }

    /// Y coordinate of row `row`.
    #[inline]
    #[must_use]
    pub fn y(&self, row: usize) -> f64 {
        self.origin_y + row as f64 * self.step
    }
}

/// Evaluate `style` at every grid point. Rows are sampled in parallel.
pub fn sample_grid<N>(noise: &N, style: NoiseStyle, grid: &GridSpec) -> Result<Vec<f64>, NoiseError>
where
    N: GradientNoise + Sync + ?Sized,
{
    fill_rows(grid, 0.0, |x, y| style.value(noise, x, y))
}

/// Evaluate the normalized `style` gradient at every grid point.
pub fn sample_gradient_grid<N>(
    noise: &N,
    style: NoiseStyle,
    grid: &GridSpec,
) -> Result<Vec<DVec4>, NoiseError>
where
    N: GradientNoise + Sync + ?Sized,
{
    fill_rows(grid, DVec4::ZERO, |x, y| style.gradient(noise, x, y))
}

fn fill_rows<T, F>(grid: &GridSpec, zero: T, sample: F) -> Result<Vec<T>, NoiseError>
where
    T: Copy + Send,
    F: Fn(f64, f64) -> T + Sync,
{
    grid.validate()?;
    tracing::trace!(width = grid.width, height = grid.height, "sampling grid");

    let mut out = vec![zero; grid.len()];
    out.par_chunks_mut(grid.width)
        .enumerate()
        .for_each(|(row, values)| {
            let y = grid.y(row);
            for (col, value) in values.iter_mut().enumerate() {
                *value = sample(grid.x(col), y);
            }
        });

    Ok(out)
}
