//! Named noise presets.
//!
//! A style is pure dispatch over a [`GradientNoise`]; switching styles never
//! touches the tables.

use std::fmt;
use std::str::FromStr;

use glam::DVec4;
use serde::{Deserialize, Serialize};

use crate::error::NoiseError;
use crate::sampler::GradientNoise;

/// How a 2D coordinate is turned into a displacement value and gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseStyle {
    /// Constant zero field. Disables displacement.
    #[serde(rename = "none")]
    None,
    /// Plain 2D noise.
    #[default]
    #[serde(rename = "simple")]
    Simple,
    /// 4D noise on the torus embedding of `(x, y)`; tiles every `2 * PI`.
    #[serde(rename = "simpleTiled")]
    SimpleTiled,
}

impl NoiseStyle {
    /// All styles, in declaration order.
    pub const ALL: [Self; 3] = [Self::None, Self::Simple, Self::SimpleTiled];

    /// The config name of this style.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Simple => "simple",
            Self::SimpleTiled => "simpleTiled",
        }
    }

    /// Field value at `(x, y)`.
    #[inline]
    pub fn value<N: GradientNoise + ?Sized>(self, noise: &N, x: f64, y: f64) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Simple => noise.noise_2d(x, y),
            Self::SimpleTiled => {
                let (sin_x, cos_x) = x.sin_cos();
                let (sin_y, cos_y) = y.sin_cos();
                noise.noise_4d(sin_x, cos_x, sin_y, cos_y)
            }
        }
    }

    /// Normalized gradient at `(x, y)`.
    ///
    /// `Simple` fills `x` and `y` and leaves `z` and `w` at zero. `SimpleTiled`
    /// returns the full gradient on the 4D torus.
    #[inline]
    pub fn gradient<N: GradientNoise + ?Sized>(self, noise: &N, x: f64, y: f64) -> DVec4 {
        match self {
            Self::None => DVec4::ZERO,
            Self::Simple => noise.gradient_2d(x, y).normalize_or_zero().extend(0.0).extend(0.0),
            Self::SimpleTiled => noise.tiled_gradient(x, y),
        }
    }
}

impl fmt::Display for NoiseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NoiseStyle {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| NoiseError::UnknownStyle(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::TAU;

    use super::*;
    use crate::NoiseEngine;

    #[test]
    fn names_round_trip() {
        for style in NoiseStyle::ALL {
            assert_eq!(style.name().parse::<NoiseStyle>().ok(), Some(style));
        }
        assert!("tiled".parse::<NoiseStyle>().is_err());
    }

    #[test]
    fn none_is_flat() {
        let engine = NoiseEngine::new(42);
        for i in 0..20 {
            let t = f64::from(i) * 0.37;
            assert!(NoiseStyle::None.value(&engine, t, -t).abs() < f64::EPSILON);
            assert_eq!(NoiseStyle::None.gradient(&engine, t, -t), DVec4::ZERO);
        }
    }

    #[test]
    fn simple_is_plain_2d_noise() {
        let engine = NoiseEngine::new(42);
        let v = NoiseStyle::Simple.value(&engine, 3.25, -1.5);
        assert!((v - engine.noise_2d(3.25, -1.5)).abs() < f64::EPSILON);

        let g = NoiseStyle::Simple.gradient(&engine, 3.25, -1.5);
        assert!(g.z.abs() < f64::EPSILON && g.w.abs() < f64::EPSILON);
        assert!((g.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn simple_tiled_repeats() {
        let engine = NoiseEngine::new(42);
        let cached = engine.cached();
        for (x, y) in [(0.2, 0.9), (1.7, -2.4), (4.0, 3.0)] {
            let v = NoiseStyle::SimpleTiled.value(&cached, x, y);
            assert!((v - NoiseStyle::SimpleTiled.value(&cached, x + TAU, y)).abs() < 1e-9);
            assert!((v - NoiseStyle::SimpleTiled.value(&cached, x, y - TAU)).abs() < 1e-9);
        }
    }

    #[test]
    fn serde_names() {
        let style: NoiseStyle = serde_json::from_str("\"simpleTiled\"").expect("valid style");
        assert_eq!(style, NoiseStyle::SimpleTiled);
        assert_eq!(
            serde_json::to_string(&NoiseStyle::None).expect("serializable"),
            "\"none\""
        );
    }
}
