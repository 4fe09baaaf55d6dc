use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::foundation::math::trunc_sat_u8;
use std::f64::consts::TAU;

/// Phase-shifted sine gradient: `128 + 127·sin(speed·x + k)` for `k = 0, 2, 4` (r, g, b).
///
/// Channels are clamped to `[0, 255]` and truncated. Periodic in `x` with period `2π / speed`.
pub fn color_at(x: f64, speed: f64) -> Rgb8 {
    let phase = speed * x;
    let channel = |offset: f64| trunc_sat_u8(128.0 + 127.0 * (phase + offset).sin());
    Rgb8::new(channel(0.0), channel(2.0), channel(4.0))
}

/// How stroke color evolves over a run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ColorMode {
    /// `x = i / frame_count`; with the default speed of 2π the gradient completes exactly one
    /// period over the whole run.
    Ratio {
        /// Angular speed per unit of progress.
        #[serde(default = "default_ratio_speed")]
        speed: f64,
    },
    /// `x = i`; the period is independent of run length.
    Index {
        /// Angular speed per frame.
        #[serde(default = "default_index_speed")]
        speed: f64,
    },
    /// A fixed stroke color.
    Solid {
        /// Stroke color.
        color: Rgb8,
    },
}

fn default_ratio_speed() -> f64 {
    TAU
}

fn default_index_speed() -> f64 {
    0.1
}

impl Default for ColorMode {
    fn default() -> Self {
        Self::Ratio {
            speed: default_ratio_speed(),
        }
    }
}

impl ColorMode {
    /// Reject non-finite speeds.
    pub fn validate(&self) -> CurvecastResult<()> {
        match *self {
            Self::Ratio { speed } | Self::Index { speed } if !speed.is_finite() => Err(
                CurvecastError::validation("color cycle speed must be finite"),
            ),
            _ => Ok(()),
        }
    }
}

/// Resolves the stroke color for each frame of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorCycler {
    mode: ColorMode,
    frame_count: u64,
}

impl ColorCycler {
    /// Create a cycler for a run of `frame_count` frames.
    pub fn new(mode: ColorMode, frame_count: u64) -> Self {
        Self { mode, frame_count }
    }

    /// Stroke color for the segment drawn at frame `idx`.
    pub fn color_for(&self, idx: FrameIndex) -> Rgb8 {
        match self.mode {
            ColorMode::Ratio { speed } => {
                color_at(idx.0 as f64 / self.frame_count.max(1) as f64, speed)
            }
            ColorMode::Index { speed } => color_at(idx.0 as f64, speed),
            ColorMode::Solid { color } => color,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/color.rs"]
mod tests;
