use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use std::f64::consts::TAU;

/// How a frame index is turned into the curve parameter `t`.
///
/// Families disagree on this (some sweep a fixed number of turns over the whole run, some advance
/// at a fixed rate per second, some by a fixed step per frame), so it is run configuration rather
/// than engine logic.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TimeMapping {
    /// `t = offset + step * i`.
    Linear {
        /// Parameter increment per frame.
        step: f64,
        /// Parameter at frame 0.
        #[serde(default)]
        offset: f64,
    },
    /// `t = rate * i / fps`, i.e. `rate` parameter units per second of video.
    PerSecond {
        /// Parameter increment per second.
        rate: f64,
    },
    /// `t = 2π * cycles * i / frame_count`: `cycles` full turns over the run.
    Cycles {
        /// Number of full turns swept by the last frame.
        cycles: f64,
    },
}

impl Default for TimeMapping {
    fn default() -> Self {
        Self::Cycles { cycles: 1.0 }
    }
}

impl TimeMapping {
    /// Curve parameter for frame `idx`.
    pub fn t_at(&self, idx: FrameIndex, frame_count: u64, fps: Fps) -> f64 {
        let i = idx.0 as f64;
        match *self {
            Self::Linear { step, offset } => offset + step * i,
            Self::PerSecond { rate } => rate * i * fps.frame_duration_secs(),
            Self::Cycles { cycles } => TAU * cycles * i / (frame_count.max(1) as f64),
        }
    }

    /// Reject non-finite coefficients.
    pub fn validate(&self) -> CurvecastResult<()> {
        let ok = match *self {
            Self::Linear { step, offset } => step.is_finite() && offset.is_finite(),
            Self::PerSecond { rate } => rate.is_finite(),
            Self::Cycles { cycles } => cycles.is_finite(),
        };
        if ok {
            Ok(())
        } else {
            Err(CurvecastError::validation(
                "time mapping coefficients must be finite",
            ))
        }
    }
}
