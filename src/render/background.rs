use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::render::colormap::Colormap;
use crate::render::layer::Layer;

/// Per-frame background generator.
///
/// Implementations are stateless across frames: the output may depend only on the frame index
/// and run length.
pub trait Background: Send + Sync {
    /// Render the background of frame `idx` into `out`, overwriting every pixel.
    fn render(&self, idx: FrameIndex, frame_count: u64, out: &mut Layer);

    /// Return `true` when every frame renders the same pixels, so the result can be reused.
    fn is_static(&self) -> bool {
        false
    }
}

/// Built-in backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BackgroundMode {
    /// Uniform fill.
    Solid {
        /// Fill color.
        color: Rgb8,
    },
    /// Top-to-bottom ramp `0..=255` passed through `colormap`.
    Gradient {
        /// Colormap applied to the ramp.
        colormap: Colormap,
        /// Number of times the ramp scrolls through the colormap over the run; `0` keeps the
        /// background fixed.
        #[serde(default)]
        phase_cycles: f64,
    },
}

impl Default for BackgroundMode {
    fn default() -> Self {
        Self::Solid {
            color: Rgb8::BLACK,
        }
    }
}

impl BackgroundMode {
    /// Reject non-finite phase.
    pub fn validate(&self) -> CurvecastResult<()> {
        if let Self::Gradient { phase_cycles, .. } = self
            && !phase_cycles.is_finite()
        {
            return Err(CurvecastError::validation(
                "gradient phase_cycles must be finite",
            ));
        }
        Ok(())
    }
}

impl Background for BackgroundMode {
    fn render(&self, idx: FrameIndex, frame_count: u64, out: &mut Layer) {
        match *self {
            Self::Solid { color } => out.fill(color),
            Self::Gradient {
                colormap,
                phase_cycles,
            } => {
                let shift = if phase_cycles == 0.0 {
                    0
                } else {
                    let progress = idx.0 as f64 / frame_count.max(1) as f64;
                    ((progress * phase_cycles).rem_euclid(1.0) * 256.0) as u32 % 256
                };
                render_gradient(out, colormap, shift);
            }
        }
    }

    fn is_static(&self) -> bool {
        match self {
            Self::Solid { .. } => true,
            Self::Gradient { phase_cycles, .. } => *phase_cycles == 0.0,
        }
    }
}

/// Row `y` gets ramp value `floor(255·y / (height−1))`, offset by `shift` modulo 256.
fn render_gradient(out: &mut Layer, colormap: Colormap, shift: u32) {
    let lut = colormap.lut();
    let width = out.width() as usize;
    let height = out.height();
    let row_bytes = width * 3;
    let data = out.as_rgb8_mut();
    for (y, row) in data.chunks_exact_mut(row_bytes.max(1)).enumerate() {
        let ramp = ramp_value(y as u32, height);
        let v = ((u32::from(ramp) + shift) % 256) as u8;
        let px = lut[v as usize].to_array();
        for chunk in row.chunks_exact_mut(3) {
            chunk.copy_from_slice(&px);
        }
    }
}

fn ramp_value(y: u32, height: u32) -> u8 {
    if height <= 1 {
        return 0;
    }
    ((255u64 * u64::from(y)) / u64::from(height - 1)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
