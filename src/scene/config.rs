use crate::curve::time::TimeMapping;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Point};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::render::background::BackgroundMode;
use crate::render::color::ColorMode;
use crate::render::composite::{AxesStyle, BlendWeights, CompositeMode};
use crate::render::mapper::YAxis;

const DEFAULT_DURATION_SECS: f64 = 10.0;

/// How the curve layer is maintained from frame to frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawMode {
    /// Persistent curve layer, one segment added per frame.
    #[default]
    Streaming,
    /// Clear the curve layer every frame and replay the whole projected history.
    FullRedraw,
}

/// Immutable per-run render settings.
///
/// Every field has a default, so a JSON object only needs to name what it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output frame rate.
    pub fps: Fps,
    /// Explicit run length. Mutually exclusive with `duration_seconds`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<u64>,
    /// Run length in seconds, floored to whole frames. Mutually exclusive with `frame_count`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<f64>,
    /// Pixels per model unit at frame 0.
    pub scale_initial: f64,
    /// Scale added per frame (may be zero or negative).
    pub scale_step: f64,
    /// Pixel position of the model origin; defaults to the integer-divided canvas center.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<Point>,
    /// Screen direction of model +y.
    pub y_axis: YAxis,
    /// Stroke diameter in pixels.
    pub line_thickness: u32,
    /// Background generator.
    pub background: BackgroundMode,
    /// Background/curve blend weights, used by [`CompositeMode::Weighted`].
    pub blend: BlendWeights,
    /// How the curve layer is combined with the background.
    pub composite: CompositeMode,
    /// Stroke color evolution.
    pub color: ColorMode,
    /// Optional reference axes.
    pub axes: AxesStyle,
    /// Frame index to curve parameter mapping; defaults to the curve family's own mapping.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeMapping>,
    /// Curve layer discipline.
    pub draw_mode: DrawMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            fps: Fps { num: 60, den: 1 },
            frame_count: None,
            duration_seconds: None,
            scale_initial: 1.0,
            scale_step: 0.0,
            center: None,
            y_axis: YAxis::Up,
            line_thickness: 1,
            background: BackgroundMode::default(),
            blend: BlendWeights::default(),
            composite: CompositeMode::Weighted,
            color: ColorMode::default(),
            axes: AxesStyle::default(),
            time: None,
            draw_mode: DrawMode::Streaming,
        }
    }
}

impl RenderConfig {
    /// Check every invariant a run relies on. Nothing is rendered from an invalid config.
    pub fn validate(&self) -> CurvecastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CurvecastError::validation(
                "width and height must be > 0",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        if self.line_thickness == 0 {
            return Err(CurvecastError::validation("line_thickness must be >= 1"));
        }
        if !(self.scale_initial.is_finite() && self.scale_step.is_finite()) {
            return Err(CurvecastError::validation(
                "scale_initial and scale_step must be finite",
            ));
        }
        if let Some(c) = self.center
            && !(c.x.is_finite() && c.y.is_finite())
        {
            return Err(CurvecastError::validation("center must be finite"));
        }
        if let Some(d) = self.duration_seconds
            && !(d.is_finite() && d > 0.0)
        {
            return Err(CurvecastError::validation(
                "duration_seconds must be finite and > 0",
            ));
        }
        if self.frame_count.is_some() && self.duration_seconds.is_some() {
            return Err(CurvecastError::validation(
                "set either frame_count or duration_seconds, not both",
            ));
        }
        if self.resolved_frame_count() == 0 {
            return Err(CurvecastError::validation("run must contain at least one frame"));
        }
        self.background.validate()?;
        self.blend.validate()?;
        self.color.validate()?;
        if let Some(time) = &self.time {
            time.validate()?;
        }
        Ok(())
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Number of frames in the run: `frame_count`, else `floor(duration_seconds * fps)`, else
    /// ten seconds of video.
    pub fn resolved_frame_count(&self) -> u64 {
        match (self.frame_count, self.duration_seconds) {
            (Some(n), _) => n,
            (None, Some(secs)) => self.fps.secs_to_frames_floor(secs),
            (None, None) => self.fps.secs_to_frames_floor(DEFAULT_DURATION_SECS),
        }
    }

    /// Pixel position of the model origin.
    pub fn resolved_center(&self) -> Point {
        self.center.unwrap_or_else(|| self.canvas().center())
    }

    /// Scale in effect at frame `idx`: `scale_initial + scale_step * idx`.
    pub fn scale_at(&self, idx: FrameIndex) -> f64 {
        self.scale_initial + self.scale_step * idx.0 as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
