use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::CurvecastResult;
use crate::render::layer::Layer;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkConfig {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Number of frames the run intends to emit (fewer on cancellation or failure).
    pub frame_count: u64,
}

/// Consumer of composited frames.
///
/// Ordering contract: `push_frame` is called at most once per index, in strictly increasing
/// `FrameIndex` order, between one `begin` and one `end`. `end` is also called after a
/// cancelled or failed run so that frames already accepted are finalized.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> CurvecastResult<()>;
    /// Accept one fully composited frame. An error aborts the run.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Layer) -> CurvecastResult<()>;
    /// Finalize output.
    fn end(&mut self) -> CurvecastResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Layer)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames in arrival order.
    pub fn frames(&self) -> &[(FrameIndex, Layer)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CurvecastResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Layer) -> CurvecastResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> CurvecastResult<()> {
        self.ended = true;
        Ok(())
    }
}
