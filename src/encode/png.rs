use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::render::layer::Layer;
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Sink writing each frame as `<dir>/<prefix>_<index:06>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    cfg: Option<SinkConfig>,
    written: Vec<PathBuf>,
}

impl PngSequenceSink {
    /// Create a sink writing into `dir` with the default `frame` prefix.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, "frame")
    }

    /// Create a sink writing into `dir` with a custom file name prefix.
    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            cfg: None,
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path of the file for frame `idx`.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("{}_{:06}.png", self.prefix, idx.0))
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> CurvecastResult<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create output directory '{}'", self.dir.display())
        })?;
        self.cfg = Some(cfg);
        self.written.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Layer) -> CurvecastResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| CurvecastError::evaluation("png sink not started"))?;
        if frame.width() != cfg.width || frame.height() != cfg.height {
            return Err(CurvecastError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width(),
                frame.height(),
                cfg.width,
                cfg.height
            )));
        }

        let path = self.frame_path(idx);
        frame
            .to_image()
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> CurvecastResult<()> {
        tracing::debug!(
            dir = %self.dir.display(),
            frames = self.written.len(),
            "png sequence finalized"
        );
        self.cfg = None;
        Ok(())
    }
}

/// Write a single layer to `path` as PNG, creating the parent directory.
pub fn write_png(path: &Path, frame: &Layer) -> CurvecastResult<()> {
    crate::encode::ffmpeg::ensure_parent_dir(path)?;
    frame
        .to_image()
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}
