//! Frame sinks.
//!
//! Sinks consume composited frames in strictly increasing frame order and are driven by
//! `RenderSession::render`.

/// `ffmpeg`-based MP4 sink (system `ffmpeg`).
pub mod ffmpeg;
/// One PNG file per frame.
pub mod png;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
