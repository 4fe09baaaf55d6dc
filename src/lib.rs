//! Curvecast is a deterministic, incremental curve-animation renderer.
//!
//! A run samples a parametric curve once per frame, projects the sample onto the pixel grid, grows
//! the drawn path by one segment, blends the curve layer over a background and hands the frame to
//! a sink. The public API is session-oriented:
//!
//! - Load and validate an [`Animation`] (or build a [`RenderConfig`] plus any [`Curve`])
//! - Create a [`RenderSession`]
//! - Render single frames or stream the whole run into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Curve contract, built-in families and time mappings.
pub mod curve;
/// Frame sinks (in-memory, PNG sequence, ffmpeg).
pub mod encode;
/// Drawing primitives: layers, projection, path state, colors, compositing.
pub mod render;
/// JSON-facing run description.
pub mod scene;
/// Session-oriented frame loop.
pub mod session;

pub use curve::family::CurveFamily;
pub use curve::sample::Curve;
pub use curve::time::TimeMapping;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use encode::png::{PngSequenceSink, write_png};
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::cancel::CancelToken;
pub use foundation::core::{Canvas, Fps, FrameIndex, ModelPoint, PixelPoint, Point, Rgb8};
pub use foundation::error::{CurvecastError, CurvecastResult};
pub use render::background::{Background, BackgroundMode};
pub use render::color::{ColorCycler, ColorMode, color_at};
pub use render::colormap::Colormap;
pub use render::composite::{
    AxesStyle, BlendWeights, CompositeMode, blend, blend_into, overlay_into,
};
pub use render::layer::Layer;
pub use render::mapper::{CoordinateMapper, YAxis};
pub use render::path::PathAccumulator;
pub use scene::animation::Animation;
pub use scene::config::{DrawMode, RenderConfig};
pub use session::render_session::{RenderSession, RenderSessionOpts, RenderStats};
