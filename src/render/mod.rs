/// Background generators.
pub mod background;
/// Stroke color cycling.
pub mod color;
/// Named colormaps.
pub mod colormap;
/// Weighted layer blending and reference axes.
pub mod composite;
/// RGB8 pixel buffers and segment rasterization.
pub mod layer;
/// Model-to-pixel projection.
pub mod mapper;
/// Incremental path drawing.
pub mod path;
