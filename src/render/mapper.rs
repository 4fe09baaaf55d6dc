use crate::foundation::core::{Canvas, ModelPoint, PixelPoint, Point};
use crate::foundation::math::round_to_i32;

/// Direction of the model-space y axis on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxis {
    /// Model "up" is pixel "up" (pixel y decreases as model y grows).
    #[default]
    Up,
    /// Model y grows with pixel y.
    Down,
}

/// Projects model-space samples onto the pixel grid.
///
/// Holds only immutable run geometry; the scale is supplied per call because it may change from
/// frame to frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    canvas: Canvas,
    center: Point,
    y_axis: YAxis,
}

impl CoordinateMapper {
    /// Create a mapper placing model origin at pixel `center`.
    pub fn new(canvas: Canvas, center: Point, y_axis: YAxis) -> Self {
        Self {
            canvas,
            center,
            y_axis,
        }
    }

    /// Canvas the mapper projects onto.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Pixel position of the model origin.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Project `point` at `scale` pixels per model unit.
    ///
    /// Returns `None` for undefined samples and for pixels outside `[0, width) × [0, height)`.
    pub fn project(&self, point: Option<ModelPoint>, scale: f64) -> Option<PixelPoint> {
        let p = point?;
        let dy = match self.y_axis {
            YAxis::Up => -p.y * scale,
            YAxis::Down => p.y * scale,
        };
        let px = round_to_i32(self.center.x + p.x * scale)?;
        let py = round_to_i32(self.center.y + dy)?;
        let pixel = PixelPoint::new(px, py);
        self.canvas.contains(pixel).then_some(pixel)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/mapper.rs"]
mod tests;
