use crate::foundation::core::{Canvas, PixelPoint, Rgb8};
use crate::foundation::error::{CurvecastError, CurvecastResult};

/// An RGB8 pixel buffer, tightly packed, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// Allocate a layer filled with `color`.
    pub fn new(canvas: Canvas, color: Rgb8) -> Self {
        let mut layer = Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.pixel_count().saturating_mul(3)],
        };
        layer.fill(color);
        layer
    }

    /// Allocate a black layer.
    pub fn black(canvas: Canvas) -> Self {
        Self::new(canvas, Rgb8::BLACK)
    }

    /// Wrap raw RGB8 bytes.
    pub fn from_rgb8(canvas: Canvas, data: Vec<u8>) -> CurvecastResult<Self> {
        if data.len() != canvas.pixel_count().saturating_mul(3) {
            return Err(CurvecastError::validation(format!(
                "rgb8 buffer of {} bytes does not match {}x{}",
                data.len(),
                canvas.width,
                canvas.height
            )));
        }
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as a [`Canvas`].
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Raw RGB8 bytes.
    pub fn as_rgb8(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_rgb8_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copy into an [`image::RgbImage`].
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .unwrap_or_else(|| image::RgbImage::new(self.width, self.height))
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Rgb8) {
        let px = color.to_array();
        for chunk in self.data.chunks_exact_mut(3) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Read a pixel; `None` outside the layer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb8> {
        let idx = self.index(x, y)?;
        Some(Rgb8::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Write a pixel; writes outside the layer are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Rgb8) {
        if let Some(idx) = self.index(x, y) {
            self.data[idx..idx + 3].copy_from_slice(&color.to_array());
        }
    }

    /// Draw a segment from `a` to `b` (both inclusive) with a round pen `thickness` pixels wide.
    ///
    /// The centerline is walked with Bresenham's algorithm and the pen is stamped at every step;
    /// pixels falling outside the layer are clipped.
    pub fn draw_line(&mut self, a: PixelPoint, b: PixelPoint, color: Rgb8, thickness: u32) {
        let pen = pen_offsets(thickness);
        let (mut x0, mut y0) = (i64::from(a.x), i64::from(a.y));
        let (x1, y1) = (i64::from(b.x), i64::from(b.y));

        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            for &(ox, oy) in &pen {
                self.put_pixel_i64(x0 + ox, y0 + oy, color);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Full-width one-pixel line on row `y`.
    pub fn draw_hline(&mut self, y: i32, color: Rgb8) {
        if y < 0 || i64::from(y) >= i64::from(self.height) {
            return;
        }
        for x in 0..self.width as i32 {
            self.put_pixel(x, y, color);
        }
    }

    /// Full-height one-pixel line on column `x`.
    pub fn draw_vline(&mut self, x: i32, color: Rgb8) {
        if x < 0 || i64::from(x) >= i64::from(self.width) {
            return;
        }
        for y in 0..self.height as i32 {
            self.put_pixel(x, y, color);
        }
    }

    fn put_pixel_i64(&mut self, x: i64, y: i64, color: Rgb8) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.put_pixel(x, y, color);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 3)
    }
}

/// Offsets covered by a round pen exactly `thickness` pixels across. A thickness of 0 or 1 is one
/// pixel.
///
/// Odd pens are centred on the anchor pixel. Even pens have no centre pixel, so the disk is
/// centred half a pixel down and right of the anchor and covers `-(t/2 - 1)..=t/2` on each axis.
fn pen_offsets(thickness: u32) -> Vec<(i64, i64)> {
    if thickness <= 1 {
        return vec![(0, 0)];
    }
    let lo = -i64::from((thickness - 1) / 2);
    let hi = i64::from(thickness / 2);
    let center = if thickness % 2 == 0 { 0.5 } else { 0.0 };
    let radius = f64::from(thickness) / 2.0;
    let r2 = radius * radius;
    let mut out = Vec::new();
    for oy in lo..=hi {
        for ox in lo..=hi {
            let (dx, dy) = (ox as f64 - center, oy as f64 - center);
            if dx * dx + dy * dy <= r2 {
                out.push((ox, oy));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;
