use crate::foundation::core::{Point, Rgb8};
use crate::foundation::error::{CurvecastError, CurvecastResult};
use crate::foundation::math::round_sat_u8;
use crate::render::layer::Layer;

/// Independent per-layer weights of the background/curve blend.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlendWeights {
    /// Background multiplier.
    pub bg: f64,
    /// Curve layer multiplier.
    pub fg: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self { bg: 0.6, fg: 0.8 }
    }
}

impl BlendWeights {
    /// Reject non-finite or negative weights.
    pub fn validate(&self) -> CurvecastResult<()> {
        if !(self.bg.is_finite() && self.fg.is_finite()) || self.bg < 0.0 || self.fg < 0.0 {
            return Err(CurvecastError::validation(
                "blend weights must be finite and non-negative",
            ));
        }
        Ok(())
    }
}

/// How the curve layer is combined with the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMode {
    /// Saturating weighted sum of both layers, see [`blend_px`].
    #[default]
    Weighted,
    /// Stroked pixels replace the background; everything else is the background unchanged.
    ///
    /// Blend weights are ignored. This is the mode for dark strokes on a light background.
    Overlay,
}

/// Reference axes drawn over the blended frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxesStyle {
    /// Whether to draw the axes at all.
    pub enabled: bool,
    /// Line color.
    #[serde(default = "default_axes_color")]
    pub color: Rgb8,
}

fn default_axes_color() -> Rgb8 {
    Rgb8::gray(200)
}

impl Default for AxesStyle {
    fn default() -> Self {
        Self {
            enabled: false,
            color: default_axes_color(),
        }
    }
}

/// Weighted per-channel sum `clamp(round(bg·w_bg + fg·w_fg), 0, 255)`.
///
/// Weights do not need to sum to one; this is a saturating weighted overlay, not an alpha blend.
pub fn blend_px(bg: u8, fg: u8, weights: BlendWeights) -> u8 {
    round_sat_u8(f64::from(bg) * weights.bg + f64::from(fg) * weights.fg)
}

/// Blend `background` and `foreground` into a freshly allocated layer.
pub fn blend(
    background: &Layer,
    foreground: &Layer,
    weights: BlendWeights,
) -> CurvecastResult<Layer> {
    let mut out = Layer::black(background.canvas());
    blend_into(&mut out, background, foreground, weights)?;
    Ok(out)
}

/// Blend into an existing output layer. Inputs are not modified.
pub fn blend_into(
    out: &mut Layer,
    background: &Layer,
    foreground: &Layer,
    weights: BlendWeights,
) -> CurvecastResult<()> {
    if out.canvas() != background.canvas() || out.canvas() != foreground.canvas() {
        return Err(CurvecastError::evaluation(
            "blend_into expects layers of equal dimensions",
        ));
    }
    for ((d, b), f) in out
        .as_rgb8_mut()
        .iter_mut()
        .zip(background.as_rgb8())
        .zip(foreground.as_rgb8())
    {
        *d = blend_px(*b, *f, weights);
    }
    Ok(())
}

/// Copy `foreground` into `out` wherever `mask` is non-black, and `background` everywhere else.
pub fn overlay_into(
    out: &mut Layer,
    background: &Layer,
    foreground: &Layer,
    mask: &Layer,
) -> CurvecastResult<()> {
    let canvas = out.canvas();
    if canvas != background.canvas() || canvas != foreground.canvas() || canvas != mask.canvas() {
        return Err(CurvecastError::evaluation(
            "overlay_into expects layers of equal dimensions",
        ));
    }
    for (((d, b), f), m) in out
        .as_rgb8_mut()
        .chunks_exact_mut(3)
        .zip(background.as_rgb8().chunks_exact(3))
        .zip(foreground.as_rgb8().chunks_exact(3))
        .zip(mask.as_rgb8().chunks_exact(3))
    {
        let src = if m.iter().any(|&c| c != 0) { f } else { b };
        d.copy_from_slice(src);
    }
    Ok(())
}

/// Draw horizontal and vertical lines through `center`, unweighted, on top of `out`.
pub fn draw_axes(out: &mut Layer, center: Point, style: AxesStyle) {
    if !style.enabled {
        return;
    }
    out.draw_hline(center.y.round() as i32, style.color);
    out.draw_vline(center.x.round() as i32, style.color);
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
