use crate::foundation::core::{PixelPoint, Rgb8};
use crate::render::layer::Layer;

/// Incremental path-drawing state machine.
///
/// Keeps the last on-canvas point of the current run of valid samples. Each new valid sample
/// extends the path by one segment; an undefined or off-canvas sample ends the run so that no
/// segment is ever drawn across a gap.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PathAccumulator {
    last_valid: Option<PixelPoint>,
}

impl PathAccumulator {
    /// Create an accumulator in the empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last recorded point, or `None` when the path is broken.
    pub fn last_valid(&self) -> Option<PixelPoint> {
        self.last_valid
    }

    /// Break continuity explicitly.
    pub fn reset(&mut self) {
        self.last_valid = None;
    }

    /// Feed one projected sample. Returns `true` when a segment was drawn into `target`.
    pub fn advance(
        &mut self,
        sample: Option<PixelPoint>,
        target: &mut Layer,
        color: Rgb8,
        thickness: u32,
    ) -> bool {
        let Some(p) = sample else {
            self.last_valid = None;
            return false;
        };
        let drew = match self.last_valid {
            Some(prev) => {
                target.draw_line(prev, p, color, thickness);
                true
            }
            None => false,
        };
        self.last_valid = Some(p);
        drew
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/path.rs"]
mod tests;
