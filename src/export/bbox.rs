use crate::render::cpu::FrameRgba;

/// Inclusive pixel-space content bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBounds {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl PixelBounds {
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }
}

/// Scan every pixel and return the minimal rectangle enclosing all non-zero
/// alpha, or `None` for a fully transparent frame.
///
/// O(width × height); exports run it once on the fully revealed drawing and
/// reuse the rectangle for every animation frame, so the crop stays static
/// while content reveals progressively.
pub fn content_bounds(frame: &FrameRgba) -> Option<PixelBounds> {
    let mut bounds: Option<PixelBounds> = None;
    for y in 0..frame.height {
        let row = (y as usize) * (frame.width as usize) * 4;
        for x in 0..frame.width {
            if frame.data[row + (x as usize) * 4 + 3] == 0 {
                continue;
            }
            bounds = Some(match bounds {
                None => PixelBounds {
                    min_x: x,
                    min_y: y,
                    max_x: x,
                    max_y: y,
                },
                Some(b) => PixelBounds {
                    min_x: b.min_x.min(x),
                    min_y: b.min_y.min(y),
                    max_x: b.max_x.max(x),
                    max_y: b.max_y.max(y),
                },
            });
        }
    }
    bounds
}

#[cfg(test)]
#[path = "../../tests/unit/export/bbox.rs"]
mod tests;
