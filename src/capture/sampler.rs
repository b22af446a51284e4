use crate::foundation::core::Vec2;
use crate::foundation::rng::Rng64;
use crate::model::drawing::Point;

/// Pan state owned by the interaction layer, read at capture and render time.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub pan: Vec2,
}

impl Viewport {
    pub fn new(pan_x: f64, pan_y: f64) -> Self {
        Self {
            pan: Vec2::new(pan_x, pan_y),
        }
    }
}

/// Converts surface-relative pointer coordinates into drawing-space points.
///
/// Must be fed every pointer-move event; skipping or coalescing samples
/// degrades the reconstructed curve. Capture-time jitter, when configured,
/// perturbs each axis by `±(random() - 0.5) * magnitude` and is baked into the
/// recorded point.
#[derive(Clone, Debug)]
pub struct PointSampler {
    pub viewport: Viewport,
    pub jitter_magnitude: f64,
    rng: Rng64,
}

impl PointSampler {
    pub fn new(viewport: Viewport, jitter_magnitude: f64, rng: Rng64) -> Self {
        Self {
            viewport,
            jitter_magnitude: jitter_magnitude.max(0.0),
            rng,
        }
    }

    /// Sampler without jitter or pan; the common interactive default.
    pub fn plain() -> Self {
        Self::new(Viewport::default(), 0.0, Rng64::from_entropy())
    }

    /// Map one pointer event (already surface-relative) to a timestamped point.
    pub fn sample(&mut self, raw_x: f64, raw_y: f64, timestamp: f64) -> Point {
        let mut x = raw_x - self.viewport.pan.x;
        let mut y = raw_y - self.viewport.pan.y;
        if self.jitter_magnitude > 0.0 {
            x += self.rng.next_centered() * self.jitter_magnitude;
            y += self.rng.next_centered() * self.jitter_magnitude;
        }
        Point::new(x, y, timestamp)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/sampler.rs"]
mod tests;
