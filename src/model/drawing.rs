use crate::foundation::core::Rgba8;
use crate::foundation::error::{InkError, InkResult};

/// Stroke width bounds exposed on the configuration surface.
pub const MIN_STROKE_WIDTH: f64 = 1.0;
pub const MAX_STROKE_WIDTH: f64 = 20.0;
/// Default pen width.
pub const DEFAULT_STROKE_WIDTH: f64 = 4.0;
/// Default pen color.
pub const DEFAULT_COLOR: &str = "#1E00D2";

/// A captured surface-space sample: coordinate plus capture time in seconds
/// since capture start. Immutable once recorded.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub timestamp: f64,
}

impl Point {
    pub fn new(x: f64, y: f64, timestamp: f64) -> Self {
        Self { x, y, timestamp }
    }

    pub fn pos(self) -> kurbo::Point {
        kurbo::Point::new(self.x, self.y)
    }
}

/// One continuous pointer-down-to-pointer-up gesture: style plus an ordered,
/// never-empty point sequence. A single-point stroke is a degenerate dot and
/// renders as one; it is never rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stroke {
    pub color: Rgba8,
    pub width: f64,
    points: Vec<Point>,
}

impl Stroke {
    pub fn new(color: Rgba8, width: f64, first: Point) -> InkResult<Self> {
        if !(width > 0.0) {
            return Err(InkError::validation("stroke width must be > 0"));
        }
        Ok(Self {
            color,
            width,
            points: vec![first],
        })
    }

    /// Build from recorded points. Rejects an empty sequence.
    pub fn from_points(color: Rgba8, width: f64, points: Vec<Point>) -> InkResult<Self> {
        if points.is_empty() {
            return Err(InkError::validation("stroke requires at least one point"));
        }
        if !(width > 0.0) {
            return Err(InkError::validation("stroke width must be > 0"));
        }
        Ok(Self {
            color,
            width,
            points,
        })
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}

/// The full ordered stroke collection at a point in time. Insertion order is
/// the z-order and the default sequential-replay order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Drawing {
    pub strokes: Vec<Stroke>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Total point count across all strokes; the sequential-mode allocation
    /// weight.
    pub fn total_points(&self) -> usize {
        self.strokes.iter().map(Stroke::len).sum()
    }
}

/// Clamp a requested pen width to the supported `[1, 20]` range.
pub fn clamp_stroke_width(width: f64) -> f64 {
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}

#[cfg(test)]
#[path = "../../tests/unit/model/drawing.rs"]
mod tests;
