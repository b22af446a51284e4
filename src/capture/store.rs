use tracing::debug;

use crate::foundation::core::Rgba8;
use crate::foundation::error::InkResult;
use crate::model::drawing::{Drawing, Point, Stroke};

/// The drawing plus its snapshot-based undo/redo history.
///
/// Every mutating operation first pushes the *prior* drawing onto the undo
/// stack as an owned clone and clears the redo stack; `undo`/`redo` transfer
/// whole snapshots between the stacks and the current drawing. Snapshots are
/// never aliased or mutated after being pushed.
#[derive(Clone, Debug, Default)]
pub struct StrokeStore {
    drawing: Drawing,
    undo_stack: Vec<Drawing>,
    redo_stack: Vec<Drawing>,
    capturing: bool,
}

impl StrokeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Start a new stroke. Snapshots the current drawing for undo and discards
    /// any redo history.
    pub fn begin_stroke(&mut self, color: Rgba8, width: f64, first: Point) -> InkResult<()> {
        let stroke = Stroke::new(color, width, first)?;
        self.undo_stack.push(self.drawing.clone());
        self.redo_stack.clear();
        self.drawing.strokes.push(stroke);
        self.capturing = true;
        debug!(strokes = self.drawing.len(), "begin stroke");
        Ok(())
    }

    /// Append a sampled point to the active stroke. Silent no-op when no
    /// capture is active.
    pub fn append_point(&mut self, point: Point) {
        if !self.capturing {
            return;
        }
        if let Some(stroke) = self.drawing.strokes.last_mut() {
            stroke.push(point);
        }
    }

    /// End the active capture. No structural change to the drawing.
    pub fn end_stroke(&mut self) {
        self.capturing = false;
    }

    /// Restore the most recent undo snapshot. No-op on an empty stack.
    pub fn undo(&mut self) {
        let Some(previous) = self.undo_stack.pop() else {
            return;
        };
        self.capturing = false;
        let current = std::mem::replace(&mut self.drawing, previous);
        self.redo_stack.push(current);
        debug!(strokes = self.drawing.len(), "undo");
    }

    /// Re-apply the most recently undone state. No-op on an empty stack.
    pub fn redo(&mut self) {
        let Some(next) = self.redo_stack.pop() else {
            return;
        };
        self.capturing = false;
        let current = std::mem::replace(&mut self.drawing, next);
        self.undo_stack.push(current);
        debug!(strokes = self.drawing.len(), "redo");
    }

    /// Empty the drawing and both history stacks. Clearing is irreversible:
    /// it is not itself undoable.
    pub fn clear(&mut self) {
        self.drawing = Drawing::new();
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.capturing = false;
        debug!("clear");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/store.rs"]
mod tests;
