//! Control-point editing: hit-testing, dragging, click-to-delete.

use bevy::prelude::*;
use kurbo::Point;

/// Distance in pixels for control-point hit testing
pub const HIT_MARGIN: f64 = 10.0;
/// Pointer travel in pixels before a press becomes a drag
pub const DRAG_THRESHOLD: f64 = 5.0;

/// What a pointer event did to the control-point list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// A new point was appended at the pointer position
    Added(usize),
    /// An existing point was armed for a possible drag
    Grabbed(usize),
    /// A confirmed drag moved the armed point
    Moved(usize),
    /// A press-and-release that never became a drag removed the point
    Removed(usize),
    /// A confirmed drag ended; the point stays where it was dragged
    Released(usize),
    /// Nothing changed
    None,
}

/// A pressed-but-not-yet-dragged control point
#[derive(Debug, Clone, Copy)]
struct DragCandidate {
    index: usize,
    down_pos: Point,
    confirmed: bool,
}

/// Resource owning the control points and the transient drag state.
///
/// The pointer methods are plain functions of explicit state so the whole
/// interaction model can be exercised without a running app; `src/input.rs`
/// feeds them from Bevy's mouse events. Indices are positional and shift
/// on insertion and removal.
#[derive(Resource, Debug, Default)]
pub struct PointEditor {
    points: Vec<Point>,
    drag: Option<DragCandidate>,
}

impl PointEditor {
    /// Handle a pointer press at `pos` (canvas coordinates).
    ///
    /// A press within `HIT_MARGIN` of an existing point arms that point for
    /// a possible drag; ties resolve to the lowest index. A press on empty
    /// canvas appends a new control point immediately.
    pub fn pointer_down(&mut self, pos: Point) -> EditAction {
        if let Some(index) = self.points.iter().position(|p| p.distance(pos) < HIT_MARGIN) {
            self.drag = Some(DragCandidate {
                index,
                down_pos: pos,
                confirmed: false,
            });
            EditAction::Grabbed(index)
        } else {
            self.points.push(pos);
            EditAction::Added(self.points.len() - 1)
        }
    }

    /// Handle pointer movement.
    ///
    /// Does nothing unless a point is armed. The drag is confirmed once the
    /// pointer has travelled more than `DRAG_THRESHOLD` from the press
    /// position; while confirmed, the armed point follows the pointer.
    pub fn pointer_move(&mut self, pos: Point) -> EditAction {
        let Some(drag) = self.drag.as_mut() else {
            return EditAction::None;
        };
        if !drag.confirmed && drag.down_pos.distance(pos) > DRAG_THRESHOLD {
            drag.confirmed = true;
        }
        if drag.confirmed {
            self.points[drag.index] = pos;
            EditAction::Moved(drag.index)
        } else {
            EditAction::None
        }
    }

    /// Handle pointer release, or the pointer leaving the canvas.
    ///
    /// A press-and-release that never became a drag deletes the armed point
    /// (click an existing point to delete it); a confirmed drag leaves the
    /// point at its last position. The drag state is cleared either way.
    pub fn pointer_up(&mut self) -> EditAction {
        match self.drag.take() {
            Some(drag) if !drag.confirmed => {
                self.points.remove(drag.index);
                EditAction::Removed(drag.index)
            }
            Some(drag) => EditAction::Released(drag.index),
            None => EditAction::None,
        }
    }

    /// Remove every control point. A no-op when the canvas is already empty.
    pub fn clear(&mut self) {
        self.points.clear();
        self.drag = None;
    }

    /// The current control points, in insertion order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the canvas has no control points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
