use crate::operations::{emit, flatten, inset};

use super::corner::Corner;
use super::path::PathCommand;
use super::rect::Rect;

/// A closed outline defined by the corners it produces in a bounding
/// rectangle.
///
/// Shapes are thin named constructors over corner sequences; everything
/// geometric happens in the free functions of [`crate::operations`].
pub trait CornerShape {
    /// The clockwise-wound corners of this shape inside `rect`.
    fn corners(&self, rect: Rect) -> Vec<Corner>;

    /// Drawing instructions for the flattened closed outline.
    fn path(&self, rect: Rect) -> Vec<PathCommand> {
        emit::closed_path(&flatten::flattened(&self.corners(rect)))
    }

    /// The shape's corners inset by `amount` (positive shrinks).
    fn inset_corners(&self, rect: Rect, amount: f64) -> Vec<Corner> {
        inset::inset(&self.corners(rect), amount)
    }
}
