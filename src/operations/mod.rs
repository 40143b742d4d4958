pub mod emit;
pub mod flatten;
pub mod inset;
pub mod notches;
pub mod sequence;

pub use emit::{closed_path, corner_commands, open_path};
pub use flatten::{flattened, flattened_levels};
pub use inset::inset;
pub use notches::{adding_notch, adding_notches};
pub use sequence::{applying_style, applying_style_at, bounds, center, mirrored, rotated};

use crate::error::Result;
use crate::geometry::corner::{Corner, CornerStyle};
use crate::geometry::notch::Notch;
use crate::geometry::path::PathCommand;
use crate::geometry::rect::Rect;
use crate::math::{Angle, Point2};

/// Method-call surface for corner slices, delegating to the free
/// functions of this module.
pub trait CornerSliceExt {
    /// See [`flattened`].
    fn flattened(&self) -> Vec<Corner>;
    /// See [`flattened_levels`].
    fn flattened_levels(&self, levels: usize) -> Vec<Corner>;
    /// See [`inset`].
    fn inset(&self, amount: f64) -> Vec<Corner>;
    /// See [`closed_path`].
    fn closed_path(&self) -> Vec<PathCommand>;
    /// See [`open_path`].
    fn open_path(&self) -> Vec<PathCommand>;
    /// See [`rotated`].
    fn rotated(&self, angle: Angle, anchor: Point2) -> Vec<Corner>;
    /// See [`mirrored`].
    ///
    /// # Errors
    ///
    /// Returns an error when the mirror axis is degenerate.
    fn mirrored(&self, axis_start: Point2, axis_end: Point2) -> Result<Vec<Corner>>;
    /// See [`bounds`].
    fn bounds(&self) -> Rect;
    /// See [`center`].
    fn center(&self) -> Point2;
    /// See [`applying_style`].
    fn applying_style(&self, style: &CornerStyle) -> Vec<Corner>;
    /// See [`applying_style_at`].
    fn applying_style_at(&self, style: &CornerStyle, indices: &[usize]) -> Vec<Corner>;
    /// See [`adding_notch`].
    fn adding_notch(&self, notch: &Notch, after_index: usize) -> Vec<Corner>;
    /// See [`adding_notches`].
    fn adding_notches(&self, notches: &[Option<Notch>]) -> Vec<Corner>;
}

impl CornerSliceExt for [Corner] {
    fn flattened(&self) -> Vec<Corner> {
        flattened(self)
    }

    fn flattened_levels(&self, levels: usize) -> Vec<Corner> {
        flattened_levels(self, levels)
    }

    fn inset(&self, amount: f64) -> Vec<Corner> {
        inset(self, amount)
    }

    fn closed_path(&self) -> Vec<PathCommand> {
        closed_path(self)
    }

    fn open_path(&self) -> Vec<PathCommand> {
        open_path(self)
    }

    fn rotated(&self, angle: Angle, anchor: Point2) -> Vec<Corner> {
        rotated(self, angle, anchor)
    }

    fn mirrored(&self, axis_start: Point2, axis_end: Point2) -> Result<Vec<Corner>> {
        mirrored(self, axis_start, axis_end)
    }

    fn bounds(&self) -> Rect {
        bounds(self)
    }

    fn center(&self) -> Point2 {
        center(self)
    }

    fn applying_style(&self, style: &CornerStyle) -> Vec<Corner> {
        applying_style(self, style)
    }

    fn applying_style_at(&self, style: &CornerStyle, indices: &[usize]) -> Vec<Corner> {
        applying_style_at(self, style, indices)
    }

    fn adding_notch(&self, notch: &Notch, after_index: usize) -> Vec<Corner> {
        adding_notch(self, notch, after_index)
    }

    fn adding_notches(&self, notches: &[Option<Notch>]) -> Vec<Corner> {
        adding_notches(self, notches)
    }
}
