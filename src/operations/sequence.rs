use crate::error::{ArrisError, Result};
use crate::geometry::corner::{Corner, CornerStyle};
use crate::geometry::rect::Rect;
use crate::math::vector_2d::{mirror_across_line_2d, rotated_about};
use crate::math::{Angle, Point2};

/// Rotates every corner point around an anchor; styles are untouched
/// (radii are invariant under rotation).
#[must_use]
pub fn rotated(corners: &[Corner], angle: Angle, anchor: Point2) -> Vec<Corner> {
    corners
        .iter()
        .map(|corner| Corner::new(corner.style.clone(), rotated_about(corner.point, anchor, angle)))
        .collect()
}

/// Mirrors every corner point across the line through `axis_start` and
/// `axis_end`; styles are untouched.
///
/// Mirroring reverses the winding sense; callers that rely on the
/// clockwise convention should also reverse the sequence.
///
/// # Errors
///
/// Returns [`ArrisError::ZeroLengthAxis`] when the axis endpoints
/// coincide.
pub fn mirrored(corners: &[Corner], axis_start: Point2, axis_end: Point2) -> Result<Vec<Corner>> {
    corners
        .iter()
        .map(|corner| {
            mirror_across_line_2d(corner.point, axis_start, axis_end)
                .map(|point| Corner::new(corner.style.clone(), point))
                .ok_or(ArrisError::ZeroLengthAxis {
                    x: axis_start.x,
                    y: axis_start.y,
                })
        })
        .collect()
}

/// Axis-aligned bounding box of the corner points.
#[must_use]
pub fn bounds(corners: &[Corner]) -> Rect {
    Rect::containing(corners.iter().map(|corner| corner.point))
}

/// Center of the bounding box.
#[must_use]
pub fn center(corners: &[Corner]) -> Point2 {
    bounds(corners).center()
}

/// Replaces the style of every corner.
#[must_use]
pub fn applying_style(corners: &[Corner], style: &CornerStyle) -> Vec<Corner> {
    corners
        .iter()
        .map(|corner| corner.with_style(style.clone()))
        .collect()
}

/// Replaces the style of the corners at `indices`.
///
/// # Panics
///
/// Panics when an index is out of range; targeting a missing corner is
/// a caller programming error.
#[must_use]
pub fn applying_style_at(corners: &[Corner], style: &CornerStyle, indices: &[usize]) -> Vec<Corner> {
    let mut result = corners.to_vec();
    for &index in indices {
        assert!(
            index < result.len(),
            "corner index {index} out of range (len {})",
            result.len()
        );
        result[index] = result[index].with_style(style.clone());
    }
    result
}
