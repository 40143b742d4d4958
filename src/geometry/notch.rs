use crate::math::vector_2d::rotated;
use crate::math::{Angle, Point2, RelatableValue, TOLERANCE};

use super::corner::{Corner, CornerStyle};

/// Shape of the extra corners a [`Notch`] splices into an edge.
#[derive(Debug, Clone, Copy)]
pub enum NotchStyle {
    /// Single apex at `depth`, perpendicular to the span midpoint.
    Triangle,
    /// Two perpendicular offset points bracketing the span.
    Rectangle,
    /// Caller-supplied generator, evaluated in a local frame where x
    /// runs along the edge over `[0, length]` and y runs perpendicular
    /// into the shape over `[0, depth]`.
    Custom(fn(length: f64, depth: f64) -> Vec<Corner>),
}

/// Specification of extra corners inserted between two adjacent corners.
///
/// `position`, `length`, and `depth` all resolve against the length of
/// the host edge. `position` is the distance from the edge's first
/// corner to the start of the notch span; positive `depth` points into
/// a clockwise-wound (screen space, +Y down) shape.
#[derive(Debug, Clone, Copy)]
pub struct Notch {
    pub style: NotchStyle,
    pub position: RelatableValue,
    pub length: RelatableValue,
    pub depth: RelatableValue,
}

impl Notch {
    /// Creates a notch with the given style and placement.
    #[must_use]
    pub fn new(
        style: NotchStyle,
        position: RelatableValue,
        length: RelatableValue,
        depth: RelatableValue,
    ) -> Self {
        Self {
            style,
            position,
            length,
            depth,
        }
    }

    /// Triangular notch.
    #[must_use]
    pub fn triangle(
        position: RelatableValue,
        length: RelatableValue,
        depth: RelatableValue,
    ) -> Self {
        Self::new(NotchStyle::Triangle, position, length, depth)
    }

    /// Rectangular notch.
    #[must_use]
    pub fn rectangle(
        position: RelatableValue,
        length: RelatableValue,
        depth: RelatableValue,
    ) -> Self {
        Self::new(NotchStyle::Rectangle, position, length, depth)
    }

    /// The corners this notch contributes along the edge from `a` to `b`.
    ///
    /// Empty for a degenerate (zero-length) edge.
    #[must_use]
    pub fn corners_on_edge(&self, a: Point2, b: Point2) -> Vec<Corner> {
        let edge = b - a;
        let edge_length = edge.norm();
        if edge_length < TOLERANCE {
            return Vec::new();
        }
        let dir = edge / edge_length;
        let perp = rotated(dir, Angle::degrees(90.0));

        let position = self.position.value(edge_length);
        let length = self.length.value(edge_length);
        let depth = self.depth.value(edge_length);
        let start = a + dir * position;
        let end = start + dir * length;

        match self.style {
            NotchStyle::Triangle => {
                let apex = start + dir * (length * 0.5) + perp * depth;
                vec![
                    Corner::new(CornerStyle::Point, start),
                    Corner::new(CornerStyle::Point, apex),
                    Corner::new(CornerStyle::Point, end),
                ]
            }
            NotchStyle::Rectangle => vec![
                Corner::new(CornerStyle::Point, start),
                Corner::new(CornerStyle::Point, start + perp * depth),
                Corner::new(CornerStyle::Point, end + perp * depth),
                Corner::new(CornerStyle::Point, end),
            ],
            NotchStyle::Custom(generate) => generate(length, depth)
                .into_iter()
                .map(|corner| {
                    let local = corner.point;
                    let world = start + dir * local.x + perp * local.y;
                    Corner::new(corner.style, world)
                })
                .collect(),
        }
    }
}
