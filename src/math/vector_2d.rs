use super::{Angle, Point2, Vector2, TOLERANCE};

/// Rotates a vector by an angle.
///
/// Positive angles rotate clockwise in screen space (+Y down), matching
/// the three-point angle convention.
#[must_use]
pub fn rotated(v: Vector2, angle: Angle) -> Vector2 {
    let (s, c) = angle.sin_cos();
    Vector2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Rotates a point around an anchor.
#[must_use]
pub fn rotated_about(p: Point2, anchor: Point2, angle: Angle) -> Point2 {
    anchor + rotated(p - anchor, angle)
}

/// Reflects a point across the line through `a` and `b`.
///
/// Returns `None` when the axis is degenerate (`a` and `b` coincide).
#[must_use]
pub fn mirror_across_line_2d(p: Point2, a: Point2, b: Point2) -> Option<Point2> {
    let axis = (b - a).try_normalize(TOLERANCE)?;
    let v = p - a;
    let projected = axis * v.dot(&axis);
    Some(a + (projected * 2.0 - v))
}

/// Normalizes a vector, mapping the zero vector to zero.
///
/// Zero-length edges collapse a corner treatment to its point instead
/// of producing NaN coordinates downstream.
#[must_use]
pub fn normalize_or_zero(v: Vector2) -> Vector2 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector2::zeros)
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}
