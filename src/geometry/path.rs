use crate::math::Point2;

/// A drawing instruction for the host rendering layer.
///
/// Any 2D path or canvas API that supports move-to, line-to, and the
/// standard two-tangent arc-to can consume emitted sequences. `ArcTo`
/// describes a circular arc tangent to the line from the current point
/// to `tangent1` and to the line from `tangent1` to `tangent2`; emitted
/// sequences always choose `tangent2` to be the exact arc end point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point2),
    LineTo(Point2),
    ArcTo {
        tangent1: Point2,
        tangent2: Point2,
        radius: f64,
    },
    ClosePath,
}

impl PathCommand {
    /// The point at which the pen rests after this command, if any.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match self {
            Self::MoveTo(p) | Self::LineTo(p) => Some(*p),
            Self::ArcTo { tangent2, .. } => Some(*tangent2),
            Self::ClosePath => None,
        }
    }
}
