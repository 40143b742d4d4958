use crate::math::{Point2, RelatableValue};

/// Stylized treatment applied to a single corner of an outline.
///
/// `Straight` and `Cutout` replace the corner with 2 or 3 sub-corners
/// whose styles come from `corner_styles`; the nesting is recursive.
/// Missing child slots read as [`CornerStyle::Point`].
#[derive(Debug, Clone, PartialEq)]
pub enum CornerStyle {
    /// Sharp point, radius implicitly zero.
    Point,
    /// Convex circular arc.
    Rounded { radius: RelatableValue },
    /// Inward circular arc. `radius_offset` shifts the drawn arc radius
    /// away from the radius used for cut-length computation.
    Concave {
        radius: RelatableValue,
        radius_offset: f64,
    },
    /// Chamfer: a straight line between the two cut points.
    Straight {
        radius: RelatableValue,
        corner_styles: Vec<CornerStyle>,
    },
    /// Notch: two straight segments through a third point mirrored
    /// across the chamfer chord.
    Cutout {
        radius: RelatableValue,
        corner_styles: Vec<CornerStyle>,
    },
}

impl CornerStyle {
    /// Convex rounding with the given radius.
    #[must_use]
    pub fn rounded(radius: RelatableValue) -> Self {
        Self::Rounded { radius }
    }

    /// Concave arc with the given radius and no radius offset.
    #[must_use]
    pub fn concave(radius: RelatableValue) -> Self {
        Self::Concave {
            radius,
            radius_offset: 0.0,
        }
    }

    /// Chamfer with unstyled (point) cut corners.
    #[must_use]
    pub fn straight(radius: RelatableValue) -> Self {
        Self::Straight {
            radius,
            corner_styles: Vec::new(),
        }
    }

    /// Notch cut with unstyled (point) corners.
    #[must_use]
    pub fn cutout(radius: RelatableValue) -> Self {
        Self::Cutout {
            radius,
            corner_styles: Vec::new(),
        }
    }

    /// The style's radius; `Point` reads as absolute zero.
    #[must_use]
    pub fn radius(&self) -> RelatableValue {
        match self {
            Self::Point => RelatableValue::ZERO,
            Self::Rounded { radius }
            | Self::Concave { radius, .. }
            | Self::Straight { radius, .. }
            | Self::Cutout { radius, .. } => *radius,
        }
    }

    /// The concave radius offset; zero for every other style.
    #[must_use]
    pub fn radius_offset(&self) -> f64 {
        match self {
            Self::Concave { radius_offset, .. } => *radius_offset,
            _ => 0.0,
        }
    }

    /// Child styles; empty for point, rounded, and concave.
    #[must_use]
    pub fn corner_styles(&self) -> &[CornerStyle] {
        match self {
            Self::Straight { corner_styles, .. } | Self::Cutout { corner_styles, .. } => {
                corner_styles
            }
            _ => &[],
        }
    }

    /// Child style at `index`, padding missing slots with `Point`.
    #[must_use]
    pub fn child_style(&self, index: usize) -> CornerStyle {
        self.corner_styles()
            .get(index)
            .cloned()
            .unwrap_or(CornerStyle::Point)
    }

    /// Same variant with the radius replaced.
    #[must_use]
    pub fn with_radius(&self, radius: RelatableValue) -> Self {
        match self {
            Self::Point => Self::Point,
            Self::Rounded { .. } => Self::Rounded { radius },
            Self::Concave { radius_offset, .. } => Self::Concave {
                radius,
                radius_offset: *radius_offset,
            },
            Self::Straight { corner_styles, .. } => Self::Straight {
                radius,
                corner_styles: corner_styles.clone(),
            },
            Self::Cutout { corner_styles, .. } => Self::Cutout {
                radius,
                corner_styles: corner_styles.clone(),
            },
        }
    }

    /// Whether flattening would still change this style: a non-absolute
    /// radius, or any non-point child style.
    #[must_use]
    pub fn is_flattenable(&self) -> bool {
        if !self.radius().is_absolute() {
            return true;
        }
        self.corner_styles()
            .iter()
            .any(|child| !matches!(child, CornerStyle::Point))
    }
}

/// A single outline vertex with its styled treatment.
///
/// Slices of corners represent open or closed polygon boundaries; for a
/// closed boundary the first element is adjacent to the last, with no
/// duplicated closing point.
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    pub point: Point2,
    pub style: CornerStyle,
}

impl Corner {
    /// Creates a corner at a point with the given style.
    #[must_use]
    pub fn new(style: CornerStyle, point: Point2) -> Self {
        Self { point, style }
    }

    /// Creates an unstyled (sharp) corner.
    #[must_use]
    pub fn point(x: f64, y: f64) -> Self {
        Self {
            point: Point2::new(x, y),
            style: CornerStyle::Point,
        }
    }

    /// Same position with a different style.
    #[must_use]
    pub fn with_style(&self, style: CornerStyle) -> Self {
        Self {
            point: self.point,
            style,
        }
    }
}
