use crate::math::vector_2d::{midpoint, mirror_across_line_2d, normalize_or_zero, rotated};
use crate::math::{safe_div, Angle, AngleType, Point2, Vector2, TOLERANCE};

use super::corner::{Corner, CornerStyle};

/// All geometric quantities derived from one corner and its neighbors.
///
/// A `Dimensions` value is a read-only snapshot: every field is a pure
/// function of `(corner, previous_point, next_point)`, so recomputing
/// with identical inputs yields identical outputs. Neighbors may be the
/// adjacent corners of a sequence (wrapping for closed outlines) or
/// caller-supplied boundary points for open ones.
///
/// Degenerate inputs (collinear neighbors, zero-length edges, radii that
/// outgrow the available edge) collapse toward an unstyled point rather
/// than producing non-finite values.
#[derive(Debug, Clone)]
pub struct Dimensions {
    /// The corner this snapshot was computed for.
    pub corner: Corner,
    /// Neighbor point on the incoming side.
    pub previous_point: Point2,
    /// Neighbor point on the outgoing side.
    pub next_point: Point2,
    /// Clockwise screen-space angle at the corner, in `[0°, 360°)`.
    pub angle: Angle,
    /// `-1` for reflex corners, `+1` otherwise.
    pub reflex_multiplier: f64,
    /// Half the non-reflex equivalent of `angle`, in `[0°, 90°]`.
    pub halved_non_reflex_angle: Angle,
    /// Complement of `halved_non_reflex_angle`.
    pub halved_radius_angle: Angle,
    /// `previous_point - corner`.
    pub previous_vector: Vector2,
    /// `next_point - corner`.
    pub next_vector: Vector2,
    /// Shorter of the two neighbor distances.
    pub max_cut_length: f64,
    /// Largest radius whose cut still fits both edges.
    pub max_radius: f64,
    /// Style radius resolved against `max_radius`, clamped at zero.
    pub absolute_radius: f64,
    /// Distance from the corner to each cut point.
    pub cut_length: f64,
    /// Cut point on the incoming edge.
    pub corner_start: Point2,
    /// Cut point on the outgoing edge.
    pub corner_end: Point2,
    /// Center of the rounded arc.
    pub radius_center: Point2,
    /// Concave drawn-radius offset (zero for non-concave styles).
    pub radius_offset: f64,
    /// `absolute_radius + radius_offset`.
    pub concave_radius: f64,
    /// Style-dependent third point: the corner itself, the chamfer
    /// midpoint, or the mirrored notch apex.
    pub cutout_point: Point2,
    /// Start of the concave arc when it is smaller than the nominal cut.
    pub concave_start: Option<Point2>,
    /// End of the concave arc, mirror of `concave_start`.
    pub concave_end: Option<Point2>,
    /// Center of the concave arc.
    pub concave_radius_center: Point2,
}

impl Dimensions {
    /// Solves a corner against its neighbor points.
    #[must_use]
    pub fn new(corner: &Corner, previous_point: Point2, next_point: Point2) -> Self {
        let angle = Angle::three_point(next_point, corner.point, previous_point);
        let reflex_multiplier = if angle.classify() == AngleType::Reflex {
            -1.0
        } else {
            1.0
        };
        let halved_non_reflex_angle = angle.non_reflex_coterminal().positive().halved();
        let halved_radius_angle = halved_non_reflex_angle.complementary();

        let previous_vector = previous_point - corner.point;
        let next_vector = next_point - corner.point;
        let max_cut_length = previous_vector.norm().min(next_vector.norm());
        let max_radius = Self::cut_for_radius(max_cut_length, halved_radius_angle);

        let absolute_radius = corner.style.radius().value(max_radius).max(0.0);
        let cut_length = Self::cut_for_radius(absolute_radius, halved_non_reflex_angle);

        let p_hat = normalize_or_zero(previous_vector);
        let n_hat = normalize_or_zero(next_vector);
        let corner_start = corner.point + p_hat * cut_length;
        let corner_end = corner.point + n_hat * cut_length;
        let radius_center =
            corner_start + rotated(p_hat, Angle::degrees(-90.0) * reflex_multiplier) * absolute_radius;

        let radius_offset = corner.style.radius_offset();
        let concave_radius = absolute_radius + radius_offset;

        let cutout_point = match corner.style {
            CornerStyle::Point | CornerStyle::Rounded { .. } => corner.point,
            CornerStyle::Straight { .. } => midpoint(corner_start, corner_end),
            CornerStyle::Cutout { .. } => corner_start + n_hat * cut_length,
            CornerStyle::Concave { .. } => {
                if radius_offset <= 0.0 {
                    // Mirror of the corner across the chamfer chord.
                    corner_start + n_hat * cut_length
                } else {
                    // Right triangle: half chord as one leg, the drawn
                    // radius as hypotenuse; the remaining leg is the
                    // perpendicular reach past the chord midpoint.
                    let mid = midpoint(corner_start, corner_end);
                    let half_chord = (corner_end - corner_start).norm() * 0.5;
                    let reach = (concave_radius * concave_radius - half_chord * half_chord)
                        .max(0.0)
                        .sqrt();
                    mid + normalize_or_zero(mid - corner.point) * reach
                }
            }
        };

        let wants_lead_in = matches!(corner.style, CornerStyle::Concave { .. })
            && absolute_radius > concave_radius + TOLERANCE;
        let (concave_start, concave_end) = if wants_lead_in {
            let lead = Self::cut_for_radius(concave_radius, halved_non_reflex_angle);
            let start = cutout_point + normalize_or_zero(corner_start - cutout_point) * lead;
            let end = mirror_across_line_2d(start, corner.point, radius_center)
                .or_else(|| mirror_across_line_2d(start, corner.point, cutout_point))
                .unwrap_or(start);
            (Some(start), Some(end))
        } else {
            (None, None)
        };

        let arc_anchor = concave_start.unwrap_or(corner_start);
        let turn = Angle::degrees(-90.0) * (reflex_multiplier * concave_radius.signum());
        let concave_radius_center = arc_anchor
            + rotated(normalize_or_zero(cutout_point - arc_anchor), turn) * concave_radius.abs();

        Self {
            corner: corner.clone(),
            previous_point,
            next_point,
            angle,
            reflex_multiplier,
            halved_non_reflex_angle,
            halved_radius_angle,
            previous_vector,
            next_vector,
            max_cut_length,
            max_radius,
            absolute_radius,
            cut_length,
            corner_start,
            corner_end,
            radius_center,
            radius_offset,
            concave_radius,
            cutout_point,
            concave_start,
            concave_end,
            concave_radius_center,
        }
    }

    /// `value / |tan(half_angle)|`, zero at degenerate half angles.
    ///
    /// With the half corner angle this converts a radius into its cut
    /// length; with the half radius angle it converts a cut length into
    /// the radius that produces it.
    #[must_use]
    pub fn cut_for_radius(value: f64, half_angle: Angle) -> f64 {
        safe_div(value, half_angle.tan()).abs()
    }

    /// Radius whose cut length equals `cut_length` at this half angle.
    #[must_use]
    pub fn radius_for_cut(cut_length: f64, half_angle: Angle) -> f64 {
        let tangent = half_angle.tan();
        if !tangent.is_finite() {
            return 0.0;
        }
        (cut_length * tangent).abs()
    }

    /// The corner point offset for a uniform inset.
    ///
    /// Positive `amount` moves the point toward the interior of a
    /// clockwise-wound (screen space, +Y down) outline: perpendicular to
    /// the incoming edge by `amount`, plus a reflex-aware slide along
    /// the edge to land on the intersection of both inset edge lines.
    #[must_use]
    pub fn inset_point(&self, amount: f64) -> Point2 {
        let p_hat = normalize_or_zero(self.previous_vector);
        let slide = safe_div(
            amount * self.reflex_multiplier,
            self.halved_non_reflex_angle.tan(),
        );
        self.corner.point + p_hat * slide + rotated(p_hat, Angle::degrees(-90.0)) * amount
    }

    /// The replacement sub-corners of a straight or cutout corner,
    /// carrying the child styles; `None` for leaf styles.
    #[must_use]
    pub fn sub_corners(&self) -> Option<Vec<Corner>> {
        match self.corner.style {
            CornerStyle::Straight { .. } => Some(vec![
                Corner::new(self.corner.style.child_style(0), self.corner_start),
                Corner::new(self.corner.style.child_style(1), self.corner_end),
            ]),
            CornerStyle::Cutout { .. } => Some(vec![
                Corner::new(self.corner.style.child_style(0), self.corner_start),
                Corner::new(self.corner.style.child_style(1), self.cutout_point),
                Corner::new(self.corner.style.child_style(2), self.corner_end),
            ]),
            _ => None,
        }
    }
}
