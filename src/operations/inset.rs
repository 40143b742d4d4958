use crate::geometry::corner::{Corner, CornerStyle};
use crate::geometry::dimensions::Dimensions;
use crate::log::debug;
use crate::math::intersect_2d::line_circle_intersect_2d;
use crate::math::vector_2d::normalize_or_zero;
use crate::math::{safe_div, Point2, RelatableValue, TOLERANCE};

use super::flatten::flattened;

/// Offsets a closed corner sequence perpendicular to each edge.
///
/// Sign convention: positive `amount` shrinks a clockwise-wound (screen
/// space, +Y down) outline toward its interior; negative grows it. The
/// input is flattened first, so inset math only ever sees absolute
/// radii; every corner is then solved against its original neighbors
/// (wrapping) and mapped to a new point and style. Radii that would go
/// negative clamp to zero rather than erroring.
#[must_use]
pub fn inset(corners: &[Corner], amount: f64) -> Vec<Corner> {
    let flat = flattened(corners);
    if amount == 0.0 || flat.len() < 2 {
        return flat;
    }
    debug!(amount, corners = flat.len(), "inset");
    let n = flat.len();
    (0..n)
        .map(|i| {
            let previous = flat[(i + n - 1) % n].point;
            let next = flat[(i + 1) % n].point;
            inset_corner(&flat[i], previous, next, amount)
        })
        .collect()
}

/// Insets one corner against explicit neighbor points.
#[must_use]
pub fn inset_corner(corner: &Corner, previous: Point2, next: Point2, amount: f64) -> Corner {
    let dims = Dimensions::new(corner, previous, next);
    Corner::new(inset_style(&dims, amount), dims.inset_point(amount))
}

/// Derives the style parameters that preserve a corner's visual intent
/// after the uniform offset.
fn inset_style(dims: &Dimensions, amount: f64) -> CornerStyle {
    match &dims.corner.style {
        CornerStyle::Point => CornerStyle::Point,
        CornerStyle::Rounded { .. } => CornerStyle::Rounded {
            radius: RelatableValue::Absolute(
                (dims.absolute_radius - amount * dims.reflex_multiplier).max(0.0),
            ),
        },
        CornerStyle::Concave { .. } => inset_concave(dims, amount),
        CornerStyle::Straight { .. } | CornerStyle::Cutout { .. } => inset_nested(dims, amount),
    }
}

/// Concave corners keep their drawn arc concentric: the arc radius
/// shifts by the inset amount, and the cut length is solved backward by
/// intersecting the inset incoming-edge line with the offset arc.
fn inset_concave(dims: &Dimensions, amount: f64) -> CornerStyle {
    let concave_radius = (dims.concave_radius + amount * dims.reflex_multiplier).max(0.0);
    let inset_point = dims.inset_point(amount);
    let toward_previous = normalize_or_zero(dims.previous_vector);

    let new_cut = line_circle_intersect_2d(
        inset_point,
        toward_previous,
        dims.concave_radius_center,
        concave_radius,
    )
    .into_iter()
    .filter(|(_, t)| *t > TOLERANCE)
    .map(|(_, t)| t)
    .fold(f64::INFINITY, f64::min);

    let (radius, radius_offset) = if new_cut.is_finite() {
        let radius = Dimensions::radius_for_cut(new_cut, dims.halved_non_reflex_angle);
        (radius, concave_radius - radius)
    } else {
        // The inset edge no longer reaches the offset arc; shift the
        // cut radius directly and keep the stored offset.
        (
            (dims.absolute_radius + amount * dims.reflex_multiplier).max(0.0),
            dims.radius_offset,
        )
    };

    CornerStyle::Concave {
        radius: RelatableValue::Absolute(radius.max(0.0)),
        radius_offset,
    }
}

/// Straight and cutout corners inset their sub-corners individually
/// (inside the `[previous, sub…, next]` context), rescale the radius by
/// the inset-to-original chord ratio, and recurse into child styles.
fn inset_nested(dims: &Dimensions, amount: f64) -> CornerStyle {
    let Some(subs) = dims.sub_corners() else {
        return dims.corner.style.clone();
    };
    let m = subs.len();
    let neighbor_context = |k: usize| -> (Point2, Point2) {
        let previous = if k == 0 {
            dims.previous_point
        } else {
            subs[k - 1].point
        };
        let next = if k + 1 == m {
            dims.next_point
        } else {
            subs[k + 1].point
        };
        (previous, next)
    };

    let sub_dims: Vec<Dimensions> = (0..m)
        .map(|k| {
            let (previous, next) = neighbor_context(k);
            Dimensions::new(&subs[k], previous, next)
        })
        .collect();

    let old_chord = (subs[m - 1].point - subs[0].point).norm();
    let new_chord = (sub_dims[m - 1].inset_point(amount) - sub_dims[0].inset_point(amount)).norm();
    let radius =
        RelatableValue::Absolute((dims.absolute_radius * safe_div(new_chord, old_chord)).max(0.0));

    let corner_styles: Vec<CornerStyle> = sub_dims
        .iter()
        .map(|sub| inset_style(sub, amount))
        .collect();

    match dims.corner.style {
        CornerStyle::Straight { .. } => CornerStyle::Straight {
            radius,
            corner_styles,
        },
        _ => CornerStyle::Cutout {
            radius,
            corner_styles,
        },
    }
}
