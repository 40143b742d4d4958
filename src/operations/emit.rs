use crate::geometry::corner::{Corner, CornerStyle};
use crate::geometry::dimensions::Dimensions;
use crate::geometry::path::PathCommand;
use crate::math::{Point2, TOLERANCE};

/// Emits drawing instructions for a closed corner sequence.
///
/// The walk starts with a `MoveTo` at the first corner's emission end
/// point, draws corners `1..n` and then corner `0`, and terminates with
/// `ClosePath`; the pen therefore ends exactly where it started.
#[must_use]
pub fn closed_path(corners: &[Corner]) -> Vec<PathCommand> {
    let n = corners.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![PathCommand::MoveTo(corners[0].point), PathCommand::ClosePath];
    }

    let mut commands = Vec::with_capacity(n * 2 + 2);
    for step in 1..=n {
        let i = step % n;
        let previous = corners[(i + n - 1) % n].point;
        let next = corners[(i + 1) % n].point;
        commands.extend(corner_commands(&corners[i], previous, next));
    }

    let start = commands
        .iter()
        .rev()
        .find_map(PathCommand::end_point)
        .unwrap_or(corners[0].point);
    let mut path = Vec::with_capacity(commands.len() + 2);
    path.push(PathCommand::MoveTo(start));
    path.extend(commands);
    path.push(PathCommand::ClosePath);
    path
}

/// Emits drawing instructions for an open corner sequence.
///
/// Terminal corners have no neighbor on one side and draw as plain
/// points; interior corners receive their full treatment.
#[must_use]
pub fn open_path(corners: &[Corner]) -> Vec<PathCommand> {
    let n = corners.len();
    if n == 0 {
        return Vec::new();
    }
    let mut path = vec![PathCommand::MoveTo(corners[0].point)];
    for i in 1..n.saturating_sub(1) {
        path.extend(corner_commands(
            &corners[i],
            corners[i - 1].point,
            corners[i + 1].point,
        ));
    }
    if n > 1 {
        path.push(PathCommand::LineTo(corners[n - 1].point));
    }
    path
}

/// Drawing instructions for one corner against its neighbor points.
///
/// The first command is always a `LineTo` (callers joining a walk
/// convert or prefix as needed). Nested straight/cutout styles recurse
/// through their sub-corners with the parent's neighbor context.
#[must_use]
pub fn corner_commands(corner: &Corner, previous: Point2, next: Point2) -> Vec<PathCommand> {
    let dims = Dimensions::new(corner, previous, next);
    match &corner.style {
        CornerStyle::Point => vec![PathCommand::LineTo(corner.point)],
        CornerStyle::Rounded { .. } => {
            if dims.absolute_radius < TOLERANCE {
                return vec![PathCommand::LineTo(corner.point)];
            }
            vec![
                PathCommand::LineTo(dims.corner_start),
                PathCommand::ArcTo {
                    tangent1: corner.point,
                    tangent2: dims.corner_end,
                    radius: dims.absolute_radius,
                },
            ]
        }
        CornerStyle::Concave { .. } => concave_commands(&dims),
        CornerStyle::Straight { .. } | CornerStyle::Cutout { .. } => nested_commands(&dims),
    }
}

fn concave_commands(dims: &Dimensions) -> Vec<PathCommand> {
    if dims.concave_radius.abs() < TOLERANCE {
        // Degenerate arc: sharp notch through the cutout point.
        return vec![
            PathCommand::LineTo(dims.corner_start),
            PathCommand::LineTo(dims.cutout_point),
            PathCommand::LineTo(dims.corner_end),
        ];
    }
    match (dims.concave_start, dims.concave_end) {
        (Some(start), Some(end)) => {
            // Arc smaller than the cut: straight lead-in and lead-out.
            let mut commands = vec![PathCommand::LineTo(dims.corner_start)];
            if (start - dims.corner_start).norm() > TOLERANCE {
                commands.push(PathCommand::LineTo(start));
            }
            commands.push(PathCommand::ArcTo {
                tangent1: dims.cutout_point,
                tangent2: end,
                radius: dims.concave_radius.abs(),
            });
            commands.push(PathCommand::LineTo(dims.corner_end));
            commands
        }
        _ => vec![
            PathCommand::LineTo(dims.corner_start),
            PathCommand::ArcTo {
                tangent1: dims.cutout_point,
                tangent2: dims.corner_end,
                radius: dims.concave_radius.abs(),
            },
        ],
    }
}

fn nested_commands(dims: &Dimensions) -> Vec<PathCommand> {
    let Some(subs) = dims.sub_corners() else {
        return vec![PathCommand::LineTo(dims.corner.point)];
    };
    let styled = dims
        .corner
        .style
        .corner_styles()
        .iter()
        .any(|child| !matches!(child, CornerStyle::Point));
    if !styled {
        return subs
            .iter()
            .map(|sub| PathCommand::LineTo(sub.point))
            .collect();
    }

    let m = subs.len();
    let mut commands = Vec::new();
    for k in 0..m {
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
        commands.extend(corner_commands(&subs[k], previous, next));
    }
    commands
}
