use crate::geometry::corner::{Corner, CornerStyle};
use crate::geometry::dimensions::Dimensions;
use crate::log::debug;
use crate::math::RelatableValue;

/// Fully flattens a corner sequence: resolves every relative radius to
/// an absolute one and expands every nested straight/cutout style into
/// its sub-corners, repeating until no corner is flattenable.
///
/// Terminates because each pass resolves all current radii and strips
/// one level of nesting; nesting depth is caller-bounded.
#[must_use]
pub fn flattened(corners: &[Corner]) -> Vec<Corner> {
    flattened_levels(corners, usize::MAX)
}

/// Flattens with at most `levels` expansion passes.
///
/// Useful when only one level of structure is needed and deeper nesting
/// is resolved elsewhere (drawing recurses at emission time instead).
#[must_use]
pub fn flattened_levels(corners: &[Corner], levels: usize) -> Vec<Corner> {
    let mut current = corners.to_vec();
    let mut passes = 0;
    while passes < levels && current.iter().any(|c| c.style.is_flattenable()) {
        current = flatten_pass(&current);
        passes += 1;
    }
    debug!(passes, corners = current.len(), "flatten complete");
    current
}

/// One flattening pass; neighbor context is snapshotted from the input.
fn flatten_pass(corners: &[Corner]) -> Vec<Corner> {
    let n = corners.len();
    let mut result = Vec::with_capacity(n);
    for (i, corner) in corners.iter().enumerate() {
        if !corner.style.is_flattenable() {
            result.push(corner.clone());
            continue;
        }
        let previous = corners[(i + n - 1) % n].point;
        let next = corners[(i + 1) % n].point;
        let dims = Dimensions::new(corner, previous, next);
        let resolved = corner.with_style(
            corner
                .style
                .with_radius(RelatableValue::Absolute(dims.absolute_radius)),
        );

        let has_styled_children = resolved
            .style
            .corner_styles()
            .iter()
            .any(|child| !matches!(child, CornerStyle::Point));
        if has_styled_children {
            let dims = Dimensions::new(&resolved, previous, next);
            if let Some(subs) = dims.sub_corners() {
                result.extend(subs);
                continue;
            }
        }
        result.push(resolved);
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::math::Point2;

    use super::*;

    const TOL: f64 = 1e-9;

    fn unit_square(style: &CornerStyle) -> Vec<Corner> {
        [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
            .into_iter()
            .map(|(x, y)| Corner::new(style.clone(), Point2::new(x, y)))
            .collect()
    }

    #[test]
    fn resolves_relative_radii() {
        let corners = unit_square(&CornerStyle::rounded(RelatableValue::Relative(0.2)));
        let flat = flattened(&corners);
        assert_eq!(flat.len(), 4);
        for corner in &flat {
            assert!(corner.style.radius().is_absolute());
            let radius = corner.style.radius().value(0.0);
            assert!((radius - 0.2).abs() < TOL, "radius={radius}");
            assert!(!corner.style.is_flattenable());
        }
    }

    #[test]
    fn expands_styled_chamfer_children() {
        let mut corners = unit_square(&CornerStyle::Point);
        corners[1].style = CornerStyle::Straight {
            radius: RelatableValue::Absolute(0.2),
            corner_styles: vec![
                CornerStyle::rounded(RelatableValue::Absolute(0.05)),
                CornerStyle::rounded(RelatableValue::Absolute(0.05)),
            ],
        };
        let flat = flattened(&corners);
        // One corner replaced by its two cut corners.
        assert_eq!(flat.len(), 5);
        assert!((flat[1].point.x - 0.8).abs() < TOL);
        assert!(flat[1].point.y.abs() < TOL);
        assert!((flat[2].point.x - 1.0).abs() < TOL);
        assert!((flat[2].point.y - 0.2).abs() < TOL);
        assert!(matches!(flat[1].style, CornerStyle::Rounded { .. }));
        assert!(flat.iter().all(|c| !c.style.is_flattenable()));
    }

    #[test]
    fn plain_chamfer_is_not_expanded() {
        let mut corners = unit_square(&CornerStyle::Point);
        corners[1].style = CornerStyle::straight(RelatableValue::Absolute(0.2));
        let flat = flattened(&corners);
        assert_eq!(flat.len(), 4);
        assert!(matches!(flat[1].style, CornerStyle::Straight { .. }));
    }

    #[test]
    fn nested_styles_flatten_to_fixed_point() {
        let mut corners = unit_square(&CornerStyle::Point);
        corners[2].style = CornerStyle::Cutout {
            radius: RelatableValue::Relative(0.3),
            corner_styles: vec![
                CornerStyle::Point,
                CornerStyle::Straight {
                    radius: RelatableValue::Relative(0.5),
                    corner_styles: vec![
                        CornerStyle::rounded(RelatableValue::Relative(0.2)),
                        CornerStyle::Point,
                    ],
                },
                CornerStyle::Point,
            ],
        };
        let flat = flattened(&corners);
        // 4 - 1 + 3 = 6 after the first expansion, then the straight
        // apex splits again: 6 - 1 + 2 = 7.
        assert_eq!(flat.len(), 7);
        assert!(flat.iter().all(|c| !c.style.is_flattenable()));
    }

    #[test]
    fn level_bound_stops_early() {
        let mut corners = unit_square(&CornerStyle::Point);
        corners[2].style = CornerStyle::Cutout {
            radius: RelatableValue::Absolute(0.3),
            corner_styles: vec![
                CornerStyle::Point,
                CornerStyle::Straight {
                    radius: RelatableValue::Absolute(0.1),
                    corner_styles: vec![
                        CornerStyle::rounded(RelatableValue::Relative(0.2)),
                        CornerStyle::Point,
                    ],
                },
                CornerStyle::Point,
            ],
        };
        let once = flattened_levels(&corners, 1);
        assert_eq!(once.len(), 6);
        assert!(once.iter().any(|c| c.style.is_flattenable()));

        let full = flattened(&corners);
        assert!(full.iter().all(|c| !c.style.is_flattenable()));
    }

    #[test]
    fn flatten_is_idempotent() {
        let mut corners = unit_square(&CornerStyle::rounded(RelatableValue::Relative(0.25)));
        corners[3].style = CornerStyle::Cutout {
            radius: RelatableValue::Relative(0.4),
            corner_styles: vec![
                CornerStyle::concave(RelatableValue::Relative(0.5)),
                CornerStyle::Point,
                CornerStyle::Point,
            ],
        };
        let once = flattened(&corners);
        let twice = flattened(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn tiny_sequences_pass_through() {
        assert!(flattened(&[]).is_empty());
        let single = [Corner::new(
            CornerStyle::rounded(RelatableValue::Relative(0.5)),
            Point2::new(1.0, 2.0),
        )];
        let flat = flattened(&single);
        assert_eq!(flat.len(), 1);
        // A lone corner has no edges, so its radius resolves to zero.
        assert_eq!(flat[0].style.radius(), RelatableValue::Absolute(0.0));
    }
}
