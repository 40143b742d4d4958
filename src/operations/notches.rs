use crate::geometry::corner::Corner;
use crate::geometry::notch::Notch;

/// Splices a notch's corners into the edge after `after_index`.
///
/// The edge runs from `corners[after_index]` to the next corner
/// (wrapping, so the last index targets the closing edge).
///
/// # Panics
///
/// Panics when `after_index` is out of range; targeting a missing edge
/// is a caller programming error.
#[must_use]
pub fn adding_notch(corners: &[Corner], notch: &Notch, after_index: usize) -> Vec<Corner> {
    let n = corners.len();
    assert!(
        after_index < n,
        "corner index {after_index} out of range (len {n})"
    );
    let edge_start = corners[after_index].point;
    let edge_end = corners[(after_index + 1) % n].point;
    let mut result = corners.to_vec();
    result.splice(
        after_index + 1..after_index + 1,
        notch.corners_on_edge(edge_start, edge_end),
    );
    result
}

/// Splices one optional notch per edge.
///
/// Entry `i` targets the edge from corner `i` to corner `i + 1`
/// (wrapping); entries beyond the corner count are ignored.
#[must_use]
pub fn adding_notches(corners: &[Corner], notches: &[Option<Notch>]) -> Vec<Corner> {
    let n = corners.len();
    let mut result = Vec::with_capacity(n + notches.len());
    for (i, corner) in corners.iter().enumerate() {
        result.push(corner.clone());
        if let Some(Some(notch)) = notches.get(i) {
            let edge_end = corners[(i + 1) % n].point;
            result.extend(notch.corners_on_edge(corner.point, edge_end));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use crate::math::{Point2, RelatableValue};

    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_point(actual: Point2, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < TOL && (actual.y - y).abs() < TOL,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    fn unit_square() -> Vec<Corner> {
        vec![
            Corner::point(0.0, 0.0),
            Corner::point(1.0, 0.0),
            Corner::point(1.0, 1.0),
            Corner::point(0.0, 1.0),
        ]
    }

    fn triangle_notch() -> Notch {
        Notch::triangle(
            RelatableValue::Relative(0.25),
            RelatableValue::Relative(0.5),
            RelatableValue::Relative(0.2),
        )
    }

    #[test]
    fn single_triangle_adds_three_corners() {
        let corners = unit_square();
        let result = adding_notches(&corners, &[Some(triangle_notch())]);
        assert_eq!(result.len(), corners.len() + 3);

        // The new points sit strictly between corner 0 and corner 1.
        for corner in &result[1..4] {
            assert!(corner.point.x > 0.0 && corner.point.x < 1.0, "{corner:?}");
        }
        assert_eq!(result[0].point, Point2::new(0.0, 0.0));
        assert_eq!(result[4].point, Point2::new(1.0, 0.0));
    }

    #[test]
    fn notch_after_index_splices_in_order() {
        let corners = unit_square();
        let result = adding_notch(&corners, &triangle_notch(), 1);
        assert_eq!(result.len(), 7);
        // Edge from (1,0) to (1,1): span along +y, depth toward -x.
        assert_point(result[2].point, 1.0, 0.25);
        assert_point(result[3].point, 0.8, 0.5);
        assert_point(result[4].point, 1.0, 0.75);
    }

    #[test]
    fn notch_on_closing_edge_appends() {
        let corners = unit_square();
        let result = adding_notch(&corners, &triangle_notch(), 3);
        assert_eq!(result.len(), 7);
        // Edge from (0,1) back to (0,0): span along -y, depth toward +x.
        assert_point(result[4].point, 0.0, 0.75);
        assert_point(result[5].point, 0.2, 0.5);
        assert_point(result[6].point, 0.0, 0.25);
    }

    #[test]
    fn rectangle_adds_four_corners() {
        let notch = Notch::rectangle(
            RelatableValue::Relative(0.25),
            RelatableValue::Relative(0.5),
            RelatableValue::Absolute(0.1),
        );
        let corners = unit_square();
        let result = adding_notches(&corners, &[Some(notch)]);
        assert_eq!(result.len(), corners.len() + 4);
    }

    #[test]
    fn missing_notches_leave_sequence_unchanged() {
        let corners = unit_square();
        let result = adding_notches(&corners, &[None, None]);
        assert_eq!(result, corners);
    }

    #[test]
    #[should_panic(expected = "corner index 4 out of range")]
    fn out_of_range_index_panics() {
        let corners = unit_square();
        let _ = adding_notch(&corners, &triangle_notch(), 4);
    }
}
