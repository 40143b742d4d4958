use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
#[must_use]
pub fn line_line_intersect_2d(
    p1: Point2,
    d1: Vector2,
    p2: Point2,
    d2: Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < TOLERANCE {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Intersection of an infinite line with a circle.
///
/// The line is `origin + t * dir` (direction need not be normalized);
/// `t` is expressed in `dir` units. Returns `(point, t)` pairs sorted by
/// `t`: empty for a miss, one entry for a tangency, two for a crossing.
#[must_use]
pub fn line_circle_intersect_2d(
    origin: Point2,
    dir: Vector2,
    center: Point2,
    radius: f64,
) -> Vec<(Point2, f64)> {
    let mut results = Vec::new();
    if radius < TOLERANCE {
        return results;
    }

    let a = dir.norm_squared();
    if a < TOLERANCE * TOLERANCE {
        return results;
    }

    // Substitute the parametric line into the circle equation:
    // (origin + t*dir - center)² = r²
    let f = origin - center;
    let b = 2.0 * f.dot(&dir);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if discriminant < -TOLERANCE {
        return results;
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    let t_roots = if disc_sqrt < TOLERANCE * 100.0 {
        // Tangent case: single root.
        vec![-b / (2.0 * a)]
    } else {
        vec![(-b - disc_sqrt) / (2.0 * a), (-b + disc_sqrt) / (2.0 * a)]
    };

    for t in t_roots {
        results.push((origin + dir * t, t));
    }
    results
}
