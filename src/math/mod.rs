pub mod angle;
pub mod intersect_2d;
pub mod relatable;
pub mod vector_2d;

pub use angle::{Angle, AngleType};
pub use relatable::RelatableValue;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Division that maps degenerate denominators to zero.
///
/// This is the single policy point for the 0°/90° half-angle cases:
/// `tan` of a degenerate corner angle produces a zero (or non-finite)
/// denominator, and every radius/cut-length formula in the crate routes
/// through here so the corner collapses to an unstyled point instead of
/// propagating NaN or infinity.
#[must_use]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if !denominator.is_finite() || denominator.abs() < TOLERANCE {
        return 0.0;
    }
    numerator / denominator
}
