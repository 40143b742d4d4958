/// Angle algebra for corner geometry.
///
/// Angles are signed radians with unbounded magnitude. The three-point
/// angle is measured clockwise in screen space (+Y pointing down), so a
/// clockwise-wound outline produces non-reflex interior corner angles.
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::ops::{Add, Div, Mul, Neg, Sub};

use super::{Point2, TOLERANCE};

/// A plane angle stored in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

/// Classification of an angle's positive magnitude.
///
/// Exact boundary values map to the named non-range cases: exactly 90°
/// is `Right`, exactly 180° is `Straight`, exactly 360° is `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AngleType {
    Zero,
    Acute,
    Right,
    Obtuse,
    Straight,
    Reflex,
    Full,
    Over360,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };
    /// 90 degrees.
    pub const RIGHT: Self = Self { rad: FRAC_PI_2 };
    /// 180 degrees.
    pub const STRAIGHT: Self = Self { rad: PI };
    /// 360 degrees.
    pub const FULL: Self = Self { rad: TAU };

    /// Creates an angle from radians.
    #[must_use]
    pub const fn radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[must_use]
    pub fn degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[must_use]
    pub const fn as_radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn as_degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Absolute value, preserving magnitude beyond 360°.
    #[must_use]
    pub fn positive(self) -> Self {
        Self {
            rad: self.rad.abs(),
        }
    }

    /// Half of this angle.
    #[must_use]
    pub fn halved(self) -> Self {
        Self {
            rad: self.rad / 2.0,
        }
    }

    /// 90° minus this angle.
    #[must_use]
    pub fn complementary(self) -> Self {
        Self {
            rad: FRAC_PI_2 - self.rad,
        }
    }

    /// 180° minus this angle.
    #[must_use]
    pub fn supplementary(self) -> Self {
        Self { rad: PI - self.rad }
    }

    /// 360° minus this angle.
    #[must_use]
    pub fn explementary(self) -> Self {
        Self {
            rad: TAU - self.rad,
        }
    }

    /// The smallest non-negative coterminal angle, in `[0°, 360°)`.
    ///
    /// Exact zero maps to zero, not 360°.
    #[must_use]
    pub fn min_positive_coterminal(self) -> Self {
        Self {
            rad: self.rad.rem_euclid(TAU),
        }
    }

    /// Signed rotation in `(−180°, 180°]` that takes `from` to `self`.
    #[must_use]
    pub fn min_rotation(self, from: Self) -> Self {
        let delta = (self - from).min_positive_coterminal();
        // Fold the reflex range (and float fuzz just below a full turn)
        // into the negative side; exactly 180° stays positive.
        if delta.rad > PI {
            -delta.explementary()
        } else {
            delta
        }
    }

    /// The "other way around" rotation complementing [`Self::min_rotation`].
    ///
    /// Sign-flipped explementary of the minimum rotation's magnitude; a
    /// zero minimum rotation yields a full turn of negative sign.
    #[must_use]
    pub fn max_rotation(self, from: Self) -> Self {
        let min = self.min_rotation(from);
        Self {
            rad: -min.rad.signum() * (TAU - min.rad.abs()),
        }
    }

    /// Coterminal angle on the reflex side of a full turn.
    #[must_use]
    pub fn reflex_coterminal(self) -> Self {
        self.max_rotation(Self::ZERO)
    }

    /// Coterminal angle in the non-reflex range `(−180°, 180°]`.
    #[must_use]
    pub fn non_reflex_coterminal(self) -> Self {
        self.min_rotation(Self::ZERO)
    }

    /// Positive angle swept clockwise (screen space, +Y down) from the
    /// `initial`→`anchor` side to the `anchor`→`terminal` side.
    ///
    /// Result is in `[0°, 360°)`. Returns zero when either side vector
    /// has zero length.
    #[must_use]
    pub fn three_point(initial: Point2, anchor: Point2, terminal: Point2) -> Self {
        let v1 = initial - anchor;
        let v2 = terminal - anchor;
        if v1.norm() < TOLERANCE || v2.norm() < TOLERANCE {
            return Self::ZERO;
        }
        let a1 = v1.y.atan2(v1.x);
        let a2 = v2.y.atan2(v2.x);
        Self {
            rad: (a2 - a1).rem_euclid(TAU),
        }
    }

    /// Classifies the positive magnitude of this angle.
    #[must_use]
    pub fn classify(self) -> AngleType {
        let pos = self.rad.abs();
        if pos < TOLERANCE {
            AngleType::Zero
        } else if pos < FRAC_PI_2 - TOLERANCE {
            AngleType::Acute
        } else if pos < FRAC_PI_2 + TOLERANCE {
            AngleType::Right
        } else if pos < PI - TOLERANCE {
            AngleType::Obtuse
        } else if pos < PI + TOLERANCE {
            AngleType::Straight
        } else if pos < TAU - TOLERANCE {
            AngleType::Reflex
        } else if pos < TAU + TOLERANCE {
            AngleType::Full
        } else {
            AngleType::Over360
        }
    }

    /// Tangent of the angle.
    #[must_use]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }

    /// Sine and cosine of the angle.
    #[must_use]
    pub fn sin_cos(self) -> (f64, f64) {
        self.rad.sin_cos()
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            rad: self.rad + rhs.rad,
        }
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            rad: self.rad - rhs.rad,
        }
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self { rad: -self.rad }
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            rad: self.rad * rhs,
        }
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            rad: self.rad / rhs,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn positive_is_idempotent() {
        for deg in [-720.0, -361.0, -45.0, 0.0, 90.0, 400.0] {
            let a = Angle::degrees(deg);
            assert!((a.positive().positive() - a.positive()).as_radians().abs() < TOL);
        }
    }

    #[test]
    fn min_positive_coterminal_range() {
        for deg in [-720.0, -540.0, -90.0, 0.0, 359.0, 360.0, 725.0] {
            let r = Angle::degrees(deg).min_positive_coterminal().as_radians();
            assert!((0.0..TAU).contains(&r), "deg={deg} r={r}");
        }
    }

    #[test]
    fn min_positive_coterminal_values() {
        assert!((Angle::degrees(-90.0).min_positive_coterminal().as_degrees() - 270.0).abs() < 1e-9);
        assert!(Angle::degrees(0.0).min_positive_coterminal().as_degrees().abs() < TOL);
        assert!(Angle::degrees(360.0).min_positive_coterminal().as_degrees().abs() < 1e-9);
    }

    #[test]
    fn complementary_supplementary_explementary() {
        let a = Angle::degrees(30.0);
        assert!((a.complementary().as_degrees() - 60.0).abs() < 1e-9);
        assert!((a.supplementary().as_degrees() - 150.0).abs() < 1e-9);
        assert!((a.explementary().as_degrees() - 330.0).abs() < 1e-9);
    }

    #[test]
    fn min_rotation_folds_reflex() {
        // 270° from 0° is shorter going backward: −90°.
        let r = Angle::degrees(270.0).min_rotation(Angle::ZERO);
        assert!((r.as_degrees() + 90.0).abs() < 1e-9, "r={}", r.as_degrees());

        // 90° stays 90°.
        let r = Angle::degrees(90.0).min_rotation(Angle::ZERO);
        assert!((r.as_degrees() - 90.0).abs() < 1e-9);

        // Exactly 180° stays +180° (half-open range).
        let r = Angle::degrees(180.0).min_rotation(Angle::ZERO);
        assert!((r.as_degrees() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn max_rotation_is_other_way_around() {
        let r = Angle::degrees(90.0).max_rotation(Angle::ZERO);
        assert!((r.as_degrees() + 270.0).abs() < 1e-9, "r={}", r.as_degrees());

        let r = Angle::degrees(270.0).max_rotation(Angle::ZERO);
        assert!((r.as_degrees() - 270.0).abs() < 1e-9, "r={}", r.as_degrees());
    }

    #[test]
    fn coterminal_pair() {
        let a = Angle::degrees(90.0);
        assert!((a.non_reflex_coterminal().as_degrees() - 90.0).abs() < 1e-9);
        assert!((a.reflex_coterminal().as_degrees() + 270.0).abs() < 1e-9);
    }

    #[test]
    fn non_reflex_coterminal_halving_stays_in_quadrant() {
        let a = Angle::degrees(270.0);
        let halved = a.non_reflex_coterminal().positive().halved();
        assert!((halved.as_degrees() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn three_point_concrete_cases() {
        // Screen space, +Y down, clockwise positive.
        let a = Angle::three_point(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        assert!((a.as_degrees() - 90.0).abs() < 1e-9, "a={}", a.as_degrees());

        let a = Angle::three_point(p(1.0, 0.0), p(0.0, 0.0), p(-1.0, 0.0));
        assert!((a.as_degrees() - 180.0).abs() < 1e-9, "a={}", a.as_degrees());

        let a = Angle::three_point(p(1.0, 1.0), p(0.0, 0.0), p(1.0, 0.0));
        assert!((a.as_degrees() - 315.0).abs() < 1e-9, "a={}", a.as_degrees());
    }

    #[test]
    fn three_point_range() {
        let samples = [
            (p(3.0, 1.0), p(-1.0, 2.0), p(0.5, -4.0)),
            (p(-2.0, -2.0), p(1.0, 1.0), p(4.0, 0.0)),
            (p(0.0, 5.0), p(0.0, 0.0), p(5.0, 0.0)),
        ];
        for (i, a, t) in samples {
            let r = Angle::three_point(i, a, t).as_radians();
            assert!((0.0..TAU).contains(&r), "r={r}");
        }
    }

    #[test]
    fn three_point_degenerate_side_is_zero() {
        let a = Angle::three_point(p(1.0, 1.0), p(1.0, 1.0), p(2.0, 0.0));
        assert!(a.as_radians().abs() < TOL);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(Angle::degrees(0.0).classify(), AngleType::Zero);
        assert_eq!(Angle::degrees(45.0).classify(), AngleType::Acute);
        assert_eq!(Angle::degrees(90.0).classify(), AngleType::Right);
        assert_eq!(Angle::degrees(135.0).classify(), AngleType::Obtuse);
        assert_eq!(Angle::degrees(180.0).classify(), AngleType::Straight);
        assert_eq!(Angle::degrees(270.0).classify(), AngleType::Reflex);
        assert_eq!(Angle::degrees(360.0).classify(), AngleType::Full);
        assert_eq!(Angle::degrees(400.0).classify(), AngleType::Over360);
        // Classification uses the positive magnitude.
        assert_eq!(Angle::degrees(-90.0).classify(), AngleType::Right);
    }

    #[test]
    fn classification_is_ordered() {
        assert!(AngleType::Zero < AngleType::Acute);
        assert!(AngleType::Acute < AngleType::Right);
        assert!(AngleType::Reflex < AngleType::Full);
        assert!(AngleType::Full < AngleType::Over360);
    }
}
