//! Exact number kind and robust orientation predicates.
//!
//! Purpose
//! - `Exact` is an arbitrary-precision rational. Every finite `f64` is a
//!   dyadic rational, so sums and products of coordinates are represented
//!   without rounding and equal areas compare equal.
//! - Orientation signs come from Shewchuk's adaptive `orient2d`, so the sign is
//!   correct even for nearly collinear inputs without allocating.
//!
//! Conversion from the Inexact kind (`f64`) happens at the boundary via
//! `to_exact` / `to_inexact`.

use nalgebra::Point2;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use robust::{orient2d, Coord};

/// Totally ordered exact scalar used for areas and heap keys.
pub type Exact = BigRational;

/// Exact value of `x`; non-finite inputs map to zero.
#[inline]
pub fn to_exact(x: f64) -> Exact {
    BigRational::from_float(x).unwrap_or_else(BigRational::zero)
}

/// Nearest `f64` to `x` (for logging and display).
#[inline]
pub fn to_inexact(x: &Exact) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

/// Turn direction of `a → b → c`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    LeftTurn,
    RightTurn,
    Collinear,
}

#[inline]
fn coord(p: Point2<f64>) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

/// Robust orientation of the triangle `abc`.
pub fn orientation(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Orientation {
    let det = orient2d(coord(a), coord(b), coord(c));
    if det > 0.0 {
        Orientation::LeftTurn
    } else if det < 0.0 {
        Orientation::RightTurn
    } else {
        Orientation::Collinear
    }
}

/// `c` lies strictly left of the directed line `a → b`.
#[inline]
pub fn left_turn(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> bool {
    orientation(a, b, c) == Orientation::LeftTurn
}

/// Unsigned area of triangle `abc`, computed exactly.
///
/// Collinear triples are exactly zero; the value does not depend on vertex order.
pub fn triangle_area(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> Exact {
    let [ax, ay, bx, by, cx, cy] = [a.x, a.y, b.x, b.y, c.x, c.y].map(to_exact);
    let det = (&bx - &ax) * (&cy - &ay) - (&by - &ay) * (&cx - &ax);
    det.abs() / BigRational::from_integer(BigInt::from(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::rngs::StdRng;
    use ::rand::{Rng, SeedableRng};
    use nalgebra::point;

    #[test]
    fn orientation_signs() {
        let a = point![0.0, 0.0];
        let b = point![1.0, 0.0];
        assert_eq!(orientation(a, b, point![0.5, 1.0]), Orientation::LeftTurn);
        assert_eq!(orientation(a, b, point![0.5, -1.0]), Orientation::RightTurn);
        assert_eq!(orientation(a, b, point![3.0, 0.0]), Orientation::Collinear);
    }

    #[test]
    fn nearly_collinear_is_not_misclassified() {
        // Classic failure case for naive evaluation.
        let a = point![0.5, 0.5];
        let b = point![12.0, 12.0];
        let c = point![24.0, 24.0];
        assert_eq!(orientation(a, b, c), Orientation::Collinear);
        let c2 = point![24.0, 24.0 + f64::EPSILON * 32.0];
        assert_eq!(orientation(a, b, c2), Orientation::LeftTurn);
    }

    #[test]
    fn triangle_area_is_order_independent() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let mut p = || point![rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)];
            let (a, b, c) = (p(), p(), p());
            let area = triangle_area(a, b, c);
            for other in [
                triangle_area(b, c, a),
                triangle_area(c, a, b),
                triangle_area(a, c, b),
                triangle_area(c, b, a),
                triangle_area(b, a, c),
            ] {
                assert_eq!(other, area);
            }
            let sign = orientation(a, b, c);
            assert_eq!(area.is_zero(), sign == Orientation::Collinear);
        }
    }

    #[test]
    fn inexact_round_trip() {
        for x in [0.0, 0.1, -3.75, 1e-300, 1e300] {
            assert_eq!(to_inexact(&to_exact(x)), x);
        }
        assert!(to_exact(f64::NAN).is_zero());
    }

    #[test]
    fn triangle_area_is_unsigned() {
        let a = point![0.0, 0.0];
        let b = point![0.5, 0.25];
        let c = point![1.0, 0.0];
        assert_eq!(triangle_area(a, b, c), to_exact(0.125));
        assert_eq!(triangle_area(c, b, a), to_exact(0.125));
        assert_eq!(triangle_area(a, point![1.0, 1.0], point![2.0, 2.0]), to_exact(0.0));
    }
}
