use super::*;
use nalgebra::{point, Point2};
use proptest::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

proptest! {
    #[test]
    fn polar_round_trip(x in -1e3f64..1e3, y in -1e3f64..1e3) {
        let p = Point2::new(x, y);
        let q = PolarPoint::from_cartesian(p).to_cartesian();
        prop_assert!((p.x - q.x).abs() <= 1e-9);
        prop_assert!((p.y - q.y).abs() <= 1e-9);
    }

    #[test]
    fn circular_range_is_canonical(from in -20.0f64..20.0, len in 0.0f64..(TAU - 1e-9)) {
        let r = CircularRange::new(from, from + len);
        prop_assert!(r.from() >= 0.0 && r.from() < TAU);
        prop_assert!(r.to() >= r.from() && r.to() < r.from() + TAU);
        prop_assert!((r.length() - len).abs() < 1e-9);
    }

    #[test]
    fn over_full_range_is_full(from in -20.0f64..20.0, eps in 0.0f64..5.0) {
        prop_assert!(CircularRange::new(from, from + TAU + eps).is_full());
    }
}

#[test]
fn polar_origin_has_zero_radius() {
    assert_eq!(PolarPoint::from_cartesian(point![0.0, 0.0]).r(), 0.0);
    let o = PolarPoint::new(0.0, 1.3).to_cartesian();
    assert_eq!(o, point![0.0, 0.0]);
}

#[test]
fn wrap_helpers_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..1000 {
        let a = rng.gen_range(-100.0..100.0);
        let base = rng.gen_range(-10.0..10.0);
        let w = wrap_angle(a);
        assert!((0.0..TAU).contains(&w));
        let wf = wrap_angle_from(a, base);
        assert!(wf >= base && wf < base + TAU);
        let wn = wrap_angle_from_nonzero(a, base);
        assert!(wn > base && wn <= base + TAU);
    }
    assert_eq!(wrap_angle(-1e-18), 0.0);
    assert_eq!(wrap_angle_from_nonzero(PI, PI), PI + TAU);
}

#[test]
fn convex_hull_and_centroid() {
    let pts = vec![
        point![0.0, 0.0],
        point![2.0, 0.0],
        point![1.0, 1.0],
        point![2.0, 2.0],
        point![0.0, 2.0],
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.len(), 4);
    let sq = Polygon::new(hull);
    assert!((sq.signed_area() - 4.0).abs() < 1e-12);
    let c = sq.centroid().unwrap();
    assert!((c - point![1.0, 1.0]).norm() < 1e-12);
    // Degenerate: vertex average.
    let seg = polygon_centroid(&[point![0.0, 0.0], point![2.0, 0.0]]).unwrap();
    assert!((seg - point![1.0, 0.0]).norm() < 1e-12);
    assert_eq!(convex_hull(&[point![1.0, 1.0], point![1.0, 1.0]]).unwrap().len(), 1);
}

#[test]
fn left_turn_matches_cross_sign() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..500 {
        let a = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let b = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let c = point![rng.gen_range(-5.0..5.0), rng.gen_range(-5.0..5.0)];
        let cr = cross(a, b, c);
        if cr.abs() > 1e-9 {
            assert_eq!(left_turn(a, b, c), cr > 0.0);
        }
    }
}
