use std::cmp::Ordering;
use std::f64::consts::TAU;

use nalgebra::Point2;

/// Wrap an angle into `[0, 2π)`.
///
/// `rem_euclid` may round up to exactly `2π` for tiny negative inputs; that case maps to 0.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Wrap an angle into `[base, base + 2π)`.
#[inline]
pub fn wrap_angle_from(angle: f64, base: f64) -> f64 {
    base + wrap_angle(angle - base)
}

/// Wrap an angle into `(base, base + 2π]`.
#[inline]
pub fn wrap_angle_from_nonzero(angle: f64, base: f64) -> f64 {
    let w = wrap_angle(angle - base);
    if w == 0.0 {
        base + TAU
    } else {
        base + w
    }
}

/// Twice the signed area of triangle `abc` (positive when counterclockwise), inexact.
#[inline]
pub fn cross(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Returns `None` for an empty input; a single distinct point yields a one-vertex hull.
pub fn convex_hull(points: &[Point2<f64>]) -> Option<Vec<Point2<f64>>> {
    if points.is_empty() {
        return None;
    }
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return Some(pts);
    }
    let mut lower: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    Some(hull)
}

/// Polygon area centroid; falls back to the vertex average when the area vanishes.
pub fn polygon_centroid(verts: &[Point2<f64>]) -> Option<Point2<f64>> {
    if verts.is_empty() {
        return None;
    }
    let mut a: f64 = 0.0;
    let mut cx: f64 = 0.0;
    let mut cy: f64 = 0.0;
    for i in 0..verts.len() {
        let p = verts[i];
        let q = verts[(i + 1) % verts.len()];
        let cross = p.x * q.y - q.x * p.y;
        a += cross;
        cx += (p.x + q.x) * cross;
        cy += (p.y + q.y) * cross;
    }
    a *= 0.5;
    if a.abs() < 1e-18 {
        let n = verts.len() as f64;
        let sum = verts.iter().fold((0.0, 0.0), |acc, p| (acc.0 + p.x, acc.1 + p.y));
        return Some(Point2::new(sum.0 / n, sum.1 / n));
    }
    Some(Point2::new(cx / (6.0 * a), cy / (6.0 * a)))
}
