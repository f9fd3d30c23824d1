//! Necklace curves: a circle around its kernel, optionally restricted to a
//! counterclockwise arc.
//!
//! All angles are measured at the kernel, counterclockwise from the positive x-axis.

use std::f64::consts::PI;

use nalgebra::Point2;

use crate::geom2::{wrap_angle, BoundingBox, Circle, CircularRange};

/// Tagged necklace curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NecklaceShape {
    /// Full circle; the kernel is the center.
    Circle(Circle),
    /// Circle restricted to the counterclockwise arc `arc`.
    Arc { circle: Circle, arc: CircularRange },
}

impl NecklaceShape {
    pub fn circle(center: Point2<f64>, radius: f64) -> Self {
        NecklaceShape::Circle(Circle::new(center, radius))
    }

    /// Arc from `from_rad` counterclockwise to `to_rad`.
    pub fn arc(center: Point2<f64>, radius: f64, from_rad: f64, to_rad: f64) -> Self {
        NecklaceShape::Arc {
            circle: Circle::new(center, radius),
            arc: CircularRange::new(from_rad, to_rad),
        }
    }

    #[inline]
    fn supporting_circle(&self) -> &Circle {
        match self {
            NecklaceShape::Circle(c) => c,
            NecklaceShape::Arc { circle, .. } => circle,
        }
    }

    #[inline]
    pub fn kernel(&self) -> Point2<f64> {
        self.supporting_circle().center
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.supporting_circle().radius
    }

    /// Finite kernel, positive finite radius, and a non-degenerate arc.
    pub fn is_valid(&self) -> bool {
        let c = self.supporting_circle();
        let ok = c.center.x.is_finite()
            && c.center.y.is_finite()
            && c.radius.is_finite()
            && c.radius > 0.0;
        match self {
            NecklaceShape::Circle(_) => ok,
            NecklaceShape::Arc { arc, .. } => ok && !arc.is_degenerate(),
        }
    }

    /// Angles at which beads may be centered.
    pub fn domain(&self) -> CircularRange {
        match self {
            NecklaceShape::Circle(_) => CircularRange::full(),
            NecklaceShape::Arc { arc, .. } => *arc,
        }
    }

    /// Point of the curve hit by the ray from the kernel at `angle_rad`.
    /// For an arc, rays outside the arc snap to the nearest endpoint.
    pub fn intersect_ray(&self, angle_rad: f64) -> Point2<f64> {
        match self {
            NecklaceShape::Circle(c) => c.intersect_ray(angle_rad),
            NecklaceShape::Arc { circle, arc } => circle.intersect_ray(arc.closest(angle_rad)),
        }
    }

    /// Angle of `p` as seen from the kernel, in `[0, 2π)`.
    pub fn compute_angle_rad(&self, p: Point2<f64>) -> f64 {
        let d = p - self.kernel();
        wrap_angle(d.y.atan2(d.x))
    }

    /// Distance from the kernel to a bead centered anywhere in `_range`.
    #[inline]
    pub fn compute_distance_to_kernel(&self, _range: &CircularRange) -> f64 {
        self.radius()
    }

    /// Half the angle subtended at the kernel by a disk of radius `radius`
    /// centered on the curve. `None` when the disk would swallow the kernel.
    pub fn compute_covering_radius_rad(&self, range: &CircularRange, radius: f64) -> Option<f64> {
        let distance = self.compute_distance_to_kernel(range);
        if radius.is_nan() || radius < 0.0 {
            return None;
        }
        let ratio = radius / distance;
        if ratio > 1.0 + 1e-12 {
            return None;
        }
        Some(ratio.min(1.0).asin())
    }

    /// Angle reached by walking a chord of length `distance` from `angle_rad`
    /// (counterclockwise for positive distances). `None` beyond the diameter.
    pub fn compute_angle_at_distance_rad(&self, angle_rad: f64, distance: f64) -> Option<f64> {
        let diameter = 2.0 * self.radius();
        let d = distance.abs();
        if d > diameter {
            return None;
        }
        if d == diameter {
            return Some(angle_rad + PI);
        }
        let step = 2.0 * (d / diameter).asin();
        Some(if distance < 0.0 {
            angle_rad - step
        } else {
            angle_rad + step
        })
    }

    /// Bounding box of the supporting circle.
    pub fn bounding_box(&self) -> BoundingBox {
        self.supporting_circle().bounding_box()
    }
}
