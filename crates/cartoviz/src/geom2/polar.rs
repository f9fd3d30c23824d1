//! Polar coordinates, lines, and segments around a pole at the origin.
//!
//! Purpose
//! - `PolarPoint` stores `(r, φ)` with `r ≥ 0` and `φ ∈ [0, 2π)`.
//! - `PolarLine` is the supporting line of a segment expressed through its
//!   foot, the point of the line closest to the pole. Points on the line are
//!   parameterized by the signed distance `t` from the foot along
//!   `e = (−sin φ_f, cos φ_f)`, so `r(t) = √(t² + r_f²)` and
//!   `φ(t) = φ_f + atan2(t, r_f)`.
//! - `PolarSegment` restricts the line to `[t_0, t_1]` and exposes the unit
//!   parameter `s ∈ [0, 1]` from the first to the second endpoint.
//!
//! Lines through the pole have `r_f = 0`; their foot angle then encodes the
//! direction (direction angle minus π/2).

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Point2, Vector2};

use super::util::wrap_angle;

/// Point in polar coordinates around the origin.
#[derive(Clone, Copy, Debug)]
pub struct PolarPoint {
    r: f64,
    phi: f64,
}

impl PolarPoint {
    /// Negative `r` is folded onto the opposite ray.
    pub fn new(r: f64, phi: f64) -> Self {
        if r < 0.0 {
            Self {
                r: -r,
                phi: wrap_angle(phi + PI),
            }
        } else {
            Self {
                r,
                phi: wrap_angle(phi),
            }
        }
    }

    pub fn from_cartesian(p: Point2<f64>) -> Self {
        let r = p.coords.norm();
        if r == 0.0 {
            return Self { r: 0.0, phi: 0.0 };
        }
        Self::new(r, p.y.atan2(p.x))
    }

    /// Polar coordinates of `p` around `pole`.
    pub fn around(p: Point2<f64>, pole: Point2<f64>) -> Self {
        Self::from_cartesian(Point2::from(p - pole))
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    #[inline]
    pub fn to_cartesian(&self) -> Point2<f64> {
        Point2::new(self.r * self.phi.cos(), self.r * self.phi.sin())
    }

    /// Same Cartesian position seen from a pole moved by `-offset`.
    pub fn translate(&self, offset: Vector2<f64>) -> Self {
        Self::from_cartesian(self.to_cartesian() + offset)
    }
}

impl PartialEq for PolarPoint {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && (self.r == 0.0 || self.phi == other.phi)
    }
}

/// Line in polar form, determined by its foot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarLine {
    foot_r: f64,
    foot_phi: f64,
}

impl PolarLine {
    /// Supporting line of `a → b`; `None` when the points coincide.
    pub fn through(a: Point2<f64>, b: Point2<f64>) -> Option<Self> {
        let d = b - a;
        let len = d.norm();
        if !(len.is_finite()) || len <= 0.0 {
            return None;
        }
        let u = d / len;
        // Foot = projection of the origin onto the line.
        let foot = a.coords - u * a.coords.dot(&u);
        let scale = a.coords.norm().max(b.coords.norm()).max(1.0);
        let mut foot_r = foot.norm();
        if foot_r <= 1e-12 * scale {
            foot_r = 0.0;
        }
        let foot_phi = if foot_r > 0.0 {
            wrap_angle(foot.y.atan2(foot.x))
        } else {
            wrap_angle(u.y.atan2(u.x) - FRAC_PI_2)
        };
        let line = Self { foot_r, foot_phi };
        Some(line)
    }

    #[inline]
    pub fn foot(&self) -> PolarPoint {
        PolarPoint::new(self.foot_r, self.foot_phi)
    }

    /// Unit direction of increasing `t`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        Vector2::new(-self.foot_phi.sin(), self.foot_phi.cos())
    }

    #[inline]
    fn foot_cartesian(&self) -> Vector2<f64> {
        Vector2::new(self.foot_phi.cos(), self.foot_phi.sin()) * self.foot_r
    }

    /// Signed distance from the foot to the projection of `p`.
    #[inline]
    pub fn parameter_of(&self, p: Point2<f64>) -> f64 {
        (p.coords - self.foot_cartesian()).dot(&self.direction())
    }

    #[inline]
    pub fn point_at(&self, t: f64) -> Point2<f64> {
        Point2::from(self.foot_cartesian() + self.direction() * t)
    }

    #[inline]
    pub fn evaluate_r(&self, t: f64) -> f64 {
        t.hypot(self.foot_r)
    }

    #[inline]
    pub fn evaluate_phi(&self, t: f64) -> f64 {
        wrap_angle(self.foot_phi + t.atan2(self.foot_r))
    }

    /// Parameter of the point with angular coordinate `phi`, if the line reaches it.
    pub fn parameter_at_phi(&self, phi: f64) -> Option<f64> {
        let delta = wrap_angle(phi - self.foot_phi + PI) - PI;
        if self.foot_r == 0.0 {
            // Only the two rays along the line; the parameter is not unique.
            return None;
        }
        if delta.abs() >= FRAC_PI_2 {
            return None;
        }
        Some(self.foot_r * delta.tan())
    }

    /// Any point of the line has angular coordinate `phi`.
    pub fn contains_phi(&self, phi: f64) -> bool {
        if self.foot_r == 0.0 {
            let delta = wrap_angle(phi - self.foot_phi);
            return delta == FRAC_PI_2 || delta == 1.5 * PI;
        }
        self.parameter_at_phi(phi).is_some()
    }

    #[inline]
    pub fn r_min(&self) -> f64 {
        self.foot_r
    }
}

/// Segment in polar form: a polar line restricted to `[t_0, t_1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarSegment {
    line: PolarLine,
    t0: f64,
    t1: f64,
}

impl PolarSegment {
    /// Segment from `a` to `b`; `None` when the points coincide.
    pub fn new(a: Point2<f64>, b: Point2<f64>) -> Option<Self> {
        let line = PolarLine::through(a, b)?;
        Some(Self {
            t0: line.parameter_of(a),
            t1: line.parameter_of(b),
            line,
        })
    }

    /// Same segment with the pole moved to `pole`.
    pub fn around(a: Point2<f64>, b: Point2<f64>, pole: Point2<f64>) -> Option<Self> {
        Self::new(Point2::from(a - pole), Point2::from(b - pole))
    }

    #[inline]
    pub fn supporting_line(&self) -> &PolarLine {
        &self.line
    }

    #[inline]
    fn to_line_param(&self, s: f64) -> f64 {
        self.t0 + s * (self.t1 - self.t0)
    }

    #[inline]
    fn t_min(&self) -> f64 {
        self.t0.min(self.t1)
    }

    #[inline]
    fn t_max(&self) -> f64 {
        self.t0.max(self.t1)
    }

    #[inline]
    pub fn evaluate_r(&self, s: f64) -> f64 {
        self.line.evaluate_r(self.to_line_param(s))
    }

    #[inline]
    pub fn evaluate_phi(&self, s: f64) -> f64 {
        self.line.evaluate_phi(self.to_line_param(s))
    }

    pub fn start(&self) -> PolarPoint {
        PolarPoint::from_cartesian(self.line.point_at(self.t0))
    }

    pub fn end(&self) -> PolarPoint {
        PolarPoint::from_cartesian(self.line.point_at(self.t1))
    }

    #[inline]
    fn contains_pole(&self) -> bool {
        self.line.foot_r == 0.0 && self.t_min() <= 0.0 && 0.0 <= self.t_max()
    }

    /// Any point of the segment has angular coordinate `phi`.
    pub fn contains_phi(&self, phi: f64) -> bool {
        if self.line.foot_r == 0.0 {
            if self.contains_pole() {
                return true;
            }
            // All points share the same angle.
            let along = self.line.evaluate_phi(self.t0);
            return wrap_angle(phi) == along;
        }
        match self.line.parameter_at_phi(phi) {
            Some(t) => self.t_min() <= t && t <= self.t_max(),
            None => false,
        }
    }

    /// Distance from the pole to the closest point of the segment.
    pub fn r_min(&self) -> f64 {
        self.closest_to_pole().r()
    }

    /// The foot if it lies on the segment, else the nearer endpoint.
    pub fn closest_to_pole(&self) -> PolarPoint {
        let t = 0.0_f64.clamp(self.t_min(), self.t_max());
        PolarPoint::from_cartesian(self.line.point_at(t))
    }
}
