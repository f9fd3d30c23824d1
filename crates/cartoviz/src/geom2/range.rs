//! Linear and circular angular intervals.
//!
//! `CircularRange` is kept in canonical form: `from ∈ [0, 2π)` and
//! `to ∈ [from, from + 2π)`, except the full circle which is exactly `(0, 2π)`.
//! Any construction spanning at least a full turn yields the full circle.
//!
//! Code cross-refs: `util::{wrap_angle, wrap_angle_from}`

use std::f64::consts::TAU;

use super::util::{wrap_angle, wrap_angle_from};

/// Closed linear interval `[from, to]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub from: f64,
    pub to: f64,
}

impl Range {
    #[inline]
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.from <= self.to
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        self.from <= v && v <= self.to
    }

    #[inline]
    pub fn contains_interior(&self, v: f64) -> bool {
        self.from < v && v < self.to
    }

    pub fn intersects(&self, other: &Range) -> bool {
        self.contains(other.from) || other.contains(self.from)
    }

    pub fn intersects_interior(&self, other: &Range) -> bool {
        (self.contains(other.from) && other.from != self.to)
            || (other.contains(self.from) && self.from != other.to)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    #[inline]
    pub fn clamp(&self, v: f64) -> f64 {
        v.clamp(self.from, self.to)
    }
}

/// Counterclockwise angular interval from `from` to `to` (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularRange {
    from: f64,
    to: f64,
}

impl CircularRange {
    pub fn new(from: f64, to: f64) -> Self {
        let len = to - from;
        if len >= TAU {
            return Self::full();
        }
        let len = if len >= 0.0 { len } else { wrap_angle(len) };
        let from = wrap_angle(from);
        Self { from, to: from + len }
    }

    #[inline]
    pub fn full() -> Self {
        Self { from: 0.0, to: TAU }
    }

    /// Clockwise endpoint in `[0, 2π)`.
    #[inline]
    pub fn from(&self) -> f64 {
        self.from
    }

    /// Counterclockwise endpoint in `[from, from + 2π]`.
    #[inline]
    pub fn to(&self) -> f64 {
        self.to
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.from == 0.0 && self.to == TAU
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.from == self.to
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.to - self.from
    }

    pub fn contains(&self, v: f64) -> bool {
        if self.is_full() {
            return true;
        }
        let w = wrap_angle_from(v, self.from);
        self.from <= w && w <= self.to
    }

    pub fn contains_interior(&self, v: f64) -> bool {
        if self.is_full() {
            return true;
        }
        let w = wrap_angle_from(v, self.from);
        self.from < w && w < self.to
    }

    pub fn intersects(&self, other: &CircularRange) -> bool {
        self.contains(other.from) || other.contains(self.from)
    }

    pub fn intersects_interior(&self, other: &CircularRange) -> bool {
        (self.contains(other.from) && wrap_angle_from(other.from, self.from) != self.to)
            || (other.contains(self.from) && wrap_angle_from(self.from, other.from) != other.to)
    }

    /// Angle halfway between the endpoints, wrapped into `[0, 2π)`.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        wrap_angle(0.5 * (self.from + self.to))
    }

    /// The complementary range, traversed from `to` to `from`. The full circle stays full.
    pub fn reverse(&self) -> Self {
        if self.is_full() {
            return *self;
        }
        let from = wrap_angle(self.to);
        let to = wrap_angle_from(self.from, from);
        Self { from, to }
    }

    /// Nearest angle of the range to `v`, wrapped into `[0, 2π)`.
    pub fn closest(&self, v: f64) -> f64 {
        if self.contains(v) {
            return wrap_angle(v);
        }
        let to_from = angular_distance(v, self.from);
        let to_to = angular_distance(v, self.to);
        if to_from <= to_to {
            self.from
        } else {
            wrap_angle(self.to)
        }
    }

    /// Unrolled copy `[a, a + length]` with `a = from` wrapped into `[base, base + 2π)`.
    pub fn unrolled_from(&self, base: f64) -> Range {
        let a = wrap_angle_from(self.from, base);
        Range::new(a, a + self.length())
    }

    /// Overlap with `other`. When the overlap has two pieces the longer one is returned.
    pub fn intersection(&self, other: &CircularRange) -> Option<CircularRange> {
        if self.is_full() {
            return Some(*other);
        }
        if other.is_full() {
            return Some(*self);
        }
        let o = other.unrolled_from(self.from);
        [o.from, o.from - TAU]
            .into_iter()
            .filter_map(|start| {
                let piece = Range::new(self.from.max(start), self.to.min(start + other.length()));
                if !piece.is_valid() {
                    return None;
                }
                // Reuse the canonical endpoint of whichever range starts the piece.
                let from = if piece.from == self.from { self.from } else { other.from };
                Some(CircularRange {
                    from,
                    to: from + piece.length(),
                })
            })
            .max_by(|a, b| a.length().total_cmp(&b.length()))
    }
}

impl Default for CircularRange {
    fn default() -> Self {
        Self::full()
    }
}

/// Shortest angular distance between two angles, in `[0, π]`.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = wrap_angle(a - b);
    d.min(TAU - d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn construction_is_canonical() {
        let r = CircularRange::new(-FRAC_PI_2, FRAC_PI_2);
        assert!((r.from() - 1.5 * PI).abs() < 1e-12);
        assert!((r.to() - 2.5 * PI).abs() < 1e-12);
        assert!(CircularRange::new(1.0, 1.0 + TAU + 1e-9).is_full());
        assert!(CircularRange::new(0.0, TAU).is_full());
        let wrap = CircularRange::new(5.0, 1.0);
        assert!((wrap.length() - (TAU - 4.0)).abs() < 1e-12);
    }

    #[test]
    fn contains_wraps_around_zero() {
        let r = CircularRange::new(1.5 * PI, 2.5 * PI);
        assert!(r.contains(0.0));
        assert!(r.contains(TAU + 0.1));
        assert!(r.contains(-0.1));
        assert!(!r.contains(PI));
        assert!(r.contains(1.5 * PI));
        assert!(!r.contains_interior(1.5 * PI));
        assert!((r.midpoint() - 0.0).abs() < 1e-12);
    }

    #[test]
    fn reverse_is_complement() {
        let r = CircularRange::new(0.5, 2.0);
        let c = r.reverse();
        assert!((c.from() - 2.0).abs() < 1e-12);
        assert!((c.to() - (0.5 + TAU)).abs() < 1e-12);
        assert!(CircularRange::full().reverse().is_full());
        assert!(r.intersects(&c));
        assert!(!r.intersects_interior(&c));
    }

    #[test]
    fn intersection_pieces() {
        let a = CircularRange::new(0.0, PI);
        let b = CircularRange::new(FRAC_PI_2, 1.5 * PI);
        let i = a.intersection(&b).unwrap();
        assert!((i.from() - FRAC_PI_2).abs() < 1e-12);
        assert!((i.to() - PI).abs() < 1e-12);
        let far = CircularRange::new(1.2 * PI, 1.8 * PI);
        assert!(a.intersection(&far).is_none());
        // Two pieces: keep the longer one.
        let long = CircularRange::new(0.0, 1.5 * PI);
        let w = CircularRange::new(PI, 2.2 * PI);
        let two = long.intersection(&w).unwrap();
        assert!((two.from() - PI).abs() < 1e-12);
        assert!((two.to() - 1.5 * PI).abs() < 1e-9);
    }

    #[test]
    fn closest_picks_nearer_endpoint() {
        let r = CircularRange::new(0.0, FRAC_PI_2);
        assert_eq!(r.closest(0.25), 0.25);
        assert!((r.closest(2.0) - FRAC_PI_2).abs() < 1e-12);
        assert!((r.closest(-0.3) - 0.0).abs() < 1e-12);
        assert!((angular_distance(0.1, TAU - 0.1) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn linear_range_helpers() {
        let a = Range::new(0.0, 1.0);
        let b = Range::new(1.0, 2.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects_interior(&b));
        assert_eq!(a.clamp(3.0), 1.0);
        assert!(Range::new(2.0, 2.0).is_degenerate());
    }
}
