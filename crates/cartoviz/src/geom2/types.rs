//! Basic 2D types and tolerances shared by the necklace and simplification code.
//!
//! - `GeomCfg`: centralizes epsilons for angle comparisons and degeneracy checks.
//! - `Circle`, `Segment`, `Polygon`, `BoundingBox`: plain Cartesian primitives
//!   over the Inexact number kind (`f64`).
//!
//! Code cross-refs: `util::{convex_hull, polygon_centroid}`, `exact::left_turn`

use nalgebra::{Point2, Vector2};

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Slack for comparisons between angles in radians.
    pub eps_angle: f64,
    /// Distances below this are treated as coincident points.
    pub eps_length: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-12,
            eps_length: 1e-12,
        }
    }
}

/// Closed disk with center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Point where the ray from the center at `angle_rad` leaves the circle.
    #[inline]
    pub fn intersect_ray(&self, angle_rad: f64) -> Point2<f64> {
        self.center + Vector2::new(angle_rad.cos(), angle_rad.sin()) * self.radius
    }

    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        let d = Vector2::new(self.radius, self.radius);
        BoundingBox {
            min: self.center - d,
            max: self.center + d,
        }
    }
}

/// Directed segment `source → target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub source: Point2<f64>,
    pub target: Point2<f64>,
}

impl Segment {
    #[inline]
    pub fn new(source: Point2<f64>, target: Point2<f64>) -> Self {
        Self { source, target }
    }

    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.target - self.source
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoundingBox {
    /// Smallest box containing all points; `None` for an empty input.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point2<f64>>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut bb = BoundingBox {
            min: first,
            max: first,
        };
        for p in iter {
            bb.min.x = bb.min.x.min(p.x);
            bb.min.y = bb.min.y.min(p.y);
            bb.max.x = bb.max.x.max(p.x);
            bb.max.y = bb.max.y.max(p.y);
        }
        Some(bb)
    }

    #[inline]
    pub fn contains(&self, p: Point2<f64>) -> bool {
        self.min.x <= p.x && p.x <= self.max.x && self.min.y <= p.y && p.y <= self.max.y
    }
}

/// Simple polygon given by its boundary vertices (counterclockwise for outer
/// boundaries). The closing edge from the last to the first vertex is implicit.
///
/// Invariants (not enforced):
/// - No repeated closing vertex.
/// - A single vertex denotes a point region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<Point2<f64>>,
}

impl Polygon {
    #[inline]
    pub fn new(vertices: Vec<Point2<f64>>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// A polygon with a single (distinct) vertex.
    pub fn is_point(&self) -> bool {
        match self.vertices.split_first() {
            Some((first, rest)) => rest.iter().all(|p| p == first),
            None => false,
        }
    }

    /// Boundary edges in order, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| Segment::new(self.vertices[k], self.vertices[(k + 1) % n]))
    }

    /// Signed area (positive for counterclockwise orientation).
    pub fn signed_area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut a = 0.0;
        for k in 0..n {
            let p = self.vertices[k];
            let q = self.vertices[(k + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        0.5 * a
    }

    /// Area centroid; falls back to the vertex average for degenerate polygons.
    pub fn centroid(&self) -> Option<Point2<f64>> {
        super::util::polygon_centroid(&self.vertices)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;

    #[test]
    fn polygon_edges_close_the_loop() {
        let p = Polygon::new(vec![point![0.0, 0.0], point![1.0, 0.0], point![0.0, 1.0]]);
        let edges: Vec<_> = p.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2].target, point![0.0, 0.0]);
        assert!((p.signed_area() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn point_polygon_detection() {
        assert!(Polygon::new(vec![point![2.0, 3.0]]).is_point());
        assert!(Polygon::new(vec![point![2.0, 3.0], point![2.0, 3.0]]).is_point());
        assert!(!Polygon::new(vec![point![2.0, 3.0], point![2.0, 4.0]]).is_point());
        assert!(!Polygon::default().is_point());
    }

    #[test]
    fn circle_ray_and_box() {
        let c = Circle::new(point![1.0, 1.0], 2.0);
        let p = c.intersect_ray(std::f64::consts::FRAC_PI_2);
        assert!((p.x - 1.0).abs() < 1e-12 && (p.y - 3.0).abs() < 1e-12);
        let bb = c.bounding_box();
        assert_eq!(bb.min, point![-1.0, -1.0]);
        assert!(bb.contains(point![3.0, 3.0]));
    }
}
