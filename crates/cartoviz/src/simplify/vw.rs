//! Visvalingam–Whyatt simplification of open polylines.
//!
//! The cost of an interior vertex is the Exact area of the triangle it forms
//! with its current neighbours. The cheapest vertex is removed (ties: lower
//! index first) and its neighbours are re-costed, until the target count is
//! reached. Endpoints carry no cost and are never removed.
//!
//! Points move `present → removed at step n` exactly once. Further calls
//! continue from the current state, so the maximum removed cost only grows as
//! the target shrinks.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use nalgebra::Point2;

use crate::geom2::{to_exact, to_inexact, triangle_area, Exact};

/// Incremental simplifier over a fixed input polyline.
#[derive(Clone, Debug)]
pub struct VwSimplifier {
    points: Vec<Point2<f64>>,
    prev: Vec<Option<usize>>,
    next: Vec<Option<usize>>,
    generation: Vec<u32>,
    removed_at: Vec<Option<usize>>,
    // (cost, index, generation); stale entries are skipped on pop.
    heap: BinaryHeap<Reverse<(Exact, usize, u32)>>,
    remaining: usize,
    max_cost: Exact,
}

impl VwSimplifier {
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        let n = points.len();
        let prev = (0..n).map(|i| i.checked_sub(1)).collect();
        let next = (0..n).map(|i| (i + 1 < n).then_some(i + 1)).collect();
        let mut s = Self {
            points,
            prev,
            next,
            generation: vec![0; n],
            removed_at: vec![None; n],
            heap: BinaryHeap::with_capacity(n),
            remaining: n,
            max_cost: to_exact(0.0),
        };
        for i in 1..n.saturating_sub(1) {
            s.push_cost(i);
        }
        s
    }

    /// Current cost of interior vertex `i`; `None` for endpoints.
    pub fn cost(&self, i: usize) -> Option<Exact> {
        let (p, q) = (self.prev[i]?, self.next[i]?);
        Some(triangle_area(self.points[p], self.points[i], self.points[q]))
    }

    fn push_cost(&mut self, i: usize) {
        if let Some(c) = self.cost(i) {
            self.heap.push(Reverse((c, i, self.generation[i])));
        }
    }

    /// Cheapest live entry, discarding stale ones.
    fn peek_live(&mut self) -> Option<(Exact, usize)> {
        while let Some(Reverse((c, i, g))) = self.heap.peek() {
            let (i, g) = (*i, *g);
            if self.removed_at[i].is_none() && self.generation[i] == g {
                return Some((c.clone(), i));
            }
            self.heap.pop();
        }
        None
    }

    fn remove(&mut self, i: usize, cost: Exact) {
        let step = self.points.len() - self.remaining;
        self.removed_at[i] = Some(step);
        self.remaining -= 1;
        tracing::trace!(index = i, step, cost = to_inexact(&cost), "vw remove");
        if cost > self.max_cost {
            self.max_cost = cost;
        }
        let (p, q) = (self.prev[i], self.next[i]);
        if let Some(p) = p {
            self.next[p] = q;
            self.generation[p] += 1;
            self.push_cost(p);
        }
        if let Some(q) = q {
            self.prev[q] = p;
            self.generation[q] += 1;
            self.push_cost(q);
        }
    }

    /// Simplify until at most `k` points remain (never fewer than the endpoints).
    /// Returns the maximum cost removed so far.
    pub fn simplify(&mut self, k: usize) -> Exact {
        self.run(k, None)
    }

    /// As `simplify`, but stop early once the cheapest vertex costs more than `threshold`.
    pub fn simplify_with_threshold(&mut self, k: usize, threshold: Exact) -> Exact {
        self.run(k, Some(threshold))
    }

    fn run(&mut self, k: usize, threshold: Option<Exact>) -> Exact {
        let target = k.max(2.min(self.points.len()));
        while self.remaining > target {
            let Some((c, i)) = self.peek_live() else {
                break;
            };
            if threshold.as_ref().is_some_and(|t| &c > t) {
                break;
            }
            self.heap.pop();
            self.remove(i, c);
        }
        self.max_cost.clone()
    }

    /// Maximum cost among removed points (zero if none).
    #[inline]
    pub fn max_cost(&self) -> &Exact {
        &self.max_cost
    }

    /// Number of points still present.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of input points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Step at which point `i` was removed (0 = first removal), if it was.
    #[inline]
    pub fn removed_at(&self, i: usize) -> Option<usize> {
        self.removed_at.get(i).copied().flatten()
    }

    /// Indices of present points, in order.
    pub fn indices(&self) -> Vec<usize> {
        (0..self.points.len())
            .filter(|&i| self.removed_at[i].is_none())
            .collect()
    }

    /// Present points, in order.
    pub fn polyline(&self) -> Vec<Point2<f64>> {
        self.indices().into_iter().map(|i| self.points[i]).collect()
    }
}

/// Simplify `points` to `k` points; returns the kept points and the maximum removed cost.
pub fn simplify(points: &[Point2<f64>], k: usize) -> (Vec<Point2<f64>>, Exact) {
    let mut s = VwSimplifier::new(points.to_vec());
    let err = s.simplify(k);
    (s.polyline(), err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::rngs::StdRng;
    use ::rand::{Rng, SeedableRng};
    use nalgebra::point;

    fn dented_square() -> Vec<Point2<f64>> {
        vec![
            point![0.0, 0.0],
            point![0.5, 0.25],
            point![1.0, 0.0],
            point![1.0, 1.0],
            point![0.0, 1.0],
        ]
    }

    #[test]
    fn removes_smallest_triangle() {
        let (kept, err) = simplify(&dented_square(), 4);
        assert_eq!(
            kept,
            vec![point![0.0, 0.0], point![1.0, 0.0], point![1.0, 1.0], point![0.0, 1.0]]
        );
        assert_eq!(err, to_exact(0.125));
    }

    #[test]
    fn endpoints_survive_and_ranks_are_recorded() {
        let mut s = VwSimplifier::new(dented_square());
        s.simplify(0);
        assert_eq!(s.indices(), vec![0, 4]);
        assert_eq!(s.removed_at(1), Some(0));
        assert!(s.removed_at(0).is_none() && s.removed_at(4).is_none());
        let mut steps: Vec<_> = (1..4).filter_map(|i| s.removed_at(i)).collect();
        steps.sort_unstable();
        assert_eq!(steps, vec![0, 1, 2]);
        assert_eq!(s.cost(0), None);
    }

    #[test]
    fn ties_break_by_lower_index() {
        // Zig-zag with equal triangles everywhere.
        let pts: Vec<_> = (0..7)
            .map(|i| point![i as f64, if i % 2 == 0 { 0.0 } else { 1.0 }])
            .collect();
        let mut s = VwSimplifier::new(pts);
        s.simplify(6);
        assert_eq!(s.removed_at(1), Some(0));
    }

    #[test]
    fn equal_areas_tie_exactly() {
        // a, b, c, a, b: vertices 1..=3 all span triangle abc.
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..200 {
            let mut p = || point![rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)];
            let (a, b, c) = (p(), p(), p());
            let mut s = VwSimplifier::new(vec![a, b, c, a, b]);
            assert_eq!(s.cost(1), s.cost(2));
            assert_eq!(s.cost(2), s.cost(3));
            s.simplify(4);
            assert_eq!(s.removed_at(1), Some(0));
        }
    }

    #[test]
    fn threshold_stops_early() {
        let mut s = VwSimplifier::new(dented_square());
        let err = s.simplify_with_threshold(2, to_exact(0.2));
        assert_eq!(err, to_exact(0.125));
        assert_eq!(s.remaining(), 4);
        // Continue without threshold.
        s.simplify(2);
        assert_eq!(s.remaining(), 2);
        assert!(*s.max_cost() >= to_exact(0.125));
    }

    #[test]
    fn short_inputs_are_untouched() {
        for n in 0..3 {
            let pts: Vec<_> = (0..n).map(|i| point![i as f64, 0.0]).collect();
            let (kept, err) = simplify(&pts, 0);
            assert_eq!(kept, pts);
            assert_eq!(err, to_exact(0.0));
        }
    }
}
