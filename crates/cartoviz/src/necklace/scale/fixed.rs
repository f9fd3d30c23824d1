//! Feasibility of one cyclic sequence of beads.
//!
//! Beads keep the given sequence. Bead `i` must sit at `p_i ∈ [a_i, b_i]`
//! (intervals unrolled so that `p_0 ≤ p_1 ≤ … ≤ p_{n−1} ≤ p_0 + 2π`), with
//! `p_{i+1} − p_i ≥ α_i + α_{i+1} + buffer` and the same gap across the wrap.
//!
//! For a fixed start `p_0` the greedy "as early as possible" chain is optimal,
//! and the wrap-around gap only grows with `p_0`, so starting as late as every
//! deadline allows decides the sequence exactly.

use std::f64::consts::TAU;

use crate::geom2::Range;

/// Slack for comparisons between unrolled angles.
pub(crate) const EPS: f64 = 1e-12;

/// Gap required between the centers of two neighbouring beads.
#[inline]
pub fn separation(alpha_a: f64, alpha_b: f64, buffer_rad: f64) -> f64 {
    alpha_a + alpha_b + buffer_rad
}

/// Positions for a sequence with unrolled `intervals` and half-widths `alphas`,
/// or `None` when the sequence does not fit.
pub fn place(intervals: &[Range], alphas: &[f64], buffer_rad: f64) -> Option<Vec<f64>> {
    let n = intervals.len();
    debug_assert_eq!(n, alphas.len());
    match n {
        0 => return Some(Vec::new()),
        1 => {
            return (separation(alphas[0], alphas[0], buffer_rad) <= TAU + EPS)
                .then(|| vec![intervals[0].from]);
        }
        _ => {}
    }

    // Latest start that keeps every successor below its deadline.
    let mut start = intervals[0].to;
    let mut chain = 0.0;
    for i in 1..n {
        chain += separation(alphas[i - 1], alphas[i], buffer_rad);
        start = start.min(intervals[i].to - chain);
    }
    if start < intervals[0].from - EPS {
        return None;
    }
    let start = start.max(intervals[0].from);

    let mut pos = Vec::with_capacity(n);
    pos.push(start);
    for i in 1..n {
        let p = intervals[i]
            .from
            .max(pos[i - 1] + separation(alphas[i - 1], alphas[i], buffer_rad));
        if p > intervals[i].to + EPS {
            return None;
        }
        pos.push(p);
    }
    let closing = pos[n - 1] + separation(alphas[n - 1], alphas[0], buffer_rad);
    (closing <= start + TAU + EPS).then_some(pos)
}
