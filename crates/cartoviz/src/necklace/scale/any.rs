//! Order discovery for the any-order scaler.
//!
//! Each sweep fixes one bead as the cut, then repeatedly appends the unplaced
//! bead with the earliest deadline among those that can still follow the last
//! placed bead. Intervals that wrap past the cut may also be used one turn
//! earlier. The discovered sequence is then checked exactly by `fixed::place`.

use std::f64::consts::TAU;

use crate::geom2::{CircularRange, Range};

use super::fixed::{self, separation, EPS};

/// A feasible sequence: node indices, their unrolled intervals, and positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Sequence {
    pub order: Vec<usize>,
    pub intervals: Vec<Range>,
    pub positions: Vec<f64>,
}

/// Earliest-deadline sweep starting at node `cut`.
pub fn sweep(
    intervals: &[CircularRange],
    alphas: &[f64],
    buffer_rad: f64,
    cut: usize,
) -> Option<Sequence> {
    let n = intervals.len();
    let base = intervals[cut].from();
    let mut placed = vec![false; n];
    placed[cut] = true;

    let mut order = Vec::with_capacity(n);
    let mut seq_intervals = Vec::with_capacity(n);
    order.push(cut);
    seq_intervals.push(intervals[cut].unrolled_from(base));
    let mut cursor = base;
    let mut last = cut;

    for _ in 1..n {
        // (deadline, position, node, interval copy)
        let mut best: Option<(f64, f64, usize, Range)> = None;
        for j in (0..n).filter(|&j| !placed[j]) {
            let need = cursor + separation(alphas[last], alphas[j], buffer_rad);
            let primary = intervals[j].unrolled_from(base);
            let early = Range::new(primary.from - TAU, primary.to - TAU);
            // The cursor only grows: a bead that cannot follow now never can.
            let copy = [early, primary]
                .into_iter()
                .find(|r| r.to >= base && need.max(r.from) <= r.to + EPS)?;
            let pos = need.max(copy.from);
            let key = (copy.to, pos, j, copy);
            let better = match &best {
                None => true,
                Some((d, p, k, _)) => (copy.to, pos, j) < (*d, *p, *k),
            };
            if better {
                best = Some(key);
            }
        }
        let (_, pos, j, copy) = best?;
        placed[j] = true;
        order.push(j);
        seq_intervals.push(copy);
        cursor = pos;
        last = j;
    }

    let seq_alphas: Vec<f64> = order.iter().map(|&k| alphas[k]).collect();
    let positions = fixed::place(&seq_intervals, &seq_alphas, buffer_rad)?;
    Some(Sequence {
        order,
        intervals: seq_intervals,
        positions,
    })
}

/// First feasible sweep over the candidate cuts (`limit == 0` tries all).
pub fn discover(
    intervals: &[CircularRange],
    alphas: &[f64],
    buffer_rad: f64,
    limit: usize,
) -> Option<Sequence> {
    let n = intervals.len();
    let cuts = if limit == 0 { n } else { limit.min(n) };
    (0..cuts).find_map(|cut| sweep(intervals, alphas, buffer_rad, cut))
}
