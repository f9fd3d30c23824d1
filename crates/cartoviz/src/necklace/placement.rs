//! Placement: a concrete angle per bead at a given scale.
//!
//! Starting from the verified positions of an `Arrangement`, beads are pulled
//! toward a preferred angle one at a time (forward sweep, then reverse sweep),
//! each move clamped to the range its neighbours leave free. Every intermediate
//! state is overlap-free. With any order, adjacent beads may also swap when
//! both stay in their feasible intervals and end up closer to their interval
//! midpoints.

use std::f64::consts::TAU;

use crate::geom2::{angular_distance, wrap_angle, CircularRange, GeomCfg, Range};

use super::map::RegionMap;
use super::necklace::Necklace;
use super::params::{OrderType, Parameters};
use super::scale::fixed::separation;
use super::scale::Arrangement;

/// Beads move less than this in a converged sweep.
const MOVE_TOLERANCE_RAD: f64 = 1e-9;

/// Stage functor; parameters are copied at construction.
#[derive(Clone, Debug)]
pub struct PlacementStage {
    parameters: Parameters,
    cfg: GeomCfg,
}

/// Working state of one necklace.
struct Chain {
    beads: Vec<usize>,
    intervals: Vec<Range>,
    alphas: Vec<f64>,
    preferred: Vec<f64>,
    positions: Vec<f64>,
    buffer: f64,
}

/// Position of `angle` in the unrolled interval `iv`, snapping to the nearer end when outside.
fn unroll_into(iv: &Range, angle: f64) -> f64 {
    let offset = wrap_angle(angle - iv.from);
    if offset <= iv.length() {
        return iv.from + offset;
    }
    if TAU - offset < offset - iv.length() {
        iv.from
    } else {
        iv.to
    }
}

impl Chain {
    fn len(&self) -> usize {
        self.beads.len()
    }

    /// Range bead `i` may occupy with its neighbours fixed.
    fn free_range(&self, i: usize) -> Range {
        let n = self.len();
        let iv = self.intervals[i];
        if n == 1 {
            return iv;
        }
        let (prev, prev_pos) = if i == 0 {
            (n - 1, self.positions[n - 1] - TAU)
        } else {
            (i - 1, self.positions[i - 1])
        };
        let (next, next_pos) = if i == n - 1 {
            (0, self.positions[0] + TAU)
        } else {
            (i + 1, self.positions[i + 1])
        };
        let lower = iv
            .from
            .max(prev_pos + separation(self.alphas[prev], self.alphas[i], self.buffer));
        let upper = iv
            .to
            .min(next_pos - separation(self.alphas[i], self.alphas[next], self.buffer));
        Range::new(lower, upper)
    }

    /// Move bead `i` toward its preferred angle; returns the distance moved.
    fn relax(&mut self, i: usize) -> f64 {
        let free = self.free_range(i);
        if !free.is_valid() {
            return 0.0;
        }
        let target = free.clamp(self.preferred[i]);
        let moved = (target - self.positions[i]).abs();
        self.positions[i] = target;
        moved
    }

    /// Swap adjacent beads where it helps, including the pair across the wrap;
    /// returns the largest shift.
    fn swap_pass(&mut self, necklace: &Necklace) -> f64 {
        let n = self.len();
        let mut moved: f64 = 0.0;
        if n < 2 {
            return moved;
        }
        for a in 0..n {
            let b = (a + 1) % n;
            // The last bead's successor lies one turn ahead.
            let turn = if b == 0 { TAU } else { 0.0 };
            let (fa, fb) = match (
                necklace.beads[self.beads[a]].feasible,
                necklace.beads[self.beads[b]].feasible,
            ) {
                (Some(fa), Some(fb)) => (fa, fb),
                _ => continue,
            };
            let (pos_a, pos_b) = (self.positions[a], self.positions[b] + turn);
            // The pair keeps its outer extent; inner gap is unchanged.
            let new_b = pos_a - self.alphas[a] + self.alphas[b];
            let new_a = pos_b + self.alphas[b] - self.alphas[a];
            if !fa.contains(new_a) || !fb.contains(new_b) {
                continue;
            }
            let cost = |pos: f64, r: &CircularRange| angular_distance(pos, r.midpoint()).powi(2);
            let before = cost(pos_a, &fa) + cost(pos_b, &fb);
            let after = cost(new_a, &fa) + cost(new_b, &fb);
            if after >= before - 1e-12 {
                continue;
            }
            moved = moved
                .max((new_a - pos_a).abs())
                .max((new_b - pos_b).abs());
            self.beads.swap(a, b);
            self.alphas.swap(a, b);
            self.preferred.swap(a, b);
            self.positions[a] = new_b;
            self.positions[b] = new_a - turn;
            self.intervals[a] = rebase(&fb, self.positions[a]);
            self.intervals[b] = rebase(&fa, self.positions[b]);
            self.preferred[a] = unroll_into(&self.intervals[a], self.preferred[a]);
            self.preferred[b] = unroll_into(&self.intervals[b], self.preferred[b]);
        }
        moved
    }
}

/// Unrolled copy of `r` that contains the unrolled angle `pos`.
fn rebase(r: &CircularRange, pos: f64) -> Range {
    let from = pos - wrap_angle(pos - r.from());
    Range::new(from, from + r.length())
}

impl PlacementStage {
    pub fn new(parameters: &Parameters) -> Self {
        Self {
            parameters: *parameters,
            cfg: GeomCfg::default(),
        }
    }

    /// Angle from the kernel to the region centroid, if the region has one.
    fn region_angle(&self, regions: &RegionMap, necklace: &Necklace, bead: usize) -> Option<f64> {
        let region = regions.get(&necklace.beads[bead].region_id)?;
        let c = region.extent()?.centroid()?;
        if (c - necklace.shape.kernel()).norm() <= self.cfg.eps_length {
            return None;
        }
        Some(necklace.shape.compute_angle_rad(c))
    }

    /// Place the beads of one necklace following `arrangement` at `scale`.
    /// Returns `false` (leaving beads unplaced) when the arrangement does not fit.
    pub fn place_necklace(
        &self,
        scale: f64,
        regions: &RegionMap,
        necklace: &mut Necklace,
        arrangement: &Arrangement,
    ) -> bool {
        for bead in necklace.beads.iter_mut() {
            bead.reset_placement();
        }
        if arrangement.is_empty() {
            return true;
        }
        let shape = necklace.shape;
        let alphas: Option<Vec<f64>> = arrangement
            .beads
            .iter()
            .map(|&b| necklace.beads[b].covering_radius_rad(&shape, scale))
            .collect();
        let Some(alphas) = alphas else {
            tracing::warn!(necklace = necklace.id.0, scale, "beads too large for necklace");
            return false;
        };
        let buffer = self.parameters.buffer_rad;
        let Some(positions) =
            super::scale::fixed::place(&arrangement.intervals, &alphas, buffer)
        else {
            tracing::warn!(necklace = necklace.id.0, scale, "arrangement infeasible at scale");
            return false;
        };

        let ratio = self.parameters.aversion_ratio;
        let preferred = arrangement
            .beads
            .iter()
            .zip(&arrangement.intervals)
            .map(|(&b, iv)| {
                let mid = iv.from + 0.5 * iv.length();
                let toward = self
                    .region_angle(regions, necklace, b)
                    .map_or(mid, |angle| unroll_into(iv, angle));
                (1.0 - ratio) * mid + ratio * toward
            })
            .collect();

        let mut chain = Chain {
            beads: arrangement.beads.clone(),
            intervals: arrangement.intervals.clone(),
            alphas,
            preferred,
            positions,
            buffer,
        };
        let n = chain.len();
        let mut cycles = 0;
        for _ in 0..self.parameters.placement_cycles {
            cycles += 1;
            let mut moved: f64 = 0.0;
            for i in 0..n {
                moved = moved.max(chain.relax(i));
            }
            for i in (0..n).rev() {
                moved = moved.max(chain.relax(i));
            }
            if self.parameters.order_type == OrderType::Any {
                moved = moved.max(chain.swap_pass(necklace));
            }
            if moved <= MOVE_TOLERANCE_RAD {
                break;
            }
        }
        tracing::debug!(necklace = necklace.id.0, beads = n, cycles, "placement");

        for i in 0..n {
            let free = chain.free_range(i);
            let bead = &mut necklace.beads[chain.beads[i]];
            bead.angle = Some(wrap_angle(chain.positions[i]));
            bead.valid = Some(if free.is_valid() {
                CircularRange::new(free.from, free.to)
            } else {
                CircularRange::new(chain.positions[i], chain.positions[i])
            });
        }
        true
    }

    /// Place every necklace whose arrangement is known; returns how many were placed.
    pub fn apply(
        &self,
        scale: f64,
        regions: &RegionMap,
        necklaces: &mut [Necklace],
        arrangements: &[Option<Arrangement>],
    ) -> usize {
        let mut placed = 0;
        for (necklace, arrangement) in necklaces.iter_mut().zip(arrangements) {
            match arrangement {
                Some(arr) => {
                    if self.place_necklace(scale, regions, necklace, arr) {
                        placed += 1;
                    }
                }
                None => {
                    for bead in necklace.beads.iter_mut() {
                        bead.reset_placement();
                    }
                }
            }
        }
        placed
    }
}

/// Check that placed beads lie in their feasible intervals and keep the
/// required gap pairwise, up to `tolerance`.
pub fn validate_placement(necklace: &Necklace, scale: f64, buffer_rad: f64, tolerance: f64) -> bool {
    let mut placed = Vec::new();
    for bead in necklace.beads.iter() {
        let (Some(angle), Some(feasible)) = (bead.angle, bead.feasible) else {
            continue;
        };
        if angular_distance(angle, feasible.closest(angle)) > tolerance {
            return false;
        }
        let Some(alpha) = bead.covering_radius_rad(&necklace.shape, scale) else {
            return false;
        };
        placed.push((angle, alpha));
    }
    for (k, &(phi_a, alpha_a)) in placed.iter().enumerate() {
        for &(phi_b, alpha_b) in placed.iter().skip(k + 1) {
            if angular_distance(phi_a, phi_b) < separation(alpha_a, alpha_b, buffer_rad) - tolerance {
                return false;
            }
        }
    }
    true
}

/// Free range of every bead in an arrangement with positions `positions`, its
/// neighbours held fixed. Empty ranges are returned as given (`from > to`).
pub fn valid_intervals(
    intervals: &[Range],
    alphas: &[f64],
    buffer_rad: f64,
    positions: &[f64],
) -> Vec<Range> {
    let chain = Chain {
        beads: (0..intervals.len()).collect(),
        intervals: intervals.to_vec(),
        alphas: alphas.to_vec(),
        preferred: positions.to_vec(),
        positions: positions.to_vec(),
        buffer: buffer_rad,
    };
    (0..chain.len()).map(|i| chain.free_range(i)).collect()
}
