//! Scale factor: the largest uniform multiplier of the bead radii such that
//! every necklace still admits an overlap-free placement.
//!
//! Purpose
//! - Decide feasibility of a scale per necklace (`fixed::place` for the
//!   endpoint order, `any::discover` on top of it for any order) and binary
//!   search the largest feasible scale on `[0, s_max]`, where `s_max` makes the
//!   largest bead as wide as the necklace allows (`α = π/2`).
//! - Report `max_buffer_rad`, the largest buffer for which zero-size beads
//!   still fit.
//!
//! Why this design
//! - Every returned scale comes with a concrete sequence and positions, so the
//!   placement stage starts from a verified arrangement.
//! - Feasibility in a fixed sequence is monotone in the scale; the search keeps
//!   the last verified value.
//!
//! Code cross-refs: `fixed::place`, `any::discover`, `PlacementStage`

pub mod any;
pub mod fixed;

use std::f64::consts::PI;

use crate::geom2::{CircularRange, Range};

use super::necklace::Necklace;
use super::params::{OrderType, Parameters};
use super::shape::NecklaceShape;

/// Cyclic sequence of beads with their intervals unrolled along the sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    /// Bead indices into `Necklace::beads`.
    pub beads: Vec<usize>,
    pub intervals: Vec<Range>,
    /// Positions found by the feasibility check.
    pub positions: Vec<f64>,
}

impl Arrangement {
    #[inline]
    pub fn len(&self) -> usize {
        self.beads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.beads.is_empty()
    }
}

/// Scaler result for one necklace.
#[derive(Clone, Debug, PartialEq)]
pub struct NecklaceScale {
    pub scale: f64,
    pub max_buffer_rad: f64,
    /// Verified arrangement at `scale`; `None` when the buffer alone does not fit.
    pub arrangement: Option<Arrangement>,
}

/// Scaler result for a whole map.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleOutcome {
    /// Minimum over necklaces with included beads; zero when there are none.
    pub scale: f64,
    pub max_buffer_rad: f64,
    /// Per necklace, `None` when it has no included beads.
    pub necklaces: Vec<Option<NecklaceScale>>,
}

/// Included beads of one necklace, sorted by clockwise endpoint.
struct Problem<'a> {
    shape: &'a NecklaceShape,
    beads: Vec<usize>,
    intervals: Vec<CircularRange>,
    radii: Vec<f64>,
}

impl<'a> Problem<'a> {
    fn new(necklace: &'a Necklace) -> Option<Self> {
        let beads = necklace.sorted_included();
        if beads.is_empty() {
            return None;
        }
        let intervals = beads
            .iter()
            .filter_map(|&i| necklace.beads[i].feasible)
            .collect::<Vec<_>>();
        let radii = beads
            .iter()
            .map(|&i| necklace.beads[i].radius_base)
            .collect();
        Some(Self {
            shape: &necklace.shape,
            beads,
            intervals,
            radii,
        })
    }

    /// Half-widths at scale `s`; `None` if a bead would swallow the kernel.
    fn alphas(&self, s: f64) -> Option<Vec<f64>> {
        self.intervals
            .iter()
            .zip(&self.radii)
            .map(|(iv, r)| self.shape.compute_covering_radius_rad(iv, s * r))
            .collect()
    }

    /// Largest base radius relative to its kernel distance, at least 1.
    fn rescale(&self) -> f64 {
        self.intervals
            .iter()
            .zip(&self.radii)
            .map(|(iv, r)| r / self.shape.compute_distance_to_kernel(iv))
            .fold(1.0, f64::max)
    }

    /// Scale at which the widest bead reaches `α = π/2`.
    fn max_scale(&self) -> f64 {
        self.intervals
            .iter()
            .zip(&self.radii)
            .map(|(iv, r)| self.shape.compute_distance_to_kernel(iv) / r)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Stage functor; parameters are copied at construction.
#[derive(Clone, Debug)]
pub struct ScaleFactorStage {
    parameters: Parameters,
}

impl ScaleFactorStage {
    pub fn new(parameters: &Parameters) -> Self {
        Self {
            parameters: *parameters,
        }
    }

    /// Feasible arrangement of `problem` with half-widths `alphas`.
    fn decide(&self, problem: &Problem, alphas: &[f64], buffer_rad: f64) -> Option<Arrangement> {
        let base = problem.intervals[0].from();
        let unrolled: Vec<Range> = problem
            .intervals
            .iter()
            .map(|iv| iv.unrolled_from(base))
            .collect();
        if let Some(positions) = fixed::place(&unrolled, alphas, buffer_rad) {
            return Some(Arrangement {
                beads: problem.beads.clone(),
                intervals: unrolled,
                positions,
            });
        }
        if self.parameters.order_type == OrderType::Fixed {
            return None;
        }
        let seq = any::discover(
            &problem.intervals,
            alphas,
            buffer_rad,
            self.parameters.heuristic_cycles,
        )?;
        Some(Arrangement {
            beads: seq.order.iter().map(|&k| problem.beads[k]).collect(),
            intervals: seq.intervals,
            positions: seq.positions,
        })
    }

    fn decide_at(&self, problem: &Problem, scale: f64, buffer_rad: f64) -> Option<Arrangement> {
        let alphas = problem.alphas(scale)?;
        self.decide(problem, &alphas, buffer_rad)
    }

    /// Largest `x ∈ [0, hi]` with `feasible(x)`, assuming feasibility shrinks with `x`.
    /// Returns zero when even `x = 0` fails.
    fn search(&self, hi: f64, mut feasible: impl FnMut(f64) -> bool) -> f64 {
        if feasible(hi) {
            return hi;
        }
        if !feasible(0.0) {
            return 0.0;
        }
        let tolerance = self.parameters.scale_search_tolerance * hi.max(f64::MIN_POSITIVE);
        let (mut lo, mut hi_) = (0.0, hi);
        for step in 0..self.parameters.scale_search_max_iterations {
            if hi_ - lo <= tolerance {
                break;
            }
            let mid = 0.5 * (lo + hi_);
            if feasible(mid) {
                lo = mid;
            } else {
                hi_ = mid;
            }
            tracing::trace!(step, lo, hi = hi_, "scale search");
        }
        lo
    }

    /// Largest buffer at which zero-size beads fit, capped at π.
    fn max_buffer(&self, problem: &Problem) -> f64 {
        let zeros = vec![0.0; problem.intervals.len()];
        self.search(PI, |b| self.decide(problem, &zeros, b).is_some())
    }

    /// Scale, max buffer, and arrangement of one necklace; `None` without included beads.
    pub fn compute_necklace(&self, necklace: &Necklace) -> Option<NecklaceScale> {
        let problem = Problem::new(necklace)?;
        let buffer = self.parameters.buffer_rad;
        let rescale = problem.rescale();
        let s_max = problem.max_scale() * rescale;
        // Search in rescaled units so that the largest bead starts no wider than its necklace.
        let scaled = self.search(s_max, |s| {
            self.decide_at(&problem, s / rescale, buffer).is_some()
        });
        let scale = scaled / rescale;
        let arrangement = self.decide_at(&problem, scale, buffer);
        let max_buffer_rad = self.max_buffer(&problem);
        if arrangement.is_none() {
            tracing::warn!(
                necklace = necklace.id.0,
                buffer_rad = buffer,
                max_buffer_rad,
                "buffer too large; necklace saturated"
            );
        }
        tracing::debug!(
            necklace = necklace.id.0,
            beads = problem.beads.len(),
            scale,
            max_buffer_rad,
            "necklace scale"
        );
        Some(NecklaceScale {
            scale,
            max_buffer_rad,
            arrangement,
        })
    }

    /// Verified arrangement of `necklace` at a given scale.
    pub fn arrange(&self, necklace: &Necklace, scale: f64) -> Option<Arrangement> {
        let problem = Problem::new(necklace)?;
        self.decide_at(&problem, scale, self.parameters.buffer_rad)
    }

    /// Whether `necklace` admits a placement at `scale`.
    pub fn is_feasible(&self, necklace: &Necklace, scale: f64) -> bool {
        self.arrange(necklace, scale).is_some()
    }

    pub fn apply(&self, necklaces: &[Necklace]) -> ScaleOutcome {
        let per: Vec<Option<NecklaceScale>> =
            necklaces.iter().map(|n| self.compute_necklace(n)).collect();
        let present = per.iter().flatten();
        let scale = present
            .clone()
            .map(|n| n.scale)
            .fold(None, |acc: Option<f64>, s| Some(acc.map_or(s, |a| a.min(s))))
            .unwrap_or(0.0)
            .max(0.0);
        let max_buffer_rad = present
            .map(|n| n.max_buffer_rad)
            .fold(PI, f64::min);
        tracing::debug!(scale, max_buffer_rad, "scale factor computed");
        ScaleOutcome {
            scale,
            max_buffer_rad,
            necklaces: per,
        }
    }
}
