//! Feasible intervals: where on its necklace a bead may be centered.
//!
//! Purpose
//! - Centroid policy: an interval of fixed width around the direction from the
//!   kernel to the region centroid.
//! - Wedge policy: the smallest wedge from the kernel that covers the region,
//!   swept edge by edge. Point regions, regions around the kernel, and edges
//!   through the kernel fall back to the centroid policy; wedges narrower than
//!   `wedge_interval_length_min_rad` are replaced by a centroid interval of that width.
//!
//! Every interval is clipped to the necklace's domain; an empty overlap leaves
//! the bead without an interval, which excludes it from the later stages.
//!
//! Code cross-refs: `geom2::{left_turn, PolarSegment, CircularRange}`, `NecklaceShape`

use std::f64::consts::TAU;

use crate::geom2::{
    left_turn, wrap_angle, wrap_angle_from_nonzero, CircularRange, GeomCfg, PolarSegment, Polygon,
};

use super::map::RegionMap;
use super::necklace::Necklace;
use super::params::{IntervalType, Parameters};
use super::shape::NecklaceShape;

/// Outcome of the wedge sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Wedge {
    Interval(CircularRange),
    /// All vertices lie on one ray.
    Point,
    /// The region surrounds or touches the kernel.
    Kernel,
}

/// Smallest wedge from `kernel` covering `extent`.
pub fn wedge(extent: &Polygon, shape: &NecklaceShape, cfg: &GeomCfg) -> Wedge {
    let Some(first) = extent.vertices.first() else {
        return Wedge::Point;
    };
    if extent.is_point() {
        return Wedge::Point;
    }
    let kernel = shape.kernel();
    if extent.vertices.iter().any(|v| (v - kernel).norm() <= cfg.eps_length) {
        return Wedge::Kernel;
    }

    let start = shape.compute_angle_rad(*first);
    let mut from = start;
    let mut to = start;
    for edge in extent.edges() {
        if let Some(polar) = PolarSegment::around(edge.source, edge.target, kernel) {
            if polar.r_min() <= cfg.eps_length {
                return Wedge::Kernel;
            }
        }
        let target = shape.compute_angle_rad(edge.target);
        if left_turn(edge.source, edge.target, kernel) {
            to = to.max(wrap_angle_from_nonzero(target, from));
        } else {
            // Unroll into (to − 2π, to].
            from = from.min(to - wrap_angle(to - target));
        }
        if to - from >= TAU - cfg.eps_angle {
            return Wedge::Kernel;
        }
    }
    if to - from <= cfg.eps_angle {
        return Wedge::Point;
    }
    Wedge::Interval(CircularRange::new(from, to))
}

/// Interval of width `length` centered on the direction of the centroid of `extent`.
/// Full circle when the centroid coincides with the kernel.
pub fn centroid_interval(
    extent: &Polygon,
    shape: &NecklaceShape,
    length: f64,
    cfg: &GeomCfg,
) -> Option<CircularRange> {
    let c = extent.centroid()?;
    if (c - shape.kernel()).norm() <= cfg.eps_length {
        return Some(CircularRange::full());
    }
    let angle = shape.compute_angle_rad(c);
    let half = 0.5 * length;
    Some(CircularRange::new(angle - half, angle + half))
}

/// Stage functor; parameters are copied at construction.
#[derive(Clone, Debug)]
pub struct FeasibleIntervalStage {
    parameters: Parameters,
    cfg: GeomCfg,
}

impl FeasibleIntervalStage {
    pub fn new(parameters: &Parameters) -> Self {
        Self {
            parameters: *parameters,
            cfg: GeomCfg::default(),
        }
    }

    /// Feasible interval of a region with outline `extent` on `shape`.
    pub fn compute(&self, extent: &Polygon, shape: &NecklaceShape) -> Option<CircularRange> {
        if extent.is_empty() {
            return None;
        }
        let p = &self.parameters;
        let centroid_len = p.centroid_interval_length_rad;
        let raw = if extent.is_point() {
            if p.ignore_point_regions {
                return None;
            }
            centroid_interval(extent, shape, centroid_len, &self.cfg)?
        } else {
            match p.interval_type {
                IntervalType::Centroid => centroid_interval(extent, shape, centroid_len, &self.cfg)?,
                IntervalType::Wedge => match wedge(extent, shape, &self.cfg) {
                    Wedge::Interval(r) if r.length() < p.wedge_interval_length_min_rad => {
                        centroid_interval(extent, shape, p.wedge_interval_length_min_rad, &self.cfg)?
                    }
                    Wedge::Interval(r) => r,
                    Wedge::Point if p.ignore_point_regions => return None,
                    Wedge::Point | Wedge::Kernel => {
                        centroid_interval(extent, shape, centroid_len, &self.cfg)?
                    }
                },
            }
        };
        raw.intersection(&shape.domain())
    }

    /// Set `feasible` on every bead; returns how many beads ended up infeasible.
    pub fn apply(&self, regions: &RegionMap, necklaces: &mut [Necklace]) -> usize {
        let mut dropped = 0;
        for necklace in necklaces.iter_mut() {
            let shape = necklace.shape;
            for bead in necklace.beads.iter_mut() {
                bead.feasible = regions
                    .get(&bead.region_id)
                    .and_then(|region| region.extent())
                    .and_then(|extent| self.compute(&extent, &shape));
                if bead.feasible.is_none() {
                    dropped += 1;
                    tracing::warn!(region = %bead.region_id, necklace = necklace.id.0, "bead has no feasible interval");
                }
            }
            tracing::debug!(
                necklace = necklace.id.0,
                beads = necklace.beads.len(),
                "feasible intervals computed"
            );
        }
        dropped
    }
}
