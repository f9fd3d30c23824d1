//! Random regions and polylines in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic samplers for convex regions around a given center and for
//!   wiggly open polylines, used by tests, benches, and the demo.
//!
//! Model
//! - Regions: `n` equally spaced angles on [0, 2π) with bounded angular and
//!   radial jitter, then the convex hull (CCW).
//! - Polylines: a random walk with bounded turning angle.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Polygon`, `util::convex_hull`

use std::f64::consts::TAU;

use super::types::Polygon;
use nalgebra::{Point2, Vector2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex region centered (roughly) at `center`.
pub fn draw_region_radial(cfg: RadialCfg, center: Point2<f64>, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = rng.gen::<f64>() * TAU;
    let pts: Vec<Point2<f64>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-6) * r0;
            center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let hull = super::util::convex_hull(&pts)?;
    if hull.len() < 3 {
        return None;
    }
    Some(Polygon::new(hull))
}

/// Draw `count` regions with centers spread around a circle of radius `ring_radius`
/// about the origin; region `k` uses token index `k`.
pub fn draw_ring_of_regions(
    cfg: RadialCfg,
    count: usize,
    ring_radius: f64,
    seed: u64,
) -> Vec<Polygon> {
    (0..count)
        .filter_map(|k| {
            let th = TAU * (k as f64) / (count.max(1) as f64);
            let c = Point2::new(ring_radius * th.cos(), ring_radius * th.sin());
            draw_region_radial(
                cfg,
                c,
                ReplayToken {
                    seed,
                    index: k as u64,
                },
            )
        })
        .collect()
}

/// Random-walk polyline with `n` points, unit steps and turns bounded by `max_turn_rad`.
pub fn draw_polyline(n: usize, max_turn_rad: f64, tok: ReplayToken) -> Vec<Point2<f64>> {
    let mut rng = tok.to_std_rng();
    let mut pts = Vec::with_capacity(n);
    let mut p = Point2::origin();
    let mut heading = rng.gen::<f64>() * TAU;
    let turn = max_turn_rad.abs();
    for _ in 0..n {
        pts.push(p);
        heading += (rng.gen::<f64>() * 2.0 - 1.0) * turn;
        let step = 0.5 + rng.gen::<f64>();
        p += Vector2::new(heading.cos(), heading.sin()) * step;
    }
    pts
}
