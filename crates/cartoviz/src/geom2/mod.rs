//! 2D geometric substrate for necklace maps and polyline simplification.
//!
//! Purpose
//! - Cartesian primitives (`Polygon`, `Circle`, `Segment`) over the Inexact
//!   number kind (`f64` via nalgebra points).
//! - Polar points, lines, and segments around a pole.
//! - Angular intervals (`CircularRange`) in a canonical form.
//! - The Exact number kind for predicates (`Exact`, `orientation`, `left_turn`,
//!   `triangle_area`).
//!
//! Why two number kinds
//! - Angles and scale searches tolerate rounding; side-of-line tests must not
//!   flip sign and VW areas must tie exactly, so they go through adaptive
//!   predicates and exact rationals. Conversions are explicit (`to_exact`, `to_inexact`).
//!
//! Code cross-refs: `GeomCfg`, `CircularRange`, `PolarSegment`, `Exact`

mod exact;
mod polar;
pub mod rand;
mod range;
mod types;
mod util;

pub use exact::{
    left_turn, orientation, to_exact, to_inexact, triangle_area, Exact, Orientation,
};
pub use polar::{PolarLine, PolarPoint, PolarSegment};
pub use range::{angular_distance, CircularRange, Range};
pub use types::{BoundingBox, Circle, GeomCfg, Polygon, Segment};
pub use util::{
    convex_hull, cross, polygon_centroid, wrap_angle, wrap_angle_from, wrap_angle_from_nonzero,
};

#[cfg(test)]
mod tests;
