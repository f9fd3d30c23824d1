//! Necklace maps and polyline simplification.
//!
//! A necklace map places one scaled disk ("bead") per region on a curve
//! ("necklace") drawn around a map, so the beads do not overlap and each bead
//! sits near its region. The pipeline is three stages:
//! feasible intervals → scale factor → placement (`necklace`).
//! `simplify` holds a Visvalingam–Whyatt simplifier for region outlines.
//!
//! Cross-refs live in doc comments (`Code cross-refs:` lines name the types a
//! module leans on).

pub mod api;
pub mod error;
pub mod geom2;
pub mod necklace;
pub mod simplify;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use geom2::GeomCfg;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geom2::rand::{draw_region_radial, draw_ring_of_regions, RadialCfg, ReplayToken};
    pub use crate::geom2::{Circle, CircularRange, GeomCfg, Polygon};
    pub use crate::necklace::{
        IntervalType, NecklaceId, NecklaceMap, NecklaceShape, OrderType, Parameters, Region,
        RegionMap,
    };
    pub use nalgebra::{Point2, Vector2 as Vec2};
}
