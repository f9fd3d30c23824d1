//! Necklace maps: data-proportional disks (beads) placed on a curve around
//! the map so that each bead stays near its region and no two beads overlap.
//!
//! Purpose
//! - `NecklaceMap` owns necklaces and their beads, shares the read-only
//!   `RegionMap`, and runs the pipeline
//!   `FeasibleIntervalStage → ScaleFactorStage → PlacementStage`.
//! - Each stage is a small functor constructed from a copy of `Parameters`,
//!   usable on its own for experiments and tests.
//!
//! Why this design
//! - Beads refer to regions by id, so regions stay shared and immutable while
//!   the pipeline mutates beads in place.
//! - The necklace curve is a closed enum (`NecklaceShape`) rather than an open
//!   trait hierarchy; the pipeline only needs four capabilities of it.
//!
//! Code cross-refs: `geom2::CircularRange`, `scale::Arrangement`, `placement::validate_placement`

mod bead;
mod interval;
mod map;
#[allow(clippy::module_inception)]
mod necklace;
mod params;
pub mod placement;
pub mod scale;
mod shape;

pub use bead::Bead;
pub use interval::{centroid_interval, wedge, FeasibleIntervalStage, Wedge};
pub use map::{NecklaceMap, Region, RegionMap};
pub use necklace::{Necklace, NecklaceId};
pub use params::{IntervalType, OrderType, Parameters};
pub use placement::{valid_intervals, validate_placement, PlacementStage};
pub use scale::{Arrangement, NecklaceScale, ScaleFactorStage, ScaleOutcome};
pub use shape::NecklaceShape;

#[cfg(test)]
mod tests;
