//! Curated surface for callers that want one import path.
//!
//! Re-exports only; the stage types are listed for callers that drive the
//! pipeline by hand instead of through `NecklaceMap::compute`.

// Geometry
pub use crate::geom2::{
    angular_distance, convex_hull, polygon_centroid, to_exact, to_inexact, triangle_area,
    wrap_angle, BoundingBox, Circle, CircularRange, Exact, GeomCfg, PolarLine, PolarPoint,
    PolarSegment, Polygon, Range,
};
// Necklace pipeline
pub use crate::necklace::{
    valid_intervals, validate_placement, Arrangement, Bead, FeasibleIntervalStage, IntervalType,
    Necklace, NecklaceId, NecklaceMap, NecklaceScale, NecklaceShape, OrderType, Parameters,
    PlacementStage, Region, RegionMap, ScaleFactorStage, ScaleOutcome,
};
// Simplification
pub use crate::simplify::{simplify as vw_simplify, VwSimplifier};
