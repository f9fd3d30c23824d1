//! Beads: one disk per (region, value) pair on a necklace.

use crate::geom2::CircularRange;

use super::necklace::NecklaceId;
use super::shape::NecklaceShape;

/// A disk whose area encodes a region's value.
#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    /// Key of the region in the region map.
    pub region_id: String,
    pub value: f64,
    /// Unscaled radius, `√value`.
    pub radius_base: f64,
    /// Angles at which the bead's center may lie; `None` when infeasible.
    pub feasible: Option<CircularRange>,
    /// Assigned center angle, set by the placement stage.
    pub angle: Option<f64>,
    /// Angles the bead could move to with its neighbours fixed, set by the placement stage.
    pub valid: Option<CircularRange>,
    pub necklace: NecklaceId,
}

impl Bead {
    pub fn new(region_id: impl Into<String>, value: f64, necklace: NecklaceId) -> Self {
        Self {
            region_id: region_id.into(),
            value,
            radius_base: value.max(0.0).sqrt(),
            feasible: None,
            angle: None,
            valid: None,
            necklace,
        }
    }

    /// Takes part in scaling and placement.
    #[inline]
    pub fn is_included(&self) -> bool {
        self.feasible.is_some() && self.radius_base > 0.0
    }

    /// Angular half-width at scale factor `scale`; `None` if not included or too large.
    pub fn covering_radius_rad(&self, shape: &NecklaceShape, scale: f64) -> Option<f64> {
        let feasible = self.feasible.as_ref()?;
        shape.compute_covering_radius_rad(feasible, scale * self.radius_base)
    }

    /// Drop the outputs of previous placement runs.
    pub(crate) fn reset_placement(&mut self) {
        self.angle = None;
        self.valid = None;
    }
}
