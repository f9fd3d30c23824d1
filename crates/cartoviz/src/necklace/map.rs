//! Regions and the necklace map that ties regions, necklaces and beads together.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::geom2::{convex_hull, Polygon};

use super::bead::Bead;
use super::interval::FeasibleIntervalStage;
use super::necklace::{Necklace, NecklaceId};
use super::params::Parameters;
use super::placement::PlacementStage;
use super::scale::ScaleFactorStage;
use super::shape::NecklaceShape;

/// A map region: identifier plus one or more outer boundaries.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: String,
    pub polygons: Vec<Polygon>,
}

impl Region {
    pub fn new(id: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            id: id.into(),
            polygons,
        }
    }

    /// Single polygon standing in for the region: the polygon itself, or the
    /// convex hull of all vertices when there are several.
    pub fn extent(&self) -> Option<Polygon> {
        let parts: Vec<&Polygon> = self.polygons.iter().filter(|p| !p.is_empty()).collect();
        match parts.as_slice() {
            [] => None,
            [single] => Some((*single).clone()),
            _ => {
                let all: Vec<_> = parts.iter().flat_map(|p| p.vertices.iter().copied()).collect();
                convex_hull(&all).map(Polygon::new)
            }
        }
    }

    pub fn is_point(&self) -> bool {
        self.extent().is_some_and(|e| e.is_point())
    }
}

/// Regions keyed by identifier.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionMap {
    regions: BTreeMap<String, Region>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the previous region with the same id.
    pub fn insert(&mut self, region: Region) -> Option<Region> {
        self.regions.insert(region.id.clone(), region)
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.regions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.values()
    }
}

impl FromIterator<Region> for RegionMap {
    fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
        let mut map = RegionMap::new();
        for region in iter {
            map.insert(region);
        }
        map
    }
}

/// Necklace map: regions (shared, read-only), necklaces with their beads, and parameters.
#[derive(Clone, Debug)]
pub struct NecklaceMap {
    regions: Arc<RegionMap>,
    necklaces: Vec<Necklace>,
    parameters: Parameters,
    intervals_ready: bool,
    scale_factor: Option<f64>,
    max_buffer_rad: Option<f64>,
}

impl NecklaceMap {
    pub fn new(regions: impl Into<Arc<RegionMap>>) -> Self {
        Self {
            regions: regions.into(),
            necklaces: Vec::new(),
            parameters: Parameters::default(),
            intervals_ready: false,
            scale_factor: None,
            max_buffer_rad: None,
        }
    }

    fn invalidate(&mut self) {
        self.intervals_ready = false;
        self.scale_factor = None;
        self.max_buffer_rad = None;
    }

    pub fn add_necklace(&mut self, shape: NecklaceShape) -> Result<NecklaceId> {
        if !shape.is_valid() {
            return Err(Error::InvalidArgument(format!("invalid necklace shape: {shape:?}")));
        }
        let id = NecklaceId(self.necklaces.len());
        self.necklaces.push(Necklace::new(id, shape));
        self.invalidate();
        Ok(id)
    }

    /// Add a bead for `region_id` with data value `value` to `necklace`.
    /// Adding the same region twice yields two beads.
    pub fn add_bead(&mut self, region_id: &str, value: f64, necklace: NecklaceId) -> Result<()> {
        if !self.regions.contains(region_id) {
            return Err(Error::NoSuchRegion(region_id.to_string()));
        }
        if !(value.is_finite() && value >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "bead value for {region_id} must be finite and non-negative, got {value}"
            )));
        }
        let Some(target) = self.necklaces.get_mut(necklace.0) else {
            return Err(Error::InvalidArgument(format!("unknown necklace {}", necklace.0)));
        };
        target.add_bead(region_id, value);
        self.invalidate();
        Ok(())
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut Parameters {
        self.invalidate();
        &mut self.parameters
    }

    /// Run all three stages; returns the scale factor.
    pub fn compute(&mut self) -> Result<f64> {
        self.parameters.validate()?;
        let params = self.parameters;

        let dropped = FeasibleIntervalStage::new(&params).apply(&self.regions, &mut self.necklaces);
        self.intervals_ready = true;

        let outcome = ScaleFactorStage::new(&params).apply(&self.necklaces);
        let arrangements: Vec<_> = outcome
            .necklaces
            .iter()
            .map(|n| n.as_ref().and_then(|n| n.arrangement.clone()))
            .collect();
        let placed = PlacementStage::new(&params).apply(
            outcome.scale,
            &self.regions,
            &mut self.necklaces,
            &arrangements,
        );

        self.scale_factor = Some(outcome.scale);
        self.max_buffer_rad = Some(outcome.max_buffer_rad);
        tracing::debug!(
            scale = outcome.scale,
            max_buffer_rad = outcome.max_buffer_rad,
            dropped,
            placed,
            "necklace map computed"
        );
        Ok(outcome.scale)
    }

    /// Re-run only the placement stage at a caller-chosen scale.
    /// Necklaces that do not fit at `scale` are left unplaced.
    pub fn compute_placement(&mut self, scale: f64) -> Result<()> {
        self.parameters.validate()?;
        if !(scale.is_finite() && scale >= 0.0) {
            return Err(Error::InvalidArgument(format!(
                "scale must be finite and non-negative, got {scale}"
            )));
        }
        let params = self.parameters;
        if !self.intervals_ready {
            FeasibleIntervalStage::new(&params).apply(&self.regions, &mut self.necklaces);
            self.intervals_ready = true;
        }
        let scaler = ScaleFactorStage::new(&params);
        let arrangements: Vec<_> = self
            .necklaces
            .iter()
            .map(|n| scaler.arrange(n, scale))
            .collect();
        PlacementStage::new(&params).apply(scale, &self.regions, &mut self.necklaces, &arrangements);
        self.scale_factor = Some(scale);
        Ok(())
    }

    /// Scale factor of the last `compute` / `compute_placement`.
    pub fn scale_factor(&self) -> Option<f64> {
        self.scale_factor
    }

    /// Largest buffer for which a positive scale is possible, from the last `compute`.
    pub fn max_buffer_rad(&self) -> Option<f64> {
        self.max_buffer_rad
    }

    pub fn regions(&self) -> &RegionMap {
        &self.regions
    }

    pub fn necklaces(&self) -> &[Necklace] {
        &self.necklaces
    }

    pub fn necklace(&self, id: NecklaceId) -> Option<&Necklace> {
        self.necklaces.get(id.0)
    }

    /// All beads, necklace by necklace, in insertion order.
    pub fn beads(&self) -> impl Iterator<Item = &Bead> {
        self.necklaces.iter().flat_map(|n| n.beads.iter())
    }
}
