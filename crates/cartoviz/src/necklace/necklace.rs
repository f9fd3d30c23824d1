//! A necklace: one curve and the beads that live on it.

use std::cmp::Ordering;

use super::bead::Bead;
use super::shape::NecklaceShape;

/// Index of a necklace inside its `NecklaceMap`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NecklaceId(pub usize);

#[derive(Clone, Debug, PartialEq)]
pub struct Necklace {
    pub id: NecklaceId,
    pub shape: NecklaceShape,
    /// Beads in insertion order.
    pub beads: Vec<Bead>,
}

impl Necklace {
    pub fn new(id: NecklaceId, shape: NecklaceShape) -> Self {
        Self {
            id,
            shape,
            beads: Vec::new(),
        }
    }

    /// Append a bead for `region_id`; returns its index.
    pub fn add_bead(&mut self, region_id: impl Into<String>, value: f64) -> usize {
        self.beads.push(Bead::new(region_id, value, self.id));
        self.beads.len() - 1
    }

    /// Indices of included beads sorted by the clockwise endpoint of their
    /// feasible interval, ties by insertion order.
    pub fn sorted_included(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.beads.len())
            .filter(|&i| self.beads[i].is_included())
            .collect();
        idx.sort_by(|&a, &b| {
            let fa = self.beads[a].feasible.map_or(0.0, |r| r.from());
            let fb = self.beads[b].feasible.map_or(0.0, |r| r.from());
            fa.partial_cmp(&fb).unwrap_or(Ordering::Equal).then(a.cmp(&b))
        });
        idx
    }

    pub fn included_count(&self) -> usize {
        self.beads.iter().filter(|b| b.is_included()).count()
    }
}
