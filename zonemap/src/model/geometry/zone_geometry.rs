use super::Ring;
use crate::model::zone::{Zone, ZoneId};
use std::collections::BTreeMap;

/// rings per zone. within a zone, rings keep the order in which features
/// were processed; that order breaks ties between equally sized rings.
#[derive(Clone, Debug, Default)]
pub struct ZoneGeometry {
    rings: BTreeMap<Zone, Vec<Ring>>,
}

impl ZoneGeometry {
    pub fn push(&mut self, zone: Zone, ring: Ring) {
        self.rings.entry(zone).or_default().push(ring);
    }

    /// rings for a zone; empty if the zone has no geometry.
    pub fn rings(&self, zone: &Zone) -> &[Ring] {
        self.rings.get(zone).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn zone_rings(&self, zone_id: &ZoneId) -> &[Ring] {
        self.rings(&Zone::Named(zone_id.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Zone, &Vec<Ring>)> {
        self.rings.iter()
    }

    /// number of zones with at least one ring.
    pub fn zone_count(&self) -> usize {
        self.rings.len()
    }

    pub fn ring_count(&self) -> usize {
        self.rings.values().map(Vec::len).sum()
    }
}
