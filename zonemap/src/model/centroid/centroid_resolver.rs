use super::{ring_centroid, CentroidStrategy, RingCentroid};
use crate::model::geometry::{LatLon, Ring, ZoneGeometry};
use crate::model::zone::{Zone, ZoneId};
use std::collections::BTreeMap;

/// computes the label anchor for zones.
#[derive(Clone, Copy, Debug, Default)]
pub struct CentroidResolver {
    pub strategy: CentroidStrategy,
}

/// label anchor per zone with at least one ring.
#[derive(Clone, Debug, Default)]
pub struct ZoneCentroids(BTreeMap<Zone, LatLon>);

impl ZoneCentroids {
    pub fn get(&self, zone: &Zone) -> Option<&LatLon> {
        self.0.get(zone)
    }

    pub fn get_zone_id(&self, zone_id: &ZoneId) -> Option<&LatLon> {
        self.0.get(&Zone::Named(zone_id.clone()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Zone, &LatLon)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CentroidResolver {
    pub fn new(strategy: CentroidStrategy) -> CentroidResolver {
        CentroidResolver { strategy }
    }

    /// label anchor for one zone's rings, or None when the zone has no vertices.
    pub fn resolve(&self, rings: &[Ring]) -> Option<LatLon> {
        match self.strategy {
            CentroidStrategy::LargestRing => largest_ring_centroid(rings),
            CentroidStrategy::VertexMean => vertex_mean(rings),
        }
    }

    /// label anchors for every zone in the geometry.
    pub fn resolve_all(&self, geometry: &ZoneGeometry) -> ZoneCentroids {
        let centroids = geometry
            .iter()
            .filter_map(|(zone, rings)| self.resolve(rings).map(|c| (zone.clone(), c)))
            .collect();
        ZoneCentroids(centroids)
    }
}

/// centroid of the ring with the greatest absolute area. on an exact tie the
/// earliest ring is kept.
fn largest_ring_centroid(rings: &[Ring]) -> Option<LatLon> {
    let mut best: Option<RingCentroid> = None;
    for candidate in rings.iter().filter_map(ring_centroid) {
        match best {
            Some(current) if candidate.abs_area() <= current.abs_area() => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|b| b.centroid)
}

fn vertex_mean(rings: &[Ring]) -> Option<LatLon> {
    let positions = rings.iter().flat_map(|r| r.positions()).collect::<Vec<_>>();
    if positions.is_empty() {
        return None;
    }
    let n = positions.len() as f64;
    let (lat_sum, lon_sum) = positions
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat, lon + p.lon));
    Some(LatLon::new(lat_sum / n, lon_sum / n))
}
