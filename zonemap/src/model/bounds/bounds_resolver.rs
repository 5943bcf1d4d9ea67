use super::{BoundsStrategy, MapViewport};
use crate::model::centroid::ZoneCentroids;
use crate::model::geometry::{LatLon, ZoneGeometry};
use crate::model::zone::Zone;

/// computes the focus box for a zone with the configured strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoundsResolver {
    pub strategy: BoundsStrategy,
}

impl BoundsResolver {
    pub fn new(strategy: BoundsStrategy) -> BoundsResolver {
        BoundsResolver { strategy }
    }

    /// focus box for the zone, or None when the zone has no rings.
    pub fn compute_bounds(
        &self,
        zone: &Zone,
        geometry: &ZoneGeometry,
        centroids: &ZoneCentroids,
    ) -> Option<MapViewport> {
        match self.strategy {
            BoundsStrategy::Exact => exact_bounds(zone, geometry),
            BoundsStrategy::FixedRadius { radius } => {
                if geometry.rings(zone).is_empty() {
                    return None;
                }
                let center = centroids.get(zone)?;
                let radius = radius.abs();
                Some(MapViewport::from_corners(
                    LatLon::new(center.lat - radius, center.lon - radius),
                    LatLon::new(center.lat + radius, center.lon + radius),
                ))
            }
        }
    }
}

fn exact_bounds(zone: &Zone, geometry: &ZoneGeometry) -> Option<MapViewport> {
    geometry
        .rings(zone)
        .iter()
        .filter_map(|ring| ring.bounding_rect())
        .map(MapViewport::from)
        .reduce(|acc, viewport| acc.union(&viewport))
}
