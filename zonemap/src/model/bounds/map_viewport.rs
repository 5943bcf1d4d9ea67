use crate::model::geometry::LatLon;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// a lat/lon bounding box to focus the map on, serialized as
/// `[[min_lat, min_lon], [max_lat, max_lon]]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[LatLon; 2]", into = "[LatLon; 2]")]
pub struct MapViewport {
    pub min: LatLon,
    pub max: LatLon,
}

impl MapViewport {
    /// builds a viewport from any two corners, ordering each axis so that
    /// `min <= max`.
    pub fn from_corners(a: LatLon, b: LatLon) -> MapViewport {
        MapViewport {
            min: LatLon::new(a.lat.min(b.lat), a.lon.min(b.lon)),
            max: LatLon::new(a.lat.max(b.lat), a.lon.max(b.lon)),
        }
    }

    /// smallest viewport containing both viewports.
    pub fn union(&self, other: &MapViewport) -> MapViewport {
        MapViewport {
            min: LatLon::new(self.min.lat.min(other.min.lat), self.min.lon.min(other.min.lon)),
            max: LatLon::new(self.max.lat.max(other.max.lat), self.max.lon.max(other.max.lon)),
        }
    }
}

impl From<Rect<f64>> for MapViewport {
    fn from(value: Rect<f64>) -> Self {
        MapViewport {
            min: LatLon::from(value.min()),
            max: LatLon::from(value.max()),
        }
    }
}

impl From<[LatLon; 2]> for MapViewport {
    fn from(value: [LatLon; 2]) -> Self {
        MapViewport::from_corners(value[0], value[1])
    }
}

impl From<MapViewport> for [LatLon; 2] {
    fn from(value: MapViewport) -> Self {
        [value.min, value.max]
    }
}
