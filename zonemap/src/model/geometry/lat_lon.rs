use serde::{Deserialize, Serialize};

/// a (latitude, longitude) pair, serialized as `[lat, lon]` the way leaflet-style
/// map renderers expect positions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> LatLon {
        LatLon { lat, lon }
    }
}

impl From<[f64; 2]> for LatLon {
    fn from(value: [f64; 2]) -> Self {
        LatLon::new(value[0], value[1])
    }
}

impl From<LatLon> for [f64; 2] {
    fn from(value: LatLon) -> Self {
        [value.lat, value.lon]
    }
}

impl From<geo::Coord<f64>> for LatLon {
    /// geo coordinates are stored x=lon, y=lat.
    fn from(value: geo::Coord<f64>) -> Self {
        LatLon::new(value.y, value.x)
    }
}

impl From<LatLon> for geo::Coord<f64> {
    fn from(value: LatLon) -> Self {
        geo::Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}
