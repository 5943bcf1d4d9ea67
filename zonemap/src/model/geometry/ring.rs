use super::LatLon;
use geo::{BoundingRect, LineString, Rect};

/// one exterior polygon boundary. stored in geo's (x=lon, y=lat) convention,
/// exposed to callers as (lat, lon) positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Ring(LineString<f64>);

impl Ring {
    /// builds a ring from (lat, lon) points.
    pub fn from_lat_lon(points: &[(f64, f64)]) -> Ring {
        let coords = points
            .iter()
            .map(|(lat, lon)| geo::Coord { x: *lon, y: *lat })
            .collect::<Vec<_>>();
        Ring(LineString::new(coords))
    }

    pub fn line_string(&self) -> &LineString<f64> {
        &self.0
    }

    /// vertices as (lat, lon) positions, in source order.
    pub fn positions(&self) -> Vec<LatLon> {
        self.0.coords().map(|c| LatLon::from(*c)).collect()
    }

    pub fn len(&self) -> usize {
        self.0 .0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0 .0.is_empty()
    }

    /// axis-aligned box around this ring's vertices, or None for an empty ring.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        self.0.bounding_rect()
    }
}

impl From<LineString<f64>> for Ring {
    fn from(value: LineString<f64>) -> Self {
        Ring(value)
    }
}
