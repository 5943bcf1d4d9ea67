use crate::model::geometry::{LatLon, Ring};

/// rings with an absolute shoelace area below this are treated as degenerate.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

/// signed area and centroid of a single ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingCentroid {
    pub signed_area: f64,
    pub centroid: LatLon,
}

impl RingCentroid {
    pub fn abs_area(&self) -> f64 {
        self.signed_area.abs()
    }
}

/// shoelace area and area-weighted centroid of a ring. the ring is closed
/// implicitly, so a repeated closing vertex contributes nothing. vertices are
/// taken relative to the first vertex to keep the cross products small.
///
/// collinear or single-point rings (|area| < [`DEGENERATE_AREA_EPSILON`]) fall
/// back to the arithmetic mean of their vertices. returns None for an empty ring.
pub fn ring_centroid(ring: &Ring) -> Option<RingCentroid> {
    let coords = ring.line_string().0.as_slice();
    if coords.is_empty() {
        return None;
    }
    let n = coords.len();
    let origin = coords[0];
    let mut area2 = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let a = coords[i] - origin;
        let b = coords[(i + 1) % n] - origin;
        let cross = a.x * b.y - b.x * a.y;
        area2 += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    let signed_area = 0.5 * area2;
    if signed_area.abs() < DEGENERATE_AREA_EPSILON {
        let (sum_x, sum_y) = coords
            .iter()
            .fold((0.0, 0.0), |(sx, sy), c| (sx + c.x, sy + c.y));
        let centroid = LatLon::new(sum_y / n as f64, sum_x / n as f64);
        return Some(RingCentroid {
            signed_area,
            centroid,
        });
    }
    let scale = 1.0 / (6.0 * signed_area);
    Some(RingCentroid {
        signed_area,
        centroid: LatLon::new(origin.y + cy * scale, origin.x + cx * scale),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: LatLon, lat: f64, lon: f64) {
        assert!(
            (actual.lat - lat).abs() < 1e-9 && (actual.lon - lon).abs() < 1e-9,
            "expected ({lat}, {lon}), found ({}, {})",
            actual.lat,
            actual.lon
        );
    }

    #[test]
    fn test_unit_square_centroid() {
        let ring = Ring::from_lat_lon(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let result = ring_centroid(&ring).unwrap();
        assert_close(result.centroid, 0.5, 0.5);
        assert!((result.abs_area() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_closed_ring_matches_open_ring() {
        let open = Ring::from_lat_lon(&[(0.0, 0.0), (0.0, 4.0), (2.0, 4.0), (2.0, 0.0)]);
        let closed =
            Ring::from_lat_lon(&[(0.0, 0.0), (0.0, 4.0), (2.0, 4.0), (2.0, 0.0), (0.0, 0.0)]);
        let a = ring_centroid(&open).unwrap();
        let b = ring_centroid(&closed).unwrap();
        assert_close(a.centroid, 1.0, 2.0);
        assert_close(b.centroid, 1.0, 2.0);
        assert_eq!(a.signed_area, b.signed_area);
    }

    #[test]
    fn test_orientation_does_not_move_centroid() {
        let ccw = Ring::from_lat_lon(&[(0.0, 0.0), (0.0, 3.0), (3.0, 0.0)]);
        let cw = Ring::from_lat_lon(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
        let a = ring_centroid(&ccw).unwrap();
        let b = ring_centroid(&cw).unwrap();
        assert_close(a.centroid, 1.0, 1.0);
        assert_close(b.centroid, 1.0, 1.0);
        assert_eq!(a.signed_area, -b.signed_area);
    }

    #[test]
    fn test_small_ring_at_real_coordinates() {
        let ring = Ring::from_lat_lon(&[
            (-34.9, 138.6),
            (-34.9, 138.61),
            (-34.91, 138.61),
            (-34.91, 138.6),
        ]);
        let result = ring_centroid(&ring).unwrap();
        assert_close(result.centroid, -34.905, 138.605);
        assert!((result.abs_area() - 1e-4).abs() < 1e-12);
    }

    #[test]
    fn test_identical_points_fall_back_to_point() {
        let ring = Ring::from_lat_lon(&[(-34.9, 138.6), (-34.9, 138.6), (-34.9, 138.6)]);
        let result = ring_centroid(&ring).unwrap();
        assert_close(result.centroid, -34.9, 138.6);
        assert_eq!(result.abs_area(), 0.0);
    }

    #[test]
    fn test_collinear_points_fall_back_to_mean() {
        let ring = Ring::from_lat_lon(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let result = ring_centroid(&ring).unwrap();
        assert_close(result.centroid, 1.0, 1.0);
    }

    #[test]
    fn test_empty_ring_has_no_centroid() {
        assert!(ring_centroid(&Ring::from_lat_lon(&[])).is_none());
    }
}
