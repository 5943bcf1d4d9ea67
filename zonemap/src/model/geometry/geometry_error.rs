use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("unable to read geometry source {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failed to read geometry source {0} as GeoJSON: {1}")]
    GeoJsonError(String, Box<geojson::Error>),
    #[error("geometry source {0} must be a FeatureCollection but found a single {1}")]
    NotAFeatureCollection(String, String),
    #[error("feature {0} has no geometry")]
    MissingGeometry(usize),
    #[error("feature {0} has unsupported geometry type '{1}', expected Polygon or MultiPolygon")]
    UnsupportedGeometry(usize, String),
    #[error("feature {0} has a polygon without an exterior ring")]
    MissingExteriorRing(usize),
    #[error("feature {0} has an exterior ring with no positions")]
    EmptyRing(usize),
    #[error("feature {feature} has an invalid position {position:?}: {reason}")]
    InvalidPosition {
        feature: usize,
        position: Vec<f64>,
        reason: String,
    },
}
