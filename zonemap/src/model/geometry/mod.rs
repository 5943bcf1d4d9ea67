mod geojson_ops;
mod geometry_aggregator;
mod geometry_error;
mod lat_lon;
mod renderable_polygon;
mod ring;
mod unresolved_feature_policy;
mod zone_geometry;

pub use geojson_ops::{
    exterior_rings, parse_feature_collection, postcode_property, read_feature_collection,
    POSTCODE_PROPERTY,
};
pub use geometry_aggregator::{AggregatedGeometry, GeometryAggregator};
pub use geometry_error::GeometryError;
pub use lat_lon::LatLon;
pub use renderable_polygon::RenderablePolygon;
pub use ring::Ring;
pub use unresolved_feature_policy::UnresolvedFeaturePolicy;
pub use zone_geometry::ZoneGeometry;
