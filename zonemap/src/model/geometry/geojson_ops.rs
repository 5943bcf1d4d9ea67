use super::{GeometryError, Ring};
use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, GeoJson, PolygonType, Position};
use serde_json::Value;
use std::{path::Path, str::FromStr};

/// feature property holding the postcode used to resolve a zone.
pub const POSTCODE_PROPERTY: &str = "postcode";

/// reads a GeoJSON file that must contain a FeatureCollection.
pub fn read_feature_collection(input_file: &Path) -> Result<FeatureCollection, GeometryError> {
    let filepath = input_file.to_string_lossy().to_string();
    let contents = std::fs::read_to_string(input_file)
        .map_err(|e| GeometryError::ReadError(filepath.clone(), e))?;
    parse_feature_collection(&contents, &filepath)
}

/// parses GeoJSON text that must contain a FeatureCollection. `source_name` is
/// only used in error messages.
pub fn parse_feature_collection(
    contents: &str,
    source_name: &str,
) -> Result<FeatureCollection, GeometryError> {
    let dataset = GeoJson::from_str(contents)
        .map_err(|e| GeometryError::GeoJsonError(source_name.to_string(), Box::new(e)))?;
    match dataset {
        GeoJson::FeatureCollection(feature_collection) => Ok(feature_collection),
        GeoJson::Feature(_) => Err(GeometryError::NotAFeatureCollection(
            source_name.to_string(),
            String::from("Feature"),
        )),
        GeoJson::Geometry(_) => Err(GeometryError::NotAFeatureCollection(
            source_name.to_string(),
            String::from("Geometry"),
        )),
    }
}

/// the postcode of a feature, stringified and trimmed. numbers are accepted
/// since GeoJSON producers often write postcodes as integers. missing, null
/// or blank postcodes yield None.
pub fn postcode_property(feature: &Feature) -> Option<String> {
    let postcode = match feature.property(POSTCODE_PROPERTY)? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => return None,
        other => other.to_string().trim().to_string(),
    };
    if postcode.is_empty() {
        None
    } else {
        Some(postcode)
    }
}

/// flattens a feature's Polygon or MultiPolygon into its exterior rings, in
/// order. interior rings (holes) are ignored. source positions are (lon, lat).
pub fn exterior_rings(feature: &Feature, feature_idx: usize) -> Result<Vec<Ring>, GeometryError> {
    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(GeometryError::MissingGeometry(feature_idx))?;
    match &geometry.value {
        geojson::Value::Polygon(polygon) => Ok(vec![polygon_exterior(polygon, feature_idx)?]),
        geojson::Value::MultiPolygon(polygons) => polygons
            .iter()
            .map(|polygon| polygon_exterior(polygon, feature_idx))
            .collect(),
        other => Err(GeometryError::UnsupportedGeometry(
            feature_idx,
            geometry_type_name(other).to_string(),
        )),
    }
}

fn polygon_exterior(polygon: &PolygonType, feature_idx: usize) -> Result<Ring, GeometryError> {
    let exterior = polygon
        .first()
        .ok_or(GeometryError::MissingExteriorRing(feature_idx))?;
    if exterior.is_empty() {
        return Err(GeometryError::EmptyRing(feature_idx));
    }
    let coords = exterior
        .iter()
        .map(|position| to_coord(position, feature_idx))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Ring::from(LineString::new(coords)))
}

fn to_coord(position: &Position, feature_idx: usize) -> Result<Coord<f64>, GeometryError> {
    let invalid = |reason: &str| GeometryError::InvalidPosition {
        feature: feature_idx,
        position: position.to_vec(),
        reason: reason.to_string(),
    };
    match position.as_slice() {
        [lon, lat, ..] => {
            if !lon.is_finite() || !lat.is_finite() {
                Err(invalid("coordinates must be finite"))
            } else if !(-90.0..=90.0).contains(lat) {
                Err(invalid("latitude out of range [-90, 90]"))
            } else if !(-180.0..=180.0).contains(lon) {
                Err(invalid("longitude out of range [-180, 180]"))
            } else {
                Ok(Coord { x: *lon, y: *lat })
            }
        }
        _ => Err(invalid("expected at least [lon, lat]")),
    }
}

fn geometry_type_name(value: &geojson::Value) -> &'static str {
    match value {
        geojson::Value::Point(_) => "Point",
        geojson::Value::MultiPoint(_) => "MultiPoint",
        geojson::Value::LineString(_) => "LineString",
        geojson::Value::MultiLineString(_) => "MultiLineString",
        geojson::Value::Polygon(_) => "Polygon",
        geojson::Value::MultiPolygon(_) => "MultiPolygon",
        geojson::Value::GeometryCollection(_) => "GeometryCollection",
    }
}
