use crate::model::color::HexColor;
use crate::model::geometry::LatLon;
use crate::model::zone::ZoneId;
use serde::{Deserialize, Serialize};

/// stroke and fill settings shared by every zone polygon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PolygonStyle {
    pub stroke_color: String,
    pub weight: f64,
    pub fill_opacity: f64,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            stroke_color: String::from("black"),
            weight: 1.0,
            fill_opacity: 0.5,
        }
    }
}

/// where the map opens before any zone is focused.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialView {
    pub center: LatLon,
    pub zoom: u8,
}

impl Default for InitialView {
    fn default() -> Self {
        Self {
            center: LatLon::new(-34.9285, 138.6007),
            zoom: 10,
        }
    }
}

/// one ring to draw. `zone` is the display name; `unknown` marks rings from
/// unresolved features, even when a mapped zone shares their display name.
#[derive(Clone, Debug, Serialize)]
pub struct PolygonLayer {
    pub zone: String,
    pub unknown: bool,
    pub positions: Vec<LatLon>,
    pub fill_color: HexColor,
    pub style: PolygonStyle,
}

#[derive(Clone, Debug, Serialize)]
pub struct LabelMarker {
    pub label: String,
    pub position: LatLon,
}

/// one sidebar row: zone button plus its editable assignee.
#[derive(Clone, Debug, Serialize)]
pub struct ZoneRow {
    pub zone: ZoneId,
    pub responsible: String,
    pub color: Option<HexColor>,
}

#[derive(Clone, Debug, Serialize)]
pub struct RenderPayload {
    pub initial_view: InitialView,
    pub polygons: Vec<PolygonLayer>,
    pub markers: Vec<LabelMarker>,
    pub zones: Vec<ZoneRow>,
}
