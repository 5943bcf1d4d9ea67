use super::{InitialView, LabelMarker, PolygonLayer, PolygonStyle, RenderPayload, ZoneRow};
use crate::model::assignment::AssignmentStore;
use crate::model::centroid::{CentroidResolver, ZoneCentroids};
use crate::model::color::{ColorAssigner, ColorAssignment, HexColor};
use crate::model::geometry::{
    AggregatedGeometry, GeometryAggregator, GeometryError, RenderablePolygon, ZoneGeometry,
};
use crate::model::zone::ZoneRegistry;
use geojson::FeatureCollection;

/// everything derived from the zone mapping and geometry sources at startup.
/// built once, never mutated, and shared by reference with the dispatcher and
/// the renderer.
#[derive(Clone, Debug)]
pub struct RegistrySnapshot {
    pub registry: ZoneRegistry,
    pub geometry: ZoneGeometry,
    pub centroids: ZoneCentroids,
    pub colors: ColorAssignment,
    pub renderables: Vec<RenderablePolygon>,
}

impl RegistrySnapshot {
    pub fn build(
        registry: ZoneRegistry,
        features: &FeatureCollection,
        aggregator: &GeometryAggregator,
        centroid_resolver: &CentroidResolver,
        color_assigner: &ColorAssigner,
        unknown_zone_color: HexColor,
    ) -> Result<RegistrySnapshot, GeometryError> {
        let AggregatedGeometry {
            geometry,
            renderables,
            ..
        } = aggregator.aggregate(&registry, features)?;
        let centroids = centroid_resolver.resolve_all(&geometry);
        let colors = ColorAssignment::new(&registry, color_assigner, unknown_zone_color);
        Ok(RegistrySnapshot {
            registry,
            geometry,
            centroids,
            colors,
            renderables,
        })
    }

    /// assembles what the map renderer needs: colored polygons, a label marker
    /// per named zone, and the sidebar rows with current assignees.
    pub fn render_payload(
        &self,
        store: &AssignmentStore,
        style: &PolygonStyle,
        initial_view: &InitialView,
    ) -> RenderPayload {
        let polygons = self
            .renderables
            .iter()
            .map(|r| PolygonLayer {
                zone: r.zone.to_string(),
                unknown: r.zone.is_unknown(),
                positions: r.ring.positions(),
                fill_color: self.colors.get(&r.zone).clone(),
                style: style.clone(),
            })
            .collect();
        // the unknown zone is drawn but never labeled
        let markers = self
            .centroids
            .iter()
            .filter_map(|(zone, position)| {
                zone.zone_id().map(|zone_id| LabelMarker {
                    label: zone_id.to_string(),
                    position: *position,
                })
            })
            .collect();
        let zones = self
            .registry
            .zones()
            .iter()
            .map(|zone_id| ZoneRow {
                zone: zone_id.clone(),
                responsible: store.get(zone_id).unwrap_or_default().to_string(),
                color: self.colors.get_zone_id(zone_id).cloned(),
            })
            .collect();
        RenderPayload {
            initial_view: initial_view.clone(),
            polygons,
            markers,
            zones,
        }
    }
}
