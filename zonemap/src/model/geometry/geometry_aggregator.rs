use super::{
    exterior_rings, postcode_property, GeometryError, RenderablePolygon, UnresolvedFeaturePolicy,
    ZoneGeometry,
};
use crate::model::zone::{Zone, ZoneRegistry};
use geojson::FeatureCollection;
use kdam::tqdm;

/// attributes features to zones by their postcode property and collects the
/// exterior rings of each zone.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeometryAggregator {
    pub unresolved_feature_policy: UnresolvedFeaturePolicy,
}

/// result of aggregating a feature collection.
#[derive(Clone, Debug, Default)]
pub struct AggregatedGeometry {
    pub geometry: ZoneGeometry,
    /// every ring, in feature processing order, tagged with its zone
    pub renderables: Vec<RenderablePolygon>,
    /// features whose postcode did not resolve to a zone
    pub unresolved_features: usize,
    /// unresolved features left out under [`UnresolvedFeaturePolicy::Drop`]
    pub dropped_features: usize,
}

impl GeometryAggregator {
    pub fn new(unresolved_feature_policy: UnresolvedFeaturePolicy) -> GeometryAggregator {
        GeometryAggregator {
            unresolved_feature_policy,
        }
    }

    /// # Arguments
    ///
    /// * `registry` - postcode to zone lookup
    /// * `features` - Polygon/MultiPolygon features with a `postcode` property
    ///
    /// # Result
    ///
    /// zone rings plus the flat list of renderable polygons. fails on the first
    /// feature with a malformed or unsupported geometry.
    pub fn aggregate(
        &self,
        registry: &ZoneRegistry,
        features: &FeatureCollection,
    ) -> Result<AggregatedGeometry, GeometryError> {
        let mut result = AggregatedGeometry::default();
        let feature_iter = tqdm!(
            features.features.iter().enumerate(),
            total = features.features.len(),
            desc = "aggregate zone geometries"
        );
        for (feature_idx, feature) in feature_iter {
            let zone = match postcode_property(feature) {
                Some(postcode) => registry.resolve(&postcode),
                None => Zone::Unknown,
            };
            // geometry is validated whether or not the feature is kept
            let rings = exterior_rings(feature, feature_idx)?;
            if zone.is_unknown() {
                result.unresolved_features += 1;
                if self.unresolved_feature_policy == UnresolvedFeaturePolicy::Drop {
                    result.dropped_features += 1;
                    continue;
                }
            }
            for ring in rings {
                result.renderables.push(RenderablePolygon {
                    zone: zone.clone(),
                    ring: ring.clone(),
                });
                result.geometry.push(zone.clone(), ring);
            }
        }
        log::info!(
            "aggregated {} features into {} rings across {} zones ({} unresolved, {} dropped)",
            features.features.len(),
            result.geometry.ring_count(),
            result.geometry.zone_count(),
            result.unresolved_features,
            result.dropped_features
        );
        Ok(result)
    }
}
