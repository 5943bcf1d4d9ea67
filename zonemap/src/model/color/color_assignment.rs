use super::{ColorAssigner, HexColor};
use crate::model::zone::{Zone, ZoneId, ZoneRegistry};
use std::collections::HashMap;

/// zone colors derived from the registry's ordinals. recomputable at any
/// time and never persisted.
#[derive(Clone, Debug)]
pub struct ColorAssignment {
    colors: HashMap<ZoneId, HexColor>,
    unknown_color: HexColor,
}

impl ColorAssignment {
    pub fn new(
        registry: &ZoneRegistry,
        assigner: &ColorAssigner,
        unknown_color: HexColor,
    ) -> ColorAssignment {
        let colors = registry
            .zones()
            .iter()
            .enumerate()
            .map(|(ordinal, zone_id)| (zone_id.clone(), assigner.color(ordinal)))
            .collect();
        ColorAssignment {
            colors,
            unknown_color,
        }
    }

    /// fill color for a zone. the unknown zone, and any zone outside the
    /// registry, is drawn with the neutral unknown color.
    pub fn get(&self, zone: &Zone) -> &HexColor {
        zone.zone_id()
            .and_then(|zone_id| self.colors.get(zone_id))
            .unwrap_or(&self.unknown_color)
    }

    pub fn get_zone_id(&self, zone_id: &ZoneId) -> Option<&HexColor> {
        self.colors.get(zone_id)
    }
}
