use super::Ring;
use crate::model::zone::Zone;

/// a single ring handed to the map renderer, waiting on its zone's color.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderablePolygon {
    pub zone: Zone,
    pub ring: Ring,
}
