use crate::model::bounds::MapViewport;
use serde::{Deserialize, Serialize};

/// outcome handed back to the map after an event: a viewport to fit, or an
/// explicit instruction to leave the map alone.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchResult {
    Viewport(MapViewport),
    NoUpdate,
}

impl From<Option<MapViewport>> for DispatchResult {
    fn from(value: Option<MapViewport>) -> Self {
        match value {
            Some(viewport) => DispatchResult::Viewport(viewport),
            None => DispatchResult::NoUpdate,
        }
    }
}
