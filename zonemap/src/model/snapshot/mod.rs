mod registry_snapshot;
mod render_payload;

pub use registry_snapshot::RegistrySnapshot;
pub use render_payload::{
    InitialView, LabelMarker, PolygonLayer, PolygonStyle, RenderPayload, ZoneRow,
};
