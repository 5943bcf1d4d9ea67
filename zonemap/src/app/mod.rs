mod zonemap_app;
mod zonemap_app_error;
mod zonemap_operation;

pub use zonemap_app::ZoneMapApp;
pub use zonemap_app_error::ZoneMapAppError;
pub use zonemap_operation::ZoneMapOperation;
