mod zone;
mod zone_error;
mod zone_registry;

pub use zone::{Zone, ZoneId, UNKNOWN_ZONE_LABEL};
pub use zone_error::ZoneError;
pub use zone_registry::{ZoneRegistry, POSTCODE_COLUMN, ZONE_COLUMN};
