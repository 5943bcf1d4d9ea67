mod zonemap_config;
mod zonemap_config_error;

pub use zonemap_config::{ZoneMapConfig, ENV_PREFIX};
pub use zonemap_config_error::ZoneMapConfigError;
