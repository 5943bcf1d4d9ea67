#[derive(thiserror::Error, Debug)]
pub enum ZoneMapConfigError {
    #[error("unsupported configuration file type: {0}")]
    UnsupportedFileType(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("missing required configuration value '{0}'")]
    MissingValue(String),
    #[error("invalid configuration value '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}
