use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneError {
    #[error("zone mapping source '{filepath}' must contain '{column}' column, found: [{found}]")]
    MissingColumn {
        filepath: String,
        column: String,
        found: String,
    },
    #[error("failure reading zone mapping source '{0}': {1}")]
    MappingReadError(String, csv::Error),
}
