use crate::config::ZoneMapConfigError;
use crate::model::assignment::AssignmentError;
use crate::model::dispatch::DispatchError;
use crate::model::geometry::GeometryError;
use crate::model::zone::ZoneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZoneMapAppError {
    #[error(transparent)]
    ConfigError(#[from] ZoneMapConfigError),
    #[error(transparent)]
    ZoneError(#[from] ZoneError),
    #[error(transparent)]
    GeometryError(#[from] GeometryError),
    #[error(transparent)]
    AssignmentError(#[from] AssignmentError),
    #[error(transparent)]
    DispatchError(#[from] DispatchError),
    #[error("failure encoding output as JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("failure writing output to {0}: {1}")]
    OutputError(String, std::io::Error),
    #[error("failure reading events from {0}: {1}")]
    InputError(String, std::io::Error),
}
