use crate::model::assignment::AssignmentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("event names zone '{0}' which is not in the zone mapping")]
    UnknownZone(String),
    #[error("unable to decode zone event: {0}")]
    InvalidEvent(#[from] serde_json::Error),
    #[error(transparent)]
    AssignmentError(#[from] AssignmentError),
}
