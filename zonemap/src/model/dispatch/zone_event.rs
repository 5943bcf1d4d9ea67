use super::DispatchError;
use serde::{Deserialize, Serialize};

/// a user interaction against one zone, decoded at the boundary, e.g.
/// `{"type": "focus", "zone": "North"}` or
/// `{"type": "edit_assignment", "zone": "North", "value": "Ann"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ZoneEvent {
    /// zone button clicked
    Focus { zone: String },
    /// assignee text edited
    EditAssignment { zone: String, value: String },
}

impl ZoneEvent {
    pub fn zone(&self) -> &str {
        match self {
            ZoneEvent::Focus { zone } => zone,
            ZoneEvent::EditAssignment { zone, .. } => zone,
        }
    }

    /// decodes one JSON event. a blank line is the idle state and yields None.
    pub fn decode(line: &str) -> Result<Option<ZoneEvent>, DispatchError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let event = serde_json::from_str(line)?;
        Ok(Some(event))
    }
}
