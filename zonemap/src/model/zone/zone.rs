use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// display label used for features whose postcode does not resolve to a zone.
pub const UNKNOWN_ZONE_LABEL: &str = "Unknown Zone";

/// name of an administrative delivery zone, as it appears in the mapping source.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoneId(pub String);

impl ZoneId {
    pub fn new(name: &str) -> ZoneId {
        ZoneId(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ZoneId {
    fn from(value: &str) -> Self {
        ZoneId::new(value)
    }
}

/// the zone a feature is attributed to. features with postcodes missing
/// from the mapping source land in [`Zone::Unknown`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Named(ZoneId),
    Unknown,
}

impl Zone {
    pub fn zone_id(&self) -> Option<&ZoneId> {
        match self {
            Zone::Named(zone_id) => Some(zone_id),
            Zone::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Zone::Unknown)
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Named(zone_id) => write!(f, "{zone_id}"),
            Zone::Unknown => write!(f, "{UNKNOWN_ZONE_LABEL}"),
        }
    }
}

impl From<ZoneId> for Zone {
    fn from(value: ZoneId) -> Self {
        Zone::Named(value)
    }
}
