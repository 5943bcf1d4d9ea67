use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// behavior of an assignment update for a zone with no row in the durable table.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingZonePolicy {
    /// leave the table untouched
    #[default]
    Ignore,
    /// append a new row for the zone
    Insert,
}
