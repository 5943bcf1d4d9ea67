use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how a zone's label anchor is derived from its rings.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CentroidStrategy {
    /// area-weighted centroid of the ring with the greatest absolute area
    #[default]
    LargestRing,
    /// unweighted mean of every vertex of every ring
    VertexMean,
}
