use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// what to do with a feature whose postcode is absent from the zone mapping.
#[derive(Serialize, Deserialize, Debug, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedFeaturePolicy {
    /// attribute the feature to the unknown zone; it is still drawn, unlabeled
    #[default]
    KeepAsUnknown,
    /// leave the feature out of the zone geometry entirely
    Drop,
}
