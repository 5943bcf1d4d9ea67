mod centroid_ops;
mod centroid_resolver;
mod centroid_strategy;

pub use centroid_ops::{ring_centroid, RingCentroid, DEGENERATE_AREA_EPSILON};
pub use centroid_resolver::{CentroidResolver, ZoneCentroids};
pub use centroid_strategy::CentroidStrategy;
