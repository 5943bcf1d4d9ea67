mod bounds_resolver;
mod bounds_strategy;
mod map_viewport;

pub use bounds_resolver::BoundsResolver;
pub use bounds_strategy::{BoundsStrategy, DEFAULT_FOCUS_RADIUS};
pub use map_viewport::MapViewport;
