pub mod assignment;
pub mod bounds;
pub mod centroid;
pub mod color;
pub mod dispatch;
pub mod geometry;
pub mod snapshot;
pub mod zone;
