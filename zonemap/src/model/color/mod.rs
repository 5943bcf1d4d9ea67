mod color_assigner;
mod color_assignment;
mod hex_color;

pub use color_assigner::{ColorAssigner, GOLDEN_RATIO_CONJUGATE};
pub use color_assignment::ColorAssignment;
pub use hex_color::HexColor;
