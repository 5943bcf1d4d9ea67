use serde::{Deserialize, Serialize};

/// half-width, in degrees, of the fixed-radius focus box.
pub const DEFAULT_FOCUS_RADIUS: f64 = 0.01;

/// how the focus box for a zone is computed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum BoundsStrategy {
    /// axis-aligned box around every vertex of every ring of the zone
    #[default]
    Exact,
    /// square of half-width `radius` degrees centered on the zone's label anchor
    FixedRadius {
        #[serde(default = "default_radius")]
        radius: f64,
    },
}

impl BoundsStrategy {
    /// checks that a fixed radius is a finite, non-negative number of degrees.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            BoundsStrategy::Exact => Ok(()),
            BoundsStrategy::FixedRadius { radius } if radius.is_finite() && *radius >= 0.0 => {
                Ok(())
            }
            BoundsStrategy::FixedRadius { radius } => Err(format!(
                "radius must be finite and non-negative, found {radius}"
            )),
        }
    }
}

fn default_radius() -> f64 {
    DEFAULT_FOCUS_RADIUS
}
