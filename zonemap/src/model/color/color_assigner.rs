use super::HexColor;
use serde::{Deserialize, Serialize};

/// fractional part of the golden ratio, 1/φ.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// deterministic hue stepping over zone ordinals. successive ordinals advance
/// the hue by [`GOLDEN_RATIO_CONJUGATE`] modulo 1, a low-discrepancy sequence,
/// so neighboring zones never share a nearby hue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorAssigner {
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    #[serde(default = "default_value")]
    pub value: f64,
}

fn default_saturation() -> f64 {
    0.6
}

fn default_value() -> f64 {
    0.85
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self {
            saturation: default_saturation(),
            value: default_value(),
        }
    }
}

impl ColorAssigner {
    /// hue in [0, 1) for the zone at this ordinal.
    pub fn hue(&self, ordinal: usize) -> f64 {
        (ordinal as f64 * GOLDEN_RATIO_CONJUGATE).rem_euclid(1.0)
    }

    /// color for the zone at this ordinal. depends only on the ordinal, not on
    /// the total number of zones.
    pub fn color(&self, ordinal: usize) -> HexColor {
        let (r, g, b) = hsv_to_rgb(self.hue(ordinal), self.saturation, self.value);
        HexColor::from_rgb(to_channel(r), to_channel(g), to_channel(b))
    }
}

fn to_channel(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// standard sextant HSV to RGB conversion, all components in [0, 1].
fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s <= 0.0 {
        return (v, v, v);
    }
    let h6 = (h.rem_euclid(1.0)) * 6.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
