//! Sequential orange-red color scale.

use serde::{Serialize, Serializer};
use std::fmt;
use thm_data::TemperatureDomain;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    pub const fn from_hex(hex: u32) -> Self {
        Rgb {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CSS functional notation, e.g. `rgb(255, 247, 236)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

/// ColorBrewer OrRd, nine classes, light to dark.
pub const OR_RD: [Rgb; 9] = [
    Rgb::from_hex(0xfff7ec),
    Rgb::from_hex(0xfee8c8),
    Rgb::from_hex(0xfdd49e),
    Rgb::from_hex(0xfdbb84),
    Rgb::from_hex(0xfc8d59),
    Rgb::from_hex(0xef6548),
    Rgb::from_hex(0xd7301f),
    Rgb::from_hex(0xb30000),
    Rgb::from_hex(0x7f0000),
];

/// Uniform cubic B-spline weight of four control values at `t1` in [0, 1].
fn basis(t1: f64, v0: f64, v1: f64, v2: f64, v3: f64) -> f64 {
    let t2 = t1 * t1;
    let t3 = t2 * t1;
    ((1.0 - 3.0 * t1 + 3.0 * t2 - t3) * v0
        + (4.0 - 6.0 * t2 + 3.0 * t3) * v1
        + (1.0 + 3.0 * t1 + 3.0 * t2 - 3.0 * t3) * v2
        + t3 * v3)
        / 6.0
}

/// Interpolate one channel through B-spline control values.
///
/// The curve passes exactly through the first and last values.
fn basis_channel(values: &[f64], t: f64) -> f64 {
    let n = values.len() - 1;
    let (t, i) = if t <= 0.0 {
        (0.0, 0)
    } else if t >= 1.0 {
        (1.0, n - 1)
    } else {
        (t, (t * n as f64).floor() as usize)
    };
    let v1 = values[i];
    let v2 = values[i + 1];
    let v0 = if i > 0 { values[i - 1] } else { 2.0 * v1 - v2 };
    let v3 = if i < n - 1 { values[i + 2] } else { 2.0 * v2 - v1 };
    basis((t - i as f64 / n as f64) * n as f64, v0, v1, v2, v3)
}

fn to_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Color of the OrRd ramp at `t`, clamped to [0, 1].
pub fn interpolate_or_rd(t: f64) -> Rgb {
    let channel = |pick: fn(&Rgb) -> u8| -> f64 {
        let values: Vec<f64> = OR_RD.iter().map(|c| pick(c) as f64).collect();
        basis_channel(&values, t)
    };
    Rgb {
        r: to_channel(channel(|c: &Rgb| c.r)),
        g: to_channel(channel(|c: &Rgb| c.g)),
        b: to_channel(channel(|c: &Rgb| c.b)),
    }
}

/// Maps temperatures onto the OrRd ramp over a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    domain: TemperatureDomain,
}

impl SequentialScale {
    pub fn new(domain: TemperatureDomain) -> Self {
        SequentialScale { domain }
    }

    /// Position of `value` in the domain, clamped to [0, 1].
    ///
    /// A zero-width domain maps everything to the middle of the ramp.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return 0.5;
        }
        ((value - self.domain.min) / span).clamp(0.0, 1.0)
    }

    /// `None` for `NaN`; out-of-domain values take the nearest end color.
    pub fn color(&self, value: f64) -> Option<Rgb> {
        if value.is_nan() {
            return None;
        }
        Some(interpolate_or_rd(self.normalize(value)))
    }
}
