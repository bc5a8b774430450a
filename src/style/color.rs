//! Normalized RGBA color and its `rgb()` / `rgba()` rendering.

use std::fmt::Write;

use super::ToUss;

/// Alpha values this close to 1 render as opaque `rgb()`.
const OPAQUE_EPSILON: f32 = 1e-5;

/// RGBA color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a new opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    pub fn is_opaque(&self) -> bool {
        (self.a - 1.0).abs() < OPAQUE_EPSILON
    }
}

/// Scale a normalized channel to 0..=255, rounding half to even.
fn channel(v: f32) -> i32 {
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as i32
}

impl ToUss for Color {
    fn to_uss(&self, buf: &mut String) {
        let (r, g, b) = (channel(self.r), channel(self.g), channel(self.b));
        if self.is_opaque() {
            write!(buf, "rgb({r}, {g}, {b})").unwrap();
        } else {
            write!(buf, "rgba({r}, {g}, {b}, {})", self.a).unwrap();
        }
    }
}
