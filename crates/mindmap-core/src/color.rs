//! Color handling for mind-map nodes.
//!
//! [`Color`] stores 8-bit RGBA channels and parses CSS color strings through
//! the [`color`] crate.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};

/// An 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Fill used for the initial root node.
    pub const CYAN: Self = Self::from_rgb8(0, 255, 255);
    /// Fill used for nodes created through "add child".
    pub const LIGHT_GRAY: Self = Self::from_rgb8(192, 192, 192);

    /// Create a new `Color` from a CSS color string
    /// This will parse strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => {
                let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
                Ok(Self::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a))
            }
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Creates an opaque color.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as `0xAARRGGBB`.
    pub fn to_argb(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Returns the RGB channels as exactly six lowercase hex digits.
    ///
    /// Alpha is masked out, so `rgba(255, 0, 0, 0.5)` and `#ff0000` both
    /// produce `"ff0000"`.
    pub fn to_hex_rgb(self) -> String {
        format!("{:06x}", self.to_argb() & 0x00ff_ffff)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex_rgb())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
