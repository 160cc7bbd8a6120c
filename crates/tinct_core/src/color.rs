//! RGBA color primitive

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Opaque color from a `0xRRGGBB` integer
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Parse `#rrggbb` or `#rgb` (leading `#` optional)
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        match digits.len() {
            3 => {
                let mut channels = [0.0f32; 3];
                for (slot, ch) in channels.iter_mut().zip(digits.chars()) {
                    let d = hex_digit(ch)?;
                    // #abc expands to #aabbcc
                    *slot = (d * 16 + d) as f32 / 255.0;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            6 => {
                let mut channels = [0.0f32; 3];
                let mut chars = digits.chars();
                for slot in channels.iter_mut() {
                    let hi = hex_digit(chars.next().unwrap_or('\0'))?;
                    let lo = hex_digit(chars.next().unwrap_or('\0'))?;
                    *slot = (hi * 16 + lo) as f32 / 255.0;
                }
                Ok(Self::rgb(channels[0], channels[1], channels[2]))
            }
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    /// Same color with a replaced alpha channel
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation toward `other`; `weight` is the share of `other`
    ///
    /// `mix(other, 0.0)` returns `self` unchanged, `mix(other, 1.0)` returns
    /// `other`. All four channels interpolate.
    pub fn mix(self, other: Color, weight: f32) -> Self {
        let t = weight.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Relative luminance (Rec. 709 weights), ignoring alpha
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// 8-bit channel triple, rounded
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        )
    }

    /// CSS color string: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise
    pub fn to_css(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.a >= 1.0 {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("rgba({r}, {g}, {b}, {})", self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn hex_digit(ch: char) -> Result<u32, ColorParseError> {
    ch.to_digit(16).ok_or(ColorParseError::InvalidDigit(ch))
}
