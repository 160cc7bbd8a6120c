//! Tinct Core
//!
//! This crate provides the foundational color primitive for the Tinct
//! design-token generator:
//!
//! - **Color**: an immutable RGBA value with linear-interpolation mixing
//! - **Hex parsing**: `#rrggbb` / `#rgb` string and `0xRRGGBB` integer forms
//! - **CSS formatting**: `#rrggbb` for opaque colors, `rgba(...)` otherwise
//!
//! # Example
//!
//! ```rust
//! use tinct_core::Color;
//!
//! let brand = Color::from_hex(0x1E66F5);
//! let tint = brand.mix(Color::WHITE, 0.85);
//!
//! assert_eq!(brand.to_css(), "#1e66f5");
//! assert!(tint.luminance() > brand.luminance());
//! ```

pub mod color;
pub mod error;

pub use color::Color;
pub use error::ColorParseError;
