//! Tinct Theme System
//!
//! A pure design-token generator: color palette ramps, semi-transparent
//! overlays, typographic scales, and a validated spacing-scale function.
//!
//! # Overview
//!
//! The token system provides:
//! - **Palette ramps**: 9-step tint/shade ramps from a single base color
//! - **Overlays**: alpha variants of a base color for scrims and hovers
//! - **Typography**: fixed font-size and font-weight scales
//! - **Spacing**: an 8px-grid scale function with multiple validation
//! - **CSS emission**: custom-property blocks and utility class rules
//!
//! Every generator is a pure function: identical inputs always produce
//! identical token sets, in a stable order.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_core::Color;
//! use tinct_theme::{css, palette, PaletteConfig};
//!
//! let ramp = palette(Color::from_hex(0x1E66F5), &PaletteConfig::default());
//! assert_eq!(ramp.len(), 9);
//!
//! // Render as CSS custom properties
//! let block = css::custom_properties(&ramp);
//! assert!(block.contains("--primary-6: #1e66f5;"));
//! ```
//!
//! # Tokens
//!
//! Generated values are collected into a [`TokenSet`], an ordered list of
//! `(name, value)` pairs:
//!
//! - [`palette`]: `{prefix}-1` through `{prefix}-9` color tokens
//! - [`overlays`]: `{name}-overlay-{n}` translucent color tokens
//! - [`font_sizes`] / [`font_weights`]: length and number tokens mirrored by
//!   utility classes
//! - [`scale`]: a single length value, not a token set
//!
//! # Naming contract
//!
//! Prefixes and names are spliced into CSS identifiers verbatim. They are not
//! validated; a prefix containing whitespace or other characters illegal in an
//! identifier yields invalid CSS. Callers own that contract.

pub mod css;
pub mod error;
pub mod presets;
pub mod tokens;

pub use error::TokenError;
pub use presets::{preset_tokens, PalettePreset};
pub use tokens::*;
