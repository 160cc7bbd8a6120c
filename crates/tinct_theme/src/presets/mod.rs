//! Built-in base-color presets
//!
//! Each preset names a brand base color and expands, through the generators,
//! into a full token set: palette ramp, overlays, and both typographic
//! scales. Pure data; no runtime state.

use std::fmt::{Display, Formatter};

use tinct_core::Color;

use crate::tokens::{
    font_sizes, font_weights, overlays, palette, FontScaleConfig, FontWeightConfig,
    PaletteConfig, TokenSet,
};

/// Built-in preset catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PalettePreset {
    /// Indigo brand blue
    Indigo,
    /// Emerald green
    Emerald,
    /// Crimson red
    Crimson,
    /// Amber orange
    Amber,
}

impl PalettePreset {
    /// Stable preset id for config/serialization
    pub fn id(self) -> &'static str {
        match self {
            Self::Indigo => "indigo",
            Self::Emerald => "emerald",
            Self::Crimson => "crimson",
            Self::Amber => "amber",
        }
    }

    /// User-facing display name
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Indigo => "Indigo",
            Self::Emerald => "Emerald",
            Self::Crimson => "Crimson",
            Self::Amber => "Amber",
        }
    }

    /// Base brand color the ramp is built from
    pub fn base(self) -> Color {
        match self {
            Self::Indigo => Color::from_hex(0x4F46E5),
            Self::Emerald => Color::from_hex(0x10B981),
            Self::Crimson => Color::from_hex(0xDC2626),
            Self::Amber => Color::from_hex(0xD97706),
        }
    }

    /// Full preset list
    pub fn all() -> &'static [PalettePreset] {
        const PRESETS: [PalettePreset; 4] = [
            PalettePreset::Indigo,
            PalettePreset::Emerald,
            PalettePreset::Crimson,
            PalettePreset::Amber,
        ];
        &PRESETS
    }

    /// Expand this preset into its full token set
    pub fn tokens(self) -> TokenSet {
        let base = self.base();
        let mut set = palette(base, &PaletteConfig::with_prefix(self.id()));
        set.extend(overlays(base, self.id()));
        set.extend(font_sizes(&FontScaleConfig::default()));
        set.extend(font_weights(&FontWeightConfig::default()));
        set
    }
}

impl Display for PalettePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports
pub fn preset_tokens(preset: PalettePreset) -> TokenSet {
    preset.tokens()
}
