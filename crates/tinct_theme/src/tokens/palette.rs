//! Palette ramp generation

use tinct_core::Color;

use super::{token_name, TokenSet, TokenValue};

/// Number of steps in a palette ramp
pub const PALETTE_STEPS: usize = 9;

/// White-mix weights for ramp steps 1 through 5
const TINT_WEIGHTS: [f32; 5] = [0.95, 0.85, 0.80, 0.70, 0.50];

/// Configuration for [`palette`]
#[derive(Clone, Debug)]
pub struct PaletteConfig {
    /// Namespace for the generated tokens. Spliced into identifiers verbatim.
    pub prefix: String,
}

impl PaletteConfig {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::with_prefix("primary")
    }
}

/// Generate a 9-step tint/shade ramp from a base color
///
/// Tokens are named `{prefix}-1` through `{prefix}-9`:
/// - 1–5 mix the base toward white at decreasing weights
/// - 6 is the base itself
/// - 7 sits halfway between the base and step 8
/// - 8 and 9 mix the base toward black
///
/// Pure white or pure black bases need no special casing: mixing is linear
/// interpolation, so the ramp simply converges on the base.
pub fn palette(base: Color, config: &PaletteConfig) -> TokenSet {
    let shade_8 = base.mix(Color::BLACK, 0.30);
    let shade_9 = base.mix(Color::BLACK, 0.60);

    let steps = [
        base.mix(Color::WHITE, TINT_WEIGHTS[0]),
        base.mix(Color::WHITE, TINT_WEIGHTS[1]),
        base.mix(Color::WHITE, TINT_WEIGHTS[2]),
        base.mix(Color::WHITE, TINT_WEIGHTS[3]),
        base.mix(Color::WHITE, TINT_WEIGHTS[4]),
        base,
        base.mix(shade_8, 0.50),
        shade_8,
        shade_9,
    ];

    let mut set = TokenSet::new();
    for (i, color) in steps.into_iter().enumerate() {
        let suffix = (i + 1).to_string();
        set.push(
            token_name(&config.prefix, &suffix),
            TokenValue::Color(color),
        );
    }

    tracing::debug!(prefix = %config.prefix, steps = PALETTE_STEPS, "generated palette ramp");
    set
}
