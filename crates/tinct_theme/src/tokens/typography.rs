//! Typographic scale tokens
//!
//! Both scales are fixed enumerations. Each token key carries its suffix and
//! value, and the same ordered list feeds class emission and token emission,
//! so the two outputs cannot drift apart.

use super::{token_name, TokenSet, TokenValue};

/// Font-size scale keys, largest to smallest
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontSizeToken {
    Xl,
    L,
    M,
    Default,
    Sm,
    Xs,
    Tiny,
    TinyCaps,
}

impl FontSizeToken {
    /// Identifier suffix under the scale prefix
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Xl => "xl",
            Self::L => "l",
            Self::M => "m",
            Self::Default => "default",
            Self::Sm => "sm",
            Self::Xs => "xs",
            Self::Tiny => "tiny",
            Self::TinyCaps => "tiny-caps",
        }
    }

    /// Size in px
    pub fn px(self) -> f32 {
        match self {
            Self::Xl => 24.0,
            Self::L => 20.0,
            Self::M => 18.0,
            Self::Default => 16.0,
            Self::Sm => 14.0,
            Self::Xs => 12.0,
            Self::Tiny => 11.0,
            Self::TinyCaps => 10.0,
        }
    }

    /// Whether the utility class forces uppercase (class level only; the
    /// token value stays a plain length)
    pub fn uppercase(self) -> bool {
        matches!(self, Self::TinyCaps)
    }

    /// Full scale, largest to smallest
    pub fn all() -> &'static [FontSizeToken] {
        const SCALE: [FontSizeToken; 8] = [
            FontSizeToken::Xl,
            FontSizeToken::L,
            FontSizeToken::M,
            FontSizeToken::Default,
            FontSizeToken::Sm,
            FontSizeToken::Xs,
            FontSizeToken::Tiny,
            FontSizeToken::TinyCaps,
        ];
        &SCALE
    }
}

/// Font-weight scale keys, lightest to heaviest
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum FontWeightToken {
    Light,
    Regular,
    Semibold,
    Bold,
    Black,
}

impl FontWeightToken {
    /// Identifier suffix under the scale prefix
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Regular => "regular",
            Self::Semibold => "semibold",
            Self::Bold => "bold",
            Self::Black => "black",
        }
    }

    /// CSS font-weight value
    pub fn weight(self) -> f32 {
        match self {
            Self::Light => 300.0,
            Self::Regular => 400.0,
            Self::Semibold => 600.0,
            Self::Bold => 700.0,
            Self::Black => 800.0,
        }
    }

    /// Full scale, lightest to heaviest
    pub fn all() -> &'static [FontWeightToken] {
        const SCALE: [FontWeightToken; 5] = [
            FontWeightToken::Light,
            FontWeightToken::Regular,
            FontWeightToken::Semibold,
            FontWeightToken::Bold,
            FontWeightToken::Black,
        ];
        &SCALE
    }
}

/// Configuration for [`font_sizes`]
#[derive(Clone, Debug)]
pub struct FontScaleConfig {
    /// Namespace for the generated tokens and classes
    pub prefix: String,
}

impl Default for FontScaleConfig {
    fn default() -> Self {
        Self {
            prefix: "font".into(),
        }
    }
}

/// Configuration for [`font_weights`]
#[derive(Clone, Debug)]
pub struct FontWeightConfig {
    /// Namespace for the generated tokens and classes
    pub prefix: String,
}

impl Default for FontWeightConfig {
    fn default() -> Self {
        Self {
            prefix: "font-weight".into(),
        }
    }
}

/// Generate the font-size token set, largest to smallest
pub fn font_sizes(config: &FontScaleConfig) -> TokenSet {
    let mut set = TokenSet::new();
    for token in FontSizeToken::all() {
        set.push(
            token_name(&config.prefix, token.suffix()),
            TokenValue::Length(token.px()),
        );
    }
    set
}

/// Generate the font-weight token set, lightest to heaviest
pub fn font_weights(config: &FontWeightConfig) -> TokenSet {
    let mut set = TokenSet::new();
    for token in FontWeightToken::all() {
        set.push(
            token_name(&config.prefix, token.suffix()),
            TokenValue::Number(token.weight()),
        );
    }
    set
}
