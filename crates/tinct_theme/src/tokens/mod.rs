//! Design-token generation
//!
//! Tokens are the atomic values of the design system:
//! - Palette ramps (tints and shades of a base color)
//! - Overlays (alpha variants of a base color)
//! - Typography (font sizes and weights)
//! - Spacing (8px-grid scale)

mod overlay;
mod palette;
mod spacing;
mod typography;

pub use overlay::*;
pub use palette::*;
pub use spacing::*;
pub use typography::*;

use serde::Serialize;
use tinct_core::Color;

/// A generated token value
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub enum TokenValue {
    Color(Color),
    /// A px length
    Length(f32),
    /// A unitless number (font weights)
    Number(f32),
}

impl TokenValue {
    /// CSS representation of the value
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Color(c) => c.to_css(),
            TokenValue::Length(v) => format!("{v}px"),
            TokenValue::Number(v) => format!("{v}"),
        }
    }
}

/// A named design token
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    pub name: String,
    pub value: TokenValue,
}

/// An ordered set of generated tokens
///
/// Order is generation order and is stable across invocations with identical
/// inputs. Within one invocation every name is unique.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: String, value: TokenValue) {
        self.tokens.push(Token { name, value });
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Look up a token value by name
    pub fn get(&self, name: &str) -> Option<&TokenValue> {
        self.tokens.iter().find(|t| t.name == name).map(|t| &t.value)
    }

    /// Append all tokens of `other`, preserving order
    pub fn extend(&mut self, other: TokenSet) {
        self.tokens.extend(other.tokens);
    }
}

impl IntoIterator for TokenSet {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Build a token identifier from its namespace prefix and suffix
///
/// All generators construct names through this single point, so a prefix maps
/// to the same identifier family everywhere.
pub fn token_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}-{suffix}")
}
