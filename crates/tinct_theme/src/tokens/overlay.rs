//! Overlay token generation

use tinct_core::Color;

use super::{token_name, TokenSet, TokenValue};

/// Overlay steps as `(suffix, alpha)` pairs
pub const OVERLAY_STEPS: [(u8, f32); 4] = [(1, 0.1), (2, 0.2), (4, 0.4), (7, 0.7)];

/// Generate alpha overlay tokens `{name}-overlay-{n}` from a base color
///
/// `name` is mandatory and must not contain whitespace; it is spliced into
/// the identifier verbatim. RGB channels of every overlay equal the base's.
pub fn overlays(base: Color, name: &str) -> TokenSet {
    let mut set = TokenSet::new();
    for (step, alpha) in OVERLAY_STEPS {
        set.push(
            token_name(name, &format!("overlay-{step}")),
            TokenValue::Color(base.with_alpha(alpha)),
        );
    }

    tracing::trace!(name, "generated overlay tokens");
    set
}
