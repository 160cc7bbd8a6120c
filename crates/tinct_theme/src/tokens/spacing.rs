//! Spacing-scale function

use crate::error::TokenError;

/// Base spacing increment in px
pub const SPACE_UNIT: f32 = 8.0;

/// Spacing value for a multiple of the base unit
///
/// The multiple must be an integer or exactly 0.5; anything else fails with
/// [`TokenError::InvalidMultiple`] before the value is computed, so a typo
/// like `scale(1.3)` breaks the build instead of landing off-grid.
pub fn scale(multiple: f32) -> Result<f32, TokenError> {
    if multiple.fract() != 0.0 && multiple != 0.5 {
        return Err(TokenError::InvalidMultiple { multiple });
    }
    Ok(SPACE_UNIT * multiple)
}
