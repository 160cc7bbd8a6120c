//! Error types for token generation

use thiserror::Error;

/// Errors raised while generating tokens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// The spacing-scale multiple is neither an integer nor exactly 0.5
    ///
    /// Raised before any value is computed so that a typo like `scale(1.3)`
    /// fails the build instead of producing an off-grid spacing.
    #[error("invalid spacing multiple {multiple}: must be an integer or exactly 0.5")]
    InvalidMultiple { multiple: f32 },
}
