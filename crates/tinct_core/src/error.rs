//! Error types for color parsing

use thiserror::Error;

/// Failure to parse a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string is not 3 or 6 hex digits (after an optional `#`)
    #[error("invalid hex color length: expected 3 or 6 digits, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]` appeared in the digit portion
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}
