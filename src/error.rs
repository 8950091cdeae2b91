use crate::format::IdFormat;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdValidationError {
    /// The input does not have the shape of any supported identifier
    #[error("The input does not match any known identifier format")]
    InvalidFormat,

    /// A letter slot holds a character with no area weight
    #[error("'{0}' is not an assigned area letter")]
    UnknownAreaLetter(char),

    /// A digit slot holds something other than an ASCII digit (1-based position)
    #[error("Expected a digit at position {position}")]
    InvalidDigit { position: usize },

    #[error("Checksum mismatch for a {0} candidate")]
    ChecksumMismatch(IdFormat),
}
