// ============================================================================
// Numeric Errors
// Error types for decimal string validation and conversion
// ============================================================================

use std::fmt;

/// Reasons a token is not a valid decimal numeral, plus conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input string is empty
    Empty,
    /// Input is a lone `+` or `-`
    SignOnly,
    /// More than one decimal point
    MultipleDecimalPoints,
    /// A character outside `[0-9.]` after the optional sign
    InvalidCharacter {
        /// The offending character
        ch: char,
        /// Byte offset of the character in the input
        position: usize,
    },
    /// No digit anywhere in the input
    NoDigits,
    /// Input ends with a decimal point that has no digit after it
    TrailingDecimalPoint,
    /// Value does not fit the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Empty => write!(f, "invalid input: empty string"),
            NumericError::SignOnly => write!(f, "invalid input: sign without digits"),
            NumericError::MultipleDecimalPoints => {
                write!(f, "invalid input: more than one decimal point")
            },
            NumericError::InvalidCharacter { ch, position } => {
                write!(f, "invalid input: unexpected character {:?} at {}", ch, position)
            },
            NumericError::NoDigits => write!(f, "invalid input: no digits"),
            NumericError::TrailingDecimalPoint => {
                write!(f, "invalid input: decimal point without trailing digit")
            },
            NumericError::Overflow => {
                write!(f, "conversion overflow: value does not fit target type")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::MultipleDecimalPoints.to_string(),
            "invalid input: more than one decimal point"
        );
        assert_eq!(
            NumericError::InvalidCharacter { ch: 'x', position: 2 }.to_string(),
            "invalid input: unexpected character 'x' at 2"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Empty, NumericError::Empty);
        assert_ne!(NumericError::Empty, NumericError::SignOnly);
    }
}
