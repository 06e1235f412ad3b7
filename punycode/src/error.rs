//! Error types for Punycode encoding and decoding.

use thiserror::Error;

/// Errors that can occur while encoding or decoding.
///
/// Every failure is terminal for the call that produced it; no partial output
/// is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An accumulator (`delta`, `i`, `w` or `n`) left the `u32` range.
    #[error("arithmetic overflow")]
    Overflow,

    /// The digit stream ended in the middle of a variable-length integer.
    #[error("malformed input: digit stream ended unexpectedly")]
    MalformedInput,

    /// A decoded value is not a Unicode scalar value.
    #[error("invalid Unicode code point: {0:#x}")]
    InvalidCodePoint(u32),
}

/// Result type alias for Punycode operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(Error::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(
            Error::MalformedInput.to_string(),
            "malformed input: digit stream ended unexpectedly"
        );
        assert_eq!(
            Error::InvalidCodePoint(0xD800).to_string(),
            "invalid Unicode code point: 0xd800"
        );
    }
}
