//! Error types for the derivation engine.

/// Errors raised when untyped input enters the engine.
///
/// Every derivation over the typed values is total; these only occur when
/// building lines, bits or hexagram numbers from raw caller data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A bit sequence had the wrong number of positions.
    #[error("expected {expected} bits, found {found}")]
    BitLength {
        /// Number of bits the resolver requires.
        expected: usize,
        /// Number of bits supplied.
        found: usize,
    },

    /// A bit was neither 0 nor 1.
    #[error("invalid bit: {0} (expected 0 or 1)")]
    InvalidBit(u8),

    /// A line value was outside 6..=9.
    #[error("invalid line value: {0} (expected 6, 7, 8 or 9)")]
    InvalidLineValue(u8),

    /// A character in textual input was not a digit or separator.
    #[error("unexpected character: {0:?}")]
    InvalidDigit(char),

    /// A line sequence did not hold exactly six lines.
    #[error("expected 6 lines, found {0}")]
    LineCount(usize),

    /// A hexagram number was outside 1..=64.
    #[error("invalid hexagram number: {0} (expected 1-64)")]
    InvalidHexagram(u32),

    /// Text that should name a hexagram is not a number at all.
    #[error("not a hexagram number: {0:?} (expected 1-64)")]
    HexagramText(String),
}

/// Convenience result type for engine operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let e = CoreError::BitLength {
            expected: 6,
            found: 5,
        };
        assert_eq!(e.to_string(), "expected 6 bits, found 5");
        assert!(CoreError::InvalidLineValue(5).to_string().contains('5'));
        assert!(CoreError::InvalidHexagram(65).to_string().contains("65"));
        let e = CoreError::HexagramText("abc".into());
        assert_eq!(e.to_string(), "not a hexagram number: \"abc\" (expected 1-64)");
    }
}
