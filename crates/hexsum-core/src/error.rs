//! # Error Types
//!
//! Structured errors for the hexsum workspace. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The digest path has exactly one failure mode: the backend cannot be
//!   used. It is reported to the caller, who owns the retry/abort decision.
//! - Decode errors carry the position of the offending input so callers can
//!   point at the exact byte.

use thiserror::Error;

/// Errors from digest computation.
///
/// `Clone` is required because a failed backend bind is cached and handed
/// out to every subsequent caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// The runtime's digest backend cannot supply SHA-256.
    #[error("digest algorithm unavailable: {0}")]
    AlgorithmUnavailable(String),
}

/// Errors from hex decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexDecodeError {
    /// Hex encodes whole bytes, two digits each.
    #[error("hex string must have even length, got {0}")]
    OddLength(usize),

    /// A digest renders as exactly 64 hex digits.
    #[error("expected 64 hex chars, got {0}")]
    InvalidLength(usize),

    /// A character outside `[0-9a-fA-F]` appeared in the input.
    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
        /// The character that failed to parse.
        found: char,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_unavailable_display() {
        let err = DigestError::AlgorithmUnavailable("backend self-check failed".to_string());
        assert!(format!("{err}").contains("backend self-check failed"));
    }

    #[test]
    fn odd_length_display() {
        let err = HexDecodeError::OddLength(3);
        let msg = format!("{err}");
        assert!(msg.contains("even length"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn invalid_length_display() {
        let err = HexDecodeError::InvalidLength(62);
        let msg = format!("{err}");
        assert!(msg.contains("64 hex chars"));
        assert!(msg.contains("62"));
    }

    #[test]
    fn invalid_digit_display() {
        let err = HexDecodeError::InvalidDigit {
            index: 5,
            found: 'z',
        };
        let msg = format!("{err}");
        assert!(msg.contains("'z'"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn all_variants_are_debug() {
        let variants: Vec<HexDecodeError> = vec![
            HexDecodeError::OddLength(1),
            HexDecodeError::InvalidLength(0),
            HexDecodeError::InvalidDigit {
                index: 0,
                found: 'g',
            },
        ];
        for v in variants {
            assert!(!format!("{v:?}").is_empty());
        }
    }
}
