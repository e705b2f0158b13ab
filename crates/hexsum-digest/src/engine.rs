//! # Digest Engine
//!
//! The SHA-256 computation path. The backend is resolved once per process:
//! the first caller runs a known-answer self-check, and the outcome (bound
//! engine or `AlgorithmUnavailable`) is cached for every later call. This is
//! safe because the engine carries no mutable cross-call state, and a
//! backend that fails its self-check is not expected to start working later.

use std::sync::OnceLock;

use hexsum_core::{Digest, DigestError};
use sha2::{Digest as _, Sha256};
use tracing::{debug, warn};

/// Standard SHA-256 vector for the message `"abc"`, used as the bind-time
/// known-answer self-check.
const SELF_CHECK_MESSAGE: &[u8] = b"abc";
const SELF_CHECK_DIGEST: [u8; 32] = [
    0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea, 0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22,
    0x23, 0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c, 0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00,
    0x15, 0xad,
];

static ENGINE: OnceLock<Result<DigestEngine, DigestError>> = OnceLock::new();

/// Handle to a backend that passed its known-answer self-check.
///
/// Holding a `&DigestEngine` proves the bind succeeded, which is why
/// [`DigestEngine::digest()`] is infallible.
#[derive(Debug)]
pub struct DigestEngine {
    _priv: (),
}

impl DigestEngine {
    /// Resolve the process-wide engine, binding the backend on first use.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::AlgorithmUnavailable` if the backend failed its
    /// known-answer self-check. The failure is cached: subsequent calls
    /// return the same error without re-probing.
    pub fn bind() -> Result<&'static DigestEngine, DigestError> {
        ENGINE.get_or_init(Self::probe).as_ref().map_err(Clone::clone)
    }

    fn probe() -> Result<Self, DigestError> {
        let answer = Sha256::digest(SELF_CHECK_MESSAGE);
        if answer[..] != SELF_CHECK_DIGEST[..] {
            warn!(algorithm = "sha-256", "digest backend failed known-answer self-check");
            return Err(DigestError::AlgorithmUnavailable(
                "sha-256 backend failed known-answer self-check".to_string(),
            ));
        }
        debug!(algorithm = "sha-256", "digest backend bound");
        Ok(Self { _priv: () })
    }

    /// Compute the SHA-256 digest of a byte sequence.
    ///
    /// Accepts any input, including the empty sequence. Deterministic, no
    /// side effects beyond computation.
    pub fn digest(&self, message: &[u8]) -> Digest {
        let hash = Sha256::digest(message);
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(&hash);
        Digest::from_bytes(bytes)
    }
}

/// Compute the SHA-256 digest of a byte sequence.
///
/// Resolves the process-wide engine, then computes. Cost is proportional to
/// the input length; there is no caching or memoization.
///
/// # Errors
///
/// Returns `DigestError::AlgorithmUnavailable` if the backend could not be
/// bound.
pub fn digest(message: &[u8]) -> Result<Digest, DigestError> {
    Ok(DigestEngine::bind()?.digest(message))
}

/// Compute the SHA-256 digest of a string's UTF-8 bytes and render it as a
/// 64-character lowercase hex string.
///
/// Either a complete hex string or an explicit error, never a placeholder.
///
/// # Errors
///
/// Returns `DigestError::AlgorithmUnavailable` if the backend could not be
/// bound.
pub fn hash_hex(message: &str) -> Result<String, DigestError> {
    digest(message.as_bytes()).map(|d| d.to_hex())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Digest computation never fails and always yields 32 bytes.
        #[test]
        fn digest_always_32_bytes(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
            let d = digest(&bytes).unwrap();
            prop_assert_eq!(d.as_bytes().len(), 32);
        }

        /// The facade yields 64 lowercase hex chars for any string input.
        #[test]
        fn hash_hex_output_invariants(s in ".*") {
            let hex = hash_hex(&s).unwrap();
            prop_assert_eq!(hex.len(), 64);
            prop_assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }

        /// Identical input always yields identical output.
        #[test]
        fn hash_hex_deterministic(s in ".*") {
            prop_assert_eq!(hash_hex(&s).unwrap(), hash_hex(&s).unwrap());
        }

        /// The facade hashes the UTF-8 encoding of its input.
        #[test]
        fn hash_hex_agrees_with_utf8_digest(s in ".*") {
            let via_facade = hash_hex(&s).unwrap();
            let via_bytes = digest(s.as_bytes()).unwrap().to_hex();
            prop_assert_eq!(via_facade, via_bytes);
        }
    }
}
