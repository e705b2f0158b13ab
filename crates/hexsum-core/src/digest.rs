//! # Digest Value Type
//!
//! Defines [`Digest`], the immutable 32-byte output of the digest engine.
//! A digest has no lifecycle of its own: it is produced once per
//! computation and rendered as a 64-character lowercase hex string.
//!
//! Serde represents a digest as its hex string, so digests embed cleanly in
//! JSON documents and round-trip through [`Digest::from_hex()`].

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HexDecodeError;
use crate::hex;

/// A 32-byte digest value.
///
/// Two distinct input messages may collide only with cryptographically
/// negligible probability; this type does not detect or handle collisions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    /// Wrap raw digest bytes.
    ///
    /// Callers normally receive a `Digest` from the engine rather than
    /// constructing one; this exists for decoding and interop.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Return the raw 32-byte digest value.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render the digest as a 64-character lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// Accepts upper- and lowercase digits; surrounding whitespace is
    /// trimmed.
    ///
    /// # Errors
    ///
    /// Returns `HexDecodeError::InvalidLength` if the trimmed input is not
    /// exactly 64 characters, or `HexDecodeError::InvalidDigit` on a
    /// non-hex character.
    pub fn from_hex(hex_str: &str) -> Result<Self, HexDecodeError> {
        let hex_str = hex_str.trim();
        if hex_str.len() != 2 * Self::LEN {
            return Err(HexDecodeError::InvalidLength(hex_str.len()));
        }
        let bytes = hex::decode(hex_str)?;
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
