//! # hexsum-digest — SHA-256 Digest Engine
//!
//! Computes SHA-256 digests of byte sequences and renders them as
//! 64-character lowercase hex strings. The public surface is one facade:
//!
//! ```
//! let hex = hexsum_digest::hash_hex("abc")?;
//! assert_eq!(
//!     hex,
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! # Ok::<(), hexsum_core::DigestError>(())
//! ```
//!
//! The engine binds its backend once per process and verifies it against a
//! known-answer vector at bind time. A backend that cannot be used surfaces
//! as `DigestError::AlgorithmUnavailable`; there is no null-like "no digest
//! and no error" state.
//!
//! ## Crate Policy
//!
//! - Fully synchronous, no shared mutable state: every call operates on its
//!   own input and output, safe for unrestricted parallel invocation.
//! - No caching of results: every call recomputes from scratch.
//! - No mocking of cryptographic operations in tests: all tests run real
//!   SHA-256 against pinned vectors.

pub mod engine;

pub use engine::{digest, hash_hex, DigestEngine};
