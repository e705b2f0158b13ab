//! # hexsum-core — Foundational Types
//!
//! This crate is the leaf of the hexsum workspace. It defines the types that
//! the digest engine produces and consumes:
//!
//! - **`Digest`** — an immutable 32-byte digest value, rendered as a
//!   64-character lowercase hex string.
//! - **`hex`** — byte-to-text encoding (two lowercase digits per byte, no
//!   separators, no prefix) and the decoding counterpart.
//! - **Error types** — `DigestError` for the digest path, `HexDecodeError`
//!   for the decode path. Failures surface as explicit `Result` values,
//!   never as a null-like placeholder.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hexsum-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Everything here is a pure function or an immutable value: no hidden
//!   state, no randomness, no time dependence.

pub mod digest;
pub mod error;
pub mod hex;

// Re-export primary types for ergonomic imports.
pub use digest::Digest;
pub use error::{DigestError, HexDecodeError};
