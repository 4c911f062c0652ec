//! # trustshim-digest
//!
//! Self-contained SHA-256 for the TRUSTSHIM audit chain.
//!
//! ## Overview
//!
//! Firmware targets that embed TRUSTSHIM cannot always link a full crypto
//! library, so the digest engine is implemented here from the FIPS 180-4
//! definition: Merkle–Damgård over 512-bit blocks, 64 rounds per block,
//! eight 32-bit state words. The engine is a caller-owned value with no
//! global state, so independent hashes never alias.
//!
//! ## Usage
//!
//! ```rust
//! use trustshim_digest::{Digest, Sha256};
//!
//! // One-shot.
//! let d = Sha256::digest(b"hello");
//!
//! // Incremental — equivalent for the same total input.
//! let mut hasher = Sha256::new();
//! hasher.update(b"he");
//! hasher.update(b"llo");
//! assert_eq!(hasher.finalize(), d);
//! ```

pub mod digest;
pub mod sha256;

pub use digest::Digest;
pub use sha256::Sha256;
