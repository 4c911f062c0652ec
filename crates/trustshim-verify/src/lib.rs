//! # trustshim-verify
//!
//! Replays a sequence of serialized audit entries and reports the first
//! point of divergence, if any.
//!
//! ## Verification modes
//!
//! - [`VerifyMode::Strict`] (default) — checks prev-hash linkage *and*
//!   recomputes each entry's digest from its content fields, so content
//!   tampering is detected even when the stored digest fields were
//!   rewritten to stay internally consistent.
//! - [`VerifyMode::LinkageOnly`] — checks only that the stored digest
//!   fields link up. Kept for records produced by older firmware whose
//!   digests cannot be recomputed; a consistent-but-stale digest pair
//!   passes this mode, which is exactly the gap strict mode closes.
//!
//! ## Usage
//!
//! ```rust
//! use trustshim_verify::{verify_chain, ChainVerifier, VerifyMode};
//!
//! let entries: Vec<String> = Vec::new();
//! assert!(verify_chain(&entries)); // empty chain is vacuously valid
//!
//! let report = ChainVerifier::new(VerifyMode::Strict).verify(&entries);
//! assert!(report.valid);
//! ```

pub mod engine;

pub use engine::{
    verify_chain, ChainVerifier, FailureReason, VerificationFailure, VerificationReport,
    VerifyMode,
};
