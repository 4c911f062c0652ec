//! Error types for the TRUSTSHIM workspace.
//!
//! The chain core is deterministic and CPU-only, so the taxonomy is small:
//! construction-time validation failures and lock poisoning. Tampering and
//! malformed records are *verification outcomes* reported by the verifier,
//! not errors.

use thiserror::Error;

/// The unified error type for the TRUSTSHIM crates.
#[derive(Debug, Error)]
pub enum TrustShimError {
    /// The device identifier supplied at chain construction is unusable.
    ///
    /// Every entry's hash payload embeds the device id, so a bad id is
    /// rejected before any entry can be produced.
    #[error("invalid device id: {reason}")]
    InvalidDeviceId { reason: String },

    /// The chain's internal mutex was poisoned by a panicking writer.
    ///
    /// Cannot happen under normal operation; surfaced rather than masked
    /// because a half-updated chain state must never produce entries.
    #[error("chain state unavailable: {reason}")]
    StatePoisoned { reason: String },
}

/// Convenience alias used throughout the TRUSTSHIM crates.
pub type TrustShimResult<T> = Result<T, TrustShimError>;
