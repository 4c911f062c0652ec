//! The chain verification engine.
//!
//! Verification is read-only over an already-materialized sequence of
//! serialized entries. Nothing here panics or returns `Err`: a record that
//! cannot be parsed is evidence of tampering and lands in the report, and
//! tampering is reported, never repaired — truncating or fixing a broken
//! chain is an operator decision.

use tracing::{debug, warn};

use trustshim_chain::{entry_digest, genesis_digest};
use trustshim_contracts::codec;

/// How much of each entry the verifier checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerifyMode {
    /// Linkage plus recompute-and-compare of every entry's digest.
    #[default]
    Strict,

    /// Linkage of the stored digest fields only. Content tampering with a
    /// consistently rewritten digest pair passes this mode.
    LinkageOnly,
}

/// Why verification stopped at a given entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    /// The record could not be parsed, or a digest field is not 64
    /// lowercase hex characters.
    MalformedEntry,

    /// The stored `previous_hash` does not match the predecessor's
    /// `chain_hash` (or the genesis digest at index 0).
    LinkageMismatch,

    /// Strict mode only: the digest recomputed from the entry's content
    /// fields does not match the stored `chain_hash`.
    DigestMismatch,
}

/// The first point of divergence in an invalid chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationFailure {
    /// Index of the offending entry in the input sequence.
    pub index: usize,
    pub reason: FailureReason,
}

/// Outcome of replaying a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// True when every entry checked out.
    pub valid: bool,

    /// Number of leading entries that verified before the failure — equals
    /// the input length for a valid chain.
    pub valid_prefix: usize,

    /// The first divergence, present exactly when `valid` is false.
    pub failure: Option<VerificationFailure>,
}

impl VerificationReport {
    fn passed(len: usize) -> Self {
        VerificationReport {
            valid: true,
            valid_prefix: len,
            failure: None,
        }
    }

    fn failed(index: usize, reason: FailureReason) -> Self {
        VerificationReport {
            valid: false,
            valid_prefix: index,
            failure: Some(VerificationFailure { index, reason }),
        }
    }
}

/// Replays serialized entries against the chain rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainVerifier {
    mode: VerifyMode,
}

impl ChainVerifier {
    pub fn new(mode: VerifyMode) -> Self {
        ChainVerifier { mode }
    }

    /// A strict-mode verifier.
    pub fn strict() -> Self {
        ChainVerifier::new(VerifyMode::Strict)
    }

    /// Replay `entries` in order and report the first divergence.
    ///
    /// Starts from the genesis digest; per entry, the stored
    /// `previous_hash` must equal the running expectation byte-for-byte,
    /// and in strict mode the digest recomputed from the entry's content
    /// must equal the stored `chain_hash`. An empty sequence is valid.
    pub fn verify<S: AsRef<str>>(&self, entries: &[S]) -> VerificationReport {
        let mut expected_prev = genesis_digest().to_hex();

        for (index, record) in entries.iter().enumerate() {
            let record = record.as_ref();

            let Some(links) = codec::extract_links(record) else {
                warn!(index, "entry is malformed; chain invalid");
                return VerificationReport::failed(index, FailureReason::MalformedEntry);
            };

            if links.previous_hash != expected_prev {
                warn!(
                    index,
                    stored = %links.previous_hash,
                    expected = %expected_prev,
                    "previous-hash linkage broken"
                );
                return VerificationReport::failed(index, FailureReason::LinkageMismatch);
            }

            if self.mode == VerifyMode::Strict {
                let Some(entry) = codec::parse_entry(record) else {
                    warn!(index, "entry fields unparseable; chain invalid");
                    return VerificationReport::failed(index, FailureReason::MalformedEntry);
                };
                let recomputed = entry_digest(&entry).to_hex();
                if recomputed != links.chain_hash {
                    warn!(
                        index,
                        stored = %links.chain_hash,
                        %recomputed,
                        "stored digest does not match entry content"
                    );
                    return VerificationReport::failed(index, FailureReason::DigestMismatch);
                }
            }

            expected_prev = links.chain_hash;
        }

        debug!(entry_count = entries.len(), mode = ?self.mode, "chain verified");
        VerificationReport::passed(entries.len())
    }
}

/// Verify a chain of serialized entries in strict mode.
///
/// Convenience wrapper over [`ChainVerifier::verify`] for callers that
/// only need the boolean outcome.
pub fn verify_chain<S: AsRef<str>>(entries: &[S]) -> bool {
    ChainVerifier::strict().verify(entries).valid
}

// ── Tests ─────────────────────────────────────────────────────────────────────
