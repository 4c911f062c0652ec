//! Chain hashing rules: the genesis digest and entry digest computation.
//!
//! Both the append path ([`crate::AuditChain`]) and the verifier derive
//! digests through this module, so the two sides can never disagree on
//! what a hash commits to.

use trustshim_contracts::codec::entry_payload;
use trustshim_contracts::{ActorId, LogEntry, Severity};
use trustshim_digest::{Digest, Sha256};

/// The publicly known genesis marker.
///
/// Its SHA-256 digest is the `previous_hash` of every chain's first entry
/// and the verifier's starting expectation. Any party who knows this
/// constant can reproduce an empty chain's starting state.
pub const GENESIS_MARKER: &str = "TRUSTSHIM_INIT";

/// The digest every chain starts from: SHA-256 of [`GENESIS_MARKER`].
pub fn genesis_digest() -> Digest {
    Sha256::digest(GENESIS_MARKER.as_bytes())
}

/// Compute the chain digest for one entry's fields.
///
/// The digest commits to every field of the entry plus its link to the
/// predecessor: device id, timestamp, actor code, severity code, message,
/// and the hex-encoded previous digest, pipe-delimited in that order.
pub fn hash_entry(
    device_id: &str,
    timestamp: &str,
    actor: ActorId,
    severity: Severity,
    message: &str,
    previous_hash: &str,
) -> Digest {
    let payload = entry_payload(device_id, timestamp, actor, severity, message, previous_hash);
    Sha256::digest(payload.as_bytes())
}

/// Recompute the chain digest a stored entry should carry.
///
/// Used by strict verification to detect content tampering that left the
/// stored digest fields internally consistent.
pub fn entry_digest(entry: &LogEntry) -> Digest {
    Sha256::digest(entry.hash_payload().as_bytes())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
