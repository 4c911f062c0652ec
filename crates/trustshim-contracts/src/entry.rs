//! The serialized audit log entry.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::event::{ActorId, Severity};

/// A single tamper-evident audit log entry.
///
/// Created once by a successful `append` on a chain, serialized
/// immediately, never mutated. Field order here fixes the reference wire
/// layout; `previous_hash` and `chain_hash` are 64 lowercase hex
/// characters each.
///
/// `chain_hash` is the SHA-256 of [`LogEntry::hash_payload`]; every entry's
/// `previous_hash` must equal the preceding entry's `chain_hash` (or the
/// genesis digest for the first entry), which is the invariant chain
/// verification checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// The device this chain belongs to (e.g. a serial number).
    pub device_id: String,

    /// UTC wall-clock time at append, `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub timestamp: String,

    /// Who triggered the event.
    pub user_id: ActorId,

    /// How serious the event is.
    pub severity: Severity,

    /// Free-text event description.
    pub message: String,

    /// Hex digest linking to the preceding entry (genesis digest for the
    /// first entry).
    pub previous_hash: String,

    /// Hex digest of this entry's hash payload.
    pub chain_hash: String,
}

impl LogEntry {
    /// Serialize to the flat JSON record handed to callers.
    ///
    /// serde_json escapes quotes, backslashes, and control characters, so
    /// every valid text message round-trips exactly.
    pub fn to_record(&self) -> String {
        serde_json::to_string(self).expect("LogEntry must always be serializable to JSON")
    }

    /// Rebuild the exact byte sequence that was digested to produce
    /// `chain_hash`.
    ///
    /// Strict verification recomputes the digest over this payload and
    /// compares it to the stored `chain_hash`.
    pub fn hash_payload(&self) -> String {
        codec::entry_payload(
            &self.device_id,
            &self.timestamp,
            self.user_id,
            self.severity,
            &self.message,
            &self.previous_hash,
        )
    }
}
