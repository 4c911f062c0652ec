//! The per-device audit chain logger.

use std::sync::Mutex;

use chrono::Utc;
use tracing::debug;

use trustshim_contracts::{
    ActorId, LogEntry, Severity, TrustShimError, TrustShimResult,
};
use trustshim_digest::Digest;

use crate::chain::{genesis_digest, hash_entry};

/// Timestamp layout: UTC with millisecond resolution, e.g.
/// `2026-01-15T09:30:00.123Z`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// The mutable interior of an [`AuditChain`].
#[derive(Debug)]
struct ChainState {
    /// Digest of the most recent entry, or the genesis digest before any
    /// entry exists.
    previous_digest: Digest,

    /// Entries appended so far. Incremented exactly once per successful
    /// append, never decremented or reused.
    sequence: u64,
}

/// A tamper-evident, append-only audit chain for one device.
///
/// Every entry's hash payload embeds the digest of the entry before it, so
/// deleting, reordering, or modifying history breaks the chain in a way
/// verification detects. There is no way to unlog or amend a prior entry;
/// correcting a mistake means appending a new entry that references it.
///
/// # Thread safety
///
/// `append` and the accessors all take an internal `Mutex`, giving the
/// single-writer discipline the chain state requires and torn-read-free
/// snapshots. Independent chains (different devices) share nothing and need
/// no coordination.
#[derive(Debug)]
pub struct AuditChain {
    device_id: String,
    state: Mutex<ChainState>,
}

impl AuditChain {
    /// Create a chain for the given device identifier (e.g. a serial
    /// number).
    ///
    /// The starting `previous_digest` is the well-known genesis digest, so
    /// an empty chain's state is reproducible by any verifying party.
    ///
    /// # Errors
    ///
    /// Returns [`TrustShimError::InvalidDeviceId`] when `device_id` is
    /// empty or whitespace-only — every entry's payload depends on it, so
    /// a bad id is rejected before any entry can exist.
    pub fn new(device_id: impl Into<String>) -> TrustShimResult<Self> {
        let device_id = device_id.into();
        if device_id.trim().is_empty() {
            return Err(TrustShimError::InvalidDeviceId {
                reason: "device id must be non-empty".to_string(),
            });
        }

        Ok(Self {
            device_id,
            state: Mutex::new(ChainState {
                previous_digest: genesis_digest(),
                sequence: 0,
            }),
        })
    }

    /// Append one event to the chain and return the finished entry.
    ///
    /// Captures the current UTC time, digests the pipe-delimited payload
    /// (device id, timestamp, actor code, severity code, message, previous
    /// digest hex), then — as the only stateful side effect — advances
    /// `previous_digest` and the sequence counter.
    ///
    /// The returned entry is immutable; persisting or transmitting it is
    /// the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`TrustShimError::StatePoisoned`] only if a previous writer
    /// panicked while holding the state lock.
    pub fn append(
        &self,
        message: &str,
        actor: ActorId,
        severity: Severity,
    ) -> TrustShimResult<LogEntry> {
        let mut state = self.state.lock().map_err(|e| TrustShimError::StatePoisoned {
            reason: format!("chain state lock poisoned: {e}"),
        })?;

        let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
        let previous_hash = state.previous_digest.to_hex();

        let current = hash_entry(
            &self.device_id,
            &timestamp,
            actor,
            severity,
            message,
            &previous_hash,
        );

        let entry = LogEntry {
            device_id: self.device_id.clone(),
            timestamp,
            user_id: actor,
            severity,
            message: message.to_string(),
            previous_hash,
            chain_hash: current.to_hex(),
        };

        state.previous_digest = current;
        state.sequence += 1;

        debug!(
            device_id = %self.device_id,
            sequence = state.sequence,
            actor = %actor,
            severity = %severity,
            "audit entry appended"
        );

        Ok(entry)
    }

    /// The device identifier this chain was created with.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Hex snapshot of the current chain head — the last entry's
    /// `chain_hash`, or the genesis digest if nothing has been logged.
    pub fn previous_hash(&self) -> String {
        let state = self.state.lock().expect("chain state lock poisoned");
        state.previous_digest.to_hex()
    }

    /// Number of entries appended so far.
    pub fn sequence_number(&self) -> u64 {
        let state = self.state.lock().expect("chain state lock poisoned");
        state.sequence
    }
}
