//! # trustshim-chain
//!
//! Per-device, append-only, SHA-256 hash-chained audit logging.
//!
//! ## Overview
//!
//! Every logged event is cryptographically bound to the one before it:
//! an entry's `chain_hash` digests its own fields *plus* the previous
//! entry's digest. Deleting, reordering, or editing historical entries
//! therefore becomes detectable by replaying the chain — see
//! `trustshim-verify`.
//!
//! ## Usage
//!
//! ```rust
//! use trustshim_chain::AuditChain;
//! use trustshim_contracts::{ActorId, Severity};
//!
//! let chain = AuditChain::new("PUMP-789012")?;
//! let entry = chain.append("Infusion started", ActorId::Operator, Severity::Info)?;
//! let record = entry.to_record(); // caller persists/transmits this
//! # Ok::<(), trustshim_contracts::TrustShimError>(())
//! ```

pub mod chain;
pub mod logger;

pub use chain::{entry_digest, genesis_digest, hash_entry, GENESIS_MARKER};
pub use logger::AuditChain;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use trustshim_contracts::{ActorId, Severity, TrustShimError};

    use super::{genesis_digest, AuditChain};

    /// Append three entries with distinct classifications.
    fn make_chain(device_id: &str) -> (AuditChain, Vec<trustshim_contracts::LogEntry>) {
        let chain = AuditChain::new(device_id).unwrap();
        let entries = vec![
            chain
                .append("POST: All systems nominal", ActorId::System, Severity::Info)
                .unwrap(),
            chain
                .append("Infusion started", ActorId::Operator, Severity::Info)
                .unwrap(),
            chain
                .append("Occlusion detected", ActorId::System, Severity::Warning)
                .unwrap(),
        ];
        (chain, entries)
    }

    /// Each entry's `previous_hash` equals its predecessor's `chain_hash`,
    /// and the first entry links to the genesis digest.
    #[test]
    fn test_chain_linkage() {
        let (_, entries) = make_chain("DEV-LINK");

        assert_eq!(entries[0].previous_hash, genesis_digest().to_hex());
        assert_eq!(entries[1].previous_hash, entries[0].chain_hash);
        assert_eq!(entries[2].previous_hash, entries[1].chain_hash);
    }

    /// The sequence counter equals the number of successful appends.
    #[test]
    fn test_sequence_monotonic() {
        let chain = AuditChain::new("DEV-SEQ").unwrap();
        assert_eq!(chain.sequence_number(), 0);

        for n in 1..=5 {
            chain
                .append("tick", ActorId::System, Severity::Debug)
                .unwrap();
            assert_eq!(chain.sequence_number(), n);
        }
    }

    /// `previous_hash()` tracks the head of the chain.
    #[test]
    fn test_head_accessor() {
        let chain = AuditChain::new("DEV-HEAD").unwrap();
        assert_eq!(chain.previous_hash(), genesis_digest().to_hex());

        let entry = chain
            .append("head moves", ActorId::Admin, Severity::Info)
            .unwrap();
        assert_eq!(chain.previous_hash(), entry.chain_hash);
    }

    /// An empty or whitespace-only device id is rejected at construction.
    #[test]
    fn test_empty_device_id_rejected() {
        for bad in ["", "   ", "\t"] {
            match AuditChain::new(bad) {
                Err(TrustShimError::InvalidDeviceId { .. }) => {}
                other => panic!("expected InvalidDeviceId for {bad:?}, got {other:?}"),
            }
        }
    }

    /// Chains are debuggable values — construction results can be printed
    /// in diagnostics and assertion messages.
    #[test]
    fn test_chain_is_debug() {
        let chain = AuditChain::new("DEV-DBG").unwrap();
        let rendered = format!("{chain:?}");
        assert!(rendered.contains("DEV-DBG"), "debug output: {rendered}");
    }

    /// All actor and severity classifications are loggable and preserved.
    #[test]
    fn test_actor_and_severity_round_trip() {
        let chain = AuditChain::new("DEV-CLASS").unwrap();
        let cases = [
            (ActorId::System, Severity::Debug),
            (ActorId::Admin, Severity::Info),
            (ActorId::Operator, Severity::Warning),
            (ActorId::Service, Severity::Error),
            (ActorId::Unauthorized, Severity::Critical),
        ];
        for (actor, severity) in cases {
            let entry = chain.append("classified event", actor, severity).unwrap();
            assert_eq!(entry.user_id, actor);
            assert_eq!(entry.severity, severity);
        }
        assert_eq!(chain.sequence_number(), cases.len() as u64);
    }

    /// Two chains with the same device id share the genesis link but
    /// diverge once timestamps differ.
    #[test]
    fn test_independent_chains() {
        let first = AuditChain::new("DEV-TWIN").unwrap();
        let second = AuditChain::new("DEV-TWIN").unwrap();

        let a = first
            .append("identical event", ActorId::System, Severity::Info)
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let b = second
            .append("identical event", ActorId::System, Severity::Info)
            .unwrap();

        assert_eq!(a.previous_hash, b.previous_hash, "both start at genesis");
        assert_ne!(a.timestamp, b.timestamp, "sleep guarantees distinct ms");
        assert_ne!(a.chain_hash, b.chain_hash);
    }

    /// Timestamps follow the millisecond-resolution UTC layout.
    #[test]
    fn test_timestamp_format() {
        let chain = AuditChain::new("DEV-TS").unwrap();
        let entry = chain
            .append("stamped", ActorId::System, Severity::Info)
            .unwrap();

        let ts = &entry.timestamp;
        assert_eq!(ts.len(), "YYYY-MM-DDTHH:MM:SS.mmmZ".len(), "timestamp: {ts}");
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
        assert!(ts.ends_with('Z'));
    }

    /// Appends from multiple threads interleave without losing entries —
    /// the mutex serializes writers.
    #[test]
    fn test_concurrent_appends_serialize() {
        use std::sync::Arc;

        let chain = Arc::new(AuditChain::new("DEV-MT").unwrap());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let chain = Arc::clone(&chain);
            handles.push(std::thread::spawn(move || {
                for _ in 0..25 {
                    chain
                        .append("concurrent event", ActorId::Service, Severity::Debug)
                        .unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(chain.sequence_number(), 100);
    }
}
