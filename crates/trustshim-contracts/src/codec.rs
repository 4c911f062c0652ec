//! Entry codec: hash payload layout and targeted field extraction.
//!
//! The hash payload is the pipe-delimited concatenation
//!
//! ```text
//! device_id|timestamp|actor_code|severity_code|message|previous_hash_hex
//! ```
//!
//! defined in exactly one place ([`entry_payload`]) so the append path and
//! the strict verifier can never drift apart.
//!
//! Extraction is permissive about everything except the digest fields:
//! unknown fields and any field ordering are accepted, but a record whose
//! digest fields are absent or not 64 lowercase hex characters yields
//! `None` — the caller treats that as a chain validity failure.

use serde::Deserialize;

use crate::entry::LogEntry;
use crate::event::{ActorId, Severity};

/// Build the byte sequence an entry's `chain_hash` is computed over.
pub fn entry_payload(
    device_id: &str,
    timestamp: &str,
    actor: ActorId,
    severity: Severity,
    message: &str,
    previous_hash: &str,
) -> String {
    format!(
        "{}|{}|{}|{}|{}|{}",
        device_id,
        timestamp,
        actor.code(),
        severity.code(),
        message,
        previous_hash
    )
}

/// The two digest fields of a serialized entry.
///
/// Deserialization ignores every other field, so extraction tolerates
/// reordered or extended records.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainLinks {
    pub previous_hash: String,
    pub chain_hash: String,
}

/// Extract the digest fields from a serialized entry.
///
/// Returns `None` when the record is not a JSON object, a digest field is
/// missing, or a digest field is not 64 lowercase hex characters.
pub fn extract_links(record: &str) -> Option<ChainLinks> {
    let links: ChainLinks = serde_json::from_str(record).ok()?;
    if !is_hex_digest(&links.previous_hash) || !is_hex_digest(&links.chain_hash) {
        return None;
    }
    Some(links)
}

/// Parse a full entry for strict (recompute-and-compare) verification.
///
/// Returns `None` on any malformation, including unknown actor or severity
/// codes and malformed digest fields.
pub fn parse_entry(record: &str) -> Option<LogEntry> {
    let entry: LogEntry = serde_json::from_str(record).ok()?;
    if !is_hex_digest(&entry.previous_hash) || !is_hex_digest(&entry.chain_hash) {
        return None;
    }
    Some(entry)
}

/// True when `s` is the canonical wire form of a digest: 64 lowercase hex
/// characters.
pub fn is_hex_digest(s: &str) -> bool {
    s.len() == 64 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use crate::entry::LogEntry;
    use crate::event::{ActorId, Severity};

    use super::{extract_links, is_hex_digest, parse_entry};

    /// A well-formed entry with placeholder digests.
    fn make_entry(message: &str) -> LogEntry {
        LogEntry {
            device_id: "PUMP-001".to_string(),
            timestamp: "2026-01-15T09:30:00.123Z".to_string(),
            user_id: ActorId::Operator,
            severity: Severity::Warning,
            message: message.to_string(),
            previous_hash: "11".repeat(32),
            chain_hash: "22".repeat(32),
        }
    }

    #[test]
    fn test_round_trip_plain_message() {
        let entry = make_entry("infusion started");
        let record = entry.to_record();
        assert_eq!(parse_entry(&record), Some(entry));
    }

    /// Messages with structurally significant characters must survive
    /// serialization and parsing byte-for-byte.
    #[test]
    fn test_round_trip_escaped_content() {
        let hostile = "quote:\" backslash:\\ newline:\n tab:\t bell:\u{7} null:\u{0} ünïcodé";
        let entry = make_entry(hostile);
        let record = entry.to_record();
        let parsed = parse_entry(&record).expect("record must parse");
        assert_eq!(parsed.message, hostile);
        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_extract_links_reference_record() {
        let entry = make_entry("event");
        let links = extract_links(&entry.to_record()).expect("links must extract");
        assert_eq!(links.previous_hash, entry.previous_hash);
        assert_eq!(links.chain_hash, entry.chain_hash);
    }

    /// Field order is not significant and unknown fields are ignored.
    #[test]
    fn test_extract_links_tolerates_reordering_and_extras() {
        let record = format!(
            "{{\"chain_hash\":\"{}\",\"vendor_extension\":42,\"previous_hash\":\"{}\"}}",
            "ab".repeat(32),
            "cd".repeat(32)
        );
        let links = extract_links(&record).expect("reordered record must extract");
        assert_eq!(links.previous_hash, "cd".repeat(32));
        assert_eq!(links.chain_hash, "ab".repeat(32));
    }

    #[test]
    fn test_extract_links_missing_field() {
        let record = format!("{{\"previous_hash\":\"{}\"}}", "ab".repeat(32));
        assert_eq!(extract_links(&record), None);
    }

    #[test]
    fn test_extract_links_rejects_malformed_digests() {
        // Too short.
        let record = "{\"previous_hash\":\"abcd\",\"chain_hash\":\"abcd\"}";
        assert_eq!(extract_links(record), None);

        // Uppercase hex is not the canonical wire form.
        let record = format!(
            "{{\"previous_hash\":\"{}\",\"chain_hash\":\"{}\"}}",
            "AB".repeat(32),
            "cd".repeat(32)
        );
        assert_eq!(extract_links(&record), None);
    }

    #[test]
    fn test_extract_links_not_json() {
        assert_eq!(extract_links("not a record"), None);
        assert_eq!(extract_links(""), None);
    }

    #[test]
    fn test_parse_entry_rejects_unknown_codes() {
        let entry = make_entry("event");
        let record = entry.to_record().replace("\"severity\":2", "\"severity\":9");
        assert_eq!(parse_entry(&record), None);
    }

    #[test]
    fn test_is_hex_digest() {
        assert!(is_hex_digest(&"0f".repeat(32)));
        assert!(!is_hex_digest(&"0F".repeat(32)));
        assert!(!is_hex_digest(&"0f".repeat(31)));
        assert!(!is_hex_digest(&"xy".repeat(32)));
    }

    /// The payload layout is the stable contract between append and strict
    /// verification.
    #[test]
    fn test_hash_payload_layout() {
        let entry = make_entry("dose changed");
        assert_eq!(
            entry.hash_payload(),
            format!(
                "PUMP-001|2026-01-15T09:30:00.123Z|2|2|dose changed|{}",
                "11".repeat(32)
            )
        );
    }
}
