//! The fixed-size digest value produced by the engine.

use std::fmt;

/// A 32-byte SHA-256 digest.
///
/// Opaque and immutable once produced; comparable only by exact byte
/// equality. The hex form is always 64 lowercase characters — that is the
/// representation stored in serialized log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Digest length in bytes.
    pub const LEN: usize = 32;

    pub(crate) fn from_bytes(bytes: [u8; 32]) -> Self {
        Digest(bytes)
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex encoding, 64 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a hex-encoded digest.
    ///
    /// Returns `None` unless `s` decodes to exactly 32 bytes. Uppercase
    /// input is accepted here; callers that require the canonical lowercase
    /// wire form must check that separately.
    pub fn from_hex(s: &str) -> Option<Digest> {
        let bytes = hex::decode(s).ok()?;
        let bytes: [u8; 32] = bytes.try_into().ok()?;
        Some(Digest(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::Digest;

    #[test]
    fn test_hex_round_trip() {
        let d = Digest::from_bytes([0xab; 32]);
        let hex = d.to_hex();
        assert_eq!(hex.len(), 64);
        assert_eq!(Digest::from_hex(&hex), Some(d));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(Digest::from_hex(""), None);
        assert_eq!(Digest::from_hex("ab"), None, "too short");
        assert_eq!(
            Digest::from_hex(&"zz".repeat(32)),
            None,
            "non-hex characters"
        );
        assert_eq!(
            Digest::from_hex(&"ab".repeat(33)),
            None,
            "too long"
        );
    }

    #[test]
    fn test_display_is_lowercase_hex() {
        let d = Digest::from_bytes([0xFF; 32]);
        assert_eq!(d.to_string(), "ff".repeat(32));
    }
}
