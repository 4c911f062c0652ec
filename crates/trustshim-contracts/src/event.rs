//! Actor and severity classifications.
//!
//! Both enumerations serialize as their small-integer codes — the codes,
//! not the names, are what enters the hash payload and the wire record, so
//! they are fixed for the life of the format.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Who (or what) triggered an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ActorId {
    System = 0,
    Admin = 1,
    Operator = 2,
    Service = 3,
    /// Access attempts that failed authentication or authorization.
    Unauthorized = 255,
}

impl ActorId {
    /// The wire code embedded in entries and hash payloads.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ActorId> for u8 {
    fn from(actor: ActorId) -> u8 {
        actor as u8
    }
}

impl TryFrom<u8> for ActorId {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ActorId::System),
            1 => Ok(ActorId::Admin),
            2 => Ok(ActorId::Operator),
            3 => Ok(ActorId::Service),
            255 => Ok(ActorId::Unauthorized),
            other => Err(format!("unknown actor code: {other}")),
        }
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActorId::System => "System",
            ActorId::Admin => "Admin",
            ActorId::Operator => "Operator",
            ActorId::Service => "Service",
            ActorId::Unauthorized => "Unauthorized",
        };
        f.write_str(name)
    }
}

/// Event severity, ordered by increasing seriousness.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Severity {
    Debug = 0,
    Info = 1,
    Warning = 2,
    Error = 3,
    Critical = 4,
}

impl Severity {
    /// The wire code embedded in entries and hash payloads.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity as u8
    }
}

impl TryFrom<u8> for Severity {
    // Spelled concretely: `Self::Error` would be ambiguous with the
    // `Severity::Error` variant.
    type Error = String;

    fn try_from(code: u8) -> Result<Self, String> {
        match code {
            0 => Ok(Severity::Debug),
            1 => Ok(Severity::Info),
            2 => Ok(Severity::Warning),
            3 => Ok(Severity::Error),
            4 => Ok(Severity::Critical),
            other => Err(format!("unknown severity code: {other}")),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "Debug",
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Critical => "Critical",
        };
        f.write_str(name)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
