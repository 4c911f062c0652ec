//! # trustshim-contracts
//!
//! Shared types for the TRUSTSHIM tamper-evident audit chain: the actor and
//! severity enumerations, the `LogEntry` record, the entry codec, and the
//! error taxonomy used across the workspace.
//!
//! The codec fixes the wire format: a flat JSON object whose digest fields
//! are 64 lowercase hex characters. Extraction is deliberately targeted —
//! the verifier only ever needs the two digest fields (plus the full record
//! in strict mode), and a record that fails to yield them is a chain
//! validity failure, never a panic.

pub mod codec;
pub mod entry;
pub mod error;
pub mod event;

pub use codec::ChainLinks;
pub use entry::LogEntry;
pub use error::{TrustShimError, TrustShimResult};
pub use event::{ActorId, Severity};
