//! Error types for host store operations.
//!
//! The tracker is a best-effort advisory layer: a failed store write is
//! logged and swallowed by the handler that attempted it, never surfaced to
//! the user as anything but the advisory messages the handlers already emit.

use tracker_core::ActorId;

/// A host document write was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("actor {0} is not known to the host")]
    ActorMissing(ActorId),

    #[error("host rejected write for actor {actor}: {reason}")]
    Rejected { actor: ActorId, reason: String },
}
