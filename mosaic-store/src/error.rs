//! Store and synchronization error types.

use mosaic_api::{ContainerId, ElementId};
use thiserror::Error;

/// Failures of the remote synchronization protocol.
///
/// None of these are retried; each is surfaced to the user once through the
/// [`crate::AlertSink`] and returned to the caller, leaving prior committed
/// state intact.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("server error: {0}")]
    Server(String),
}

/// Failures of local store operations. These indicate data-integrity
/// problems (stale ids), not user errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("unknown container: {0}")]
    UnknownContainer(ContainerId),
}
