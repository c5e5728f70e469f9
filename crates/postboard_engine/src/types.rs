use std::time::SystemTime;

use postboard_core::{PostRecord, UserRecord};
use thiserror::Error;

/// Why a fetch failed. Every kind surfaces to the user as one message
/// string; none are retried automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("malformed response body")]
    Decode,
    #[error("network error")]
    Network,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// Completion of a posts fetch; echoes the generation it was issued
    /// under so the core can discard superseded results.
    PostsFetched {
        generation: u64,
        result: Result<Vec<PostRecord>, FetchError>,
    },
    /// Outcome of one background users revalidation pass.
    UsersRefreshed {
        fetched_at: SystemTime,
        result: Result<Vec<UserRecord>, FetchError>,
    },
}
