//! Error handling for the metric sources

use crate::node::error::NodeError;
use serde::Serialize;
use std::io;
use std::time::Duration;
use thiserror::Error;

/// Which part of a refresh cycle an error belongs to.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, strum::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum FetchTag {
    #[strum(serialize = "health")]
    Health,
    #[strum(serialize = "peers")]
    Peers,
    #[strum(serialize = "version")]
    Version,
    #[strum(serialize = "balance")]
    Balance,
    #[strum(serialize = "dbsize")]
    #[serde(rename = "dbsize")]
    DbSize,
    #[strum(serialize = "memory-total-zero")]
    MemoryTotalZero,
}

impl FetchTag {
    /// The independent sources polled every cycle.
    pub const SOURCES: [FetchTag; 5] = [
        FetchTag::Health,
        FetchTag::Peers,
        FetchTag::Version,
        FetchTag::Balance,
        FetchTag::DbSize,
    ];
}

#[derive(Debug, Error)]
pub enum FetchCause {
    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("Filesystem error: {0}")]
    Filesystem(#[from] io::Error),

    #[error("No validator found for the configured public key")]
    NoValidator,

    #[error("Node reported a total memory of zero")]
    ZeroMemoryTotal,

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// A failure of one source, recovered locally by the refresh loop.
#[derive(Debug, Error)]
#[error("{tag}: {cause}")]
pub struct FetchError {
    pub tag: FetchTag,
    #[source]
    pub cause: FetchCause,
}

impl FetchError {
    pub fn new(tag: FetchTag, cause: impl Into<FetchCause>) -> Self {
        Self {
            tag,
            cause: cause.into(),
        }
    }
}
