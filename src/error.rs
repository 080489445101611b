use thiserror::Error;

/// Errors surfaced by the feed boundary.
///
/// Every ranking call is read-only and atomic, so failures are local to the
/// request; nothing here is fatal to the serving process.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The caller supplied a filter value that cannot be interpreted.
    /// Surfaced as a client-input error, never retried.
    #[error("invalid feed filter: {0}")]
    InvalidFilter(String),

    /// The storage collaborator failed. Propagated unmodified; retry policy
    /// belongs to the storage boundary, not the ranking core.
    #[error("catalog storage error: {0}")]
    Storage(#[from] anyhow::Error),
}
