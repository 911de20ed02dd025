//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`FastNomadsError`] via `From`.

/// Top-level error returned by application services and ports.
#[derive(Debug, thiserror::Error)]
pub enum FastNomadsError {
    /// A domain invariant was violated by caller-supplied data.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The storage layer failed (connection, constraint, decoding, …).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations detected before reaching storage.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name is {len} characters long, at most {max} are allowed")]
    NameTooLong { len: usize, max: usize },
}
