//! Application-wide error types.
//!
//! Library modules use specific error types via `thiserror`, while the
//! CLI/main boundary uses `anyhow` for convenient propagation. Upstream
//! failures keep their own taxonomy ([`crate::source::SourceError`]) so
//! callers can distinguish unreachable, bad-status, and bad-payload cases.
//!
//! No failure here may terminate the process: every entry point returns a
//! typed result to its caller.

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Upstream source failure (unreachable / bad status / bad payload)
    #[error(transparent)]
    Source(#[from] crate::source::SourceError),

    /// Valid query, no matching record
    #[error("no artist with id {0}")]
    NotFound(u32),

    /// Malformed id/year/member value supplied by the caller
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// Create an invalid-parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }
}
