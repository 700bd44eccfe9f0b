//! Remote source client - mirrors the upstream artist catalog API.
//!
//! # Architecture
//!
//! - **DTOs** (`dto.rs`) - Exact upstream JSON response shapes
//! - **Adapter** (`adapter.rs`) - Converts DTOs to our domain models
//! - **Client** (`client.rs`) - HTTP client with bounded timeouts
//! - **Traits** (`traits.rs`) - `ArtistSource` abstraction for mocking
//!
//! Upstream responses never leak past this module: everything is converted
//! to the types in [`crate::model`] before the directory sees it.

pub mod adapter;
pub mod client;
pub mod dto;
pub mod traits;

pub use client::UpstreamClient;
pub use traits::ArtistSource;

/// Errors from the upstream source, distinguished by kind so callers can
/// log and report them distinctly.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// Could not reach upstream at all (DNS, connect, timeout)
    #[error("upstream unreachable: {0}")]
    Unreachable(String),

    /// Upstream reachable but answered with a non-success status
    #[error("upstream responded with HTTP {status}")]
    BadStatus { status: u16 },

    /// Upstream answered 2xx but the payload did not decode
    #[error("upstream payload malformed: {0}")]
    BadPayload(String),
}
