//! Trait definitions for the upstream source.
//!
//! The directory depends on [`ArtistSource`] rather than on the concrete
//! HTTP client, so tests can substitute mock sources and count or fail
//! fetches deliberately.

use async_trait::async_trait;

use super::{SourceError, UpstreamClient};
use crate::model::{Artist, RelationRecord};

/// Abstraction over the remote catalog.
///
/// Implement this trait to create mock implementations for testing.
#[async_trait]
pub trait ArtistSource: Send + Sync {
    /// Fetch the complete artist collection.
    async fn fetch_all_artists(&self) -> Result<Vec<Artist>, SourceError>;

    /// Fetch one artist's relation data from its reference URL.
    async fn fetch_relations(&self, url: &str) -> Result<RelationRecord, SourceError>;
}

#[async_trait]
impl ArtistSource for UpstreamClient {
    async fn fetch_all_artists(&self) -> Result<Vec<Artist>, SourceError> {
        self.fetch_all_artists().await
    }

    async fn fetch_relations(&self, url: &str) -> Result<RelationRecord, SourceError> {
        self.fetch_relations(url).await
    }
}
