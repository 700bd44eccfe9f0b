//! Lazy single-flight cache for the artist collection.
//!
//! Lifecycle is Empty -> Populated, driven by the first query that needs
//! data. Population is gated through [`tokio::sync::OnceCell`]: concurrent
//! cold-start callers are serialized so at most one upstream fetch is in
//! flight at a time, and a failed fetch leaves the cache Empty so the next
//! caller retries. There is no Populated -> Empty transition.

use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::model::Artist;
use crate::source::{ArtistSource, SourceError};

/// In-memory artist collection with exactly-once lazy population.
#[derive(Debug, Default)]
pub struct ArtistCache {
    collection: OnceCell<Vec<Artist>>,
}

impl ArtistCache {
    pub fn new() -> Self {
        Self {
            collection: OnceCell::new(),
        }
    }

    /// Return the cached collection, populating it from `source` if empty.
    ///
    /// All callers waiting on a failed population attempt see the fetch
    /// error; the cache stays empty for retry. Once populated, this never
    /// touches the network again.
    pub async fn get_or_populate<S>(&self, source: &S) -> Result<&[Artist], SourceError>
    where
        S: ArtistSource + ?Sized,
    {
        let collection = self
            .collection
            .get_or_try_init(|| async {
                debug!("cache empty, fetching artist collection from upstream");
                let artists = source.fetch_all_artists().await?;
                info!(count = artists.len(), "artist collection populated");
                Ok(artists)
            })
            .await?;
        Ok(collection.as_slice())
    }

    /// Whether the Empty -> Populated transition has happened.
    pub fn is_populated(&self) -> bool {
        self.collection.initialized()
    }
}
