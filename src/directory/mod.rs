//! The cache-and-search core of the directory service.
//!
//! # Architecture
//!
//! - **Cache** (`cache.rs`) - Lazy single-flight population of the artist
//!   collection from the upstream source
//! - **Filter** (`filter.rs`) - Criteria normalization plus the pure,
//!   order-preserving filter engine
//! - **Search** (`search.rs`) - Three-tier ranked search with a fixed cap
//! - **[`Directory`]** - The query surface handed to the presentation
//!   layer: list, detail, search
//!
//! Relation data is enrichment, not a correctness requirement: a detail
//! view still renders when the relations fetch fails, with an empty mapping
//! and a logged warning.

pub mod cache;
pub mod filter;
pub mod search;

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{Error, Result};
use crate::model::{Artist, FilterCriteria, SearchResultItem};
use crate::source::ArtistSource;
use cache::ArtistCache;

/// A single artist plus its on-demand relation enrichment.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistDetail<'a> {
    pub artist: &'a Artist,
    /// Location key -> concert dates; empty when relations were unavailable
    pub relations: BTreeMap<String, Vec<String>>,
}

/// Directory service: mirrors the remote catalog in memory and answers
/// list, detail, and search queries against it.
///
/// Cheap to share behind an [`std::sync::Arc`]; the collection is read by
/// many concurrent callers and written by at most one population event.
pub struct Directory<S: ArtistSource> {
    source: S,
    cache: ArtistCache,
}

impl<S: ArtistSource> Directory<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: ArtistCache::new(),
        }
    }

    /// The full cached collection, populating it on first access.
    pub async fn artists(&self) -> Result<&[Artist]> {
        Ok(self.cache.get_or_populate(&self.source).await?)
    }

    /// Filtered listing, preserving the collection's order.
    pub async fn list(&self, criteria: &FilterCriteria) -> Result<Vec<&Artist>> {
        let artists = self.artists().await?;
        Ok(filter::apply(artists, criteria))
    }

    /// Single-record lookup enriched with relation data.
    ///
    /// A relation fetch failure is downgraded to an empty mapping plus a
    /// warning; the artist's own fields always come through. An unknown id
    /// is [`Error::NotFound`].
    pub async fn detail(&self, id: u32) -> Result<ArtistDetail<'_>> {
        let artists = self.artists().await?;
        let artist = artists
            .iter()
            .find(|a| a.id == id)
            .ok_or(Error::NotFound(id))?;

        let relations = match self.source.fetch_relations(&artist.relations_ref).await {
            Ok(record) => record.dates_locations,
            Err(err) => {
                warn!(artist_id = id, error = %err, "could not load relations, rendering without them");
                BTreeMap::new()
            }
        };

        Ok(ArtistDetail { artist, relations })
    }

    /// Ranked, capped, deduplicated search over the collection.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultItem>> {
        let artists = self.artists().await?;
        Ok(search::search(artists, query))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::RelationRecord;
    use crate::source::SourceError;
    use crate::source::traits::mocks::MockSource;
    use crate::test_utils::artist;

    fn sample() -> Vec<Artist> {
        vec![
            artist(1, "Queen", 4, 1970),
            artist(2, "Queens of the Stone Age", 5, 1996),
        ]
    }

    #[tokio::test]
    async fn test_list_filters_by_year_range() {
        let directory = Directory::new(MockSource::with_artists(sample()));
        let criteria = filter::parse_filter_criteria(Some("1990"), Some("2000"), &[]);

        let listed = directory.list(&criteria).await.unwrap();
        let ids: Vec<u32> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[tokio::test]
    async fn test_search_finds_both_queens_in_order() {
        let directory = Directory::new(MockSource::with_artists(sample()));
        let results = directory.search("queen").await.unwrap();
        let ids: Vec<u32> = results.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_detail_includes_relations() {
        let mut dates = BTreeMap::new();
        dates.insert("london-uk".to_string(), vec!["12-07-1986".to_string()]);
        let source = MockSource::with_artists(sample()).with_relations(Ok(RelationRecord {
            id: 1,
            dates_locations: dates.clone(),
        }));
        let directory = Directory::new(source);

        let detail = directory.detail(1).await.unwrap();
        assert_eq!(detail.artist.name, "Queen");
        assert_eq!(detail.relations, dates);
    }

    #[tokio::test]
    async fn test_detail_survives_relation_fetch_failure() {
        let source = MockSource::with_artists(sample())
            .with_relations(Err(SourceError::Unreachable("timed out".to_string())));
        let directory = Directory::new(source);

        let detail = directory.detail(1).await.unwrap();
        assert_eq!(detail.artist.id, 1);
        assert!(detail.relations.is_empty());
    }

    #[tokio::test]
    async fn test_detail_unknown_id_is_not_found() {
        let directory = Directory::new(MockSource::with_artists(sample()));
        let err = directory.detail(99).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(99)));
    }

    #[tokio::test]
    async fn test_population_failure_propagates_and_retries() {
        let source = MockSource::with_artists(sample()).failing_first(1);
        let directory = Directory::new(source);

        let err = directory.search("queen").await.unwrap_err();
        assert!(matches!(err, Error::Source(SourceError::Unreachable(_))));

        // The failed attempt left the cache empty; this call refetches
        let results = directory.search("queen").await.unwrap();
        assert_eq!(results.len(), 2);
    }
}
