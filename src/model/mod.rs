//! Core data models for the artist directory.
//!
//! Defines the primary entities: [`Artist`], [`RelationRecord`], and the
//! query-side types [`FilterCriteria`] and [`SearchResultItem`]. These are
//! OUR types - upstream API responses are converted into them by the
//! `source` adapters and never leak past that boundary.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// One record in the mirrored catalog.
///
/// Ids are assigned by the upstream source; the directory never generates
/// one. The collection held by the directory cache is the single source of
/// truth - records are immutable once populated.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    /// Source-assigned identifier (positive, unique)
    pub id: u32,
    /// Band or artist name
    pub name: String,
    /// Cover image URL
    pub image: String,
    /// Member names; count is significant for filtering
    pub members: Vec<String>,
    /// Year the group was formed
    pub creation_year: i32,
    /// First album release date, as upstream formats it
    pub first_album: String,
    /// URL of the per-artist locations resource
    pub locations_ref: String,
    /// URL of the per-artist concert dates resource
    pub concert_dates_ref: String,
    /// URL of the per-artist relations resource
    pub relations_ref: String,
}

/// Per-artist touring schedule, fetched on demand for detail views.
///
/// Never cached across requests. An empty `dates_locations` mapping means
/// "no known relations", not an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationRecord {
    /// Expected to match the artist's id
    pub id: u32,
    /// Location key -> ordered concert dates
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

/// Default upper creation-year bound.
///
/// Comfortably beyond any real formation year so an absent upper bound
/// never excludes everything.
pub const MAX_CREATION_YEAR: i32 = 2030;

/// Normalized listing filters.
///
/// Always well-formed by the time it reaches the filter engine: raw query
/// strings are normalized by [`crate::directory::filter::parse_filter_criteria`].
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Inclusive lower creation-year bound
    pub min_creation_year: i32,
    /// Inclusive upper creation-year bound
    pub max_creation_year: i32,
    /// Accepted group sizes; empty means "no constraint", never "match nothing"
    pub member_counts: BTreeSet<usize>,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            min_creation_year: 0,
            max_creation_year: MAX_CREATION_YEAR,
            member_counts: BTreeSet::new(),
        }
    }
}

/// Minimal projection of an [`Artist`] returned by search.
///
/// Serializes to the `{id, name, image}` shape the search payload uses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResultItem {
    pub id: u32,
    pub name: String,
    pub image: String,
}

impl From<&Artist> for SearchResultItem {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
            image: artist.image.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_criteria_defaults_are_permissive() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.min_creation_year, 0);
        assert_eq!(criteria.max_creation_year, MAX_CREATION_YEAR);
        assert!(criteria.member_counts.is_empty());
    }

    #[test]
    fn test_search_result_projection() {
        let artist = Artist {
            id: 7,
            name: "Foo Fighters".to_string(),
            image: "https://example.com/foo.jpg".to_string(),
            members: vec!["Dave Grohl".to_string()],
            creation_year: 1994,
            first_album: "04-07-1995".to_string(),
            locations_ref: String::new(),
            concert_dates_ref: String::new(),
            relations_ref: String::new(),
        };
        let item = SearchResultItem::from(&artist);
        assert_eq!(item.id, 7);
        assert_eq!(item.name, "Foo Fighters");
        assert_eq!(item.image, "https://example.com/foo.jpg");
    }

    #[test]
    fn test_search_result_serializes_minimal_shape() {
        let item = SearchResultItem {
            id: 1,
            name: "Queen".to_string(),
            image: "https://example.com/queen.jpg".to_string(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Queen",
                "image": "https://example.com/queen.jpg"
            })
        );
    }
}
