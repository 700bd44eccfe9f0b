//! Ranked prefix/substring/member search over the artist collection.
//!
//! Three tiers, each a full scan in collection order, accumulating into one
//! deduplicated list that stops at [`RESULT_CAP`]:
//!
//! 1. artist name starts with the query
//! 2. artist name contains the query
//! 3. any member name contains the query
//!
//! The tiering is a relevance ranking: a prefix match on the artist's own
//! name outranks a match buried in a member's name. Ties within a tier are
//! broken by original collection position.

use crate::model::{Artist, SearchResultItem};

/// Fixed cap on the number of search results.
pub const RESULT_CAP: usize = 8;

/// Search the collection, case-insensitively, returning at most
/// [`RESULT_CAP`] deduplicated results in tier order.
///
/// An empty or whitespace-only query yields an empty result, never the
/// full collection.
pub fn search(artists: &[Artist], query: &str) -> Vec<SearchResultItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let tiers: [&dyn Fn(&Artist) -> bool; 3] = [
        &|a: &Artist| a.name.to_lowercase().starts_with(&query),
        &|a: &Artist| a.name.to_lowercase().contains(&query),
        &|a: &Artist| a.members.iter().any(|m| m.to_lowercase().contains(&query)),
    ];

    let mut results: Vec<SearchResultItem> = Vec::with_capacity(RESULT_CAP);
    for matches in tiers {
        for artist in artists {
            if results.len() == RESULT_CAP {
                return results;
            }
            // Dedup by id across tiers
            if results.iter().any(|item| item.id == artist.id) {
                continue;
            }
            if matches(artist) {
                results.push(SearchResultItem::from(artist));
            }
        }
    }
    results
}
