//! Listing filter: criteria normalization and the pure filter engine.
//!
//! Raw query strings are normalized once by [`parse_filter_criteria`] so
//! [`apply`] never sees malformed input and keeps no error path.

use std::collections::BTreeSet;

use crate::model::{Artist, FilterCriteria, MAX_CREATION_YEAR};

/// Normalize raw string parameters into well-formed [`FilterCriteria`].
///
/// Malformed values fall back to permissive defaults rather than erroring:
/// an unparsable minimum becomes 0, an unparsable or zero maximum becomes
/// [`MAX_CREATION_YEAR`], and member counts that are not positive integers
/// are skipped.
pub fn parse_filter_criteria(
    min_year: Option<&str>,
    max_year: Option<&str>,
    member_counts: &[String],
) -> FilterCriteria {
    let min_creation_year = min_year
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .unwrap_or(0);

    let max_creation_year = max_year
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .filter(|&year| year != 0)
        .unwrap_or(MAX_CREATION_YEAR);

    let member_counts: BTreeSet<usize> = member_counts
        .iter()
        .filter_map(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&count| count > 0)
        .collect();

    FilterCriteria {
        min_creation_year,
        max_creation_year,
        member_counts,
    }
}

/// Apply the criteria to a collection, preserving its order.
///
/// Predicates are conjunctive: the creation year must lie in the inclusive
/// bounds AND, when the member-count set is non-empty, the artist's member
/// count must be in it. An empty set means "no constraint".
pub fn apply<'a>(artists: &'a [Artist], criteria: &FilterCriteria) -> Vec<&'a Artist> {
    artists
        .iter()
        .filter(|artist| {
            artist.creation_year >= criteria.min_creation_year
                && artist.creation_year <= criteria.max_creation_year
        })
        .filter(|artist| {
            criteria.member_counts.is_empty()
                || criteria.member_counts.contains(&artist.members.len())
        })
        .collect()
}
