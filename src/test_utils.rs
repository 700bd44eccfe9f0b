//! Test utilities and fixtures for artist-atlas tests.
//!
//! Builders for domain records so individual tests don't repeat the full
//! [`Artist`] struct literal.

use crate::model::Artist;

/// Build an artist with `member_count` generic member names.
pub fn artist(id: u32, name: &str, member_count: usize, creation_year: i32) -> Artist {
    let members = (1..=member_count).map(|i| format!("Member {i}")).collect();
    artist_record(id, name, members, creation_year)
}

/// Build an artist with explicitly named members.
pub fn artist_with_members(id: u32, name: &str, members: &[&str], creation_year: i32) -> Artist {
    let members = members.iter().map(|m| m.to_string()).collect();
    artist_record(id, name, members, creation_year)
}

fn artist_record(id: u32, name: &str, members: Vec<String>, creation_year: i32) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        image: format!("https://example.com/images/{id}.jpg"),
        members,
        creation_year,
        first_album: "01-01-1990".to_string(),
        locations_ref: format!("https://example.com/api/locations/{id}"),
        concert_dates_ref: format!("https://example.com/api/dates/{id}"),
        relations_ref: format!("https://example.com/api/relation/{id}"),
    }
}
