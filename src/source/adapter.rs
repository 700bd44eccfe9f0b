//! Converts upstream DTOs into domain models.
//!
//! Keeps the upstream field naming (`creationDate`, the reference URLs
//! named after their resources) out of the rest of the codebase.

use super::dto;
use crate::model::{Artist, RelationRecord};

/// Convert an upstream artist object into our domain [`Artist`].
pub fn to_artist(dto: dto::ArtistDto) -> Artist {
    Artist {
        id: dto.id,
        name: dto.name,
        image: dto.image,
        members: dto.members,
        creation_year: dto.creation_date,
        first_album: dto.first_album,
        locations_ref: dto.locations,
        concert_dates_ref: dto.concert_dates,
        relations_ref: dto.relations,
    }
}

/// Convert an upstream relation object into our domain [`RelationRecord`].
pub fn to_relation(dto: dto::RelationDto) -> RelationRecord {
    RelationRecord {
        id: dto.id,
        dates_locations: dto.dates_locations,
    }
}
