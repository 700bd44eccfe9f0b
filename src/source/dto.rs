//! Upstream API Data Transfer Objects
//!
//! These types match EXACTLY what the catalog API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the source module - convert to domain types.

use std::collections::BTreeMap;

use serde::Deserialize;

/// One element of the `GET <base>/artists` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: u32,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub members: Vec<String>,
    /// Formation year; upstream calls it `creationDate`
    pub creation_date: i32,
    pub first_album: String,
    /// URL of the locations resource, not inline data
    pub locations: String,
    pub concert_dates: String,
    pub relations: String,
}

/// Response of `GET <relations url>`: `{id, datesLocations: {location: [dates...]}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDto {
    pub id: u32,
    /// Absent or empty means "no known relations"
    #[serde(default)]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artist_dto_decodes_upstream_shape() {
        let json = r#"{
            "id": 1,
            "name": "Queen",
            "image": "https://example.com/queen.jpg",
            "members": ["Freddie Mercury", "Brian May", "Roger Taylor", "John Deacon"],
            "creationDate": 1970,
            "firstAlbum": "14-12-1973",
            "locations": "https://example.com/api/locations/1",
            "concertDates": "https://example.com/api/dates/1",
            "relations": "https://example.com/api/relation/1"
        }"#;
        let dto: ArtistDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 1);
        assert_eq!(dto.creation_date, 1970);
        assert_eq!(dto.first_album, "14-12-1973");
        assert_eq!(dto.members.len(), 4);
        assert_eq!(dto.relations, "https://example.com/api/relation/1");
    }

    #[test]
    fn test_relation_dto_decodes_dates_locations() {
        let json = r#"{
            "id": 1,
            "datesLocations": {
                "london-uk": ["12-07-1986", "11-07-1986"],
                "osaka-japan": ["11-05-1985"]
            }
        }"#;
        let dto: RelationDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 1);
        assert_eq!(dto.dates_locations["london-uk"].len(), 2);
        assert_eq!(dto.dates_locations["osaka-japan"], vec!["11-05-1985"]);
    }

    #[test]
    fn test_relation_dto_missing_mapping_defaults_empty() {
        let dto: RelationDto = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(dto.id, 3);
        assert!(dto.dates_locations.is_empty());
    }
}
