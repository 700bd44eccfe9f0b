//! Upstream catalog HTTP client
//!
//! Handles communication with the remote artist catalog API. Every request
//! carries a bounded timeout; non-success status codes and malformed
//! payloads are reported as distinct error kinds so the directory can log
//! them separately.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{SourceError, adapter, dto};
use crate::model::{Artist, RelationRecord};

/// User agent sent with every upstream request
const USER_AGENT: &str = concat!("ArtistAtlas/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the artist catalog API
pub struct UpstreamClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    /// Create a new client with the given base URL and per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the full artist collection from `<base>/artists`
    pub async fn fetch_all_artists(&self) -> Result<Vec<Artist>, SourceError> {
        let url = format!("{}/artists", self.base_url);
        let dtos: Vec<dto::ArtistDto> = self.get_json(&url).await?;
        Ok(dtos.into_iter().map(adapter::to_artist).collect())
    }

    /// Fetch one artist's relation data from its reference URL
    pub async fn fetch_relations(&self, url: &str) -> Result<RelationRecord, SourceError> {
        let dto: dto::RelationDto = self.get_json(url).await?;
        Ok(adapter::to_relation(dto))
    }

    /// Send a GET request and decode the JSON response
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::BadStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::BadPayload(e.to_string()))
    }
}
