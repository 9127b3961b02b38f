use std::{num::NonZeroU32, sync::Arc};

use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub struct OmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl OmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String, rps: u32) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no OMDB_API_KEY provided - catalog requests will be rejected");
        }

        let limiter =
            Arc::new(RateLimiter::direct(Quota::per_second(NonZeroU32::new(rps.max(1)).unwrap())));
        Self { client, api_key, base_url, limiter }
    }

    /// Looks a single title up in the catalog. In-band failure payloads are
    /// rejected here, so callers only ever see successful record shapes.
    pub async fn fetch_title(&self, title: &str) -> AppResult<OmdbRecord> {
        self.limiter.until_ready().await;

        tracing::debug!(title = %title, "fetching movie from OMDb");

        let record: OmdbRecord = self
            .client
            .get(&self.base_url)
            .query(&[("apikey", self.api_key.as_str()), ("t", title), ("type", "movie")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(message) = record.failure() {
            return Err(AppError::Catalog(message.to_string()));
        }

        Ok(record)
    }
}

/// Raw OMDb payload with the catalog's own field names. Every field is
/// optional at the wire level; the mapper decides what is required.
#[derive(Debug, Default, Deserialize)]
pub struct OmdbRecord {
    #[serde(rename = "Response")]
    pub response: Option<String>,
    #[serde(rename = "Error")]
    pub error: Option<String>,
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "Year")]
    pub year: Option<String>,
    #[serde(rename = "Runtime")]
    pub runtime: Option<String>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Director")]
    pub director: Option<String>,
    #[serde(rename = "Actors")]
    pub actors: Option<String>,
    #[serde(rename = "Writer")]
    pub writer: Option<String>,
    #[serde(rename = "Language")]
    pub language: Option<String>,
    #[serde(rename = "Country")]
    pub country: Option<String>,
    #[serde(rename = "Awards")]
    pub awards: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    #[serde(rename = "imdbVotes")]
    pub imdb_votes: Option<String>,
    #[serde(rename = "BoxOffice")]
    pub box_office: Option<String>,
}

impl OmdbRecord {
    /// OMDb reports failures in-band as `{"Response":"False","Error":"..."}`.
    pub fn failure(&self) -> Option<&str> {
        (self.response.as_deref() == Some("False"))
            .then(|| self.error.as_deref().unwrap_or("unknown catalog error"))
    }
}
