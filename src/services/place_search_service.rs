use reqwest::Client;
use serde::Deserialize;
use std::env;
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::models::place::{maps_search_url, GeoPoint, Place};

const PLACES_API_BASE: &str = "https://maps.googleapis.com/maps/api/place";

/// Mobile networks are slow; the original client allowed 30s per query.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    place_id: Option<String>,
    name: String,
    formatted_address: Option<String>,
    rating: Option<f32>,
    user_ratings_total: Option<u32>,
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    location: Option<GeoPoint>,
}

impl RawPlace {
    fn into_place(self) -> Place {
        let address = self.formatted_address.unwrap_or_default();
        let maps_url = maps_search_url(&format!("{} {}", self.name, address));
        Place {
            place_id: self.place_id,
            name: self.name,
            address,
            types: self.types,
            rating: self.rating,
            rating_count: self.user_ratings_total,
            price_level: self.price_level,
            maps_url,
            location: self.geometry.and_then(|g| g.location),
        }
    }
}

#[derive(Debug)]
pub enum PlaceSearchError {
    /// No credential configured; callers run the offline path instead.
    MissingCredential,
    HttpError(reqwest::Error),
    /// Provider answered with a non-OK status for this query.
    ProviderStatus { status: String, message: String },
    ResponseError(String),
}

impl fmt::Display for PlaceSearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceSearchError::MissingCredential => {
                write!(f, "GOOGLE_PLACES_API_KEY not set")
            }
            PlaceSearchError::HttpError(err) => write!(f, "HTTP error: {}", err),
            PlaceSearchError::ProviderStatus { status, message } => {
                write!(f, "provider status {}: {}", status, message)
            }
            PlaceSearchError::ResponseError(msg) => write!(f, "response error: {}", msg),
        }
    }
}

impl Error for PlaceSearchError {}

impl From<reqwest::Error> for PlaceSearchError {
    fn from(err: reqwest::Error) -> Self {
        PlaceSearchError::HttpError(err)
    }
}

/// Seam between the itinerary engine and the external place-search index.
/// Implementations return a bounded, provider-ranked list for a text query;
/// a failed or rejected query is an error the caller absorbs as zero results.
pub trait PlaceSearch {
    async fn text_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Place>, PlaceSearchError>;
}

#[derive(Clone)]
pub struct GooglePlacesClient {
    client: Client,
    api_key: String,
}

impl GooglePlacesClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client, api_key }
    }

    pub fn from_env() -> Result<Self, PlaceSearchError> {
        let api_key = env::var("GOOGLE_PLACES_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(PlaceSearchError::MissingCredential)?;
        Ok(Self::new(api_key))
    }
}

impl PlaceSearch for GooglePlacesClient {
    async fn text_search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<Place>, PlaceSearchError> {
        let url = format!("{}/textsearch/json", PLACES_API_BASE);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("key", self.api_key.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlaceSearchError::ResponseError(format!(
                "search request failed with status {}: {}",
                status, body
            )));
        }

        let parsed: TextSearchResponse = response
            .json()
            .await
            .map_err(|e| PlaceSearchError::ResponseError(format!("failed to parse response: {}", e)))?;

        if parsed.status != "OK" {
            if parsed.status == "ZERO_RESULTS" {
                return Ok(Vec::new());
            }
            return Err(PlaceSearchError::ProviderStatus {
                status: parsed.status,
                message: parsed.error_message.unwrap_or_default(),
            });
        }

        Ok(parsed
            .results
            .into_iter()
            .take(max_results)
            .map(RawPlace::into_place)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_place_conversion_builds_map_link() {
        let raw = RawPlace {
            place_id: Some("id-1".to_string()),
            name: "Baga Beach".to_string(),
            formatted_address: Some("Baga, Goa".to_string()),
            rating: Some(4.4),
            user_ratings_total: Some(900),
            price_level: None,
            types: vec!["natural_feature".to_string()],
            geometry: None,
        };
        let place = raw.into_place();
        assert_eq!(place.identity(), "id-1");
        assert!(place.maps_url.contains("maps.google.com"));
        assert!(place.maps_url.contains("Baga"));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_requires_credential() {
        std::env::remove_var("GOOGLE_PLACES_API_KEY");
        assert!(matches!(
            GooglePlacesClient::from_env(),
            Err(PlaceSearchError::MissingCredential)
        ));

        std::env::set_var("GOOGLE_PLACES_API_KEY", "test-key");
        assert!(GooglePlacesClient::from_env().is_ok());
        std::env::remove_var("GOOGLE_PLACES_API_KEY");
    }
}
