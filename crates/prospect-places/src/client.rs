//! HTTP client for the Google Maps Places and Geocoding web services.
//!
//! Wraps `reqwest` with API key management, the shared `"status"` envelope
//! check, and typed response deserialization. Non-`"OK"` statuses surface as
//! [`PlacesError::Status`]; callers decide whether that ends their work.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::strategy::SearchRequest;
use crate::types::{
    DetailsResponse, GeocodeResponse, GeocodeResult, PlaceDetail, SearchResponse, STATUS_OK,
};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/";

const DETAILS_ENDPOINT: &str = "place/details/json";
const GEOCODE_ENDPOINT: &str = "geocode/json";

/// Fields requested from `place/details`; anything else is billed extra.
const DETAIL_FIELDS: &str = "name,formatted_phone_number,website";

/// Client for the places provider.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl PlacesClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Endpoint paths are joined onto the base, which only keeps the last
        // path segment if the base ends with a slash.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches one page of a text or nearby search.
    ///
    /// `page_token` is the `next_page_token` of the previous page, if any.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider returns a non-OK status
    ///   (including `ZERO_RESULTS`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] / [`PlacesError::MissingStatus`] if the
    ///   response does not match the expected shape.
    pub async fn search_page(
        &self,
        request: &SearchRequest,
        page_token: Option<&str>,
    ) -> Result<SearchResponse, PlacesError> {
        let endpoint = request.strategy().endpoint();
        let params = request.query_params();
        let mut pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        if let Some(token) = page_token {
            pairs.push(("pagetoken", token));
        }

        let url = self.build_url(endpoint, &pairs)?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body, endpoint)?;

        serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
            context: endpoint.to_owned(),
            source: e,
        })
    }

    /// Fetches the name, phone number and website of a place.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider returns a non-OK status.
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] / [`PlacesError::MissingStatus`] if the
    ///   response does not match the expected shape.
    pub async fn place_details(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = self.build_url(
            DETAILS_ENDPOINT,
            &[("place_id", place_id), ("fields", DETAIL_FIELDS)],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body, DETAILS_ENDPOINT)?;

        let envelope: DetailsResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("{DETAILS_ENDPOINT}(place_id={place_id})"),
                source: e,
            })?;

        Ok(envelope.result)
    }

    /// Geocodes a free-form address, returning candidates best-first.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Status`] if the provider returns a non-OK status
    ///   (including `ZERO_RESULTS`).
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Deserialize`] / [`PlacesError::MissingStatus`] if the
    ///   response does not match the expected shape.
    pub async fn geocode(&self, address: &str) -> Result<Vec<GeocodeResult>, PlacesError> {
        let url = self.build_url(GEOCODE_ENDPOINT, &[("address", address)])?;
        let body = self.request_json(&url).await?;
        Self::check_status(&body, GEOCODE_ENDPOINT)?;

        let envelope: GeocodeResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("{GEOCODE_ENDPOINT}(address={address})"),
                source: e,
            })?;

        Ok(envelope.results)
    }

    /// Builds the full request URL with properly percent-encoded query parameters.
    ///
    /// Joins `endpoint` onto the base URL and appends `key` followed by the
    /// extra parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, endpoint: &str, extra: &[(&str, &str)]) -> Result<Url, PlacesError> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the response
    /// body as JSON.
    ///
    /// The URL is stripped from any `reqwest` error so the API key never ends
    /// up in logs.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let response = response
            .error_for_status()
            .map_err(reqwest::Error::without_url)?;
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Checks the top-level `"status"` field and returns an error unless it
    /// is `"OK"`.
    fn check_status(body: &serde_json::Value, context: &str) -> Result<(), PlacesError> {
        match body.get("status").and_then(serde_json::Value::as_str) {
            Some(STATUS_OK) => Ok(()),
            Some(status) => {
                let message = body
                    .get("error_message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned);
                Err(PlacesError::Status {
                    status: status.to_owned(),
                    message,
                })
            }
            None => Err(PlacesError::MissingStatus {
                context: context.to_owned(),
            }),
        }
    }
}
