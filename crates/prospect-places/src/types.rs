//! Places and Geocoding API response types.
//!
//! Every response is a JSON envelope with a top-level `status` (`"OK"`,
//! `"ZERO_RESULTS"`, `"INVALID_REQUEST"`, `"REQUEST_DENIED"`, ...) and an
//! optional `error_message`. The client checks `status` before decoding into
//! these types, so they only model the success shape. Most fields are
//! optional: the provider omits whatever it does not know about a place.

use prospect_core::Coordinates;
use serde::Deserialize;

use crate::strategy::SearchStrategy;

/// Status value of a successful response.
pub const STATUS_OK: &str = "OK";

/// Status value of a well-formed request that matched nothing.
pub const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

// ---------------------------------------------------------------------------
// textsearch / nearbysearch
// ---------------------------------------------------------------------------

/// One page of a text or nearby search.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    /// Present when more pages exist; echo it back as `pagetoken`.
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A single place in a search page.
///
/// Text search fills `formatted_address`; nearby search fills `vicinity`.
#[derive(Debug, Deserialize)]
pub struct PlaceResult {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl PlaceResult {
    /// Converts the raw result into a [`PlaceHit`], taking the address from
    /// the field the given strategy populates.
    #[must_use]
    pub fn into_hit(self, strategy: SearchStrategy) -> PlaceHit {
        let address = match strategy {
            SearchStrategy::Text => self.formatted_address,
            SearchStrategy::Nearby => self.vicinity,
        };
        PlaceHit {
            name: self.name,
            address,
            place_id: self.place_id.filter(|id| !id.is_empty()),
            location: self.geometry.and_then(|g| g.coordinates()),
        }
    }
}

/// Only presence is checked: a hit with partial geometry still decodes and
/// simply has no coordinates.
#[derive(Debug, Default, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<LatLng>,
}

impl Geometry {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.location.and_then(LatLng::coordinates)
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LatLng {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl LatLng {
    #[must_use]
    pub fn coordinates(self) -> Option<Coordinates> {
        Some(Coordinates {
            lat: self.lat?,
            lng: self.lng?,
        })
    }
}

/// A search hit with the address source already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceHit {
    pub name: Option<String>,
    pub address: Option<String>,
    pub place_id: Option<String>,
    pub location: Option<Coordinates>,
}

// ---------------------------------------------------------------------------
// details
// ---------------------------------------------------------------------------

/// Wrapper for the `place/details` response: `{ "result": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    pub result: PlaceDetail,
}

/// Contact fields requested from `place/details`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

// ---------------------------------------------------------------------------
// geocode
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl GeocodeResult {
    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.geometry.as_ref().and_then(Geometry::coordinates)
    }
}
