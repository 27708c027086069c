//! Region to coordinates resolution for the nearby search.

use prospect_core::Coordinates;

use crate::client::PlacesClient;
use crate::error::PlacesError;

/// Resolves a `"{city}, {state}"` address to the coordinates of the first
/// geocoding candidate.
///
/// Returns `None` (after logging) on a non-OK status, an empty candidate
/// list, a first candidate without coordinates, or a transport failure.
pub async fn resolve_coordinates(client: &PlacesClient, address: &str) -> Option<Coordinates> {
    match client.geocode(address).await {
        Ok(results) => {
            let Some(first) = results.into_iter().next() else {
                tracing::warn!(%address, "geocoding returned no candidates");
                return None;
            };
            let Some(coordinates) = first.coordinates() else {
                tracing::warn!(%address, "geocoding candidate has no coordinates");
                return None;
            };
            tracing::debug!(
                %address,
                %coordinates,
                matched = first.formatted_address.as_deref().unwrap_or_default(),
                "resolved coordinates"
            );
            Some(coordinates)
        }
        Err(PlacesError::Status { status, message }) => {
            tracing::warn!(
                %address,
                status = %status,
                error_message = message.as_deref().unwrap_or_default(),
                "geocoding returned non-OK status"
            );
            None
        }
        Err(err) => {
            tracing::warn!(%address, error = %err, "geocoding request failed");
            None
        }
    }
}
