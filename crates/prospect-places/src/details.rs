//! Per-place contact enrichment.

use crate::client::PlacesClient;
use crate::error::PlacesError;
use crate::types::PlaceDetail;

/// Looks up the contact details of one place.
///
/// Never fails: a non-OK status or a transport failure is logged and yields
/// `None`, which callers render as "N/A" in every contact field. Issues
/// exactly one request and does not retry.
pub async fn fetch_place_detail(client: &PlacesClient, place_id: &str) -> Option<PlaceDetail> {
    match client.place_details(place_id).await {
        Ok(detail) => Some(detail),
        Err(PlacesError::Status { status, message }) => {
            tracing::warn!(
                place_id,
                status = %status,
                error_message = message.as_deref().unwrap_or_default(),
                "place details lookup returned non-OK status"
            );
            None
        }
        Err(err) => {
            tracing::warn!(place_id, error = %err, "place details lookup failed");
            None
        }
    }
}
