//! Merges the text and nearby strategies into one deduplicated table, and the
//! top-level prospecting flow around it.

use prospect_core::{GeocodeFailurePolicy, ResultTable, SearchQuery};

use crate::client::PlacesClient;
use crate::error::ProspectError;
use crate::geocode::resolve_coordinates;
use crate::progress::ProgressObserver;
use crate::search::{run_search, SearchOptions};
use crate::strategy::SearchRequest;

/// Runs the text search, then the nearby search, and returns their rows
/// concatenated (text first) with exact duplicates removed.
///
/// The nearby search is skipped, without any request, when `query` has no
/// location or radius. Two empty strategies give an empty table.
pub async fn aggregate(
    client: &PlacesClient,
    query: &SearchQuery,
    options: &SearchOptions,
    progress: &dyn ProgressObserver,
) -> ResultTable {
    let text_rows = run_search(client, &SearchRequest::text(query), options, progress).await;

    let nearby_rows = if let Some(request) = SearchRequest::nearby(query) {
        run_search(client, &request, options, progress).await
    } else {
        tracing::info!("nearby search skipped: no location or radius");
        ResultTable::new()
    };

    let merged = text_rows.concat(nearby_rows);
    let before = merged.len();
    let table = merged.dedup();
    tracing::info!(
        rows = table.len(),
        duplicates = before - table.len(),
        "merged search results"
    );
    table
}

/// Full prospecting run.
///
/// When `query` has a city and state but no explicit location, they are
/// geocoded first. If that fails, `policy` decides between continuing with
/// the text search alone and aborting before any search request.
///
/// # Errors
///
/// Returns [`ProspectError::CoordinatesUnavailable`] when geocoding fails
/// under [`GeocodeFailurePolicy::Abort`].
pub async fn prospect(
    client: &PlacesClient,
    mut query: SearchQuery,
    policy: GeocodeFailurePolicy,
    options: &SearchOptions,
    progress: &dyn ProgressObserver,
) -> Result<ResultTable, ProspectError> {
    if query.location.is_none() {
        if let Some(address) = query.region_address() {
            match resolve_coordinates(client, &address).await {
                Some(coordinates) => query.location = Some(coordinates),
                None => match policy {
                    GeocodeFailurePolicy::Abort => {
                        return Err(ProspectError::CoordinatesUnavailable { address });
                    }
                    GeocodeFailurePolicy::TextOnly => {
                        tracing::warn!(
                            %address,
                            "no coordinates; continuing with text search only"
                        );
                    }
                },
            }
        }
    }

    Ok(aggregate(client, &query, options, progress).await)
}
