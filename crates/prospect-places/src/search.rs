//! Paginated search runner.
//!
//! Drives one [`SearchRequest`] through every page the provider offers,
//! enriching each hit with contact details as it goes. The loop ends when a
//! page carries no `next_page_token`, when the provider answers with a non-OK
//! status, or when a request fails outright. In every case the rows gathered
//! so far are returned; partial results are valid output.

use std::time::Duration;

use prospect_core::{AppConfig, ResultRow, ResultTable};

use crate::client::PlacesClient;
use crate::details::fetch_place_detail;
use crate::error::PlacesError;
use crate::progress::ProgressObserver;
use crate::strategy::SearchRequest;
use crate::types::{PlaceDetail, PlaceHit, STATUS_ZERO_RESULTS};

/// Pagination knobs for [`run_search`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Wait before requesting a follow-up page. The provider rejects a page
    /// token with `INVALID_REQUEST` until it has become valid.
    pub page_token_delay: Duration,
    /// Upper bound on pages fetched per search.
    pub max_pages: usize,
}

impl SearchOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            page_token_delay: Duration::from_millis(config.page_token_delay_ms),
            max_pages: config.max_pages,
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            page_token_delay: Duration::from_secs(2),
            max_pages: 10,
        }
    }
}

/// Runs one search strategy to exhaustion and returns its rows in discovery
/// order.
pub async fn run_search(
    client: &PlacesClient,
    request: &SearchRequest,
    options: &SearchOptions,
    progress: &dyn ProgressObserver,
) -> ResultTable {
    let strategy = request.strategy();
    let mut table = ResultTable::new();
    let mut page_token: Option<String> = None;
    let mut page = 0usize;

    progress.strategy_started(strategy);

    loop {
        page += 1;
        if page > options.max_pages {
            tracing::warn!(
                %strategy,
                max_pages = options.max_pages,
                "page limit reached; stopping pagination"
            );
            break;
        }

        if page_token.is_some() && !options.page_token_delay.is_zero() {
            tokio::time::sleep(options.page_token_delay).await;
        }

        let response = match client.search_page(request, page_token.as_deref()).await {
            Ok(response) => response,
            Err(PlacesError::Status { status, message }) => {
                if status == STATUS_ZERO_RESULTS {
                    tracing::info!(%strategy, page, "search returned no results");
                } else {
                    tracing::warn!(
                        %strategy,
                        page,
                        %status,
                        error_message = message.as_deref().unwrap_or_default(),
                        "search returned non-OK status"
                    );
                }
                break;
            }
            Err(err) => {
                tracing::warn!(
                    %strategy,
                    page,
                    rows = table.len(),
                    error = %err,
                    "search request failed; keeping rows fetched so far"
                );
                break;
            }
        };

        tracing::debug!(
            %strategy,
            page,
            hits = response.results.len(),
            "fetched search page"
        );

        for result in response.results {
            let hit = result.into_hit(strategy);
            let detail = match hit.place_id.as_deref() {
                Some(place_id) => fetch_place_detail(client, place_id).await,
                None => {
                    tracing::debug!(%strategy, page, "hit has no place_id; skipping details");
                    None
                }
            };
            table.push(shape_row(hit, detail));
            progress.row_added(strategy, table.len());
        }

        match response.next_page_token.filter(|t| !t.is_empty()) {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    progress.strategy_finished(strategy, table.len());
    tracing::info!(%strategy, rows = table.len(), "search finished");
    table
}

/// Flattens a hit and its optional contact details into a row. The row keeps
/// the name from the search hit; missing values become "N/A".
fn shape_row(hit: PlaceHit, detail: Option<PlaceDetail>) -> ResultRow {
    let (phone, website) = detail.map_or((None, None), |d| {
        (d.formatted_phone_number, d.website)
    });
    ResultRow::new(hit.name, hit.address, phone, website)
}

#[cfg(test)]
mod tests {
    use prospect_core::NOT_AVAILABLE;

    use super::*;

    fn hit() -> PlaceHit {
        PlaceHit {
            name: Some("Acme Ltda".into()),
            address: Some("1 Main St".into()),
            place_id: Some("place-acme".into()),
            location: None,
        }
    }

    #[test]
    fn shape_row_without_detail_fills_sentinel() {
        let row = shape_row(hit(), None);
        assert_eq!(row.name, "Acme Ltda");
        assert_eq!(row.address, "1 Main St");
        assert_eq!(row.phone, NOT_AVAILABLE);
        assert_eq!(row.website, NOT_AVAILABLE);
    }

    #[test]
    fn shape_row_keeps_hit_name_over_detail_name() {
        let detail = PlaceDetail {
            name: Some("ACME LTDA - MATRIZ".into()),
            formatted_phone_number: Some("(217) 555-0100".into()),
            website: None,
        };
        let row = shape_row(hit(), Some(detail));
        assert_eq!(row.name, "Acme Ltda");
        assert_eq!(row.phone, "(217) 555-0100");
        assert_eq!(row.website, NOT_AVAILABLE);
    }

    #[test]
    fn options_from_config() {
        let config = AppConfig {
            google_maps_api_key: "k".into(),
            log_level: "info".into(),
            request_timeout_secs: 30,
            user_agent: "ua".into(),
            search_radius_m: 1_000,
            page_token_delay_ms: 0,
            max_pages: 3,
            output_path: "out.xlsx".into(),
            geocode_failure: prospect_core::GeocodeFailurePolicy::TextOnly,
        };
        let options = SearchOptions::from_config(&config);
        assert!(options.page_token_delay.is_zero());
        assert_eq!(options.max_pages, 3);
    }
}
