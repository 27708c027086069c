//! The two search modes and the request each one sends.

use prospect_core::{Coordinates, SearchQuery};

/// Which provider search endpoint a run goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    /// Free-text search (`place/textsearch`).
    Text,
    /// Keyword search around a point (`place/nearbysearch`).
    Nearby,
}

impl SearchStrategy {
    /// Endpoint path, relative to the API base URL.
    #[must_use]
    pub fn endpoint(self) -> &'static str {
        match self {
            SearchStrategy::Text => "place/textsearch/json",
            SearchStrategy::Nearby => "place/nearbysearch/json",
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchStrategy::Text => write!(f, "text"),
            SearchStrategy::Nearby => write!(f, "nearby"),
        }
    }
}

/// Base parameters of one search, fixed for every page of that search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    /// `area` biases the results toward a circle; location and radius are
    /// only ever sent together.
    Text {
        query: String,
        area: Option<(Coordinates, u32)>,
    },
    Nearby {
        keyword: String,
        location: Coordinates,
        radius_m: u32,
    },
}

impl SearchRequest {
    /// Text-search request for `query`; the city/state suffix is folded into
    /// the free-text query.
    #[must_use]
    pub fn text(query: &SearchQuery) -> Self {
        SearchRequest::Text {
            query: query.text_query(),
            area: query.area(),
        }
    }

    /// Nearby-search request for `query`, or `None` when it lacks a location
    /// or radius.
    #[must_use]
    pub fn nearby(query: &SearchQuery) -> Option<Self> {
        let (location, radius_m) = query.area()?;
        Some(SearchRequest::Nearby {
            keyword: query.name.clone(),
            location,
            radius_m,
        })
    }

    #[must_use]
    pub fn strategy(&self) -> SearchStrategy {
        match self {
            SearchRequest::Text { .. } => SearchStrategy::Text,
            SearchRequest::Nearby { .. } => SearchStrategy::Nearby,
        }
    }

    /// Query-string parameters for this request, excluding the API key and
    /// any page token.
    pub(crate) fn query_params(&self) -> Vec<(&'static str, String)> {
        match self {
            SearchRequest::Text { query, area } => {
                let mut params = vec![("query", query.clone())];
                if let Some((location, radius_m)) = area {
                    params.push(("location", location.to_string()));
                    params.push(("radius", radius_m.to_string()));
                }
                params
            }
            SearchRequest::Nearby {
                keyword,
                location,
                radius_m,
            } => vec![
                ("keyword", keyword.clone()),
                ("location", location.to_string()),
                ("radius", radius_m.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn springfield() -> Coordinates {
        Coordinates {
            lat: 39.78,
            lng: -89.65,
        }
    }

    #[test]
    fn text_request_folds_region_into_query() {
        let query = SearchQuery::new("Acme Ltda")
            .with_region(Some("Springfield".into()), Some("IL".into()));
        let request = SearchRequest::text(&query);
        assert_eq!(
            request.query_params(),
            vec![("query", "Acme Ltda in Springfield, IL".to_string())]
        );
    }

    #[test]
    fn text_request_passes_location_and_radius_when_known() {
        let query = SearchQuery::new("Acme").with_location(springfield(), 23_000);
        let params = SearchRequest::text(&query).query_params();
        assert!(params.contains(&("location", "39.78,-89.65".to_string())));
        assert!(params.contains(&("radius", "23000".to_string())));
    }

    #[test]
    fn text_request_omits_radius_without_location() {
        let query = SearchQuery {
            radius_m: Some(23_000),
            ..SearchQuery::new("Acme")
        };
        assert_eq!(
            SearchRequest::text(&query).query_params(),
            vec![("query", "Acme".to_string())]
        );
    }

    #[test]
    fn nearby_request_ignores_region() {
        let query = SearchQuery::new("Acme Ltda")
            .with_location(springfield(), 23_000)
            .with_region(Some("Springfield".into()), Some("IL".into()));
        let request = SearchRequest::nearby(&query).expect("location and radius are set");
        assert_eq!(request.strategy(), SearchStrategy::Nearby);
        assert_eq!(
            request.query_params(),
            vec![
                ("keyword", "Acme Ltda".to_string()),
                ("location", "39.78,-89.65".to_string()),
                ("radius", "23000".to_string()),
            ]
        );
    }

    #[test]
    fn nearby_request_needs_location() {
        let query = SearchQuery::new("Acme");
        assert!(SearchRequest::nearby(&query).is_none());
    }

    #[test]
    fn endpoints_per_strategy() {
        assert_eq!(SearchStrategy::Text.endpoint(), "place/textsearch/json");
        assert_eq!(SearchStrategy::Nearby.endpoint(), "place/nearbysearch/json");
    }
}
