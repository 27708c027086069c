//! Integration tests for `PlacesClient` using wiremock HTTP mocks.

use prospect_core::{Coordinates, SearchQuery};
use prospect_places::{PlacesClient, PlacesError, SearchRequest};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> PlacesClient {
    PlacesClient::with_base_url("test-key", 5, "prospect-test/0.1", base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn text_search_page_returns_parsed_results() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "html_attributions": [],
        "results": [{
            "name": "Acme Ltda",
            "formatted_address": "100 Main St, Springfield, IL",
            "place_id": "place-acme",
            "geometry": { "location": { "lat": 39.8, "lng": -89.6 } }
        }],
        "next_page_token": "tok-2"
    });

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .and(query_param("key", "test-key"))
        .and(query_param("query", "Acme Ltda in Springfield, IL"))
        .and(query_param_is_missing("pagetoken"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new("Acme Ltda")
        .with_region(Some("Springfield".into()), Some("IL".into()));
    let page = client
        .search_page(&SearchRequest::text(&query), None)
        .await
        .expect("should parse search page");

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name.as_deref(), Some("Acme Ltda"));
    assert_eq!(page.results[0].place_id.as_deref(), Some("place-acme"));
    assert_eq!(page.next_page_token.as_deref(), Some("tok-2"));
}

#[tokio::test]
async fn nearby_search_page_sends_location_radius_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("keyword", "Acme"))
        .and(query_param("location", "39.78,-89.65"))
        .and(query_param("radius", "23000"))
        .and(query_param("pagetoken", "tok-2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(&serde_json::json!({ "status": "OK", "results": [] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let query = SearchQuery::new("Acme").with_location(
        Coordinates {
            lat: 39.78,
            lng: -89.65,
        },
        23_000,
    );
    let request = SearchRequest::nearby(&query).expect("location is set");
    let page = client
        .search_page(&request, Some("tok-2"))
        .await
        .expect("should parse empty page");

    assert!(page.results.is_empty());
    assert!(page.next_page_token.is_none());
}

#[tokio::test]
async fn place_details_requests_contact_fields() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "result": {
            "name": "Acme Ltda",
            "formatted_phone_number": "(217) 555-0100",
            "website": "https://acme.example"
        }
    });

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .and(query_param("place_id", "place-acme"))
        .and(query_param("fields", "name,formatted_phone_number,website"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = client
        .place_details("place-acme")
        .await
        .expect("should parse details");

    assert_eq!(detail.name.as_deref(), Some("Acme Ltda"));
    assert_eq!(detail.formatted_phone_number.as_deref(), Some("(217) 555-0100"));
    assert_eq!(detail.website.as_deref(), Some("https://acme.example"));
}

#[tokio::test]
async fn geocode_returns_candidates() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "OK",
        "results": [{
            "formatted_address": "Springfield, IL, USA",
            "geometry": { "location": { "lat": 39.78, "lng": -89.65 } }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "Springfield, IL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let results = client
        .geocode("Springfield, IL")
        .await
        .expect("should parse geocode");

    assert_eq!(results.len(), 1);
    assert_eq!(
        results[0].coordinates(),
        Some(Coordinates {
            lat: 39.78,
            lng: -89.65
        })
    );
}

#[tokio::test]
async fn non_ok_status_returns_status_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "REQUEST_DENIED",
        "error_message": "The provided API key is invalid.",
        "results": []
    });

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.geocode("Nowhere, ZZ").await;

    assert!(
        matches!(
            result,
            Err(PlacesError::Status { ref status, ref message })
                if status == "REQUEST_DENIED" && message.is_some()
        ),
        "expected Status error, got: {result:?}"
    );
}

#[tokio::test]
async fn http_500_returns_http_error_without_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/details/json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.place_details("place-acme").await.unwrap_err();

    assert!(matches!(err, PlacesError::Http(_)), "got: {err:?}");
    assert!(
        !err.to_string().contains("test-key"),
        "API key leaked into error: {err}"
    );
}

#[tokio::test]
async fn malformed_body_returns_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/textsearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let request = SearchRequest::text(&SearchQuery::new("Acme"));
    let err = client.search_page(&request, None).await.unwrap_err();

    assert!(matches!(err, PlacesError::Deserialize { .. }), "got: {err:?}");
}
