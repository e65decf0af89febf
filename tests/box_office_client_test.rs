use httpmock::prelude::*;
use serde_json::json;

use marquee_lib::modules::movie::{BoxOfficeClient, BoxOfficeHttpClient};
use marquee_lib::shared::errors::AppError;

#[tokio::test]
async fn sends_api_key_and_encoded_title() {
    let server = MockServer::start_async().await;
    let lookup_mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/boxoffice")
                .query_param("title", "Mad Max: Fury Road")
                .header("x-api-key", "secret-key");
            then.status(200).json_body(json!({
                "title": "Mad Max: Fury Road",
                "distributor": "Warner Bros.",
                "releaseDate": "2015-05-15",
                "budget": 150000000,
                "revenue": { "worldwide": 380400000, "openingWeekendUSA": 45428128 },
                "mpaRating": "R"
            }));
        })
        .await;

    let client = BoxOfficeHttpClient::new(server.base_url(), "secret-key").unwrap();
    let lookup = client.fetch_box_office("Mad Max: Fury Road").await.unwrap();

    lookup_mock.assert_async().await;
    assert_eq!(lookup.title, "Mad Max: Fury Road");
    assert_eq!(lookup.distributor.as_deref(), Some("Warner Bros."));
    assert_eq!(lookup.release_date.as_deref(), Some("2015-05-15"));
    assert_eq!(lookup.budget, Some(150_000_000));
    assert_eq!(lookup.revenue.worldwide, 380_400_000);
    assert_eq!(lookup.revenue.opening_weekend_usa, Some(45_428_128));
    assert_eq!(lookup.mpa_rating.as_deref(), Some("R"));
}

#[tokio::test]
async fn unavailable_service_is_an_upstream_error() {
    let server = MockServer::start_async().await;
    let lookup_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/boxoffice");
            then.status(503).body("maintenance");
        })
        .await;

    let client = BoxOfficeHttpClient::new(server.base_url(), "secret-key").unwrap();
    let err = client.fetch_box_office("Nonexistent Film").await.unwrap_err();

    lookup_mock.assert_hits_async(1).await;
    match err {
        AppError::UpstreamError(message) => assert!(message.contains("503"), "{}", message),
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn undecodable_body_is_an_upstream_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/boxoffice");
            then.status(200)
                .header("content-type", "application/json")
                .body("{ this is not json");
        })
        .await;

    let client = BoxOfficeHttpClient::new(server.base_url(), "").unwrap();
    let err = client.fetch_box_office("Heat").await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamError(_)));
}

#[tokio::test]
async fn sparse_payload_leaves_fields_unset() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/boxoffice");
            then.status(200).json_body(json!({
                "title": "Obscure",
                "budget": 0,
                "revenue": { "worldwide": 12000 }
            }));
        })
        .await;

    let client = BoxOfficeHttpClient::new(server.base_url(), "k").unwrap();
    let lookup = client.fetch_box_office("Obscure").await.unwrap();

    assert!(lookup.distributor.is_none());
    assert!(lookup.budget.is_none());
    assert!(lookup.mpa_rating.is_none());
    assert_eq!(lookup.revenue.worldwide, 12_000);
    assert!(lookup.revenue.opening_weekend_usa.is_none());
}

#[tokio::test]
async fn unreachable_service_is_an_upstream_error() {
    // Nothing listens on port 1
    let client = BoxOfficeHttpClient::new("http://127.0.0.1:1", "k").unwrap();
    let err = client.fetch_box_office("Heat").await.unwrap_err();

    assert!(matches!(err, AppError::UpstreamError(_)));
}
