//! End-to-end tests of DataFetcher over real HTTP, served by mockito

use json_fetcher::fetcher::{
    DataFetcher, FetchState, RequestDescriptor, RequestOptions, TracingObserver, INVALID_PAYLOAD, REQUEST_FAILED,
};
use json_fetcher::transport::HttpTransport;
use json_fetcher::views::{ListView, Posts};
use serde_json::json;
use std::sync::Arc;

#[tokio::test]
async fn test_posts_scenario() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"Hello"}]"#)
        .create_async()
        .await;

    let fetcher = DataFetcher::new(RequestDescriptor::new(format!("{}/posts", server.url())));
    let state = fetcher.load().await;

    assert_eq!(
        state,
        FetchState {
            data: Some(json!([{"id": 1, "title": "Hello"}])),
            loading: false,
            error: None,
        }
    );
    assert_eq!(Posts::render(&state), "Posts\n- [1] Hello");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_scenario() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/posts")
        .with_status(500)
        .with_body("Internal Server Error")
        .create_async()
        .await;

    let fetcher = DataFetcher::new(RequestDescriptor::new(format!("{}/posts", server.url())));
    let state = fetcher.load().await;

    assert_eq!(
        state,
        FetchState {
            data: None,
            loading: false,
            error: Some(REQUEST_FAILED.to_string()),
        }
    );
    assert!(state.is_settled());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_body() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/broken")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let fetcher = DataFetcher::new(RequestDescriptor::new(format!("{}/broken", server.url())));
    let state = fetcher.load().await;

    assert_eq!(state.data, None);
    assert_eq!(state.error.as_deref(), Some(INVALID_PAYLOAD));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_options_are_forwarded() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/items")
        .match_header("x-api-version", "2")
        .match_body(r#"{"name":"widget"}"#)
        .with_status(201)
        .with_body(r#"{"id":10,"name":"widget"}"#)
        .create_async()
        .await;

    let options = RequestOptions::default()
        .with_method("POST")
        .with_header("X-Api-Version", "2")
        .with_body(r#"{"name":"widget"}"#);
    let fetcher = DataFetcher::new(RequestDescriptor::new(format!("{}/items", server.url())).with_options(options));

    let state = fetcher.load().await;

    assert_eq!(state.data, Some(json!({"id": 10, "name": "widget"})));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_refetch_recovers_after_failure() {
    let mut server = mockito::Server::new_async().await;

    let failing = server
        .mock("GET", "/posts")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let fetcher = DataFetcher::new(RequestDescriptor::new(format!("{}/posts", server.url())));
    let first = fetcher.load().await;
    assert_eq!(first.error.as_deref(), Some(REQUEST_FAILED));
    failing.assert_async().await;
    failing.remove_async().await;

    let healthy = server
        .mock("GET", "/posts")
        .with_status(200)
        .with_body(r#"[{"id":2,"title":"Back"}]"#)
        .create_async()
        .await;

    let second = fetcher.refetch().await;
    assert_eq!(second.error, None);
    assert_eq!(second.data, Some(json!([{"id": 2, "title": "Back"}])));
    healthy.assert_async().await;
}

#[tokio::test]
async fn test_configured_client_is_used() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("GET", "/users")
        .match_header("user-agent", "json-fetcher-tests")
        .with_status(200)
        .with_body(r#"[{"id":"u-1","name":"Ada"}]"#)
        .create_async()
        .await;

    let client = reqwest::Client::builder()
        .user_agent("json-fetcher-tests")
        .build()
        .expect("client should build");
    let fetcher = DataFetcher::with_parts(
        RequestDescriptor::new(format!("{}/users", server.url())),
        Arc::new(HttpTransport::with_client(client)),
        Arc::new(TracingObserver),
    );

    let state = fetcher.load().await;

    assert!(state.is_settled());
    assert_eq!(state.data, Some(json!([{"id": "u-1", "name": "Ada"}])));
    mock.assert_async().await;
}
