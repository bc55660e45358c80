use axum::http::StatusCode;
use directory::{HttpUserSource, UserSource};
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn test_http_source_returns_raw_users() {
    let body = common::sample_users().to_string();
    let base = common::serve(common::users_router(StatusCode::OK, body)).await;
    let source = HttpUserSource::new(format!("{base}/users"));

    let users = source.fetch_users().await.unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[1].name, "Ervin Howell");
    assert_eq!(users[1].address.city, "Wisokyburgh");
    assert_eq!(users[1].address.street, "");
}

#[tokio::test]
async fn test_http_source_with_shared_client() {
    let base = common::serve(common::users_router(StatusCode::OK, "[]")).await;
    let client = reqwest::Client::new();
    let source = HttpUserSource::with_client(client, format!("{base}/users"));

    assert_eq!(source.endpoint(), format!("{base}/users"));
    assert!(source.fetch_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_http_source_error_message_carries_status() {
    let base = common::serve(common::users_router(StatusCode::SERVICE_UNAVAILABLE, "down")).await;
    let source = HttpUserSource::new(format!("{base}/users"));

    let err = source.fetch_users().await.unwrap_err();
    assert_eq!(err.status, Some(503));
    assert!(err.to_string().contains("503"));
}
