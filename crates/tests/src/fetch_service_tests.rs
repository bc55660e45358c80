use axum::http::StatusCode;
use directory::{RandomChoices, ScriptedChoices};
use pretty_assertions::assert_eq;
use shared_types::{Department, FetchErrorKind, Role, Status};

use crate::common;

#[tokio::test]
async fn test_fetch_all_preserves_source_order() {
    let body = common::sample_users().to_string();
    let service = common::service_for(common::users_router(StatusCode::OK, body)).await;

    let employees = service
        .fetch_all(&mut RandomChoices::thread_local())
        .await
        .unwrap();

    let ids: Vec<i64> = employees.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(employees[0].name, "Leanne Graham");
    assert_eq!(employees[0].email, "Sincere@april.biz");
    assert_eq!(employees[0].phone, "1-770-736-8031 x56442");
    assert_eq!(employees[0].website, "hildegard.org");
    assert_eq!(employees[0].city(), "Gwenborough");
    assert_eq!(employees[2].city(), "McKenziehaven");
}

#[tokio::test]
async fn test_fetch_all_enriches_from_choices() {
    let body = common::sample_users().to_string();
    let service = common::service_for(common::users_router(StatusCode::OK, body)).await;

    // department, role, status for each user in turn
    let mut choices = ScriptedChoices::new([3, 1, 2, 0, 0, 0, 1, 3, 1]);
    let employees = service.fetch_all(&mut choices).await.unwrap();

    assert_eq!(employees[0].department, Department::Design);
    assert_eq!(employees[0].role, Role::SeniorDeveloper);
    assert_eq!(employees[0].status, Status::Remote);
    assert_eq!(employees[1].department, Department::Engineering);
    assert_eq!(employees[1].role, Role::Manager);
    assert_eq!(employees[1].status, Status::Active);
    assert_eq!(employees[2].department, Department::Marketing);
    assert_eq!(employees[2].role, Role::Analyst);
    assert_eq!(employees[2].status, Status::OnLeave);
}

#[tokio::test]
async fn test_fetch_all_empty_array() {
    let service = common::service_for(common::users_router(StatusCode::OK, "[]")).await;
    let employees = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap();
    assert!(employees.is_empty());
}

#[tokio::test]
async fn test_fetch_all_error_status() {
    let service = common::service_for(common::users_router(
        StatusCode::INTERNAL_SERVER_ERROR,
        "oops",
    ))
    .await;

    let err = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::Status);
    assert_eq!(err.status, Some(500));
}

#[tokio::test]
async fn test_fetch_all_not_found_route() {
    let base = common::serve(common::users_router(StatusCode::OK, "[]")).await;
    let source = directory::HttpUserSource::new(format!("{base}/people"));
    let service = directory::EmployeeFetchService::new(source);

    let err = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::Status);
    assert_eq!(err.status, Some(404));
}

#[tokio::test]
async fn test_fetch_all_malformed_body() {
    let service = common::service_for(common::users_router(StatusCode::OK, "not json")).await;
    let err = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::MalformedBody);
}

#[tokio::test]
async fn test_fetch_all_missing_city_fails_whole_load() {
    let body = serde_json::json!([
        {"id": 1, "name": "Ann", "email": "a@x.com", "phone": "555", "website": "ann.io", "address": {"city": "Metro"}},
        {"id": 2, "name": "Bo", "email": "b@x.com", "phone": "556", "website": "bo.io", "address": {}}
    ]);
    let service =
        common::service_for(common::users_router(StatusCode::OK, body.to_string())).await;

    let err = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::MalformedBody);
}

#[tokio::test]
async fn test_fetch_all_unreachable_host() {
    let source = directory::HttpUserSource::new(common::unreachable_endpoint().await);
    let service = directory::EmployeeFetchService::new(source);

    let err = service
        .fetch_all(&mut ScriptedChoices::default())
        .await
        .unwrap_err();
    assert_eq!(err.kind, FetchErrorKind::Network);
}
