use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::IntoResponse,
};
use schale_ledger::{model::student::StudentFilter, server::controller::student::list_students};
use serde_json::json;

use super::*;

/// Expect 200 with every catalog student for a first-time caller
#[tokio::test]
async fn lists_students_for_new_user() -> Result<(), TestError> {
    let test = ledger().await?;

    let result = list_students(
        State(test.to_app_state()),
        identity_headers(TEST_SUBJECT),
        Ok(Query(StudentFilter::default())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["students"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["students"][0]["studentId"], json!("10000"));
    assert_eq!(body["students"][0]["progress"], json!(null));

    Ok(())
}

/// Expect the query string to filter by name and limited flag
#[tokio::test]
async fn applies_query_filters() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/students?q=SHIRO&isLimited=false",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["students"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["students"][0]["name"], json!("Shiroko"));

    Ok(())
}

/// Expect 400 validation_error when isLimited is not a boolean
#[tokio::test]
async fn rejects_invalid_is_limited() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/students?isLimited=yes",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["code"], json!("validation_error"));

    Ok(())
}

/// Expect 401 authentication_required without identity headers
#[tokio::test]
async fn requires_identity() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/students",
        Default::default(),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(resp).await["code"], json!("authentication_required"));
    assert_eq!(test.count(entity::prelude::User).await?, 0);

    Ok(())
}
