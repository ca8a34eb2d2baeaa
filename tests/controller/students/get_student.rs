use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect 200 with school and null progress for an unrecorded student
#[tokio::test]
async fn returns_student_detail() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/students/10001",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["studentId"], json!("10001"));
    assert_eq!(body["school"], json!("Millennium"));
    assert_eq!(body["progress"], json!(null));

    Ok(())
}

/// Expect 404 not_found with the student ID in details
#[tokio::test]
async fn returns_not_found_for_unknown_student() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/students/99999",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["code"], json!("not_found"));
    assert_eq!(body["details"]["studentId"], json!("99999"));

    Ok(())
}

/// Expect the JWT assertion to resolve the same user as the fallback header
#[tokio::test]
async fn resolves_user_from_jwt_assertion() -> Result<(), TestError> {
    let test = ledger().await?;
    let mut headers = HeaderMap::new();
    headers.insert(
        "cf-access-jwt-assertion",
        HeaderValue::from_str(&jwt_assertion(json!({ "sub": TEST_SUBJECT }))).unwrap(),
    );

    let first = send(&test, Method::GET, "/api/students/10000", headers, None).await;
    let second = send(
        &test,
        Method::GET,
        "/api/students/10000",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(test.count(entity::prelude::User).await?, 1);

    Ok(())
}
