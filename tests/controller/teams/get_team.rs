use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect 200 with members ordered by position
#[tokio::test]
async fn returns_team_detail() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;
    test.user()
        .insert_team_member(team_id, 3, "10002", false)
        .await?;
    test.user()
        .insert_team_member(team_id, 1, "10000", true)
        .await?;

    let resp = send(
        &test,
        Method::GET,
        &format!("/api/teams/{}", team_id),
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["name"], json!("Binah"));
    assert_eq!(body["members"][0]["positionIndex"], json!(1));
    assert_eq!(body["members"][0]["studentName"], json!("Hoshino"));
    assert_eq!(body["members"][0]["isSupport"], json!(true));
    assert_eq!(body["members"][1]["studentId"], json!("10002"));

    Ok(())
}

/// Expect 404 for a team of another user
#[tokio::test]
async fn hides_other_users_team() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;

    let resp = send(
        &test,
        Method::GET,
        &format!("/api/teams/{}", team_id),
        identity_headers("other-subject"),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["code"], json!("not_found"));

    Ok(())
}

/// Expect 400 for a team ID that is not an integer
#[tokio::test]
async fn rejects_non_integer_team_id() -> Result<(), TestError> {
    let (test, _) = ledger_with_team().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/teams/abc",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 500 internal_error without driver details for a dangling member
#[tokio::test]
async fn reports_dangling_member_as_internal() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;
    test.disable_foreign_keys().await?;
    test.user()
        .insert_team_member(team_id, 0, "99999", false)
        .await?;

    let resp = send(
        &test,
        Method::GET,
        &format!("/api/teams/{}", team_id),
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(resp).await["code"], json!("internal_error"));

    Ok(())
}
