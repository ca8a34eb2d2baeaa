use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use schale_ledger::{
    model::team::{ReplaceTeamMembersDto, TeamMemberInputDto},
    server::controller::team::replace_team_members,
};
use serde_json::json;

use super::*;

/// Expect 200 with the replaced members
#[tokio::test]
async fn replaces_members() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;
    test.user()
        .insert_team_member(team_id, 0, "10002", false)
        .await?;

    let result = replace_team_members(
        State(test.to_app_state()),
        identity_headers(TEST_SUBJECT),
        Ok(Path(team_id)),
        Ok(Json(ReplaceTeamMembersDto {
            members: vec![TeamMemberInputDto {
                student_id: "10001".to_string(),
                position_index: 2,
                is_support: Some(true),
            }],
        })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(
        body["members"],
        json!([{
            "studentId": "10001",
            "positionIndex": 2,
            "isSupport": true,
            "studentName": "Shiroko",
            "progress": null
        }])
    );

    Ok(())
}

/// Expect 409 conflict and unchanged members for a duplicate position
#[tokio::test]
async fn rejects_duplicate_position() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;
    test.user()
        .insert_team_member(team_id, 0, "10002", false)
        .await?;

    let resp = send(
        &test,
        Method::PUT,
        &format!("/api/teams/{}/members", team_id),
        identity_headers(TEST_SUBJECT),
        Some(json!({
            "members": [
                { "studentId": "10000", "positionIndex": 0 },
                { "studentId": "10001", "positionIndex": 0 }
            ]
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = json_body(resp).await;
    assert_eq!(body["code"], json!("conflict"));
    assert_eq!(body["details"], json!({ "positionIndex": 0 }));
    assert_eq!(test.count(entity::prelude::TeamMember).await?, 1);

    Ok(())
}

/// Expect 400 listing exactly the unknown student IDs
#[tokio::test]
async fn reports_missing_students() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;

    let resp = send(
        &test,
        Method::PUT,
        &format!("/api/teams/{}/members", team_id),
        identity_headers(TEST_SUBJECT),
        Some(json!({
            "members": [
                { "studentId": "10000", "positionIndex": 0 },
                { "studentId": "99999", "positionIndex": 1 }
            ]
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["details"], json!({ "missingStudentIds": ["99999"] }));
    assert_eq!(test.count(entity::prelude::TeamMember).await?, 0);

    Ok(())
}

/// Expect 400 for a body with unknown fields
#[tokio::test]
async fn rejects_unknown_body_fields() -> Result<(), TestError> {
    let (test, team_id) = ledger_with_team().await?;

    let resp = send(
        &test,
        Method::PUT,
        &format!("/api/teams/{}/members", team_id),
        identity_headers(TEST_SUBJECT),
        Some(json!({ "members": [], "name": "renamed" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["code"], json!("validation_error"));

    Ok(())
}
