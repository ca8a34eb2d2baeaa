use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::IntoResponse,
};
use schale_ledger::{
    model::team::{TeamListQuery, TeamMode},
    server::controller::team::list_teams,
};
use serde_json::json;

use super::*;

/// Expect 200 with the caller's teams filtered by mode
#[tokio::test]
async fn lists_teams_by_mode() -> Result<(), TestError> {
    let (test, raid_team_id) = ledger_with_team().await?;
    let other = test.user().insert_user("other-subject").await?;
    test.user().insert_team(other.id, "raid", "Not mine").await?;

    let result = list_teams(
        State(test.to_app_state()),
        identity_headers(TEST_SUBJECT),
        Ok(Query(TeamListQuery {
            mode: Some(TeamMode::Raid),
        })),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["teams"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["teams"][0]["teamId"], json!(raid_team_id));
    assert_eq!(body["teams"][0]["mode"], json!("raid"));
    assert_eq!(body["teams"][0]["memberCount"], json!(0));

    Ok(())
}

/// Expect 400 validation_error for an unknown mode
#[tokio::test]
async fn rejects_unknown_mode() -> Result<(), TestError> {
    let (test, _) = ledger_with_team().await?;

    let resp = send(
        &test,
        Method::GET,
        "/api/teams?mode=pvp",
        identity_headers(TEST_SUBJECT),
        None,
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(resp).await["code"], json!("validation_error"));

    Ok(())
}
