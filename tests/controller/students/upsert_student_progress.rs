use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use schale_ledger::{
    model::progress::ProgressPatchDto,
    server::controller::student::upsert_student_progress,
};
use serde_json::json;

use super::*;

/// Expect 200 with the merged progress over the baseline
#[tokio::test]
async fn saves_progress() -> Result<(), TestError> {
    let test = ledger().await?;
    let patch = ProgressPatchDto {
        level: Some(70),
        memo: Some("raid main".to_string()),
        ..Default::default()
    };

    let result = upsert_student_progress(
        State(test.to_app_state()),
        identity_headers(TEST_SUBJECT),
        Ok(Path("10000".to_string())),
        Ok(Json(patch)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["progress"]["level"], json!(70));
    assert_eq!(body["progress"]["rarity"], json!(1));
    assert_eq!(body["progress"]["memo"], json!("raid main"));

    Ok(())
}

/// Expect 400 with field bounds in details and nothing stored for level 999
#[tokio::test]
async fn rejects_out_of_range_level() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::PUT,
        "/api/students/10000/progress",
        identity_headers(TEST_SUBJECT),
        Some(json!({ "level": 999 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["code"], json!("validation_error"));
    assert_eq!(
        body["details"],
        json!({ "field": "level", "key": "level", "min": 1, "max": 100, "value": 999 })
    );
    assert_eq!(test.count(entity::prelude::UserStudentProgress).await?, 0);

    Ok(())
}

/// Expect 400 for unknown or non-integer patch fields
#[tokio::test]
async fn rejects_malformed_patch() -> Result<(), TestError> {
    let test = ledger().await?;

    for body in [json!({ "levle": 10 }), json!({ "level": 10.5 })] {
        let resp = send(
            &test,
            Method::PUT,
            "/api/students/10000/progress",
            identity_headers(TEST_SUBJECT),
            Some(body),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["code"], json!("validation_error"));
    }
    assert_eq!(test.count(entity::prelude::UserStudentProgress).await?, 0);

    Ok(())
}

/// Expect 400 when shards used exceed shards owned
#[tokio::test]
async fn rejects_shards_used_above_owned() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = send(
        &test,
        Method::PUT,
        "/api/students/10000/progress",
        identity_headers(TEST_SUBJECT),
        Some(json!({ "shardsOwned": 5, "shardsUsed": 6 })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["details"], json!({ "shardsOwned": 5, "shardsUsed": 6 }));

    Ok(())
}

/// Expect 400 and nothing stored when a patch field is sent as null
#[tokio::test]
async fn rejects_null_patch_fields() -> Result<(), TestError> {
    let test = ledger().await?;

    for body in [json!({ "level": null }), json!({ "memo": null })] {
        let resp = send(
            &test,
            Method::PUT,
            "/api/students/10000/progress",
            identity_headers(TEST_SUBJECT),
            Some(body),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["code"], json!("validation_error"));
    }
    assert_eq!(test.count(entity::prelude::UserStudentProgress).await?, 0);

    Ok(())
}
