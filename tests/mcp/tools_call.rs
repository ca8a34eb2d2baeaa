use super::*;

/// Expect students.list to return the catalogue as structured content and pretty text
#[tokio::test]
async fn lists_students() -> Result<(), TestError> {
    let test = ledger().await?;

    let result = call_tool(&test, "students.list", json!({ "q": "hoshino" })).await;

    assert_eq!(result["structuredContent"]["students"][0]["studentId"], json!("10000"));
    assert_eq!(result["content"][0]["type"], json!("text"));
    let text: Value =
        serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
    assert_eq!(text, result["structuredContent"]);
    assert!(result.get("isError").is_none());

    Ok(())
}

/// Expect an upsert through MCP to be visible through students.get
#[tokio::test]
async fn upserts_progress() -> Result<(), TestError> {
    let test = ledger().await?;

    let upserted = call_tool(
        &test,
        "students.progress.upsert",
        json!({ "studentId": "10001", "patch": { "level": 80, "rarity": 5 } }),
    )
    .await;
    let fetched = call_tool(&test, "students.get", json!({ "studentId": "10001" })).await;

    assert_eq!(upserted["structuredContent"]["progress"]["level"], json!(80));
    assert_eq!(fetched["structuredContent"], upserted["structuredContent"]);

    Ok(())
}

/// Expect rule violations as an isError result carrying the error body
#[tokio::test]
async fn reports_validation_errors_in_result() -> Result<(), TestError> {
    let test = ledger().await?;

    let result = call_tool(
        &test,
        "students.progress.upsert",
        json!({ "studentId": "10000", "patch": { "level": 999 } }),
    )
    .await;

    assert_eq!(result["isError"], json!(true));
    let error = &result["structuredContent"]["error"];
    assert_eq!(error["code"], json!("validation_error"));
    assert_eq!(error["details"]["field"], json!("level"));
    assert_eq!(result["content"][0]["text"], error["message"]);
    assert_eq!(test.count(entity::prelude::UserStudentProgress).await?, 0);

    Ok(())
}

/// Expect an unknown tool to be reported with its name
#[tokio::test]
async fn reports_unknown_tool() -> Result<(), TestError> {
    let test = ledger().await?;

    let result = call_tool(&test, "students.delete", json!({})).await;

    assert_eq!(result["isError"], json!(true));
    assert_eq!(
        result["structuredContent"]["error"]["details"],
        json!({ "toolName": "students.delete" })
    );

    Ok(())
}

/// Expect team tools to list, replace and read back members
#[tokio::test]
async fn manages_team_members() -> Result<(), TestError> {
    let test = ledger().await?;
    let user = test.user().insert_user(TEST_SUBJECT).await?;
    let team = test.user().insert_team(user.id, "jfd", "Goz").await?;

    let listed = call_tool(&test, "teams.list", json!({ "mode": "jfd" })).await;
    let replaced = call_tool(
        &test,
        "teams.members.replace",
        json!({
            "teamId": team.id,
            "members": [{ "studentId": "10002", "positionIndex": 0 }]
        }),
    )
    .await;
    let fetched = call_tool(&test, "teams.get", json!({ "teamId": team.id })).await;

    assert_eq!(listed["structuredContent"]["teams"][0]["teamId"], json!(team.id));
    assert_eq!(replaced["structuredContent"]["members"][0]["studentId"], json!("10002"));
    assert_eq!(fetched["structuredContent"], replaced["structuredContent"]);

    Ok(())
}

/// Expect a missing team to be reported as not_found
#[tokio::test]
async fn reports_missing_team() -> Result<(), TestError> {
    let test = ledger().await?;

    let result = call_tool(&test, "teams.get", json!({ "teamId": 404 })).await;

    assert_eq!(result["isError"], json!(true));
    assert_eq!(result["structuredContent"]["error"]["code"], json!("not_found"));

    Ok(())
}

/// Expect null patch fields to be reported as validation errors without a write
#[tokio::test]
async fn rejects_null_patch_fields() -> Result<(), TestError> {
    let test = ledger().await?;

    for patch in [json!({ "level": null }), json!({ "memo": null })] {
        let result = call_tool(
            &test,
            "students.progress.upsert",
            json!({ "studentId": "10000", "patch": patch }),
        )
        .await;

        assert_eq!(result["isError"], json!(true));
        assert_eq!(
            result["structuredContent"]["error"]["code"],
            json!("validation_error")
        );
    }
    assert_eq!(test.count(entity::prelude::UserStudentProgress).await?, 0);

    Ok(())
}
