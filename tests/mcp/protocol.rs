use super::*;

/// Expect protocol version, tool capability and server info from initialize
#[tokio::test]
async fn initialize_reports_server_info() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post(
        &test,
        json!({ "jsonrpc": "2.0", "id": "init", "method": "initialize", "params": {} }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["id"], json!("init"));
    assert_eq!(body["result"]["protocolVersion"], json!("2025-11-05"));
    assert_eq!(body["result"]["capabilities"], json!({ "tools": {} }));
    assert_eq!(body["result"]["serverInfo"]["name"], json!("schale-ledger-mcp"));

    Ok(())
}

/// Expect six tools, each with an input schema
#[tokio::test]
async fn tools_list_returns_catalogue() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post(&test, json!({ "jsonrpc": "2.0", "id": 2, "method": "tools/list" })).await;

    let body = json_body(resp).await;
    let tools = body["result"]["tools"].as_array().cloned().unwrap();
    assert_eq!(tools.len(), 6);
    assert!(tools.iter().all(|tool| tool["inputSchema"]["type"] == json!("object")));

    Ok(())
}

/// Expect 204 with no body for the initialized notification
#[tokio::test]
async fn initialized_notification_is_accepted() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post(
        &test,
        json!({ "jsonrpc": "2.0", "method": "notifications/initialized" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(is_empty(resp).await);

    Ok(())
}

/// Expect 400 parse error with a null ID for a body that is not JSON
#[tokio::test]
async fn rejects_unparseable_body() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post_raw(&test, "{not json").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], json!(-32700));
    assert_eq!(body["id"], json!(null));

    Ok(())
}

/// Expect 400 invalid request for batches and wrong versions
#[tokio::test]
async fn rejects_invalid_requests() -> Result<(), TestError> {
    let test = ledger().await?;

    for message in [
        json!([{ "jsonrpc": "2.0", "id": 1, "method": "tools/list" }]),
        json!({ "jsonrpc": "1.0", "id": 1, "method": "tools/list" }),
        json!({ "jsonrpc": "2.0", "id": 1 }),
    ] {
        let resp = post(&test, message).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["error"]["code"], json!(-32600));
    }

    Ok(())
}

/// Expect 404 method not found echoing the request ID
#[tokio::test]
async fn rejects_unknown_method() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post(
        &test,
        json!({ "jsonrpc": "2.0", "id": 7, "method": "resources/list" }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], json!(-32601));
    assert_eq!(body["id"], json!(7));

    Ok(())
}

/// Expect invalid params when the tool name is not a string
#[tokio::test]
async fn tools_call_requires_name() -> Result<(), TestError> {
    let test = ledger().await?;

    let resp = post(
        &test,
        json!({ "jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": { "name": 5 } }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["error"]["code"], json!(-32602));
    assert_eq!(body["error"]["data"], json!({ "reason": "name is required" }));

    Ok(())
}
