//! Tests for the MCP JSON-RPC endpoint, driven through the full router.

mod protocol;
mod tools_call;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
};
use ledger_test_utils::prelude::*;
use schale_ledger::server::{model::app::AppState, router::routes};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::*;

/// Post a raw body to `/mcp` as the test user.
async fn post_raw(test: &TestContext, body: &str) -> Response {
    let app = routes().with_state(test.to_app_state::<AppState>());

    let request = Request::builder()
        .method("POST")
        .uri("/mcp")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-user-sub", TEST_SUBJECT)
        .body(Body::from(body.to_string()))
        .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Post a JSON-RPC message to `/mcp` as the test user.
async fn post(test: &TestContext, message: Value) -> Response {
    post_raw(test, &message.to_string()).await
}

/// Call a tool and return the JSON-RPC `result`.
async fn call_tool(test: &TestContext, name: &str, arguments: Value) -> Value {
    let resp = post(
        test,
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    json_body(resp).await["result"].clone()
}

async fn is_empty(resp: Response) -> bool {
    to_bytes(resp.into_body(), usize::MAX).await.unwrap().is_empty()
}
