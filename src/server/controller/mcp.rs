use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::server::{
    mcp::{
        protocol::{JsonRpcRequest, JsonRpcResponse},
        server::{handle_message, McpReply},
    },
    model::app::AppState,
};

pub static MCP_TAG: &str = "mcp";

/// Model Context Protocol endpoint
///
/// Accepts a single JSON-RPC 2.0 message. Supports `initialize`, `tools/list`, `tools/call`
/// and the `notifications/initialized` notification. Failed tool calls are reported inside
/// a successful result with `isError: true`.
#[utoipa::path(
    post,
    path = "/mcp",
    tag = MCP_TAG,
    request_body = JsonRpcRequest,
    responses(
        (status = 200, description = "JSON-RPC result or error", body = JsonRpcResponse),
        (status = 204, description = "Notification accepted"),
        (status = 400, description = "Parse error or invalid request", body = JsonRpcResponse),
        (status = 404, description = "Method not found", body = JsonRpcResponse)
    ),
)]
pub async fn mcp(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    match handle_message(&state, &headers, &body).await {
        McpReply::Response(status, response) => (status, Json(response)).into_response(),
        McpReply::Accepted => StatusCode::NO_CONTENT.into_response(),
    }
}
