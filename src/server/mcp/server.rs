//! MCP message handling over HTTP.
//!
//! Decodes one JSON-RPC message, routes it by method and produces the reply together with
//! the HTTP status it is sent with.

use axum::http::{HeaderMap, StatusCode};
use serde_json::{json, Value};

use crate::{
    model::api::ErrorCode,
    server::{
        controller::util::get_user::get_user_id,
        error::Error,
        mcp::{
            protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse},
            tools::{self, ToolCall},
        },
        model::app::AppState,
        service::{
            ledger::LedgerService,
            retry::{RetryContext, RetryFuture},
        },
    },
};

pub static MCP_PROTOCOL_VERSION: &str = "2025-11-05";
pub static MCP_SERVER_NAME: &str = "schale-ledger-mcp";

/// Reply to a single MCP message
#[derive(Debug, PartialEq)]
pub enum McpReply {
    /// JSON-RPC response sent with the given status
    Response(StatusCode, JsonRpcResponse),
    /// Acknowledged notification, sent as an empty 204
    Accepted,
}

impl McpReply {
    fn ok(response: JsonRpcResponse) -> Self {
        Self::Response(StatusCode::OK, response)
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": MCP_PROTOCOL_VERSION,
        "capabilities": { "tools": {} },
        "serverInfo": {
            "name": MCP_SERVER_NAME,
            "title": "Schale Ledger MCP",
            "version": env!("CARGO_PKG_VERSION"),
        }
    })
}

/// Handles one raw MCP request body.
///
/// # Returns
/// - `McpReply::Response(400, ..)` - Body is not JSON (-32700) or not a JSON-RPC request
///   (-32600)
/// - `McpReply::Accepted` - `notifications/initialized` without an ID
/// - `McpReply::Response(404, ..)` - Unknown method (-32601)
/// - `McpReply::Response(200, ..)` - Any other outcome, including failed tool calls which
///   are reported inside the result with `isError: true`
pub async fn handle_message(state: &AppState, headers: &HeaderMap, body: &[u8]) -> McpReply {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Failed to parse MCP request body: {}", e);

            return McpReply::Response(
                StatusCode::BAD_REQUEST,
                JsonRpcResponse::error(Value::Null, JsonRpcError::parse_error()),
            );
        }
    };

    let request = match JsonRpcRequest::from_value(value) {
        Ok(request) => request,
        Err(error) => {
            return McpReply::Response(
                StatusCode::BAD_REQUEST,
                JsonRpcResponse::error(Value::Null, error),
            )
        }
    };

    if request.method == "notifications/initialized" && request.is_notification() {
        return McpReply::Accepted;
    }

    tracing::debug!("Handling MCP method {}", request.method);

    let id = request.id.clone().unwrap_or(Value::Null);

    match request.method.as_str() {
        "initialize" => McpReply::ok(JsonRpcResponse::success(id, initialize_result())),
        "tools/list" => McpReply::ok(JsonRpcResponse::success(
            id,
            json!({ "tools": tools::list_tools() }),
        )),
        "tools/call" => {
            let params = request.params_object();

            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return McpReply::ok(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params("name is required"),
                ));
            };

            let result = match call_tool(state, headers, name, params.get("arguments").cloned())
                .await
            {
                Ok(payload) => tools::tool_result(payload),
                Err(e) => {
                    let dto = e.to_error_dto();
                    if dto.code == ErrorCode::InternalError {
                        tracing::error!("MCP tool {} failed: {}", name, e);
                    } else {
                        tracing::debug!("MCP tool {} rejected: {}", name, e);
                    }

                    tools::tool_error_result(&dto)
                }
            };

            McpReply::ok(JsonRpcResponse::success(id, result))
        }
        _ => McpReply::Response(
            StatusCode::NOT_FOUND,
            JsonRpcResponse::error(id, JsonRpcError::method_not_found()),
        ),
    }
}

/// One attempt of a tool call: resolve the caller, then run the call
fn attempt_tool_call<'a>(
    state: &'a AppState,
    headers: &'a HeaderMap,
    call: &'a ToolCall,
) -> RetryFuture<'a, Value> {
    Box::pin(async move {
        let user_id = get_user_id(state, headers).await?;

        call.execute(&LedgerService::new(&state.db), user_id).await
    })
}

/// Runs a tool call, retrying write tools on transient store failures
async fn call_tool(
    state: &AppState,
    headers: &HeaderMap,
    name: &str,
    arguments: Option<Value>,
) -> Result<Value, Error> {
    let call = ToolCall::parse(name, arguments)?;

    if call.is_write() {
        RetryContext::new(&state.retry)
            .execute_with_retry(call.name(), || attempt_tool_call(state, headers, &call))
            .await
    } else {
        attempt_tool_call(state, headers, &call).await
    }
}
