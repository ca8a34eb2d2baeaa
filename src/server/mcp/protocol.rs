//! JSON-RPC 2.0 protocol types for the MCP endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub static JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JsonRpcRequest {
    /// JSON-RPC version (must be "2.0")
    pub jsonrpc: String,

    /// Method name to invoke
    pub method: String,

    /// Parameters of the method
    #[serde(default, skip_serializing_if = "Value::is_null")]
    #[schema(value_type = Option<Object>)]
    pub params: Value,

    /// Request ID, `None` when the member is absent (a notification)
    ///
    /// An explicit `null` ID is kept as `Some(Value::Null)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub id: Option<Value>,
}

impl JsonRpcRequest {
    /// Validates the envelope of a decoded JSON-RPC message
    ///
    /// # Returns
    /// - `Ok(JsonRpcRequest)` - Object with `jsonrpc: "2.0"` and a string `method`
    /// - `Err(JsonRpcError)` - Invalid request (-32600) for anything else, including batches
    pub fn from_value(value: Value) -> Result<Self, JsonRpcError> {
        let Value::Object(mut object) = value else {
            return Err(JsonRpcError::invalid_request());
        };

        if object.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
            return Err(JsonRpcError::invalid_request());
        }

        let method = match object.remove("method") {
            Some(Value::String(method)) => method,
            _ => return Err(JsonRpcError::invalid_request()),
        };

        Ok(Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method,
            params: object.remove("params").unwrap_or(Value::Null),
            id: object.remove("id"),
        })
    }

    /// True for a request without an `id` member
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }

    /// `params` as an object, empty when absent or of another type
    pub fn params_object(&self) -> Map<String, Value> {
        match &self.params {
            Value::Object(params) => params.clone(),
            _ => Map::new(),
        }
    }
}

/// JSON-RPC 2.0 response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JsonRpcResponse {
    /// JSON-RPC version (always "2.0")
    pub jsonrpc: String,

    /// Request ID echoed from the request, `null` when it could not be read
    #[schema(value_type = Option<Object>)]
    pub id: Value,

    /// Result (present if successful)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub result: Option<Value>,

    /// Error (present if failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Create a success response
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response
    pub fn error(id: Value, error: JsonRpcError) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// JSON-RPC 2.0 error object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct JsonRpcError {
    /// Error code
    pub code: i32,

    /// Error message
    pub message: String,

    /// Additional error data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl JsonRpcError {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;

    /// Parse error (-32700)
    pub fn parse_error() -> Self {
        Self {
            code: Self::PARSE_ERROR,
            message: "Parse error".to_string(),
            data: None,
        }
    }

    /// Invalid request (-32600)
    pub fn invalid_request() -> Self {
        Self {
            code: Self::INVALID_REQUEST,
            message: "Invalid Request".to_string(),
            data: None,
        }
    }

    /// Method not found (-32601)
    pub fn method_not_found() -> Self {
        Self {
            code: Self::METHOD_NOT_FOUND,
            message: "Method not found".to_string(),
            data: None,
        }
    }

    /// Invalid params (-32602) with the reason in `data`
    pub fn invalid_params(reason: impl Into<String>) -> Self {
        Self {
            code: Self::INVALID_PARAMS,
            message: "Invalid params".to_string(),
            data: Some(serde_json::json!({ "reason": reason.into() })),
        }
    }
}
