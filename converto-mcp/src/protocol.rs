//! JSON-RPC message types for the MCP stdio transport

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use converto::ConvertoError;

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
pub struct McpRequest {
    #[allow(dead_code)]
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

impl McpRequest {
    /// Requests without an id are notifications and get no response
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

#[derive(Debug, Serialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    pub fn new(id: Option<JsonValue>, outcome: Result<JsonValue, McpError>) -> Self {
        match outcome {
            Ok(result) => McpResponse { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None },
            Err(error) => McpResponse { jsonrpc: "2.0".to_string(), id, result: None, error: Some(error) },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        McpError { code, message: message.into(), data: None }
    }

    pub fn parse_error(details: impl std::fmt::Display) -> Self {
        Self::new(PARSE_ERROR, format!("Parse error: {}", details))
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(METHOD_NOT_FOUND, format!("Method not found: {}", method))
    }

    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::new(INVALID_PARAMS, message)
    }
}

/// Argument problems surface as invalid params carrying the structured error
impl From<ConvertoError> for McpError {
    fn from(err: ConvertoError) -> Self {
        McpError {
            code: INVALID_PARAMS,
            message: err.message.clone(),
            data: Some(json!(err)),
        }
    }
}
