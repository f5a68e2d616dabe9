//! JSON-RPC 2.0 envelope helpers.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use wayfare_core::{Result, WayfareError};

pub const JSONRPC_VERSION: &str = "2.0";

pub const ERROR_INVALID_PARAMS: i32 = -32602;
pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;
pub const ERROR_INTERNAL: i32 = -32603;

/// The closed set of supported methods, matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    MessageSend,
    MessageSendSubscribe,
}

impl RpcMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::MessageSend => "message/send",
            RpcMethod::MessageSendSubscribe => "message/sendSubscribe",
        }
    }
}

impl std::str::FromStr for RpcMethod {
    type Err = WayfareError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "message/send" => Ok(RpcMethod::MessageSend),
            "message/sendSubscribe" => Ok(RpcMethod::MessageSendSubscribe),
            other => Err(WayfareError::MethodNotFound(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JsonRpcId {
    String(String),
    Integer(i64),
    #[default]
    Null,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    #[serde(default)]
    pub id: Option<JsonRpcId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcSuccessResponse {
    pub jsonrpc: String,
    pub result: Value,
    pub id: Option<JsonRpcId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcErrorResponse {
    pub jsonrpc: String,
    pub error: JsonRpcError,
    pub id: Option<JsonRpcId>,
}

pub fn success_response(id: Option<JsonRpcId>, result: Value) -> Value {
    serde_json::to_value(JsonRpcSuccessResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        result,
        id,
    })
    .unwrap_or_else(|_| {
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": null,
            "result": { "error": "serialization failed" }
        })
    })
}

pub fn error_response(id: Option<JsonRpcId>, code: i32, message: &str, data: Option<Value>) -> Value {
    serde_json::to_value(JsonRpcErrorResponse {
        jsonrpc: JSONRPC_VERSION.to_string(),
        error: JsonRpcError {
            code,
            message: message.to_string(),
            data,
        },
        id,
    })
    .unwrap_or_else(|_| {
        json!({
            "jsonrpc": JSONRPC_VERSION,
            "id": null,
            "error": { "code": ERROR_INTERNAL, "message": "serialization failed" }
        })
    })
}

/// Map an adapter error onto the standard JSON-RPC error triple.
pub fn map_rpc_error(error: &WayfareError) -> (i32, &'static str, Option<Value>) {
    match error {
        WayfareError::InvalidParams(detail) => (
            ERROR_INVALID_PARAMS,
            "Invalid params",
            Some(json!({ "details": detail })),
        ),
        WayfareError::MethodNotFound(_) => (ERROR_METHOD_NOT_FOUND, "Method not found", None),
        other => (
            ERROR_INTERNAL,
            "Internal error",
            Some(json!({ "details": other.to_string() })),
        ),
    }
}

/// Pull the caller-supplied id out of a raw request body. Reads the `id`
/// member alone, so errors raised against an otherwise malformed envelope
/// still echo this id back.
pub fn extract_id(value: &Value) -> Option<JsonRpcId> {
    value
        .get("id")
        .and_then(|id| serde_json::from_value(id.clone()).ok())
}

/// Parse the envelope, rejecting unsupported protocol versions.
pub fn parse_request(value: Value) -> Result<JsonRpcRequest> {
    let request: JsonRpcRequest = serde_json::from_value(value)
        .map_err(|err| WayfareError::InvalidParams(format!("malformed JSON-RPC envelope: {err}")))?;
    if request.jsonrpc != JSONRPC_VERSION {
        return Err(WayfareError::InvalidParams(format!(
            "unsupported jsonrpc version: {}",
            request.jsonrpc
        )));
    }
    Ok(request)
}
