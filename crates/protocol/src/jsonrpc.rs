//! JSON-RPC 2.0 envelopes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

/// Invalid JSON was received.
pub const PARSE_ERROR: i64 = -32700;
/// The JSON sent is not a valid request object.
pub const INVALID_REQUEST: i64 = -32600;
/// The method does not exist.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Invalid method parameters.
pub const INVALID_PARAMS: i64 = -32602;
/// Internal JSON-RPC error.
pub const INTERNAL_ERROR: i64 = -32603;

/// Request identifier, echoed in the matching response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
	Number(i64),
	String(String),
}

/// Incoming request or notification.
///
/// A message without an `id` is a notification and never gets a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
	pub jsonrpc: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<RequestId>,
	pub method: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub params: Option<Value>,
}

/// Error object carried by a failed [`RpcResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcError {
	pub code: i64,
	pub message: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
}

/// Outgoing response. Exactly one of `result` and `error` is set.
///
/// `id` serializes as `null` when the request id could not be read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
	pub jsonrpc: String,
	#[serde(default)]
	pub id: Option<RequestId>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<RpcError>,
}

impl RpcResponse {
	pub fn success(id: Option<RequestId>, result: Value) -> Self {
		Self {
			jsonrpc: JSONRPC_VERSION.to_string(),
			id,
			result: Some(result),
			error: None,
		}
	}

	pub fn error(id: Option<RequestId>, code: i64, message: impl Into<String>) -> Self {
		Self {
			jsonrpc: JSONRPC_VERSION.to_string(),
			id,
			result: None,
			error: Some(RpcError {
				code,
				message: message.into(),
				data: None,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn request_accepts_numeric_and_string_ids() {
		let numeric: RpcRequest = serde_json::from_str(r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#).unwrap();
		assert_eq!(numeric.id, Some(RequestId::Number(7)));

		let text: RpcRequest = serde_json::from_str(r#"{"jsonrpc":"2.0","id":"abc","method":"ping"}"#).unwrap();
		assert_eq!(text.id, Some(RequestId::String("abc".into())));
		assert!(text.params.is_none());
	}

	#[test]
	fn request_without_id_is_notification() {
		let req: RpcRequest = serde_json::from_str(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).unwrap();
		assert!(req.id.is_none());
	}

	#[test]
	fn error_response_serializes_null_id() {
		let resp = RpcResponse::error(None, PARSE_ERROR, "bad json");
		let json = serde_json::to_value(&resp).unwrap();
		assert!(json["id"].is_null());
		assert_eq!(json["error"]["code"], -32700);
		assert!(json.get("result").is_none());
	}

	#[test]
	fn success_response_omits_error() {
		let resp = RpcResponse::success(Some(RequestId::Number(1)), serde_json::json!({}));
		let json = serde_json::to_string(&resp).unwrap();
		assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"result":{}}"#);
	}
}
