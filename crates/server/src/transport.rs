//! Stdio transport: newline-delimited JSON-RPC 2.0.
//!
//! One request is read, dispatched and answered before the next line is read.
//! Notifications never produce output. Stdout carries only responses.

use pw_record_protocol::{
	CallToolParams, INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, Implementation, InitializeResult, JSONRPC_VERSION,
	ListToolsResult, MCP_PROTOCOL_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, RequestId, RpcRequest, RpcResponse,
	ServerCapabilities, ToolsCapability,
};
use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::recorder::Recorder;

pub const SERVER_NAME: &str = "playwright-mcp-recording";

/// Serves requests from `reader` until EOF.
///
/// Returns an error only when reading or writing the stream fails. Lines
/// that are not UTF-8 or not JSON are answered with a parse error.
pub async fn serve<R, W>(recorder: &mut Recorder, mut reader: R, mut writer: W) -> Result<()>
where
	R: AsyncBufRead + Unpin,
	W: AsyncWrite + Unpin,
{
	info!(target = "pw_record.transport", "serving on stdio");
	let mut buf = Vec::new();

	loop {
		buf.clear();
		if reader.read_until(b'\n', &mut buf).await? == 0 {
			debug!(target = "pw_record.transport", "input closed");
			break;
		}

		// A line that is not UTF-8 is a parse error, not a broken stream.
		let response = match std::str::from_utf8(&buf) {
			Ok(text) => {
				let trimmed = text.trim();
				if trimmed.is_empty() {
					continue;
				}
				handle_line(recorder, trimmed).await
			}
			Err(err) => {
				warn!(target = "pw_record.transport", error = %err, "message is not valid UTF-8");
				Some(RpcResponse::error(None, PARSE_ERROR, format!("Parse error: invalid UTF-8: {err}")))
			}
		};

		if let Some(response) = response {
			let json = serde_json::to_string(&response)?;
			writer.write_all(json.as_bytes()).await?;
			writer.write_all(b"\n").await?;
			writer.flush().await?;
		}
	}

	Ok(())
}

/// Handles one raw message. `None` means nothing is written back.
pub async fn handle_line(recorder: &mut Recorder, line: &str) -> Option<RpcResponse> {
	let value: Value = match serde_json::from_str(line) {
		Ok(value) => value,
		Err(err) => {
			warn!(target = "pw_record.transport", error = %err, "unparseable message");
			return Some(RpcResponse::error(None, PARSE_ERROR, format!("Parse error: {err}")));
		}
	};

	let request: RpcRequest = match serde_json::from_value(value.clone()) {
		Ok(request) => request,
		Err(err) => {
			let id = value.get("id").and_then(|id| serde_json::from_value::<RequestId>(id.clone()).ok());
			return Some(RpcResponse::error(id, INVALID_REQUEST, format!("Invalid request: {err}")));
		}
	};

	if request.jsonrpc != JSONRPC_VERSION {
		return Some(RpcResponse::error(
			request.id,
			INVALID_REQUEST,
			format!("Invalid request: unsupported jsonrpc version {:?}", request.jsonrpc),
		));
	}

	let Some(id) = request.id else {
		debug!(target = "pw_record.transport", method = %request.method, "notification");
		return None;
	};

	Some(dispatch(recorder, id, &request.method, request.params).await)
}

async fn dispatch(recorder: &mut Recorder, id: RequestId, method: &str, params: Option<Value>) -> RpcResponse {
	debug!(target = "pw_record.transport", method, "request");
	let id = Some(id);

	match method {
		"initialize" => respond(id, initialize_result()),
		"ping" => RpcResponse::success(id, json!({})),
		"tools/list" => respond(id, ListToolsResult { tools: recorder.tools() }),
		"tools/call" => {
			let params: CallToolParams = match params.map(serde_json::from_value::<CallToolParams>).transpose() {
				Ok(Some(params)) => params,
				Ok(None) => return RpcResponse::error(id, INVALID_PARAMS, "Invalid params: missing tool name"),
				Err(err) => return RpcResponse::error(id, INVALID_PARAMS, format!("Invalid params: {err}")),
			};
			let result = recorder.call_tool(&params.name, params.arguments.unwrap_or(Value::Null)).await;
			respond(id, result)
		}
		other => RpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {other}")),
	}
}

fn initialize_result() -> InitializeResult {
	InitializeResult {
		protocol_version: MCP_PROTOCOL_VERSION.to_string(),
		capabilities: ServerCapabilities {
			tools: Some(ToolsCapability::default()),
		},
		server_info: Implementation {
			name: SERVER_NAME.to_string(),
			version: env!("CARGO_PKG_VERSION").to_string(),
		},
	}
}

fn respond<T: serde::Serialize>(id: Option<RequestId>, result: T) -> RpcResponse {
	match serde_json::to_value(result) {
		Ok(value) => RpcResponse::success(id, value),
		Err(err) => {
			warn!(target = "pw_record.transport", error = %err, "failed to encode result");
			RpcResponse::error(id, INTERNAL_ERROR, format!("Internal error: {err}"))
		}
	}
}
