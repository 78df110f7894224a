//! Wire types for the pw-record stdio server.
//!
//! The server speaks newline-delimited JSON-RPC 2.0 on stdin/stdout, using the
//! Model Context Protocol method names for tool discovery and invocation.
//!
//! # Main Types
//!
//! - [`RpcRequest`] / [`RpcResponse`] - JSON-RPC envelopes
//! - [`ToolDescriptor`] - one entry of the `tools/list` table
//! - [`CallToolParams`] / [`CallToolResult`] - `tools/call` request and result
//! - [`ErrorCode`] - machine-readable failure classification

mod jsonrpc;
mod tool;

pub use jsonrpc::{
	INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND, PARSE_ERROR, RequestId, RpcError, RpcRequest,
	RpcResponse,
};
pub use tool::{
	CallToolParams, CallToolResult, Content, ErrorCode, Implementation, InitializeResult, ListToolsResult, MCP_PROTOCOL_VERSION,
	ServerCapabilities, ToolDescriptor, ToolsCapability,
};
