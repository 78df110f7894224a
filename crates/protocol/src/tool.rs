//! MCP tool discovery and invocation payloads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Protocol revision reported from `initialize`.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Name and version of the server, reported from `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Implementation {
	pub name: String,
	pub version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub list_changed: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tools: Option<ToolsCapability>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
	pub protocol_version: String,
	pub capabilities: ServerCapabilities,
	pub server_info: Implementation,
}

/// One entry of the static command table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
	pub name: String,
	pub description: String,
	/// JSON schema (object) describing the accepted arguments.
	pub input_schema: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListToolsResult {
	pub tools: Vec<ToolDescriptor>,
}

/// `tools/call` parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallToolParams {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub arguments: Option<Value>,
}

/// Content block in a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
	Text { text: String },
}

/// Result of a `tools/call`.
///
/// `is_error` is only set for failures. Precondition results ("no browser",
/// "no recording in progress") are regular results with `ok: false` in the
/// structured content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
	pub content: Vec<Content>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_error: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub structured_content: Option<Value>,
}

impl CallToolResult {
	/// Successful result carrying `data` merged under `{"ok": true}`.
	pub fn success(message: impl Into<String>, data: Value) -> Self {
		Self {
			content: vec![Content::Text { text: message.into() }],
			is_error: None,
			structured_content: Some(structured(true, None, data)),
		}
	}

	/// Non-fatal result for a command whose precondition did not hold.
	pub fn declined(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			content: vec![Content::Text { text: message.into() }],
			is_error: None,
			structured_content: Some(structured(false, Some(code), Value::Null)),
		}
	}

	/// Error result (`isError: true`).
	pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
		Self {
			content: vec![Content::Text { text: message.into() }],
			is_error: Some(true),
			structured_content: Some(structured(false, Some(code), Value::Null)),
		}
	}

	pub fn is_error(&self) -> bool {
		self.is_error.unwrap_or(false)
	}

	/// Concatenated text of all text blocks.
	pub fn text(&self) -> String {
		self.content
			.iter()
			.map(|c| match c {
				Content::Text { text } => text.as_str(),
			})
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Error code from the structured content, if any.
	pub fn code(&self) -> Option<ErrorCode> {
		self.structured_content
			.as_ref()
			.and_then(|s| s.get("code"))
			.and_then(|c| serde_json::from_value(c.clone()).ok())
	}
}

fn structured(ok: bool, code: Option<ErrorCode>, data: Value) -> Value {
	let mut map = match data {
		Value::Object(map) => map,
		Value::Null => Map::new(),
		other => {
			let mut map = Map::new();
			map.insert("data".into(), other);
			map
		}
	};
	map.insert("ok".into(), Value::Bool(ok));
	if let Some(code) = code {
		map.insert("code".into(), Value::String(code.to_string()));
	}
	Value::Object(map)
}

/// Standardized error codes for programmatic handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
	/// Command needs an open browser and none is open
	NoSession,
	/// `launch_browser` while a browser is already open
	SessionAlreadyOpen,
	/// `stop_recording` while not recording
	NotRecording,
	/// Tool name is not in the command table
	UnknownTool,
	/// Arguments failed validation
	InvalidInput,
	/// Browser failed to launch
	BrowserLaunchFailed,
	/// Navigation to URL failed
	NavigationFailed,
	/// Selector did not match any elements
	SelectorNotFound,
	/// Operation timed out
	Timeout,
	/// Screenshot capture failed
	ScreenshotFailed,
	/// File I/O error
	IoError,
	/// Unknown/internal error
	InternalError,
}

impl std::fmt::Display for ErrorCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ErrorCode::NoSession => write!(f, "NO_SESSION"),
			ErrorCode::SessionAlreadyOpen => write!(f, "SESSION_ALREADY_OPEN"),
			ErrorCode::NotRecording => write!(f, "NOT_RECORDING"),
			ErrorCode::UnknownTool => write!(f, "UNKNOWN_TOOL"),
			ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
			ErrorCode::BrowserLaunchFailed => write!(f, "BROWSER_LAUNCH_FAILED"),
			ErrorCode::NavigationFailed => write!(f, "NAVIGATION_FAILED"),
			ErrorCode::SelectorNotFound => write!(f, "SELECTOR_NOT_FOUND"),
			ErrorCode::Timeout => write!(f, "TIMEOUT"),
			ErrorCode::ScreenshotFailed => write!(f, "SCREENSHOT_FAILED"),
			ErrorCode::IoError => write!(f, "IO_ERROR"),
			ErrorCode::InternalError => write!(f, "INTERNAL_ERROR"),
		}
	}
}
