//! Tool plumbing: the contract every command implements and its outcome type.

pub mod click;
pub mod close;
pub mod fill;
pub mod launch;
pub mod navigate;
pub mod recording;
pub mod registry;
pub mod screenshot;

use std::future::Future;
use std::pin::Pin;

use pw_record_protocol::{CallToolResult, ErrorCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::engine::{BrowserEngine, LaunchRequest};
use crate::error::Result;
use crate::recording::RecordingStore;
use crate::session::SessionState;
use crate::types::BrowserKind;

pub const NO_SESSION_MESSAGE: &str = "No browser page available. Launch browser first.";

/// Launch settings that come from configuration rather than tool arguments.
#[derive(Debug, Clone, Default)]
pub struct LaunchDefaults {
	pub browser: BrowserKind,
	pub record_video: bool,
	pub timeout_ms: Option<u64>,
}

/// Everything a tool may touch while it runs.
pub struct ToolCtx<'a> {
	pub session: &'a mut SessionState,
	pub engine: &'a dyn BrowserEngine,
	pub store: &'a RecordingStore,
	pub launch: &'a LaunchDefaults,
}

impl ToolCtx<'_> {
	pub fn launch_request(&self, headless: bool) -> LaunchRequest {
		LaunchRequest {
			browser: self.launch.browser,
			headless,
			video_dir: self.launch.record_video.then(|| self.store.dir().to_path_buf()),
			timeout_ms: self.launch.timeout_ms,
		}
	}
}

/// What a tool reports back when it did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
	/// The command ran; `data` goes into the structured content.
	Done { message: String, data: Value },
	/// The session was not in a state that allows the command.
	Declined { code: ErrorCode, message: String },
}

impl ToolOutcome {
	pub fn done(message: impl Into<String>, data: Value) -> Self {
		ToolOutcome::Done {
			message: message.into(),
			data,
		}
	}

	pub fn declined(code: ErrorCode, message: impl Into<String>) -> Self {
		ToolOutcome::Declined {
			code,
			message: message.into(),
		}
	}

	pub fn no_session() -> Self {
		Self::declined(ErrorCode::NoSession, NO_SESSION_MESSAGE)
	}

	pub fn into_result(self) -> CallToolResult {
		match self {
			ToolOutcome::Done { message, data } => CallToolResult::success(message, data),
			ToolOutcome::Declined { code, message } => CallToolResult::declined(code, message),
		}
	}
}

/// Boxing alias: stable async in trait without `async_trait`.
pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Canonical tool trait. Each tool module provides
/// `pub struct XxxTool; impl ToolDef for XxxTool { ... }`
pub trait ToolDef: 'static {
	const NAME: &'static str;
	const DESCRIPTION: &'static str;

	type Args: DeserializeOwned;

	/// JSON schema advertised in `tools/list`.
	fn input_schema() -> Value;

	/// Execute the tool. Engine failures are returned as `Err`; the recorder
	/// turns them into error results.
	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>>;
}

/// Argument type for tools that take none. Extra fields are ignored.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct NoArgs {}

pub fn empty_schema() -> Value {
	serde_json::json!({ "type": "object", "properties": {} })
}
