//! The command dispatcher.
//!
//! [`Recorder`] owns the session, the recording buffer (inside the session)
//! and the artifact store. Every tool call ends as a [`CallToolResult`]; no
//! failure escapes to the transport.

use pw_record_protocol::{CallToolResult, ErrorCode, ToolDescriptor};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::engine::BrowserEngine;
use crate::error::Result;
use crate::recording::RecordingStore;
use crate::session::SessionState;
use crate::tools::registry::{lookup_tool, run_tool, tool_descriptors, tool_name};
use crate::tools::{LaunchDefaults, ToolCtx};

pub struct Recorder {
	engine: Box<dyn BrowserEngine>,
	state: SessionState,
	store: RecordingStore,
	launch: LaunchDefaults,
}

impl Recorder {
	/// Builds a recorder, creating the recordings directory if needed.
	pub fn new(engine: Box<dyn BrowserEngine>, config: &ServerConfig) -> Result<Self> {
		let store = RecordingStore::open(&config.recordings_dir)?;
		Ok(Self {
			engine,
			state: SessionState::Idle,
			store,
			launch: config.launch_defaults(),
		})
	}

	pub fn tools(&self) -> Vec<ToolDescriptor> {
		tool_descriptors()
	}

	pub fn store(&self) -> &RecordingStore {
		&self.store
	}

	pub fn is_open(&self) -> bool {
		self.state.is_open()
	}

	pub fn is_recording(&self) -> bool {
		self.state.is_recording()
	}

	/// Runs one tool. `arguments` may be `null` for tools without inputs.
	pub async fn call_tool(&mut self, name: &str, arguments: Value) -> CallToolResult {
		let Some(id) = lookup_tool(name) else {
			warn!(target = "pw_record.tool", tool = name, "unknown tool");
			return CallToolResult::error(ErrorCode::UnknownTool, format!("Unknown tool: {name}"));
		};

		let arguments = match arguments {
			Value::Null => Value::Object(Default::default()),
			other => other,
		};

		let canonical = tool_name(id);
		debug!(target = "pw_record.tool", tool = canonical, "dispatch");

		let ctx = ToolCtx {
			session: &mut self.state,
			engine: self.engine.as_ref(),
			store: &self.store,
			launch: &self.launch,
		};

		match run_tool(id, arguments, ctx).await {
			Ok(outcome) => outcome.into_result(),
			Err(err) => {
				let failure = err.to_tool_error();
				warn!(target = "pw_record.tool", tool = canonical, code = %failure.code, error = %failure.message, "tool failed");
				CallToolResult::error(failure.code, format!("Error executing {name}: {}", failure.message))
			}
		}
	}

	/// Releases the session, if any. Unflushed recording events are dropped.
	pub async fn shutdown(&mut self) {
		let Some(open) = self.state.take() else {
			return;
		};

		info!(target = "pw_record", "closing browser on shutdown");
		let (result, discarded) = open.close().await;
		if discarded > 0 {
			warn!(target = "pw_record", discarded, "recording discarded on shutdown");
		}
		if let Err(err) = result {
			warn!(target = "pw_record", error = %err, "browser close failed on shutdown");
		}
	}
}
