//! `start_recording` and `stop_recording`.

use pw_record_protocol::ErrorCode;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::recording::{DEFAULT_RECORDING_NAME, artifact_name};
use crate::types::now_millis;
use crate::tools::{BoxFut, NoArgs, ToolCtx, ToolDef, ToolOutcome, empty_schema};

pub const NOT_RECORDING_MESSAGE: &str = "No recording in progress";

pub struct StartRecordingTool;

impl ToolDef for StartRecordingTool {
	const NAME: &'static str = "start_recording";
	const DESCRIPTION: &'static str = "Start recording browser interactions";

	type Args = NoArgs;

	fn input_schema() -> serde_json::Value {
		empty_schema()
	}

	fn execute<'a>(_args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut() else {
				return Ok(ToolOutcome::no_session());
			};

			// Messages logged before the window opens do not belong to it.
			open.sync_console().await;
			let discarded = open.start_recording();

			info!(target = "pw_record.tool", discarded, "recording started");
			Ok(ToolOutcome::done("Recording started", json!({ "discarded": discarded })))
		})
	}
}

#[derive(Debug, Default, Deserialize)]
pub struct StopRecordingArgs {
	#[serde(default)]
	pub filename: Option<String>,
}

pub struct StopRecordingTool;

impl ToolDef for StopRecordingTool {
	const NAME: &'static str = "stop_recording";
	const DESCRIPTION: &'static str = "Stop recording and save the recorded actions";

	type Args = StopRecordingArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"filename": {
					"type": "string",
					"description": "Filename to save the recording (without extension)",
					"default": DEFAULT_RECORDING_NAME
				}
			}
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut().filter(|open| open.is_recording()) else {
				return Ok(ToolOutcome::declined(ErrorCode::NotRecording, NOT_RECORDING_MESSAGE));
			};

			open.sync_console().await;

			let name = artifact_name(args.filename.as_deref(), DEFAULT_RECORDING_NAME);
			let events = open.recording().map(|buffer| buffer.events()).unwrap_or_default();
			let path = ctx.store.save_recording(name, events)?;
			let count = events.len();
			let window_ms = open.recording().map_or(0, |buffer| now_millis().saturating_sub(buffer.started_at()));

			// Only leave the window once the artifact is on disk.
			open.stop_recording();

			info!(target = "pw_record.tool", path = %path.display(), count, window_ms, "recording saved");
			Ok(ToolOutcome::done(
				format!("Recording stopped and saved to {}. Recorded {count} actions.", path.display()),
				json!({ "path": path.display().to_string(), "filename": name, "count": count }),
			))
		})
	}
}
