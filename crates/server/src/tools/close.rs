use pw_record_protocol::ErrorCode;
use serde_json::json;
use tracing::{info, warn};

use crate::error::Result;
use crate::tools::{BoxFut, NoArgs, ToolCtx, ToolDef, ToolOutcome, empty_schema};

pub const NOT_OPEN_MESSAGE: &str = "No browser is currently open";

pub struct CloseTool;

impl ToolDef for CloseTool {
	const NAME: &'static str = "close_browser";
	const DESCRIPTION: &'static str = "Close the browser instance";

	type Args = NoArgs;

	fn input_schema() -> serde_json::Value {
		empty_schema()
	}

	fn execute<'a>(_args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			// The state is Idle from here on, even if teardown fails.
			let Some(open) = ctx.session.take() else {
				return Ok(ToolOutcome::declined(ErrorCode::NoSession, NOT_OPEN_MESSAGE));
			};

			let (result, discarded) = open.close().await;
			if discarded > 0 {
				warn!(target = "pw_record.tool", discarded, "recording discarded on close");
			}
			result?;

			info!(target = "pw_record.tool", "browser closed");
			Ok(ToolOutcome::done("Browser closed successfully", json!({ "discarded": discarded })))
		})
	}
}
