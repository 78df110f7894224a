use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::recording::ActionEvent;
use crate::tools::{BoxFut, ToolCtx, ToolDef, ToolOutcome};

#[derive(Debug, Deserialize)]
pub struct FillArgs {
	pub selector: String,
	pub text: String,
}

pub struct FillTool;

impl ToolDef for FillTool {
	const NAME: &'static str = "fill";
	const DESCRIPTION: &'static str = "Fill an input field with text";

	type Args = FillArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"selector": { "type": "string", "description": "CSS selector for the input field" },
				"text": { "type": "string", "description": "Text to fill in the field" }
			},
			"required": ["selector", "text"]
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut() else {
				return Ok(ToolOutcome::no_session());
			};

			open.sync_console().await;
			open.page().fill(&args.selector, &args.text).await?;
			open.sync_console().await;
			open.record(ActionEvent::fill(&args.selector, &args.text));

			// Field text may be sensitive; keep it out of info-level logs.
			info!(target = "pw_record.tool", selector = %args.selector, "filled");
			Ok(ToolOutcome::done(
				format!("Filled element {} with text: {}", args.selector, args.text),
				json!({ "selector": args.selector }),
			))
		})
	}
}
