use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::recording::ActionEvent;
use crate::tools::{BoxFut, ToolCtx, ToolDef, ToolOutcome};

#[derive(Debug, Deserialize)]
pub struct ClickArgs {
	pub selector: String,
}

pub struct ClickTool;

impl ToolDef for ClickTool {
	const NAME: &'static str = "click";
	const DESCRIPTION: &'static str = "Click on an element";

	type Args = ClickArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"selector": { "type": "string", "description": "CSS selector for the element to click" }
			},
			"required": ["selector"]
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut() else {
				return Ok(ToolOutcome::no_session());
			};

			open.sync_console().await;
			open.page().click(&args.selector).await?;
			open.sync_console().await;
			open.record(ActionEvent::click(&args.selector));

			info!(target = "pw_record.tool", selector = %args.selector, "clicked");
			Ok(ToolOutcome::done(
				format!("Clicked on element: {}", args.selector),
				json!({ "selector": args.selector }),
			))
		})
	}
}
