use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::recording::ActionEvent;
use crate::tools::{BoxFut, ToolCtx, ToolDef, ToolOutcome};

#[derive(Debug, Deserialize)]
pub struct NavigateArgs {
	pub url: String,
}

pub struct NavigateTool;

impl ToolDef for NavigateTool {
	const NAME: &'static str = "navigate";
	const DESCRIPTION: &'static str = "Navigate to a URL";

	type Args = NavigateArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"url": { "type": "string", "description": "The URL to navigate to" }
			},
			"required": ["url"]
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut() else {
				return Ok(ToolOutcome::no_session());
			};

			open.sync_console().await;
			open.page().goto(&args.url).await?;
			open.sync_console().await;
			open.record(ActionEvent::navigate(&args.url));

			info!(target = "pw_record.tool", url = %args.url, "navigated");
			Ok(ToolOutcome::done(format!("Navigated to {}", args.url), json!({ "url": args.url })))
		})
	}
}
