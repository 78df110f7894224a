use pw_record_protocol::ErrorCode;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::tools::{BoxFut, ToolCtx, ToolDef, ToolOutcome};

pub const ALREADY_LAUNCHED_MESSAGE: &str = "Browser is already launched. Close it first to launch a new one.";

#[derive(Debug, Default, Deserialize)]
pub struct LaunchArgs {
	#[serde(default)]
	pub headless: bool,
}

pub struct LaunchTool;

impl ToolDef for LaunchTool {
	const NAME: &'static str = "launch_browser";
	const DESCRIPTION: &'static str = "Launch a new browser instance with Playwright";

	type Args = LaunchArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"headless": {
					"type": "boolean",
					"description": "Whether to run browser in headless mode",
					"default": false
				}
			}
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			if ctx.session.is_open() {
				return Ok(ToolOutcome::declined(ErrorCode::SessionAlreadyOpen, ALREADY_LAUNCHED_MESSAGE));
			}

			let request = ctx.launch_request(args.headless);
			let browser = ctx.engine.launch(&request).await?;
			ctx.session.open(browser);

			let mode = if args.headless { "headless" } else { "headed" };
			info!(target = "pw_record.tool", browser = %request.browser, mode, "browser launched");

			Ok(ToolOutcome::done(
				format!("Browser launched successfully in {mode} mode."),
				json!({ "headless": args.headless, "browser": request.browser }),
			))
		})
	}
}
