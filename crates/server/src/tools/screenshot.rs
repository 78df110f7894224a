use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::error::Result;
use crate::recording::{ActionEvent, DEFAULT_SCREENSHOT_NAME, artifact_name};
use crate::tools::{BoxFut, ToolCtx, ToolDef, ToolOutcome};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotArgs {
	#[serde(default)]
	pub filename: Option<String>,
	#[serde(default)]
	pub full_page: bool,
}

pub struct ScreenshotTool;

impl ToolDef for ScreenshotTool {
	const NAME: &'static str = "take_screenshot";
	const DESCRIPTION: &'static str = "Take a screenshot of the current page";

	type Args = ScreenshotArgs;

	fn input_schema() -> serde_json::Value {
		json!({
			"type": "object",
			"properties": {
				"filename": {
					"type": "string",
					"description": "Filename to save the screenshot (without extension)",
					"default": DEFAULT_SCREENSHOT_NAME
				},
				"fullPage": {
					"type": "boolean",
					"description": "Whether to take a full page screenshot",
					"default": false
				}
			}
		})
	}

	fn execute<'a>(args: Self::Args, ctx: ToolCtx<'a>) -> BoxFut<'a, Result<ToolOutcome>> {
		Box::pin(async move {
			let Some(open) = ctx.session.open_mut() else {
				return Ok(ToolOutcome::no_session());
			};

			let name = artifact_name(args.filename.as_deref(), DEFAULT_SCREENSHOT_NAME);
			let path = ctx.store.screenshot_path(name)?;

			open.sync_console().await;
			open.page().screenshot(&path, args.full_page).await?;
			open.sync_console().await;
			open.record(ActionEvent::screenshot(name, args.full_page));

			info!(target = "pw_record.tool", path = %path.display(), full_page = args.full_page, "screenshot saved");
			Ok(ToolOutcome::done(
				format!("Screenshot saved to {}", path.display()),
				json!({ "path": path.display().to_string(), "filename": name, "fullPage": args.full_page }),
			))
		})
	}
}
