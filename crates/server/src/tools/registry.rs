//! Tool registry and generated dispatch glue.

use pw_record_protocol::ToolDescriptor;

use crate::error::RecorderError;
use crate::tools::{ToolCtx, ToolDef, ToolOutcome};

/// The registry macro: generates a `ToolId` enum, `lookup_tool`, `tool_name`,
/// `tool_descriptors`, and `run_tool`.
///
/// The first name in each `names` list must equal the tool's `NAME`; the rest
/// are aliases that resolve to it but are not advertised.
macro_rules! tool_registry {
	(
		$(
			$id:ident => $ty:path {
				names: [ $($name:literal),+ $(,)? ]
			}
		),+ $(,)?
	) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq)]
		pub enum ToolId { $($id),+ }

		pub fn lookup_tool(name: &str) -> Option<ToolId> {
			match name {
				$(
					$($name)|+ => Some(ToolId::$id),
				)+
				_ => None,
			}
		}

		pub fn tool_name(id: ToolId) -> &'static str {
			match id {
				$(
					ToolId::$id => <$ty as ToolDef>::NAME,
				)+
			}
		}

		/// The static command table, in registration order.
		pub fn tool_descriptors() -> Vec<ToolDescriptor> {
			vec![
				$(
					ToolDescriptor {
						name: <$ty as ToolDef>::NAME.to_string(),
						description: <$ty as ToolDef>::DESCRIPTION.to_string(),
						input_schema: <$ty as ToolDef>::input_schema(),
					},
				)+
			]
		}

		/// Run a tool by `ToolId`.
		///
		/// This function is the *only* place that deserializes `Args` and awaits
		/// `execute(...)`.
		pub async fn run_tool(
			id: ToolId,
			args: serde_json::Value,
			ctx: ToolCtx<'_>,
		) -> crate::error::Result<ToolOutcome> {
			match id {
				$(
					ToolId::$id => {
						type Tool = $ty;

						let args: <Tool as ToolDef>::Args = serde_json::from_value(args)
							.map_err(|e| RecorderError::InvalidInput(format!("invalid arguments for {}: {e}", <Tool as ToolDef>::NAME)))?;

						<Tool as ToolDef>::execute(args, ctx).await
					}
				)+
			}
		}
	};
}

tool_registry! {
	Launch => crate::tools::launch::LaunchTool { names: ["launch_browser", "launch"] },
	Navigate => crate::tools::navigate::NavigateTool { names: ["navigate"] },
	StartRecording => crate::tools::recording::StartRecordingTool { names: ["start_recording"] },
	StopRecording => crate::tools::recording::StopRecordingTool { names: ["stop_recording"] },
	Screenshot => crate::tools::screenshot::ScreenshotTool { names: ["take_screenshot", "screenshot"] },
	Click => crate::tools::click::ClickTool { names: ["click"] },
	Fill => crate::tools::fill::FillTool { names: ["fill"] },
	Close => crate::tools::close::CloseTool { names: ["close_browser", "close"] },
}
