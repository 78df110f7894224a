use std::path::PathBuf;

use pw_record_protocol::ErrorCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RecorderError>;

#[derive(Debug, Error)]
pub enum RecorderError {
	#[error("browser launch failed: {0}")]
	BrowserLaunch(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: anyhow::Error,
	},

	#[error("{action} {selector} failed: {message}")]
	Action {
		action: &'static str,
		selector: String,
		message: String,
	},

	#[error("screenshot failed: {path}: {message}")]
	Screenshot { path: PathBuf, message: String },

	#[error("invalid artifact name: {name:?}")]
	InvalidArtifactName { name: String },

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("configuration error: {0}")]
	Config(String),

	#[error("browser engine error: {0}")]
	Engine(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),

	#[error(transparent)]
	Json(#[from] serde_json::Error),

	#[error(transparent)]
	Playwright(#[from] playwright_rs::Error),
}

/// Classified failure ready to be reported as a tool result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolError {
	pub code: ErrorCode,
	pub message: String,
}

/// Maps a driver message to an error code.
fn classify(msg: &str) -> ErrorCode {
	let lower = msg.to_ascii_lowercase();
	if lower.contains("timeout") {
		ErrorCode::Timeout
	} else if lower.contains("net::err") || lower.contains("navigation") {
		ErrorCode::NavigationFailed
	} else if lower.contains("not found") || lower.contains("no element") || lower.contains("waiting for locator") {
		ErrorCode::SelectorNotFound
	} else {
		ErrorCode::InternalError
	}
}

/// Drops the driver's call log and element dumps after the first line.
fn first_line(msg: &str) -> &str {
	msg.lines().map(str::trim).find(|line| !line.is_empty()).unwrap_or("")
}

/// Number of elements a strict mode violation resolved to.
///
/// ```text
/// Error: strict mode violation: locator("button") resolved to 55 elements:
///     1) <button class="...">...</button> aka get_by_role("button")
/// ```
fn strict_mode_match_count(msg: &str) -> Option<u32> {
	let (_, rest) = msg.split_once("strict mode violation")?;
	let (_, rest) = rest.split_once("resolved to ")?;
	rest.split_whitespace().next()?.parse().ok()
}

fn describe_action(action: &str, selector: &str, message: &str) -> (ErrorCode, String) {
	if let Some(count) = strict_mode_match_count(message) {
		return (
			ErrorCode::SelectorNotFound,
			format!("{action} {selector}: selector matched {count} elements, expected exactly one (narrow it or append `>> nth=0`)"),
		);
	}
	(classify(message), format!("{action} {selector} failed: {}", first_line(message)))
}

impl RecorderError {
	pub fn to_tool_error(&self) -> ToolError {
		let (code, message) = match self {
			RecorderError::BrowserLaunch(msg) => (ErrorCode::BrowserLaunchFailed, msg.clone()),
			RecorderError::Navigation { url, source } => {
				let cause = source.to_string();
				let code = match classify(&cause) {
					ErrorCode::Timeout => ErrorCode::Timeout,
					_ => ErrorCode::NavigationFailed,
				};
				(code, format!("Navigation to {url} failed: {}", first_line(&cause)))
			}
			RecorderError::Action { action, selector, message } => describe_action(action, selector, message),
			RecorderError::Screenshot { path, message } => (
				ErrorCode::ScreenshotFailed,
				format!("Screenshot failed at {}: {message}", path.display()),
			),
			RecorderError::InvalidArtifactName { name } => (
				ErrorCode::InvalidInput,
				format!("Invalid file name {name:?}: expected a plain name without path separators"),
			),
			RecorderError::InvalidInput(msg) => (ErrorCode::InvalidInput, msg.clone()),
			RecorderError::Config(msg) => (ErrorCode::InternalError, msg.clone()),
			RecorderError::Engine(msg) => (classify(msg), first_line(msg).to_string()),
			RecorderError::Io(err) => (ErrorCode::IoError, err.to_string()),
			RecorderError::Json(err) => (ErrorCode::InternalError, format!("JSON error: {err}")),
			RecorderError::Playwright(err) => {
				let msg = err.to_string();
				(classify(&msg), first_line(&msg).to_string())
			}
		};

		ToolError { code, message }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn click_error(message: &str) -> ToolError {
		RecorderError::Action {
			action: "click",
			selector: "button".into(),
			message: message.into(),
		}
		.to_tool_error()
	}

	#[test]
	fn strict_mode_violation_names_action_and_count() {
		let err = click_error(
			"Error: strict mode violation: locator(\"button\") resolved to 55 elements:\n    1) <button>..</button>",
		);
		assert_eq!(err.code, ErrorCode::SelectorNotFound);
		assert_eq!(
			err.message,
			"click button: selector matched 55 elements, expected exactly one (narrow it or append `>> nth=0`)"
		);
	}

	#[test]
	fn action_timeout_drops_call_log() {
		let err = RecorderError::Action {
			action: "fill",
			selector: "#missing".into(),
			message: "Timeout 30000ms exceeded.\nCall log:\n  - waiting for locator(\"#missing\")".into(),
		}
		.to_tool_error();
		assert_eq!(err.code, ErrorCode::Timeout);
		assert_eq!(err.message, "fill #missing failed: Timeout 30000ms exceeded.");
	}

	#[test]
	fn missing_element_is_selector_not_found() {
		let err = click_error("Error: No element matches selector");
		assert_eq!(err.code, ErrorCode::SelectorNotFound);
		assert_eq!(err.message, "click button failed: Error: No element matches selector");
	}

	#[test]
	fn navigation_keeps_url_and_cause() {
		let err = RecorderError::Navigation {
			url: "https://nope.invalid".into(),
			source: anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED"),
		}
		.to_tool_error();
		assert_eq!(err.code, ErrorCode::NavigationFailed);
		assert_eq!(err.message, "Navigation to https://nope.invalid failed: net::ERR_NAME_NOT_RESOLVED");
	}

	#[test]
	fn navigation_timeout_stays_timeout() {
		let err = RecorderError::Navigation {
			url: "https://slow.test".into(),
			source: anyhow::anyhow!("Timeout 5000ms exceeded.\nnavigating to \"https://slow.test/\""),
		}
		.to_tool_error();
		assert_eq!(err.code, ErrorCode::Timeout);
		assert_eq!(err.message, "Navigation to https://slow.test failed: Timeout 5000ms exceeded.");
	}

	#[test]
	fn invalid_artifact_name_is_input_error() {
		let err = RecorderError::InvalidArtifactName { name: "../x".into() }.to_tool_error();
		assert_eq!(err.code, ErrorCode::InvalidInput);
	}

	#[test]
	fn unclassified_engine_message_is_internal() {
		let err = RecorderError::Engine("Target page, context or browser has been closed".into()).to_tool_error();
		assert_eq!(err.code, ErrorCode::InternalError);
		assert_eq!(err.message, "Target page, context or browser has been closed");
	}
}
