use serde::{Deserialize, Serialize};

use crate::types::{ConsoleEntry, now_millis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateData {
	pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickData {
	pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillData {
	pub selector: String,
	pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotData {
	pub filename: String,
	pub full_page: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleData {
	pub text: String,
	#[serde(rename = "type")]
	pub msg_type: String,
}

/// One recorded occurrence.
///
/// Serialized as `{"type": "...", "data": {...}, "timestamp": <unix ms>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionEvent {
	Navigate { data: NavigateData, timestamp: u64 },
	Click { data: ClickData, timestamp: u64 },
	Fill { data: FillData, timestamp: u64 },
	Screenshot { data: ScreenshotData, timestamp: u64 },
	Console { data: ConsoleData, timestamp: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
	Navigate,
	Click,
	Fill,
	Screenshot,
	Console,
}

impl std::fmt::Display for ActionKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ActionKind::Navigate => write!(f, "navigate"),
			ActionKind::Click => write!(f, "click"),
			ActionKind::Fill => write!(f, "fill"),
			ActionKind::Screenshot => write!(f, "screenshot"),
			ActionKind::Console => write!(f, "console"),
		}
	}
}

impl ActionEvent {
	pub fn navigate(url: impl Into<String>) -> Self {
		ActionEvent::Navigate {
			data: NavigateData { url: url.into() },
			timestamp: now_millis(),
		}
	}

	pub fn click(selector: impl Into<String>) -> Self {
		ActionEvent::Click {
			data: ClickData { selector: selector.into() },
			timestamp: now_millis(),
		}
	}

	pub fn fill(selector: impl Into<String>, text: impl Into<String>) -> Self {
		ActionEvent::Fill {
			data: FillData {
				selector: selector.into(),
				text: text.into(),
			},
			timestamp: now_millis(),
		}
	}

	pub fn screenshot(filename: impl Into<String>, full_page: bool) -> Self {
		ActionEvent::Screenshot {
			data: ScreenshotData {
				filename: filename.into(),
				full_page,
			},
			timestamp: now_millis(),
		}
	}

	/// Console event stamped with the page's own timestamp when available.
	pub fn console(entry: ConsoleEntry) -> Self {
		ActionEvent::Console {
			timestamp: entry.timestamp.unwrap_or_else(now_millis),
			data: ConsoleData {
				text: entry.text,
				msg_type: entry.msg_type,
			},
		}
	}

	pub fn kind(&self) -> ActionKind {
		match self {
			ActionEvent::Navigate { .. } => ActionKind::Navigate,
			ActionEvent::Click { .. } => ActionKind::Click,
			ActionEvent::Fill { .. } => ActionKind::Fill,
			ActionEvent::Screenshot { .. } => ActionKind::Screenshot,
			ActionEvent::Console { .. } => ActionKind::Console,
		}
	}

	pub fn timestamp(&self) -> u64 {
		match self {
			ActionEvent::Navigate { timestamp, .. }
			| ActionEvent::Click { timestamp, .. }
			| ActionEvent::Fill { timestamp, .. }
			| ActionEvent::Screenshot { timestamp, .. }
			| ActionEvent::Console { timestamp, .. } => *timestamp,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fill_event_wire_shape() {
		let event = ActionEvent::Fill {
			data: FillData {
				selector: "#b".into(),
				text: "x".into(),
			},
			timestamp: 1_700_000_000_000,
		};
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(
			json,
			serde_json::json!({
				"type": "fill",
				"data": { "selector": "#b", "text": "x" },
				"timestamp": 1_700_000_000_000u64,
			})
		);
	}

	#[test]
	fn screenshot_event_uses_camel_case_payload() {
		let event = ActionEvent::screenshot("home", true);
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["type"], "screenshot");
		assert_eq!(json["data"]["fullPage"], true);
	}

	#[test]
	fn console_event_keeps_page_timestamp() {
		let event = ActionEvent::console(ConsoleEntry {
			msg_type: "warning".into(),
			text: "deprecated".into(),
			timestamp: Some(42),
		});
		assert_eq!(event.kind(), ActionKind::Console);
		assert_eq!(event.timestamp(), 42);
		let json = serde_json::to_value(&event).unwrap();
		assert_eq!(json["data"]["type"], "warning");
		assert_eq!(json["data"]["text"], "deprecated");
	}

	#[test]
	fn kind_display_matches_wire_tag() {
		let events = [
			ActionEvent::navigate("https://example.com"),
			ActionEvent::click("#a"),
			ActionEvent::fill("#b", "x"),
			ActionEvent::screenshot("home", false),
			ActionEvent::console(ConsoleEntry {
				msg_type: "log".into(),
				text: "hi".into(),
				timestamp: None,
			}),
		];
		for event in events {
			let json = serde_json::to_value(&event).unwrap();
			assert_eq!(json["type"], event.kind().to_string());
		}
	}

	#[test]
	fn parses_recorded_array() {
		let raw = r##"[
			{"type":"navigate","data":{"url":"https://example.com"},"timestamp":1},
			{"type":"click","data":{"selector":"#a"},"timestamp":2}
		]"##;
		let events: Vec<ActionEvent> = serde_json::from_str(raw).unwrap();
		assert_eq!(events.len(), 2);
		assert_eq!(events[0].kind(), ActionKind::Navigate);
		assert_eq!(events[1], ActionEvent::Click {
			data: ClickData { selector: "#a".into() },
			timestamp: 2,
		});
	}
}
