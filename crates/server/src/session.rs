//! Session lifecycle and recording state.
//!
//! ```text
//! Idle --launch--> Open(not recording) --start_recording--> Open(recording)
//!   ^                 ^                                      |
//!   |                 +-------------stop_recording-----------+
//!   +------------------------close (from either)-------------+
//! ```
//!
//! The browser handles only exist inside [`SessionState::Open`], and the
//! recording buffer only exists inside an open session.

use tracing::{debug, warn};

use crate::engine::BrowserSession;
use crate::recording::{ActionEvent, RecordingBuffer};

#[derive(Default)]
pub enum SessionState {
	#[default]
	Idle,
	Open(OpenSession),
}

impl SessionState {
	pub fn is_open(&self) -> bool {
		matches!(self, SessionState::Open(_))
	}

	pub fn is_recording(&self) -> bool {
		matches!(self, SessionState::Open(open) if open.is_recording())
	}

	pub fn open_mut(&mut self) -> Option<&mut OpenSession> {
		match self {
			SessionState::Open(open) => Some(open),
			SessionState::Idle => None,
		}
	}

	/// Moves to `Open`. Callers check [`is_open`](Self::is_open) first.
	pub fn open(&mut self, browser: Box<dyn BrowserSession>) {
		*self = SessionState::Open(OpenSession::new(browser));
	}

	/// Moves to `Idle`, handing back the session that was open.
	pub fn take(&mut self) -> Option<OpenSession> {
		match std::mem::take(self) {
			SessionState::Open(open) => Some(open),
			SessionState::Idle => None,
		}
	}
}

pub struct OpenSession {
	browser: Box<dyn BrowserSession>,
	recording: Option<RecordingBuffer>,
}

impl OpenSession {
	fn new(browser: Box<dyn BrowserSession>) -> Self {
		Self {
			browser,
			recording: None,
		}
	}

	pub fn page(&mut self) -> &mut dyn BrowserSession {
		self.browser.as_mut()
	}

	pub fn is_recording(&self) -> bool {
		self.recording.is_some()
	}

	pub fn recording(&self) -> Option<&RecordingBuffer> {
		self.recording.as_ref()
	}

	/// Begins a fresh window; unflushed events from a previous one are dropped.
	pub fn start_recording(&mut self) -> usize {
		let discarded = self.recording.replace(RecordingBuffer::new()).map_or(0, |b| b.len());
		if discarded > 0 {
			debug!(target = "pw_record", discarded, "restarted recording, previous events dropped");
		}
		discarded
	}

	pub fn stop_recording(&mut self) -> Option<RecordingBuffer> {
		self.recording.take()
	}

	/// Appends `event` when recording; otherwise drops it.
	pub fn record(&mut self, event: ActionEvent) {
		if let Some(buffer) = self.recording.as_mut() {
			debug!(target = "pw_record", kind = %event.kind(), "recorded");
			buffer.push(event);
		}
	}

	/// Pulls console messages from the page and records them.
	///
	/// Messages are consumed even when not recording so they never leak into a
	/// later window.
	pub async fn sync_console(&mut self) {
		match self.browser.drain_console().await {
			Ok(entries) => {
				for entry in entries {
					debug!(target = "pw_record.browser.console", kind = %entry.msg_type, text = %entry.text, "browser console");
					self.record(ActionEvent::console(entry));
				}
			}
			Err(err) => {
				warn!(target = "pw_record.browser.console", error = %err, "failed to read console messages");
			}
		}
	}

	/// Closes the browser. Any in-progress recording is discarded unflushed.
	pub async fn close(self) -> (crate::error::Result<()>, usize) {
		let discarded = self.recording.as_ref().map_or(0, RecordingBuffer::len);
		(self.browser.close().await, discarded)
	}
}
