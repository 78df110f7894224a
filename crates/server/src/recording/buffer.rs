use super::event::ActionEvent;
use crate::types::now_millis;

/// Ordered, append-only log of events for one recording window.
#[derive(Debug, Clone, Default)]
pub struct RecordingBuffer {
	events: Vec<ActionEvent>,
	started_at: u64,
}

impl RecordingBuffer {
	/// Starts an empty window stamped with the current time.
	pub fn new() -> Self {
		Self {
			events: Vec::new(),
			started_at: now_millis(),
		}
	}

	pub fn push(&mut self, event: ActionEvent) {
		self.events.push(event);
	}

	pub fn events(&self) -> &[ActionEvent] {
		&self.events
	}

	pub fn len(&self) -> usize {
		self.events.len()
	}

	pub fn is_empty(&self) -> bool {
		self.events.is_empty()
	}

	pub fn started_at(&self) -> u64 {
		self.started_at
	}
}
