//! Action log: events, the in-memory buffer, and persisted artifacts.

mod buffer;
mod event;
mod store;

pub use buffer::RecordingBuffer;
pub use event::{ActionEvent, ActionKind, ClickData, ConsoleData, FillData, NavigateData, ScreenshotData};
pub use store::{DEFAULT_RECORDING_NAME, DEFAULT_SCREENSHOT_NAME, RecordingStore, artifact_name};
