//! Browser engine seam.
//!
//! The recorder only talks to the browser through [`BrowserEngine`] and
//! [`BrowserSession`]. [`PlaywrightEngine`] is the production backend.

mod js;
mod playwright;

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{BrowserKind, ConsoleEntry};

pub use js::{CONSOLE_CAPTURE_JS, CONSOLE_DRAIN_JS};
pub use playwright::PlaywrightEngine;

/// Everything needed to open a browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
	pub browser: BrowserKind,
	pub headless: bool,
	/// Directory for context video recording, if enabled.
	pub video_dir: Option<PathBuf>,
	/// Timeout passed to navigation and element actions.
	pub timeout_ms: Option<u64>,
}

/// Factory for browser sessions.
#[async_trait]
pub trait BrowserEngine: Send + Sync {
	/// Launches a browser and opens a context with one page.
	async fn launch(&self, request: &LaunchRequest) -> Result<Box<dyn BrowserSession>>;
}

/// An open browser, context and page owned by the recorder.
#[async_trait]
pub trait BrowserSession: Send {
	async fn goto(&mut self, url: &str) -> Result<()>;

	async fn click(&mut self, selector: &str) -> Result<()>;

	async fn fill(&mut self, selector: &str, text: &str) -> Result<()>;

	/// Writes a PNG screenshot to `path`.
	async fn screenshot(&mut self, path: &Path, full_page: bool) -> Result<()>;

	/// Returns console messages logged since the previous drain, oldest first.
	async fn drain_console(&mut self) -> Result<Vec<ConsoleEntry>>;

	/// Closes the context, then the browser.
	async fn close(self: Box<Self>) -> Result<()>;
}
