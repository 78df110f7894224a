//! In-memory browser engine for driving the recorder without a browser.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pw_record::Recorder;
use pw_record::config::ServerConfig;
use pw_record::engine::{BrowserEngine, BrowserSession, LaunchRequest};
use pw_record::error::{RecorderError, Result};
use pw_record::types::ConsoleEntry;
use tempfile::TempDir;

/// PNG signature, enough for a file that looks like a screenshot.
pub const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Debug, Default)]
pub struct FakeState {
	pub launches: Vec<LaunchRequest>,
	pub calls: Vec<String>,
	pub closes: usize,
	pub fail_launch: bool,
	pub failing_selectors: Vec<String>,
	pub failing_urls: Vec<String>,
	/// Console messages the page logs while a click runs.
	pub console_on_click: Vec<ConsoleEntry>,
	pending_console: Vec<ConsoleEntry>,
}

#[derive(Clone, Default)]
pub struct FakeEngine {
	pub state: Arc<Mutex<FakeState>>,
}

impl FakeEngine {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_state(&self, f: impl FnOnce(&mut FakeState)) {
		f(&mut self.state.lock().unwrap());
	}

	pub fn launches(&self) -> usize {
		self.state.lock().unwrap().launches.len()
	}

	pub fn calls(&self) -> Vec<String> {
		self.state.lock().unwrap().calls.clone()
	}

	pub fn closes(&self) -> usize {
		self.state.lock().unwrap().closes
	}

	/// Queues a console message as if the page logged it right now.
	pub fn log(&self, msg_type: &str, text: &str) {
		self.state.lock().unwrap().pending_console.push(ConsoleEntry {
			msg_type: msg_type.into(),
			text: text.into(),
			timestamp: None,
		});
	}
}

#[async_trait]
impl BrowserEngine for FakeEngine {
	async fn launch(&self, request: &LaunchRequest) -> Result<Box<dyn BrowserSession>> {
		let mut state = self.state.lock().unwrap();
		if state.fail_launch {
			return Err(RecorderError::BrowserLaunch("Executable doesn't exist".into()));
		}
		state.launches.push(request.clone());
		Ok(Box::new(FakePage {
			state: Arc::clone(&self.state),
		}))
	}
}

struct FakePage {
	state: Arc<Mutex<FakeState>>,
}

#[async_trait]
impl BrowserSession for FakePage {
	async fn goto(&mut self, url: &str) -> Result<()> {
		let mut state = self.state.lock().unwrap();
		if state.failing_urls.iter().any(|u| u == url) {
			return Err(RecorderError::Navigation {
				url: url.to_string(),
				source: anyhow::anyhow!("net::ERR_NAME_NOT_RESOLVED"),
			});
		}
		state.calls.push(format!("goto {url}"));
		Ok(())
	}

	async fn click(&mut self, selector: &str) -> Result<()> {
		let mut state = self.state.lock().unwrap();
		if state.failing_selectors.iter().any(|s| s == selector) {
			return Err(RecorderError::Action {
				action: "click",
				selector: selector.to_string(),
				message: format!("Timeout 30000ms exceeded.\nCall log:\n  - waiting for locator(\"{selector}\")"),
			});
		}
		state.calls.push(format!("click {selector}"));
		let logged = std::mem::take(&mut state.console_on_click);
		state.pending_console.extend(logged);
		Ok(())
	}

	async fn fill(&mut self, selector: &str, text: &str) -> Result<()> {
		let mut state = self.state.lock().unwrap();
		if state.failing_selectors.iter().any(|s| s == selector) {
			return Err(RecorderError::Action {
				action: "fill",
				selector: selector.to_string(),
				message: "Error: No element matches selector".into(),
			});
		}
		state.calls.push(format!("fill {selector} {text}"));
		Ok(())
	}

	async fn screenshot(&mut self, path: &Path, full_page: bool) -> Result<()> {
		std::fs::write(path, PNG_MAGIC)?;
		self.state
			.lock()
			.unwrap()
			.calls
			.push(format!("screenshot {} {full_page}", path.display()));
		Ok(())
	}

	async fn drain_console(&mut self) -> Result<Vec<ConsoleEntry>> {
		Ok(std::mem::take(&mut self.state.lock().unwrap().pending_console))
	}

	async fn close(self: Box<Self>) -> Result<()> {
		self.state.lock().unwrap().closes += 1;
		Ok(())
	}
}

pub struct Harness {
	pub recorder: Recorder,
	pub engine: FakeEngine,
	pub dir: TempDir,
}

impl Harness {
	pub fn new() -> Self {
		let dir = TempDir::new().unwrap();
		let engine = FakeEngine::new();
		let config = ServerConfig {
			recordings_dir: dir.path().join("recordings"),
			record_video: false,
			..Default::default()
		};
		let recorder = Recorder::new(Box::new(engine.clone()), &config).unwrap();
		Self { recorder, engine, dir }
	}

	pub fn recordings(&self) -> PathBuf {
		self.recorder.store().dir().to_path_buf()
	}

	/// Calls a tool and returns `(text, is_error)`.
	pub async fn call(&mut self, name: &str, args: serde_json::Value) -> (String, bool) {
		let result = self.recorder.call_tool(name, args).await;
		(result.text(), result.is_error())
	}
}
