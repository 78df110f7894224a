use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use playwright_rs::{
	Browser, BrowserContext, BrowserContextOptions, ClickOptions, FillOptions, GotoOptions, LaunchOptions, Page, Playwright,
	RecordVideo, ScreenshotOptions,
};
use tracing::{debug, info, warn};

use super::js::{CONSOLE_CAPTURE_JS, CONSOLE_DRAIN_JS};
use super::{BrowserEngine, BrowserSession, LaunchRequest};
use crate::error::{RecorderError, Result};
use crate::types::{BrowserKind, ConsoleEntry};

/// Engine backed by the Playwright driver.
///
/// Each launch starts its own driver process, which is shut down with the session.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaywrightEngine;

impl PlaywrightEngine {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl BrowserEngine for PlaywrightEngine {
	async fn launch(&self, request: &LaunchRequest) -> Result<Box<dyn BrowserSession>> {
		info!(target = "pw_record.browser", browser = %request.browser, headless = request.headless, "launching browser");

		let playwright = Playwright::launch()
			.await
			.map_err(|e| RecorderError::BrowserLaunch(e.to_string()))?;

		match open_page(&playwright, request).await {
			Ok((browser, context, page)) => Ok(Box::new(PlaywrightSession {
				playwright,
				browser,
				context,
				page,
				timeout_ms: request.timeout_ms,
			})),
			Err(err) => {
				if let Err(shutdown_err) = playwright.shutdown().await {
					warn!(target = "pw_record.browser", error = %shutdown_err, "driver shutdown after failed launch");
				}
				Err(err)
			}
		}
	}
}

async fn open_page(playwright: &Playwright, request: &LaunchRequest) -> Result<(Browser, BrowserContext, Page)> {
	let browser_type = match request.browser {
		BrowserKind::Chromium => playwright.chromium(),
		BrowserKind::Firefox => playwright.firefox(),
		BrowserKind::Webkit => playwright.webkit(),
	};

	let browser = browser_type
		.launch_with_options(LaunchOptions::new().headless(request.headless))
		.await
		.map_err(|e| RecorderError::BrowserLaunch(e.to_string()))?;

	let mut options = BrowserContextOptions::builder();
	if let Some(ref dir) = request.video_dir {
		debug!(target = "pw_record.browser", dir = %dir.display(), "recording context video");
		options = options.record_video(RecordVideo {
			dir: dir.to_string_lossy().into_owned(),
			size: None,
		});
	}

	let context = match browser.new_context_with_options(options.build()).await {
		Ok(context) => context,
		Err(err) => {
			let _ = browser.close().await;
			return Err(RecorderError::BrowserLaunch(err.to_string()));
		}
	};

	let page = match context.new_page().await {
		Ok(page) => page,
		Err(err) => {
			let _ = context.close().await;
			let _ = browser.close().await;
			return Err(RecorderError::BrowserLaunch(err.to_string()));
		}
	};

	// The init script covers later documents; the blank page needs it now.
	if let Err(err) = page.add_init_script(CONSOLE_CAPTURE_JS).await {
		warn!(target = "pw_record.browser", error = %err, "failed to install console capture");
	} else if let Err(err) = page.evaluate_expression(CONSOLE_CAPTURE_JS).await {
		warn!(target = "pw_record.browser", error = %err, "failed to inject console capture");
	}

	Ok((browser, context, page))
}

struct PlaywrightSession {
	playwright: Playwright,
	browser: Browser,
	context: BrowserContext,
	page: Page,
	timeout_ms: Option<u64>,
}

impl PlaywrightSession {
	fn timeout(&self) -> Option<f64> {
		self.timeout_ms.map(|ms| ms as f64)
	}
}

#[async_trait]
impl BrowserSession for PlaywrightSession {
	async fn goto(&mut self, url: &str) -> Result<()> {
		let options = self.timeout_ms.map(|ms| GotoOptions::new().timeout(Duration::from_millis(ms)));
		self.page
			.goto(url, options)
			.await
			.map(|_| ())
			.map_err(|e| RecorderError::Navigation {
				url: url.to_string(),
				source: e.into(),
			})
	}

	async fn click(&mut self, selector: &str) -> Result<()> {
		let options = self.timeout().map(|t| ClickOptions::builder().timeout(t).build());
		let locator = self.page.locator(selector).await;
		locator.click(options).await.map_err(|e| RecorderError::Action {
			action: "click",
			selector: selector.to_string(),
			message: e.to_string(),
		})
	}

	async fn fill(&mut self, selector: &str, text: &str) -> Result<()> {
		let options = self.timeout().map(|t| FillOptions::builder().timeout(t).build());
		let locator = self.page.locator(selector).await;
		locator.fill(text, options).await.map_err(|e| RecorderError::Action {
			action: "fill",
			selector: selector.to_string(),
			message: e.to_string(),
		})
	}

	async fn screenshot(&mut self, path: &Path, full_page: bool) -> Result<()> {
		let options = ScreenshotOptions::builder().full_page(full_page).build();
		self.page
			.screenshot_to_file(path, Some(options))
			.await
			.map(|_| ())
			.map_err(|e| RecorderError::Screenshot {
				path: path.to_path_buf(),
				message: e.to_string(),
			})
	}

	async fn drain_console(&mut self) -> Result<Vec<ConsoleEntry>> {
		let raw = self.page.evaluate_value(CONSOLE_DRAIN_JS).await?;
		serde_json::from_str(&raw).map_err(|e| RecorderError::Engine(format!("console drain returned malformed data: {e}")))
	}

	async fn close(self: Box<Self>) -> Result<()> {
		let PlaywrightSession {
			playwright,
			browser,
			context,
			..
		} = *self;

		let mut first_err: Option<RecorderError> = None;

		if let Err(err) = context.close().await {
			warn!(target = "pw_record.browser", error = %err, "context close failed");
			first_err.get_or_insert(err.into());
		}
		if let Err(err) = browser.close().await {
			warn!(target = "pw_record.browser", error = %err, "browser close failed");
			first_err.get_or_insert(err.into());
		}
		if let Err(err) = playwright.shutdown().await {
			warn!(target = "pw_record.browser", error = %err, "driver shutdown failed");
			first_err.get_or_insert(err.into());
		}

		match first_err {
			Some(err) => Err(err),
			None => Ok(()),
		}
	}
}
