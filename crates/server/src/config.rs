//! Server configuration.
//!
//! Values are layered: built-in defaults, then a JSON config file, then CLI
//! flags. The file is the one named by `--config` / `$PW_RECORD_CONFIG`, or
//! `<config dir>/pw-record/config.json` when that exists.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RecorderError, Result};
use crate::tools::LaunchDefaults;
use crate::types::BrowserKind;

pub const DEFAULT_RECORDINGS_DIR: &str = "recordings";
const CONFIG_DIR_NAME: &str = "pw-record";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ServerConfig {
	/// Where recordings, screenshots and videos are written.
	pub recordings_dir: PathBuf,
	pub browser: BrowserKind,
	/// Record a video of each browser context.
	pub record_video: bool,
	/// Engine timeout for navigation and element actions.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub timeout_ms: Option<u64>,
}

impl Default for ServerConfig {
	fn default() -> Self {
		Self {
			recordings_dir: PathBuf::from(DEFAULT_RECORDINGS_DIR),
			browser: BrowserKind::default(),
			record_video: true,
			timeout_ms: None,
		}
	}
}

/// Values given on the command line. `None` leaves the lower layer alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
	pub recordings_dir: Option<PathBuf>,
	pub browser: Option<BrowserKind>,
	pub no_video: bool,
	pub timeout_ms: Option<u64>,
}

impl ServerConfig {
	/// Resolves the full configuration.
	///
	/// An explicit file that cannot be read is an error; the per-user default
	/// file is only used when present.
	pub fn load(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
		let base = match explicit {
			Some(path) => Self::from_file(path)?,
			None => match default_config_path().filter(|p| p.is_file()) {
				Some(path) => Self::from_file(&path)?,
				None => Self::default(),
			},
		};
		Ok(base.apply(overrides))
	}

	pub fn from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.map_err(|e| RecorderError::Config(format!("cannot read config file {}: {e}", path.display())))?;
		let config = serde_json::from_str(&content)
			.map_err(|e| RecorderError::Config(format!("invalid config file {}: {e}", path.display())))?;
		debug!(target = "pw_record", path = %path.display(), "loaded config file");
		Ok(config)
	}

	pub fn apply(mut self, overrides: &ConfigOverrides) -> Self {
		if let Some(ref dir) = overrides.recordings_dir {
			self.recordings_dir = dir.clone();
		}
		if let Some(browser) = overrides.browser {
			self.browser = browser;
		}
		if overrides.no_video {
			self.record_video = false;
		}
		if overrides.timeout_ms.is_some() {
			self.timeout_ms = overrides.timeout_ms;
		}
		self
	}

	pub fn launch_defaults(&self) -> LaunchDefaults {
		LaunchDefaults {
			browser: self.browser,
			record_video: self.record_video,
			timeout_ms: self.timeout_ms,
		}
	}
}

/// `<config dir>/pw-record/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn defaults_match_documented_values() {
		let config = ServerConfig::default();
		assert_eq!(config.recordings_dir, PathBuf::from("recordings"));
		assert_eq!(config.browser, BrowserKind::Chromium);
		assert!(config.record_video);
		assert_eq!(config.timeout_ms, None);
	}

	#[test]
	fn partial_file_keeps_other_defaults() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("config.json");
		fs::write(&path, r#"{ "browser": "firefox", "timeoutMs": 5000 }"#).unwrap();

		let config = ServerConfig::from_file(&path).unwrap();
		assert_eq!(config.browser, BrowserKind::Firefox);
		assert_eq!(config.timeout_ms, Some(5000));
		assert!(config.record_video);
		assert_eq!(config.recordings_dir, PathBuf::from("recordings"));
	}

	#[test]
	fn flags_override_file() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("config.json");
		fs::write(&path, r#"{ "recordingsDir": "/from/file", "recordVideo": true, "browser": "webkit" }"#).unwrap();

		let overrides = ConfigOverrides {
			recordings_dir: Some(PathBuf::from("/from/flag")),
			no_video: true,
			..Default::default()
		};
		let config = ServerConfig::load(Some(path.as_path()), &overrides).unwrap();
		assert_eq!(config.recordings_dir, PathBuf::from("/from/flag"));
		assert!(!config.record_video);
		assert_eq!(config.browser, BrowserKind::Webkit);
	}

	#[test]
	fn missing_explicit_file_is_an_error() {
		let tmp = TempDir::new().unwrap();
		let err = ServerConfig::load(Some(tmp.path().join("absent.json").as_path()), &ConfigOverrides::default()).unwrap_err();
		assert!(matches!(err, RecorderError::Config(_)));
	}

	#[test]
	fn malformed_file_is_an_error() {
		let tmp = TempDir::new().unwrap();
		let path = tmp.path().join("config.json");
		fs::write(&path, r#"{ "browser": "netscape" }"#).unwrap();
		assert!(matches!(ServerConfig::from_file(&path), Err(RecorderError::Config(_))));
	}

	#[test]
	fn launch_defaults_follow_config() {
		let config = ServerConfig {
			browser: BrowserKind::Firefox,
			record_video: false,
			timeout_ms: Some(100),
			..Default::default()
		};
		let defaults = config.launch_defaults();
		assert_eq!(defaults.browser, BrowserKind::Firefox);
		assert!(!defaults.record_video);
		assert_eq!(defaults.timeout_ms, Some(100));
	}
}
