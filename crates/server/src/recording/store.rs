//! Recording artifact storage.
//!
//! Artifacts live flat in one directory: `<name>.json` for recordings and
//! `<name>.png` for screenshots. Writing an existing name replaces the file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::event::ActionEvent;
use crate::error::{RecorderError, Result};

pub const DEFAULT_RECORDING_NAME: &str = "recording";
pub const DEFAULT_SCREENSHOT_NAME: &str = "screenshot";

#[derive(Debug, Clone)]
pub struct RecordingStore {
	dir: PathBuf,
}

impl RecordingStore {
	/// Opens the store, creating the directory if absent.
	pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = std::path::absolute(dir.as_ref())?;
		fs::create_dir_all(&dir)?;
		debug!(target = "pw_record", dir = %dir.display(), "recordings directory ready");
		Ok(Self { dir })
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	pub fn recording_path(&self, name: &str) -> Result<PathBuf> {
		Ok(self.dir.join(format!("{}.json", validate_name(name)?)))
	}

	pub fn screenshot_path(&self, name: &str) -> Result<PathBuf> {
		Ok(self.dir.join(format!("{}.png", validate_name(name)?)))
	}

	/// Writes `events` as a pretty-printed JSON array and returns the file path.
	pub fn save_recording(&self, name: &str, events: &[ActionEvent]) -> Result<PathBuf> {
		let path = self.recording_path(name)?;
		fs::write(&path, serde_json::to_string_pretty(events)?)?;
		Ok(path)
	}

	pub fn load_recording(&self, name: &str) -> Result<Vec<ActionEvent>> {
		let content = fs::read_to_string(self.recording_path(name)?)?;
		Ok(serde_json::from_str(&content)?)
	}
}

/// Picks the caller's name, falling back to `default` when missing or empty.
pub fn artifact_name<'a>(requested: Option<&'a str>, default: &'a str) -> &'a str {
	match requested {
		Some(name) if !name.trim().is_empty() => name,
		_ => default,
	}
}

fn validate_name(name: &str) -> Result<&str> {
	let invalid = name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) || name.contains('\0');
	if invalid {
		return Err(RecorderError::InvalidArtifactName { name: name.to_string() });
	}
	Ok(name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	#[test]
	fn open_creates_missing_directory() {
		let tmp = TempDir::new().unwrap();
		let dir = tmp.path().join("nested/recordings");
		let store = RecordingStore::open(&dir).unwrap();
		assert!(dir.is_dir());
		assert!(store.dir().is_absolute());
	}

	#[test]
	fn paths_append_fixed_extensions() {
		let tmp = TempDir::new().unwrap();
		let store = RecordingStore::open(tmp.path()).unwrap();
		assert!(store.recording_path("t1").unwrap().ends_with("t1.json"));
		assert!(store.screenshot_path("home").unwrap().ends_with("home.png"));
	}

	#[test]
	fn rejects_names_with_separators() {
		let tmp = TempDir::new().unwrap();
		let store = RecordingStore::open(tmp.path()).unwrap();
		for name in ["../escape", "a/b", "a\\b", "..", "."] {
			assert!(
				matches!(store.recording_path(name), Err(RecorderError::InvalidArtifactName { .. })),
				"{name} should be rejected"
			);
		}
	}

	#[test]
	fn save_overwrites_existing_recording() {
		let tmp = TempDir::new().unwrap();
		let store = RecordingStore::open(tmp.path()).unwrap();

		store.save_recording("same", &[ActionEvent::click("#a"), ActionEvent::click("#b")]).unwrap();
		store.save_recording("same", &[ActionEvent::navigate("https://example.com")]).unwrap();

		let loaded = store.load_recording("same").unwrap();
		assert_eq!(loaded.len(), 1);
		assert_eq!(loaded[0].kind(), crate::recording::ActionKind::Navigate);
	}

	#[test]
	fn saved_file_is_pretty_printed() {
		let tmp = TempDir::new().unwrap();
		let store = RecordingStore::open(tmp.path()).unwrap();
		let path = store.save_recording("pretty", &[ActionEvent::click("#a")]).unwrap();
		let content = fs::read_to_string(path).unwrap();
		assert!(content.starts_with("[\n"));
	}

	#[test]
	fn empty_name_falls_back_to_default() {
		assert_eq!(artifact_name(None, DEFAULT_RECORDING_NAME), "recording");
		assert_eq!(artifact_name(Some(""), DEFAULT_RECORDING_NAME), "recording");
		assert_eq!(artifact_name(Some("t1"), DEFAULT_RECORDING_NAME), "t1");
	}
}
