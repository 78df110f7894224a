use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;
use crate::types::BrowserKind;

#[derive(Parser, Debug)]
#[command(name = "pw-record")]
#[command(about = "Playwright recording server - browser tools over MCP stdio")]
#[command(version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// JSON config file
	#[arg(short, long, value_name = "FILE", env = "PW_RECORD_CONFIG")]
	pub config: Option<PathBuf>,

	/// Directory for recordings, screenshots and videos
	#[arg(long, value_name = "DIR")]
	pub recordings_dir: Option<PathBuf>,

	/// Browser to launch
	#[arg(short, long, value_enum)]
	pub browser: Option<BrowserKind>,

	/// Do not record context video
	#[arg(long)]
	pub no_video: bool,

	/// Timeout for navigation and element actions, in milliseconds
	#[arg(long, value_name = "MS")]
	pub timeout_ms: Option<u64>,
}

impl Cli {
	pub fn overrides(&self) -> ConfigOverrides {
		ConfigOverrides {
			recordings_dir: self.recordings_dir.clone(),
			browser: self.browser,
			no_video: self.no_video,
			timeout_ms: self.timeout_ms,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_flags_override_nothing() {
		let cli = Cli::try_parse_from(["pw-record"]).unwrap();
		assert_eq!(cli.verbose, 0);
		assert_eq!(cli.overrides(), ConfigOverrides::default());
	}

	#[test]
	fn parses_all_overrides() {
		let cli = Cli::try_parse_from([
			"pw-record",
			"-vv",
			"--recordings-dir",
			"/tmp/rec",
			"--browser",
			"webkit",
			"--no-video",
			"--timeout-ms",
			"2500",
		])
		.unwrap();

		assert_eq!(cli.verbose, 2);
		let overrides = cli.overrides();
		assert_eq!(overrides.recordings_dir, Some(PathBuf::from("/tmp/rec")));
		assert_eq!(overrides.browser, Some(BrowserKind::Webkit));
		assert!(overrides.no_video);
		assert_eq!(overrides.timeout_ms, Some(2500));
	}

	#[test]
	fn rejects_unknown_browser() {
		assert!(Cli::try_parse_from(["pw-record", "--browser", "opera"]).is_err());
	}

	#[test]
	fn config_flag_is_a_path() {
		let cli = Cli::try_parse_from(["pw-record", "--config", "cfg.json"]).unwrap();
		assert_eq!(cli.config, Some(PathBuf::from("cfg.json")));
	}
}
