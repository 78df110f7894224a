use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Logs go to stderr only; stdout carries protocol messages.
pub fn init_logging(verbosity: u8) {
	// 0 = warnings only (playwright driver noise suppressed)
	// 1 (-v) = info for pw-record, warn for playwright
	// 2+ (-vv) = debug for everything
	let filter = match verbosity {
		0 => "warn,playwright_rs=error",
		1 => "info,playwright_rs=warn",
		_ => "debug",
	};

	let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

	let stderr = std::io::stderr.with_max_level(tracing::Level::TRACE);

	tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_writer(stderr)
		.with_target(true)
		.with_level(true)
		.with_ansi(false)
		.compact()
		.init();
}
