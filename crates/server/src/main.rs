use anyhow::Context;
use clap::Parser;
use pw_record::config::ServerConfig;
use pw_record::engine::PlaywrightEngine;
use pw_record::{Recorder, cli::Cli, logging, transport};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	if let Err(err) = run(cli).await {
		error!(target = "pw_record", error = %format!("{err:#}"), "server failed");
		std::process::exit(1);
	}
}

async fn run(cli: Cli) -> anyhow::Result<()> {
	let config = ServerConfig::load(cli.config.as_deref(), &cli.overrides()).context("Failed to load configuration")?;
	info!(
		target = "pw_record",
		recordings_dir = %config.recordings_dir.display(),
		browser = %config.browser,
		record_video = config.record_video,
		"starting"
	);

	let mut recorder = Recorder::new(Box::new(PlaywrightEngine::new()), &config)
		.with_context(|| format!("Failed to prepare recordings directory {}", config.recordings_dir.display()))?;

	let stdin = BufReader::new(tokio::io::stdin());
	let stdout = tokio::io::stdout();

	let served = tokio::select! {
		result = transport::serve(&mut recorder, stdin, stdout) => result.context("stdio transport failed"),
		signal = shutdown_signal() => signal.map(|name| info!(target = "pw_record", signal = name, "received signal, shutting down")),
	};

	recorder.shutdown().await;
	served
}

#[cfg(unix)]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
	use tokio::signal::unix::{SignalKind, signal};

	let mut sigterm = signal(SignalKind::terminate()).context("Failed to install SIGTERM handler")?;
	let mut sigint = signal(SignalKind::interrupt()).context("Failed to install SIGINT handler")?;

	tokio::select! {
		_ = sigterm.recv() => Ok("SIGTERM"),
		_ = sigint.recv() => Ok("SIGINT"),
	}
}

#[cfg(not(unix))]
async fn shutdown_signal() -> anyhow::Result<&'static str> {
	tokio::signal::ctrl_c().await.context("Failed to install Ctrl+C handler")?;
	Ok("Ctrl+C")
}
