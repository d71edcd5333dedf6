//! pennant ingestion service binary.
//!
//! Reads `config.toml` (or the path specified with `--config`), opens the
//! SQLite store, registers the discovery and live-poll jobs and runs
//! until terminated.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use chrono_tz::Tz;
use clap::Parser;
use pennant_ingest::{IngestConfig, scheduler};
use pennant_scrape::HttpFetcher;
use pennant_store_sqlite::SqliteStore;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "pennant match ingestion service")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration. A missing file falls back to defaults; missing
  // or malformed values fail here, before anything is scheduled.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("PENNANT"))
    .build()
    .context("failed to read config file")?;

  let config: IngestConfig = settings
    .try_deserialize()
    .context("failed to deserialise IngestConfig")?;

  let tz: Tz = config
    .timezone
    .parse()
    .map_err(|e| anyhow::anyhow!("invalid timezone {:?}: {e}", config.timezone))?;

  // Open the store; doubles as the startup connectivity check.
  let store = SqliteStore::open(&config.store_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", config.store_path))?;
  tracing::info!(path = ?config.store_path, "store opened");

  let fetcher = HttpFetcher::new(
    Duration::from_secs(config.http_timeout_secs),
    &config.user_agent,
  )
  .context("failed to build page fetcher")?;

  let _scheduler = scheduler::start(&config, tz, Arc::new(fetcher), Arc::new(store))
    .await
    .context("failed to start scheduler")?;
  tracing::info!(
    discovery = %config.discovery_cron,
    poll = %config.poll_cron,
    timezone = %config.timezone,
    "scheduler started"
  );

  // The process runs continuously; the scheduler handle must stay alive.
  tokio::signal::ctrl_c().await.context("signal handler")?;
  tracing::info!("shutting down");
  Ok(())
}
