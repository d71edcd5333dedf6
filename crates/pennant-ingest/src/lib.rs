//! Ingestion service for pennant.
//!
//! Owns the two scheduled jobs (daily discovery, live poll), the cron
//! scheduler that drives them, and the runtime configuration. Jobs are
//! pure orchestration over the injected [`PageFetcher`] and
//! [`MatchStore`] capabilities.
//!
//! [`PageFetcher`]: pennant_core::fetch::PageFetcher
//! [`MatchStore`]: pennant_core::store::MatchStore

pub mod clock;
pub mod jobs;
pub mod scheduler;

use std::path::PathBuf;

use serde::Deserialize;

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime configuration, deserialised from `config.toml` layered with
/// `PENNANT_`-prefixed environment variables. Every field has a default
/// so an empty config file yields a working service.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestConfig {
  /// Path of the SQLite store file.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,

  /// Schedule page of the source site; discovery appends
  /// `?date=YYYY-MM-DD`.
  #[serde(default = "default_schedule_url")]
  pub schedule_url: String,

  /// IANA timezone the source site's dates and start times are local to.
  #[serde(default = "default_timezone")]
  pub timezone: String,

  /// Six-field cron expression for the daily discovery job.
  #[serde(default = "default_discovery_cron")]
  pub discovery_cron: String,

  /// Six-field cron expression for the live poll job.
  #[serde(default = "default_poll_cron")]
  pub poll_cron: String,

  /// Pause between consecutive match-page fetches within one poll cycle.
  #[serde(default = "default_poll_pacing_secs")]
  pub poll_pacing_secs: u64,

  /// Per-request HTTP timeout.
  #[serde(default = "default_http_timeout_secs")]
  pub http_timeout_secs: u64,

  /// User-Agent header sent to the source site.
  #[serde(default = "default_user_agent")]
  pub user_agent: String,
}

fn default_store_path() -> PathBuf {
  PathBuf::from("pennant.db")
}

fn default_schedule_url() -> String {
  "https://baseball.yahoo.co.jp/npb/schedule/".to_string()
}

fn default_timezone() -> String {
  "Asia/Tokyo".to_string()
}

// 06:30 local, after the site has published the day's card.
fn default_discovery_cron() -> String {
  "0 30 6 * * *".to_string()
}

// Every minute through the evening game window.
fn default_poll_cron() -> String {
  "0 * 17-22 * * *".to_string()
}

fn default_poll_pacing_secs() -> u64 {
  10
}

fn default_http_timeout_secs() -> u64 {
  30
}

fn default_user_agent() -> String {
  "pennant/0.1".to_string()
}

impl Default for IngestConfig {
  fn default() -> Self {
    Self {
      store_path:        default_store_path(),
      schedule_url:      default_schedule_url(),
      timezone:          default_timezone(),
      discovery_cron:    default_discovery_cron(),
      poll_cron:         default_poll_cron(),
      poll_pacing_secs:  default_poll_pacing_secs(),
      http_timeout_secs: default_http_timeout_secs(),
      user_agent:        default_user_agent(),
    }
  }
}
