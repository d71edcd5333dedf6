//! The two scheduled jobs and their supervision wrapper.

pub mod discovery;
pub mod live_poll;

use std::{future::Future, sync::Arc};

use pennant_core::error::FetchError;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{error, warn};

// ─── Job errors ──────────────────────────────────────────────────────────────

/// A failure that aborts one job cycle (or one match within a cycle).
///
/// Nothing escalates past the supervisor: every variant ends up as a
/// logged message, and the next scheduled firing retries from scratch.
#[derive(Debug, Error)]
pub enum JobError {
  #[error(transparent)]
  Fetch(#[from] FetchError),

  #[error(transparent)]
  Extract(#[from] pennant_scrape::Error),

  #[error("store error: {0}")]
  Store(String),
}

// ─── Supervision ─────────────────────────────────────────────────────────────

/// Run one job firing under supervision.
///
/// If the previous run of the same job is still in progress the firing is
/// skipped — scheduled invocations of a job never overlap. The work is
/// spawned so a panic is caught at join and logged instead of unwinding
/// into the scheduler.
pub async fn supervise<F>(name: &'static str, guard: Arc<Mutex<()>>, work: F)
where
  F: Future<Output = Result<usize, JobError>> + Send + 'static,
{
  let Ok(_running) = guard.try_lock() else {
    warn!(job = name, "previous run still in progress, skipping this firing");
    return;
  };

  match tokio::spawn(work).await {
    Ok(Ok(_)) => {}
    Ok(Err(e)) => error!(job = name, error = %e, "job cycle failed"),
    Err(e) if e.is_panic() => {
      error!(job = name, "panic recovered in scheduled task: {e}");
    }
    Err(e) => error!(job = name, error = %e, "job task aborted"),
  }
}

// ─── Test support ────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_support {
  use std::{
    collections::HashMap,
    sync::Mutex,
  };

  use pennant_core::{error::FetchError, fetch::PageFetcher};

  /// In-memory page fetcher: URL → canned body, with a call log.
  pub(crate) struct MockFetcher {
    pages: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
  }

  impl MockFetcher {
    pub(crate) fn new() -> Self {
      Self {
        pages: HashMap::new(),
        calls: Mutex::new(Vec::new()),
      }
    }

    pub(crate) fn with_page(mut self, url: &str, body: &str) -> Self {
      self.pages.insert(url.to_string(), body.to_string());
      self
    }

    /// URLs fetched so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
      self.calls.lock().unwrap().clone()
    }
  }

  impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
      self.calls.lock().unwrap().push(url.to_string());
      self.pages.get(url).cloned().ok_or_else(|| FetchError::Network {
        url:     url.to_string(),
        message: "no canned page for url".to_string(),
      })
    }
  }
}
