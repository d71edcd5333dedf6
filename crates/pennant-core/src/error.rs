//! Error types for `pennant-core`.

use thiserror::Error;

/// Failure to turn a URL into a page body.
///
/// Produced by [`PageFetcher`](crate::fetch::PageFetcher) implementations.
/// Unreachable hosts and empty response bodies both land here; the jobs
/// treat every variant the same way (log, skip, let the next scheduled
/// firing retry).
#[derive(Debug, Error)]
pub enum FetchError {
  #[error("failed to fetch {url}: {message}")]
  Network { url: String, message: String },

  #[error("unexpected HTTP status {status} from {url}")]
  Status { url: String, status: u16 },

  #[error("empty response body from {url}")]
  EmptyBody { url: String },
}
