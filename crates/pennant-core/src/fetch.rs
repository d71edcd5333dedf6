//! The [`PageFetcher`] seam between the jobs and the source site.

use std::future::Future;

use crate::error::FetchError;

/// Abstraction over "turn a URL into a page body".
///
/// The production implementation lives in `pennant-scrape` and wraps a
/// shared HTTP client; job tests substitute an in-memory map. Jobs are
/// pure orchestration over this capability plus a
/// [`MatchStore`](crate::store::MatchStore).
pub trait PageFetcher: Send + Sync {
  /// Fetch `url` and return the raw response body.
  fn fetch<'a>(
    &'a self,
    url: &'a str,
  ) -> impl Future<Output = Result<String, FetchError>> + Send + 'a;
}
