//! Error types for `pennant-scrape`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The live page's score table did not expose both teams' score cells.
  #[error("incomplete score table: found {found} score cell(s), need 2")]
  IncompleteScore { found: usize },

  #[error("invalid selector {selector}: {message}")]
  Selector { selector: String, message: String },

  #[error("failed to build HTTP client: {0}")]
  Client(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
