//! Error type for `pennant-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Insert of a match/score pair failed — a uniqueness violation on
  /// `(link, date)` or a lost connection. Discovery treats this as
  /// row-local and continues with the next match.
  #[error("failed to insert match: {0}")]
  Insert(tokio_rusqlite::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
