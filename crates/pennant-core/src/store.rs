//! The [`MatchStore`] trait and supporting types.
//!
//! The trait is implemented by storage backends (e.g.
//! `pennant-store-sqlite`). The jobs in `pennant-ingest` depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  matches::{Match, ScheduledMatch},
  score::{Score, ScoreSnapshot},
};

// ─── Query result type ───────────────────────────────────────────────────────

/// A match joined with the current inning of its score row, as returned by
/// [`MatchStore::active_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveMatch {
  pub info:   Match,
  /// Current inning text from the joined score row; empty until the first
  /// poll lands.
  pub inning: String,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the match/score store backend.
///
/// Each method is its own atomic unit; no transaction ever spans more than
/// one match. All methods return `Send` futures so the trait can be used
/// from spawned tokio tasks.
pub trait MatchStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert one match row together with its empty placeholder score row,
  /// in a single transaction, and return the store-assigned match id.
  ///
  /// Re-running discovery for a day already ingested fails the duplicate
  /// rows on the `(link, date)` uniqueness constraint; discovery logs and
  /// continues with the next match.
  fn insert_match_and_score<'a>(
    &'a self,
    m: &'a ScheduledMatch,
  ) -> impl Future<Output = Result<i64, Self::Error>> + Send + 'a;

  /// Overwrite the score row of `match_id` with `snapshot`.
  ///
  /// Idempotent point update, last-write-wins, no optimistic concurrency
  /// check. Returns the number of rows affected (0 if the match has no
  /// score row).
  fn update_score<'a>(
    &'a self,
    match_id: i64,
    snapshot: &'a ScoreSnapshot,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Matches for `date` whose `starttime` is at or before `cutoff_time`
  /// and whose joined score row does not carry a terminal inning.
  ///
  /// Nothing qualifying is an empty vec, not an error.
  fn active_matches<'a>(
    &'a self,
    date: &'a str,
    cutoff_time: &'a str,
  ) -> impl Future<Output = Result<Vec<ActiveMatch>, Self::Error>> + Send + 'a;

  /// All matches for `date`, in insertion order. Read accessor for the
  /// public API layer; the ingestion write path never calls it.
  fn matches_by_date<'a>(
    &'a self,
    date: &'a str,
  ) -> impl Future<Output = Result<Vec<Match>, Self::Error>> + Send + 'a;

  /// The score row for `match_id`, or `None` if the match is unknown.
  /// Read accessor for the public API layer.
  fn score_by_match(
    &self,
    match_id: i64,
  ) -> impl Future<Output = Result<Option<Score>, Self::Error>> + Send + '_;
}
