//! Score — the mutable live state of one match.

/// The score row paired one-to-one with a match.
///
/// Every field is free text straight off the source site, which sometimes
/// renders non-numeric sentinels in the score cells. `inning` doubles as
/// the lifecycle marker; see [`crate::lifecycle`]. The row is created
/// empty by discovery and mutated in place by the live poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
  pub match_id:   i64,
  pub home_score: String,
  pub away_score: String,
  /// Current at-bat; empty when no at-bat is in progress.
  pub batter:     String,
  pub inning:     String,
  /// Most recent play, or the terminal outcome text.
  pub result:     String,
}

/// One extraction from a live match page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreSnapshot {
  pub inning:     String,
  pub home_score: String,
  pub away_score: String,
  pub batter:     String,
  pub result:     String,
}
