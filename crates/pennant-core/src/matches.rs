//! Match — one scheduled game on one calendar day.

/// A match row as persisted. `id` is assigned by the store on insert.
///
/// `link` is the absolute URL of the match's live "score" view and is the
/// stable key the live poll re-fetches; it is unique per `(link, date)`
/// and never empty once inserted by discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
  pub id:        i64,
  /// Calendar day, `YYYY/MM/DD`.
  pub date:      String,
  pub home:      String,
  pub away:      String,
  pub league:    String,
  pub stadium:   String,
  /// Local clock time, `HH:MM`.
  pub starttime: String,
  pub link:      String,
}

/// One game card extracted from the schedule page, not yet persisted.
///
/// `status` is the transient pre-game label shown on the schedule page
/// (e.g. "試合前"); it is extracted for completeness but never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledMatch {
  pub date:      String,
  pub home:      String,
  pub away:      String,
  pub stadium:   String,
  pub starttime: String,
  pub status:    String,
  pub link:      String,
  pub league:    String,
}
