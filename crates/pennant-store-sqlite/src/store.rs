//! [`SqliteStore`] — the SQLite implementation of [`MatchStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use pennant_core::{
  lifecycle::{GAME_CANCELLED, GAME_ENDED},
  matches::{Match, ScheduledMatch},
  score::{Score, ScoreSnapshot},
  store::{ActiveMatch, MatchStore},
};

use crate::{Error, Result, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A pennant match store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Both jobs
/// share one clone each; each call below is its own atomic unit.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  /// Doubles as the startup connectivity check: a store that cannot be
  /// opened fails the process before the scheduler starts.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row mapping ─────────────────────────────────────────────────────────────

fn match_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Match> {
  Ok(Match {
    id:        row.get(0)?,
    date:      row.get(1)?,
    home:      row.get(2)?,
    away:      row.get(3)?,
    league:    row.get(4)?,
    stadium:   row.get(5)?,
    starttime: row.get(6)?,
    link:      row.get(7)?,
  })
}

// ─── MatchStore impl ─────────────────────────────────────────────────────────

impl MatchStore for SqliteStore {
  type Error = Error;

  async fn insert_match_and_score(&self, m: &ScheduledMatch) -> Result<i64> {
    let date      = m.date.clone();
    let home      = m.home.clone();
    let away      = m.away.clone();
    let league    = m.league.clone();
    let stadium   = m.stadium.clone();
    let starttime = m.starttime.clone();
    let link      = m.link.clone();

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO matches (date, home, away, league, stadium, starttime, link)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
          rusqlite::params![date, home, away, league, stadium, starttime, link],
        )?;
        let id = tx.last_insert_rowid();
        tx.execute(
          "INSERT INTO scores (match_id) VALUES (?1)",
          rusqlite::params![id],
        )?;
        tx.commit()?;
        Ok(id)
      })
      .await
      .map_err(Error::Insert)
  }

  async fn update_score(
    &self,
    match_id: i64,
    snapshot: &ScoreSnapshot,
  ) -> Result<usize> {
    let home_score = snapshot.home_score.clone();
    let away_score = snapshot.away_score.clone();
    let batter     = snapshot.batter.clone();
    let inning     = snapshot.inning.clone();
    let result     = snapshot.result.clone();

    let affected = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "UPDATE scores
           SET home_score = ?1, away_score = ?2, batter = ?3, inning = ?4, result = ?5
           WHERE match_id = ?6",
          rusqlite::params![home_score, away_score, batter, inning, result, match_id],
        )?;
        Ok(n)
      })
      .await?;
    Ok(affected)
  }

  async fn active_matches(
    &self,
    date: &str,
    cutoff_time: &str,
  ) -> Result<Vec<ActiveMatch>> {
    let date   = date.to_owned();
    let cutoff = cutoff_time.to_owned();

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT m.id, m.date, m.home, m.away, m.league, m.stadium,
                  m.starttime, m.link, s.inning
           FROM matches m
           JOIN scores s ON s.match_id = m.id
           WHERE m.date = ?1
             AND m.starttime <= ?2
             AND s.inning <> ?3
             AND s.inning <> ?4
           ORDER BY m.id",
        )?;
        let rows = stmt
          .query_map(
            rusqlite::params![date, cutoff, GAME_ENDED, GAME_CANCELLED],
            |row| {
              Ok(ActiveMatch {
                info:   match_from_row(row)?,
                inning: row.get(8)?,
              })
            },
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn matches_by_date(&self, date: &str) -> Result<Vec<Match>> {
    let date = date.to_owned();

    let rows = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT id, date, home, away, league, stadium, starttime, link
           FROM matches
           WHERE date = ?1
           ORDER BY id",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![date], match_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(rows)
  }

  async fn score_by_match(&self, match_id: i64) -> Result<Option<Score>> {
    let row = self
      .conn
      .call(move |conn| {
        let row = conn
          .query_row(
            "SELECT match_id, home_score, away_score, batter, inning, result
             FROM scores
             WHERE match_id = ?1",
            rusqlite::params![match_id],
            |row| {
              Ok(Score {
                match_id:   row.get(0)?,
                home_score: row.get(1)?,
                away_score: row.get(2)?,
                batter:     row.get(3)?,
                inning:     row.get(4)?,
                result:     row.get(5)?,
              })
            },
          )
          .optional()?;
        Ok(row)
      })
      .await?;
    Ok(row)
  }
}
