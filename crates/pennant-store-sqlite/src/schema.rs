//! SQL schema for the pennant SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated
//! on the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS matches (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    date      TEXT NOT NULL,    -- YYYY/MM/DD
    home      TEXT NOT NULL,
    away      TEXT NOT NULL,
    league    TEXT NOT NULL,
    stadium   TEXT NOT NULL,
    starttime TEXT NOT NULL,    -- HH:MM
    link      TEXT NOT NULL,
    UNIQUE (link, date)         -- re-running discovery must not duplicate
);

-- One score row per match, created empty together with the match and
-- mutated in place by the live poll. Columns default to '' rather than
-- NULL so placeholder rows satisfy the inning <> sentinel predicate of
-- the active-match query.
CREATE TABLE IF NOT EXISTS scores (
    match_id   INTEGER NOT NULL UNIQUE REFERENCES matches(id),
    home_score TEXT NOT NULL DEFAULT '',
    away_score TEXT NOT NULL DEFAULT '',
    batter     TEXT NOT NULL DEFAULT '',
    inning     TEXT NOT NULL DEFAULT '',
    result     TEXT NOT NULL DEFAULT ''
);

CREATE INDEX IF NOT EXISTS matches_date_idx ON matches(date);

PRAGMA user_version = 1;
";
