//! Local-time helpers for the jobs.
//!
//! Every job decision ("today", "now") is made in the configured source
//! timezone, never in UTC — the site's schedule day rolls over at
//! midnight local time.

use chrono::Utc;
use chrono_tz::Tz;

/// Today's calendar day in `tz`, formatted as stored (`YYYY/MM/DD`).
pub fn today_stored(tz: Tz) -> String {
  Utc::now().with_timezone(&tz).format("%Y/%m/%d").to_string()
}

/// Today's calendar day in `tz`, formatted for the schedule URL query
/// parameter (`YYYY-MM-DD`).
pub fn today_param(tz: Tz) -> String {
  Utc::now().with_timezone(&tz).format("%Y-%m-%d").to_string()
}

/// Current wall-clock time in `tz`, `HH:MM`.
pub fn now_hhmm(tz: Tz) -> String {
  Utc::now().with_timezone(&tz).format("%H:%M").to_string()
}
