//! Live match-page extraction: one score snapshot per call.
//!
//! The function is not a poller — `pennant-ingest` drives it once per
//! active match per cycle.

use pennant_core::score::ScoreSnapshot;
use scraper::{Html, Selector};

use crate::{
  doc,
  error::{Error, Result},
};

struct LiveSelectors {
  inning: Selector,
  row:    Selector,
  cell:   Selector,
  batter: Selector,
  result: Selector,
}

impl LiveSelectors {
  fn parse() -> Result<Self> {
    Ok(Self {
      inning: doc::selector(".live em")?,
      row:    doc::selector("tr")?,
      cell:   doc::selector("td")?,
      batter: doc::selector("table#batt a")?,
      result: doc::selector("div#result")?,
    })
  }
}

/// Extract one score snapshot from a live match-page body.
///
/// `inning` holds the current-inning label mid-game and a terminal marker
/// once the match has concluded or been called off. The two team scores
/// are the second cell of each populated score-table row, home first in
/// document order; both must be present. `batter` is empty when no at-bat
/// is in progress (e.g. after game end) — that is not an error.
pub fn extract_live_score(html: &str) -> Result<ScoreSnapshot> {
  let sel = LiveSelectors::parse()?;
  let parsed = Html::parse_document(html);
  let root = parsed.root_element();

  let mut scores: Vec<String> = Vec::new();
  for row in root.select(&sel.row) {
    if let Some(cell) = row.select(&sel.cell).nth(1) {
      let text = doc::element_text(cell);
      if !text.is_empty() {
        scores.push(text);
      }
    }
  }
  if scores.len() < 2 {
    return Err(Error::IncompleteScore { found: scores.len() });
  }
  let away_score = scores.swap_remove(1);
  let home_score = scores.swap_remove(0);

  Ok(ScoreSnapshot {
    inning: doc::find_text(root, &sel.inning),
    home_score,
    away_score,
    batter: doc::find_text(root, &sel.batter),
    result: doc::find_text(root, &sel.result),
  })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
