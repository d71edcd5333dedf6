//! Schedule-page extraction: one day's match cards, grouped per league.

use pennant_core::matches::ScheduledMatch;
use scraper::{Html, Selector};
use tracing::{info, warn};

use crate::{doc, error::Result};

// ─── Selectors ───────────────────────────────────────────────────────────────

struct ScheduleSelectors {
  league:  Selector,
  no_data: Selector,
  title:   Selector,
  card:    Selector,
  home:    Selector,
  away:    Selector,
  venue:   Selector,
  time:    Selector,
  status:  Selector,
  link:    Selector,
}

impl ScheduleSelectors {
  fn parse() -> Result<Self> {
    Ok(Self {
      league:  doc::selector(".bb-score")?,
      no_data: doc::selector(".bb-noData")?,
      title:   doc::selector(".bb-score__title")?,
      card:    doc::selector(".bb-score__item")?,
      home:    doc::selector("[class*='bb-score__homeLogo']")?,
      away:    doc::selector("[class*='bb-score__awayLogo']")?,
      venue:   doc::selector(".bb-score__venue")?,
      time:    doc::selector(".bb-score__link")?,
      status:  doc::selector(".bb-score__status")?,
      link:    doc::selector(".bb-score__content")?,
    })
  }
}

// ─── Extraction ──────────────────────────────────────────────────────────────

/// Rewrite a card's detail link from the default "index" view to the
/// "score" view the live poll re-fetches.
fn score_view(link: &str) -> String {
  link.replacen("index", "score", 1)
}

/// Extract all match cards for `date` from a schedule-page body.
///
/// League blocks and the cards inside them are returned in document order;
/// no re-sorting. A league block carrying the no-data marker contributes
/// zero matches, so an empty vec means "no games today", not a failure.
/// A card missing its detail link is skipped with a warning and does not
/// abort the batch.
pub fn extract_schedule(html: &str, date: &str) -> Result<Vec<ScheduledMatch>> {
  let sel = ScheduleSelectors::parse()?;
  let parsed = Html::parse_document(html);
  let root = parsed.root_element();

  let mut matches = Vec::new();
  for block in root.select(&sel.league) {
    if !doc::find_text(block, &sel.no_data).is_empty() {
      info!("no card today");
      continue;
    }

    let league = doc::find_text(block, &sel.title);
    for card in block.select(&sel.card) {
      let Some(link) = doc::find_attr(card, &sel.link, "href") else {
        warn!(%league, "link not found for the match, skipping card");
        continue;
      };

      matches.push(ScheduledMatch {
        date:      date.to_string(),
        home:      doc::find_text(card, &sel.home),
        away:      doc::find_text(card, &sel.away),
        stadium:   doc::find_text(card, &sel.venue),
        starttime: doc::find_text(card, &sel.time),
        status:    doc::find_text(card, &sel.status),
        link:      score_view(&link),
        league:    league.clone(),
      });
    }
  }
  Ok(matches)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
