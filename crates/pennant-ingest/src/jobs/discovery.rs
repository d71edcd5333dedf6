//! Daily discovery: seed today's match and score rows.

use std::sync::Arc;

use chrono_tz::Tz;
use pennant_core::{fetch::PageFetcher, store::MatchStore};
use pennant_scrape::extract_schedule;
use tracing::{info, warn};

use crate::{clock, jobs::JobError};

/// The once-daily discovery job.
///
/// Fetches the schedule page for today, extracts the match cards and
/// persists one match row plus one empty score row per card. Row-local
/// insert failures — including the uniqueness violations a re-run
/// produces — are logged and skipped without aborting the batch.
pub struct DiscoveryJob<F, S> {
  fetcher:      Arc<F>,
  store:        Arc<S>,
  schedule_url: String,
  tz:           Tz,
}

impl<F: PageFetcher, S: MatchStore> DiscoveryJob<F, S> {
  pub fn new(fetcher: Arc<F>, store: Arc<S>, schedule_url: String, tz: Tz) -> Self {
    Self {
      fetcher,
      store,
      schedule_url,
      tz,
    }
  }

  /// One discovery run. Returns the number of matches persisted.
  ///
  /// A day with no games is a success, not a failure.
  pub async fn run(&self) -> Result<usize, JobError> {
    let date = clock::today_stored(self.tz);
    let url = format!("{}?date={}", self.schedule_url, clock::today_param(self.tz));

    let body = self.fetcher.fetch(&url).await?;
    let matches = extract_schedule(&body, &date)?;

    if matches.is_empty() {
      info!("There's no game today");
      return Ok(0);
    }

    let mut persisted = 0usize;
    for m in &matches {
      match self.store.insert_match_and_score(m).await {
        Ok(id) => {
          persisted += 1;
          info!(id, home = %m.home, away = %m.away, "Get Match Today");
        }
        Err(e) => {
          warn!(link = %m.link, error = %e, "failed to insert match, skipping");
        }
      }
    }
    info!("Get matches {persisted} games");
    Ok(persisted)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono_tz::Tz;
  use pennant_core::store::MatchStore;
  use pennant_store_sqlite::SqliteStore;

  use super::*;
  use crate::jobs::test_support::MockFetcher;

  const TZ: Tz = chrono_tz::Asia::Tokyo;
  const SCHEDULE_URL: &str = "https://example.test/npb/schedule/";

  const TWO_CARD_DAY: &str = r#"
  <div class="bb-score">
    <h2 class="bb-score__title">セ・リーグ</h2>
    <div class="bb-score__item">
      <div class="bb-score__homeLogo">Yankees</div>
      <div class="bb-score__awayLogo">Red Sox</div>
      <div class="bb-score__venue">Yankee Stadium</div>
      <div class="bb-score__status">試合前</div>
      <div class="bb-score__link">19:00</div>
      <div class="bb-score__content" href="https://example.test/game/1/index"></div>
    </div>
    <div class="bb-score__item">
      <div class="bb-score__homeLogo">Dodgers</div>
      <div class="bb-score__awayLogo">Giants</div>
      <div class="bb-score__venue">Dodger Stadium</div>
      <div class="bb-score__status">試合前</div>
      <div class="bb-score__link">18:30</div>
      <div class="bb-score__content" href="https://example.test/game/2/index"></div>
    </div>
  </div>"#;

  const NO_GAME_DAY: &str = r#"
  <div class="bb-score">
    <div class="bb-noData">今日は試合がありません。</div>
  </div>"#;

  fn schedule_page_url() -> String {
    format!("{SCHEDULE_URL}?date={}", clock::today_param(TZ))
  }

  async fn job(fetcher: MockFetcher) -> (DiscoveryJob<MockFetcher, SqliteStore>, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().await.unwrap());
    let job = DiscoveryJob::new(
      Arc::new(fetcher),
      store.clone(),
      SCHEDULE_URL.to_string(),
      TZ,
    );
    (job, store)
  }

  #[tokio::test]
  async fn persists_a_match_and_score_pair_per_card() {
    let fetcher = MockFetcher::new().with_page(&schedule_page_url(), TWO_CARD_DAY);
    let (job, store) = job(fetcher).await;

    let persisted = job.run().await.unwrap();
    assert_eq!(persisted, 2);

    let today = clock::today_stored(TZ);
    let matches = store.matches_by_date(&today).await.unwrap();
    assert_eq!(matches.len(), 2);

    assert_eq!(matches[0].home, "Yankees");
    assert_eq!(matches[0].away, "Red Sox");
    assert_eq!(matches[0].stadium, "Yankee Stadium");
    assert_eq!(matches[0].starttime, "19:00");
    assert_eq!(matches[0].league, "セ・リーグ");
    assert_eq!(matches[0].link, "https://example.test/game/1/score");

    assert_eq!(matches[1].home, "Dodgers");
    assert_eq!(matches[1].starttime, "18:30");
    assert_eq!(matches[1].link, "https://example.test/game/2/score");

    // Each match got an empty placeholder score row.
    for m in &matches {
      let score = store.score_by_match(m.id).await.unwrap().unwrap();
      assert_eq!(score.inning, "");
      assert_eq!(score.home_score, "");
    }
  }

  #[tokio::test]
  async fn no_game_day_persists_nothing() {
    let fetcher = MockFetcher::new().with_page(&schedule_page_url(), NO_GAME_DAY);
    let (job, store) = job(fetcher).await;

    let persisted = job.run().await.unwrap();
    assert_eq!(persisted, 0);

    let today = clock::today_stored(TZ);
    assert!(store.matches_by_date(&today).await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn rerunning_the_same_day_does_not_duplicate_rows() {
    let fetcher = MockFetcher::new().with_page(&schedule_page_url(), TWO_CARD_DAY);
    let (job, store) = job(fetcher).await;

    assert_eq!(job.run().await.unwrap(), 2);
    // Second run: both inserts hit the (link, date) constraint and are
    // skipped row-locally.
    assert_eq!(job.run().await.unwrap(), 0);

    let today = clock::today_stored(TZ);
    assert_eq!(store.matches_by_date(&today).await.unwrap().len(), 2);
  }

  #[tokio::test]
  async fn fetch_failure_aborts_the_run() {
    let (job, store) = job(MockFetcher::new()).await;

    assert!(job.run().await.is_err());

    let today = clock::today_stored(TZ);
    assert!(store.matches_by_date(&today).await.unwrap().is_empty());
  }
}
