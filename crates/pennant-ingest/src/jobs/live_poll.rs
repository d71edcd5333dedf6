//! Live poll: refresh the score row of every match currently in play.

use std::{sync::Arc, time::Duration};

use chrono_tz::Tz;
use pennant_core::{
  fetch::PageFetcher,
  store::{ActiveMatch, MatchStore},
};
use pennant_scrape::extract_live_score;
use tracing::{info, warn};

use crate::{clock, jobs::JobError};

/// The recurring live-poll job.
///
/// Queries the store for matches that have started and have not reached a
/// terminal inning, then refreshes each one strictly sequentially with a
/// pacing pause between match pages. The pacing is a deliberate
/// rate-limit toward the source site, not a performance knob; matches
/// are never polled in parallel.
pub struct LivePollJob<F, S> {
  fetcher: Arc<F>,
  store:   Arc<S>,
  pacing:  Duration,
  tz:      Tz,
}

impl<F: PageFetcher, S: MatchStore> LivePollJob<F, S> {
  pub fn new(fetcher: Arc<F>, store: Arc<S>, pacing: Duration, tz: Tz) -> Self {
    Self {
      fetcher,
      store,
      pacing,
      tz,
    }
  }

  /// One poll cycle. Returns the number of score rows refreshed.
  ///
  /// Failure to compute the active set aborts the cycle; any failure on a
  /// single match skips that match only. Either way the next scheduled
  /// firing retries from scratch.
  pub async fn run(&self) -> Result<usize, JobError> {
    let date = clock::today_stored(self.tz);
    let now = clock::now_hhmm(self.tz);

    let active = self
      .store
      .active_matches(&date, &now)
      .await
      .map_err(|e| JobError::Store(e.to_string()))?;
    info!("Get Matching: {} games", active.len());

    let mut updated = 0usize;
    for m in &active {
      match self.poll_one(m).await {
        Ok(()) => updated += 1,
        Err(e) => {
          warn!(id = m.info.id, link = %m.info.link, error = %e, "skipping match this cycle");
        }
      }
      tokio::time::sleep(self.pacing).await;
    }
    Ok(updated)
  }

  async fn poll_one(&self, m: &ActiveMatch) -> Result<(), JobError> {
    let body = self.fetcher.fetch(&m.info.link).await?;
    let snapshot = extract_live_score(&body)?;
    let affected = self
      .store
      .update_score(m.info.id, &snapshot)
      .await
      .map_err(|e| JobError::Store(e.to_string()))?;
    info!(
      id = m.info.id,
      rows = affected,
      inning = %snapshot.inning,
      home = %snapshot.home_score,
      away = %snapshot.away_score,
      batter = %snapshot.batter,
      result = %snapshot.result,
      "Updated Score"
    );
    Ok(())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use chrono_tz::Tz;
  use pennant_core::matches::ScheduledMatch;
  use pennant_store_sqlite::SqliteStore;

  use super::*;
  use crate::jobs::test_support::MockFetcher;

  const TZ: Tz = chrono_tz::Asia::Tokyo;

  const MID_GAME: &str = r#"<body>
    <div class="live"><em>5回裏</em></div>
    <div class="score">
      <table>
        <tr><td class="nm act">オ</td><td>0</td></tr>
        <tr><td class="nm">デ</td><td>2</td></tr>
      </table>
    </div>
    <table id="batt">
      <tr><td><a href="/player1">山田 太郎</a></td></tr>
    </table>
    <div id="result">ヒットで1塁</div>
  </body>"#;

  const GAME_OVER: &str = r#"<body>
    <div class="live"><em>試合終了</em></div>
    <div class="score">
      <table>
        <tr><td class="nm act">オ</td><td>0</td></tr>
        <tr><td class="nm">デ</td><td>2</td></tr>
      </table>
    </div>
    <div id="result">試合終了</div>
  </body>"#;

  fn started_match(link: &str) -> ScheduledMatch {
    ScheduledMatch {
      date:      clock::today_stored(TZ),
      home:      "Lions".to_string(),
      away:      "Giants".to_string(),
      stadium:   "beruna".to_string(),
      // Midnight start keeps the match inside any cutoff the test runs at.
      starttime: "00:00".to_string(),
      status:    "試合前".to_string(),
      link:      link.to_string(),
      league:    "セ・リーグ".to_string(),
    }
  }

  async fn store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  fn poll(
    fetcher: Arc<MockFetcher>,
    store: Arc<SqliteStore>,
    pacing: Duration,
  ) -> LivePollJob<MockFetcher, SqliteStore> {
    LivePollJob::new(fetcher, store, pacing, TZ)
  }

  #[tokio::test]
  async fn refreshes_the_score_of_an_active_match() {
    let store = store().await;
    let id = store
      .insert_match_and_score(&started_match("https://example.test/game/1/score"))
      .await
      .unwrap();

    let fetcher = Arc::new(
      MockFetcher::new().with_page("https://example.test/game/1/score", MID_GAME),
    );
    let job = poll(fetcher.clone(), store.clone(), Duration::ZERO);

    assert_eq!(job.run().await.unwrap(), 1);
    assert_eq!(fetcher.calls(), vec!["https://example.test/game/1/score"]);

    let score = store.score_by_match(id).await.unwrap().unwrap();
    assert_eq!(score.inning, "5回裏");
    assert_eq!(score.home_score, "0");
    assert_eq!(score.away_score, "2");
    assert_eq!(score.batter, "山田 太郎");
    assert_eq!(score.result, "ヒットで1塁");
  }

  #[tokio::test]
  async fn terminal_match_is_never_polled_again() {
    let store = store().await;
    let id = store
      .insert_match_and_score(&started_match("https://example.test/game/1/score"))
      .await
      .unwrap();

    let fetcher = Arc::new(
      MockFetcher::new().with_page("https://example.test/game/1/score", GAME_OVER),
    );
    let job = poll(fetcher.clone(), store.clone(), Duration::ZERO);

    // First cycle records the terminal inning.
    assert_eq!(job.run().await.unwrap(), 1);
    let ended = store.score_by_match(id).await.unwrap().unwrap();
    assert_eq!(ended.inning, "試合終了");
    assert_eq!(ended.batter, "");

    // Second cycle: the match has left the active set, nothing is
    // fetched and the row is untouched.
    assert_eq!(job.run().await.unwrap(), 0);
    assert_eq!(fetcher.calls().len(), 1);
    let after = store.score_by_match(id).await.unwrap().unwrap();
    assert_eq!(after, ended);
  }

  #[tokio::test]
  async fn one_failing_match_does_not_abort_the_cycle() {
    let store = store().await;
    store
      .insert_match_and_score(&started_match("https://example.test/game/1/score"))
      .await
      .unwrap();
    let ok_id = store
      .insert_match_and_score(&started_match("https://example.test/game/2/score"))
      .await
      .unwrap();

    // Only the second match has a canned page; the first fetch fails.
    let fetcher = Arc::new(
      MockFetcher::new().with_page("https://example.test/game/2/score", MID_GAME),
    );
    let job = poll(fetcher, store.clone(), Duration::ZERO);

    assert_eq!(job.run().await.unwrap(), 1);
    let score = store.score_by_match(ok_id).await.unwrap().unwrap();
    assert_eq!(score.inning, "5回裏");
  }

  #[tokio::test(start_paused = true)]
  async fn pacing_pause_follows_every_match() {
    let store = store().await;
    store
      .insert_match_and_score(&started_match("https://example.test/game/1/score"))
      .await
      .unwrap();
    store
      .insert_match_and_score(&started_match("https://example.test/game/2/score"))
      .await
      .unwrap();

    let fetcher = Arc::new(
      MockFetcher::new()
        .with_page("https://example.test/game/1/score", MID_GAME)
        .with_page("https://example.test/game/2/score", MID_GAME),
    );
    let job = poll(fetcher, store, Duration::from_secs(10));

    let started = tokio::time::Instant::now();
    assert_eq!(job.run().await.unwrap(), 2);
    // One pause after each of the two matches.
    assert_eq!(started.elapsed(), Duration::from_secs(20));
  }
}
