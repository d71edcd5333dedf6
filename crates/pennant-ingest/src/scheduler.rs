//! Cron registration for the two jobs.
//!
//! One cooperative scheduler drives both jobs. Discovery and the live
//! poll may interleave with each other — they touch disjoint rows at
//! different lifecycle stages — but each job never overlaps itself; see
//! [`jobs::supervise`].

use std::{sync::Arc, time::Duration};

use chrono_tz::Tz;
use pennant_core::{fetch::PageFetcher, store::MatchStore};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use crate::{
  IngestConfig,
  jobs::{self, discovery::DiscoveryJob, live_poll::LivePollJob},
};

/// Build and start the scheduler with both jobs registered on their
/// configured cron expressions, evaluated in `tz`.
///
/// The returned handle must be kept alive for the lifetime of the
/// process; dropping it shuts down the scheduled jobs.
pub async fn start<F, S>(
  config: &IngestConfig,
  tz: Tz,
  fetcher: Arc<F>,
  store: Arc<S>,
) -> Result<JobScheduler, JobSchedulerError>
where
  F: PageFetcher + 'static,
  S: MatchStore + 'static,
{
  let scheduler = JobScheduler::new().await?;

  let discovery = Arc::new(DiscoveryJob::new(
    fetcher.clone(),
    store.clone(),
    config.schedule_url.clone(),
    tz,
  ));
  let discovery_guard = Arc::new(Mutex::new(()));
  scheduler
    .add(Job::new_async_tz(
      config.discovery_cron.as_str(),
      tz,
      move |_id, _scheduler| {
        let job = discovery.clone();
        let guard = discovery_guard.clone();
        Box::pin(async move {
          jobs::supervise("discovery", guard, async move { job.run().await }).await;
        })
      },
    )?)
    .await?;

  let poll = Arc::new(LivePollJob::new(
    fetcher,
    store,
    Duration::from_secs(config.poll_pacing_secs),
    tz,
  ));
  let poll_guard = Arc::new(Mutex::new(()));
  scheduler
    .add(Job::new_async_tz(
      config.poll_cron.as_str(),
      tz,
      move |_id, _scheduler| {
        let job = poll.clone();
        let guard = poll_guard.clone();
        Box::pin(async move {
          jobs::supervise("live-poll", guard, async move { job.run().await }).await;
        })
      },
    )?)
    .await?;

  scheduler.start().await?;
  Ok(scheduler)
}
